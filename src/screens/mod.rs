pub mod game;
pub mod score;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Attribute, SetAttribute};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use std::io::{self, Stdout, Write};
use std::time::Duration;

pub struct TerminalGuard
{
    stdout: Stdout,
}

impl TerminalGuard
{
    pub fn enter() -> io::Result<Self>
    {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, Hide)?;
        Ok(Self { stdout })
    }

    pub fn stdout(&mut self) -> &mut Stdout
    {
        &mut self.stdout
    }
}

impl Drop for TerminalGuard
{
    fn drop(&mut self)
    {
        let _ = execute!(self.stdout, Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

pub(crate) fn draw_lines(stdout: &mut Stdout, lines: &[String], inverted: bool) -> io::Result<()>
{
    let output = format!("{}\r\n", lines.join("\r\n"));
    queue!(stdout, MoveTo(0, 0), Clear(ClearType::All))?;
    if inverted {
        queue!(stdout, SetAttribute(Attribute::Reverse))?;
    }
    stdout.write_all(output.as_bytes())?;
    if inverted {
        queue!(stdout, SetAttribute(Attribute::Reset))?;
    }
    stdout.flush()
}

/// Pending key presses, without blocking.
pub(crate) fn pressed_keys() -> io::Result<Vec<(KeyCode, KeyModifiers)>>
{
    let mut keys = Vec::new();
    while event::poll(Duration::from_millis(0))? {
        if let Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) = event::read()?
        {
            if kind != KeyEventKind::Release {
                keys.push((code, modifiers));
            }
        }
    }
    Ok(keys)
}

pub(crate) fn is_quit(code: KeyCode, modifiers: KeyModifiers) -> bool
{
    match code {
        KeyCode::Esc => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
