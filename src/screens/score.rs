use super::{TerminalGuard, draw_lines, is_quit, pressed_keys};
use crate::buzzer::BuzzPlayer;
use crate::session::ScoreSession;
use crossterm::event::KeyCode;
use std::io;
use std::time::{Duration, Instant};

const FRAME_MS: u64 = 33;

/// Shows the final score, finishing any buzz still playing from the round.
/// Returns true once the player asks to play again.
pub fn run(term: &mut TerminalGuard, session: &mut ScoreSession, buzzer: &BuzzPlayer) -> Result<bool, io::Error>
{
    pressed_keys()?;
    let mut drawn_flash: Option<bool> = None;

    loop {
        let flash = buzzer.is_on(Instant::now());
        if drawn_flash != Some(flash) {
            draw_summary(term, session, flash)?;
            drawn_flash = Some(flash);
        }

        for (code, modifiers) in pressed_keys()? {
            if is_quit(code, modifiers) || code == KeyCode::Char('q') {
                return Ok(false);
            }
            if matches!(code, KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('r')) {
                session.try_again();
            }
        }

        if session.is_play_again() {
            session.consume_play_again();
            tracing::info!("play again requested");
            return Ok(true);
        }

        std::thread::sleep(Duration::from_millis(FRAME_MS));
    }
}

fn draw_summary(term: &mut TerminalGuard, session: &ScoreSession, flash: bool) -> io::Result<()>
{
    let lines = vec![
        "Game over".to_string(),
        String::new(),
        "Final score".to_string(),
        format!("    {}", session.score()),
        String::new(),
        "Space/Enter: play again   Esc/q: quit".to_string(),
    ];
    draw_lines(term.stdout(), &lines, flash)
}
