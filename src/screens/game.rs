use super::{TerminalGuard, draw_lines, is_quit, pressed_keys};
use crate::buzzer::BuzzPlayer;
use crate::config::GameConfig;
use crate::session::GameSession;
use crossterm::event::{KeyCode, KeyModifiers};
use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

const TICK_MS: u64 = 33;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome
{
    Finished,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action
{
    Correct,
    Skip,
    Quit,
}

fn action_for(code: KeyCode, modifiers: KeyModifiers) -> Option<Action>
{
    if is_quit(code, modifiers) {
        return Some(Action::Quit);
    }
    match code {
        KeyCode::Right | KeyCode::Enter | KeyCode::Char('c') => Some(Action::Correct),
        KeyCode::Left | KeyCode::Backspace | KeyCode::Char('s') => Some(Action::Skip),
        _ => None,
    }
}

/// Plays and consumes a pending audible buzz. Returns true if one started.
fn handle_buzz(session: &mut GameSession, buzzer: &mut BuzzPlayer, now: Instant) -> bool
{
    let pattern = session.buzz_event().pattern();
    if pattern.len() <= 1 {
        return false;
    }
    let started = buzzer.play(pattern, now);
    session.consume_buzz();
    started
}

/// The buzzer outlives this screen so a game-over flash carries onto the score screen.
pub fn run(
    term: &mut TerminalGuard,
    session: &mut GameSession,
    buzzer: &mut BuzzPlayer,
    config: &GameConfig,
) -> Result<GameOutcome, io::Error>
{
    let mut last_draw: Option<Instant> = None;

    loop {
        let now = Instant::now();
        session.poll_timer(now);

        for (code, modifiers) in pressed_keys()? {
            match action_for(code, modifiers) {
                Some(Action::Quit) => {
                    tracing::info!(score = session.score(), "game abandoned");
                    return Ok(GameOutcome::Quit);
                }
                Some(Action::Correct) => session.mark_correct(),
                Some(Action::Skip) => session.skip(),
                None => {}
            }
        }

        if handle_buzz(session, buzzer, now) && !config.quiet {
            ring_bell(term.stdout())?;
        }

        if session.is_game_finished() {
            session.consume_game_finished();
            tracing::info!(score = session.score(), "navigating to score screen");
            return Ok(GameOutcome::Finished);
        }

        if last_draw.is_none_or(|at| at.elapsed() >= Duration::from_millis(TICK_MS)) {
            draw_ui(term.stdout(), session, buzzer.is_on(now))?;
            last_draw = Some(Instant::now());
        }

        std::thread::sleep(Duration::from_millis(1));
    }
}

fn ring_bell(stdout: &mut Stdout) -> io::Result<()>
{
    stdout.write_all(b"\x07")?;
    stdout.flush()
}

fn draw_ui(stdout: &mut Stdout, session: &GameSession, flash: bool) -> io::Result<()>
{
    let lines = vec![
        "Guess the Word".to_string(),
        String::new(),
        format!("Time: {}", session.time_string()),
        format!("Score: {}", session.score()),
        String::new(),
        "The word is".to_string(),
        format!("    {}", session.word().to_ascii_uppercase()),
        String::new(),
        "Right/Enter/c: got it   Left/Backspace/s: skip   Esc: quit".to_string(),
    ];
    draw_lines(stdout, &lines, flash)
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::buzzer::Phase;
    use crate::session::game::BuzzType;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session_at(start: Instant) -> GameSession
    {
        GameSession::start_at(&GameConfig::default(), StdRng::seed_from_u64(3), start)
    }

    #[test]
    fn game_over_flash_outlives_the_round()
    {
        let start = Instant::now();
        let mut session = session_at(start);
        let mut buzzer = BuzzPlayer::new();

        let end = start + Duration::from_secs(10);
        session.poll_timer(end);
        assert_eq!(session.buzz_event(), BuzzType::GameOver);
        assert!(handle_buzz(&mut session, &mut buzzer, end));
        assert_eq!(session.buzz_event(), BuzzType::NoBuzz);
        assert!(session.is_game_finished());

        drop(session.end());
        assert!(buzzer.is_on(end + Duration::from_millis(1_500)));
        assert_eq!(buzzer.phase(end + Duration::from_millis(2_000)), Phase::Done);
    }

    #[test]
    fn silent_or_missing_buzz_is_left_alone()
    {
        let start = Instant::now();
        let mut session = session_at(start);
        let mut buzzer = BuzzPlayer::new();
        assert!(!handle_buzz(&mut session, &mut buzzer, start));
        assert_eq!(buzzer.phase(start), Phase::Done);

        session.mark_correct();
        assert!(handle_buzz(&mut session, &mut buzzer, start));
        assert_eq!(session.buzz_event(), BuzzType::NoBuzz);
        assert!(buzzer.is_on(start + Duration::from_millis(150)));
    }

    #[test]
    fn maps_keys_to_actions()
    {
        let none = KeyModifiers::NONE;
        assert_eq!(action_for(KeyCode::Right, none), Some(Action::Correct));
        assert_eq!(action_for(KeyCode::Char('c'), none), Some(Action::Correct));
        assert_eq!(action_for(KeyCode::Char('s'), none), Some(Action::Skip));
        assert_eq!(action_for(KeyCode::Backspace, none), Some(Action::Skip));
        assert_eq!(action_for(KeyCode::Esc, none), Some(Action::Quit));
        assert_eq!(
            action_for(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(Action::Quit)
        );
        assert_eq!(action_for(KeyCode::Char('x'), none), None);
    }
}
