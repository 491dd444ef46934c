use crate::buzzer::BuzzPlayer;
use crate::config::GameConfig;
use crate::error::AppError;
use crate::screens::TerminalGuard;
use crate::screens::game::{self, GameOutcome};
use crate::screens::score;
use crate::session::GameSession;

/// Alternates game and score screens until the player quits.
pub fn run(config: &GameConfig) -> Result<(), AppError>
{
    let mut term = TerminalGuard::enter()?;
    let mut buzzer = BuzzPlayer::new();
    let mut rounds = 0u32;

    loop {
        rounds += 1;
        tracing::info!(round = rounds, "starting game");
        let mut session = GameSession::new(config);
        match game::run(&mut term, &mut session, &mut buzzer, config)? {
            GameOutcome::Quit => break,
            GameOutcome::Finished => {}
        }

        let mut score_session = session.end();
        if !score::run(&mut term, &mut score_session, &buzzer)? {
            break;
        }
    }

    Ok(())
}
