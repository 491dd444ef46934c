pub mod event;
pub mod game;
pub mod score;

pub use game::GameSession;
pub use score::ScoreSession;
