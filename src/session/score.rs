use super::event::OneShot;

pub struct ScoreSession
{
    score: i32,
    play_again: OneShot<()>,
}

impl ScoreSession
{
    pub fn new(final_score: i32) -> Self
    {
        tracing::info!(final_score, "score session created");
        Self {
            score: final_score,
            play_again: OneShot::new(),
        }
    }

    pub fn score(&self) -> i32
    {
        self.score
    }

    pub fn try_again(&mut self)
    {
        self.play_again.emit(());
    }

    pub fn is_play_again(&self) -> bool
    {
        self.play_again.is_pending()
    }

    pub fn consume_play_again(&mut self)
    {
        self.play_again.take();
    }
}
