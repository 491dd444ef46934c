use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase
{
    Off,
    On,
    Done,
}

/// Plays an OFF/ON millisecond pattern by flashing the screen.
#[derive(Default)]
pub struct BuzzPlayer
{
    pattern: Vec<u64>,
    started_at: Option<Instant>,
}

impl BuzzPlayer
{
    pub fn new() -> Self
    {
        Self::default()
    }

    /// Returns false for patterns with nothing to play.
    pub fn play(&mut self, pattern: &[u64], now: Instant) -> bool
    {
        if pattern.len() <= 1 {
            return false;
        }
        self.pattern = pattern.to_vec();
        self.started_at = Some(now);
        true
    }

    pub fn phase(&self, now: Instant) -> Phase
    {
        match self.started_at {
            Some(start) => pattern_phase(&self.pattern, now.saturating_duration_since(start)),
            None => Phase::Done,
        }
    }

    pub fn is_on(&self, now: Instant) -> bool
    {
        self.phase(now) == Phase::On
    }
}

pub fn pattern_phase(pattern: &[u64], elapsed: Duration) -> Phase
{
    let elapsed = elapsed.as_millis();
    let mut boundary: u128 = 0;
    for (idx, &segment) in pattern.iter().enumerate() {
        boundary += segment as u128;
        if elapsed < boundary {
            return if idx % 2 == 0 { Phase::Off } else { Phase::On };
        }
    }
    Phase::Done
}
