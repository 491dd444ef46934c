use super::event::OneShot;
use super::score::ScoreSession;
use crate::config::GameConfig;
use crate::timer::{CountdownTimer, TimerEvent};
use crate::words::WORDS;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::time::{Duration, Instant};

const CORRECT_BUZZ_PATTERN: [u64; 6] = [100, 100, 100, 100, 100, 100];
const PANIC_BUZZ_PATTERN: [u64; 2] = [0, 200];
const GAME_OVER_BUZZ_PATTERN: [u64; 2] = [0, 2000];
const NO_BUZZ_PATTERN: [u64; 1] = [0];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuzzType
{
    Correct,
    GameOver,
    CountdownPanic,
    NoBuzz,
}

impl BuzzType
{
    /// OFF/ON durations in milliseconds, starting with OFF.
    pub fn pattern(self) -> &'static [u64]
    {
        match self {
            BuzzType::Correct => &CORRECT_BUZZ_PATTERN,
            BuzzType::GameOver => &GAME_OVER_BUZZ_PATTERN,
            BuzzType::CountdownPanic => &PANIC_BUZZ_PATTERN,
            BuzzType::NoBuzz => &NO_BUZZ_PATTERN,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState
{
    Running,
    Finished,
}

/// Shuffled words; the next word is the last element.
struct WordQueue
{
    words: Vec<&'static str>,
    rng: StdRng,
    seeded: usize,
}

impl WordQueue
{
    fn new(rng: StdRng) -> Self
    {
        Self {
            words: Vec::with_capacity(WORDS.len()),
            rng,
            seeded: 0,
        }
    }

    fn reseed(&mut self)
    {
        self.words.clear();
        self.words.extend_from_slice(&WORDS);
        self.words.shuffle(&mut self.rng);
        self.seeded += 1;
        tracing::debug!(round = self.seeded, "word list reshuffled");
    }

    fn pop(&mut self) -> &'static str
    {
        if self.words.is_empty() {
            self.reseed();
        }
        self.words.pop().unwrap_or(WORDS[0])
    }
}

pub struct GameSession
{
    queue: WordQueue,
    word: &'static str,
    score: i32,
    seconds_left: u64,
    panic_threshold: Duration,
    buzz: OneShot<BuzzType>,
    game_finished: OneShot<()>,
    state: SessionState,
    timer: CountdownTimer,
}

impl GameSession
{
    pub fn new(config: &GameConfig) -> Self
    {
        Self::start_at(config, StdRng::from_entropy(), Instant::now())
    }

    pub fn start_at(config: &GameConfig, rng: StdRng, now: Instant) -> Self
    {
        let mut queue = WordQueue::new(rng);
        queue.reseed();
        let word = queue.pop();

        let mut timer = CountdownTimer::new(config.countdown, config.tick);
        timer.start(now);
        tracing::info!(countdown_secs = config.countdown.as_secs(), "game session created");

        Self {
            queue,
            word,
            score: 0,
            seconds_left: config.countdown.as_secs(),
            panic_threshold: config.panic_threshold,
            buzz: OneShot::new(),
            game_finished: OneShot::new(),
            state: SessionState::Running,
            timer,
        }
    }

    pub fn word(&self) -> &'static str
    {
        self.word
    }

    pub fn score(&self) -> i32
    {
        self.score
    }

    pub fn state(&self) -> SessionState
    {
        self.state
    }

    pub fn seconds_left(&self) -> u64
    {
        self.seconds_left
    }

    pub fn time_string(&self) -> String
    {
        format_elapsed(self.seconds_left)
    }

    pub fn skip(&mut self)
    {
        if self.state == SessionState::Finished {
            return;
        }
        self.score -= 1;
        self.advance_word();
    }

    pub fn mark_correct(&mut self)
    {
        if self.state == SessionState::Finished {
            return;
        }
        self.score += 1;
        self.advance_word();
        self.buzz.emit(BuzzType::Correct);
    }

    fn advance_word(&mut self)
    {
        self.word = self.queue.pop();
    }

    pub fn tick(&mut self, remaining: Duration)
    {
        if remaining < self.panic_threshold {
            self.buzz.emit(BuzzType::CountdownPanic);
        }
        self.seconds_left = remaining.as_secs();
    }

    pub fn on_timeout(&mut self)
    {
        self.buzz.emit(BuzzType::GameOver);
        self.game_finished.emit(());
        self.state = SessionState::Finished;
        tracing::info!(score = self.score, "countdown finished");
    }

    pub fn poll_timer(&mut self, now: Instant)
    {
        for event in self.timer.poll(now) {
            match event {
                TimerEvent::Tick(remaining) => self.tick(remaining),
                TimerEvent::Finished => self.on_timeout(),
            }
        }
    }

    pub fn buzz_event(&self) -> BuzzType
    {
        self.buzz.peek().copied().unwrap_or(BuzzType::NoBuzz)
    }

    pub fn consume_buzz(&mut self)
    {
        self.buzz.take();
    }

    pub fn is_game_finished(&self) -> bool
    {
        self.game_finished.is_pending()
    }

    pub fn consume_game_finished(&mut self)
    {
        self.game_finished.take();
    }

    fn stop_timer(&mut self)
    {
        if self.timer.is_running() {
            self.timer.cancel();
            tracing::debug!("countdown cancelled");
        }
    }

    /// Ends the round and hands the final score to a score session.
    pub fn end(self) -> ScoreSession
    {
        ScoreSession::new(self.score)
    }
}

impl Drop for GameSession
{
    fn drop(&mut self)
    {
        self.stop_timer();
        tracing::info!("game session destroyed");
    }
}

/// `MM:SS`, or `H:MM:SS` once an hour has passed.
pub fn format_elapsed(seconds: u64) -> String
{
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}
