use crate::error::AppError;
use std::time::Duration;

pub const TICK_INTERVAL: Duration = Duration::from_secs(1);
pub const PANIC_THRESHOLD: Duration = Duration::from_secs(5);
const DEFAULT_SECONDS: u64 = 10;
const MAX_SECONDS: u64 = 600;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig
{
    pub countdown: Duration,
    pub tick: Duration,
    pub panic_threshold: Duration,
    pub quiet: bool,
}

impl GameConfig
{
    pub fn from_args(args: &[String]) -> Result<Self, AppError>
    {
        let mut config = Self::default();
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            if arg == "--time" {
                let value = iter
                    .next()
                    .ok_or_else(|| AppError::InvalidOption("Expected value after --time".to_string()))?;
                config.countdown = parse_seconds(value)?;
            } else if let Some(rest) = arg.strip_prefix("--time=") {
                config.countdown = parse_seconds(rest)?;
            } else if arg == "--quiet" {
                config.quiet = true;
            } else {
                return Err(AppError::InvalidOption(format!("Unknown option '{arg}'")));
            }
        }
        Ok(config)
    }
}

impl Default for GameConfig
{
    fn default() -> Self
    {
        Self {
            countdown: Duration::from_secs(DEFAULT_SECONDS),
            tick: TICK_INTERVAL,
            panic_threshold: PANIC_THRESHOLD,
            quiet: false,
        }
    }
}

fn parse_seconds(value: &str) -> Result<Duration, AppError>
{
    let secs = value
        .parse::<u64>()
        .map_err(|_| AppError::InvalidOption("Time must be a whole number of seconds".to_string()))?;
    if secs == 0 || secs > MAX_SECONDS {
        return Err(AppError::InvalidOption(format!(
            "Time must be between 1 and {MAX_SECONDS} seconds"
        )));
    }
    Ok(Duration::from_secs(secs))
}
