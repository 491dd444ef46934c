mod app;
mod buzzer;
mod config;
mod error;
mod screens;
mod session;
mod timer;
mod words;

use config::GameConfig;
use error::AppError;
use std::env;
use std::fs::File;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn main()
{
    init_tracing();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing()
{
    let filter = EnvFilter::try_from_env("GUESS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false);

    match env::var("GUESS_LOG_FILE").ok().map(File::create) {
        Some(Ok(file)) => builder.with_writer(Mutex::new(file)).init(),
        Some(Err(err)) => {
            builder.with_writer(std::io::stderr).init();
            tracing::warn!("couldn't open log file ({err}), logging to stderr");
        }
        None => builder.with_writer(std::io::stderr).init(),
    }
}

fn run() -> Result<(), AppError>
{
    let mut args = env::args().skip(1);
    let command = args.next();
    let rest: Vec<String> = args.collect();
    match command.as_deref() {
        None => app::run(&GameConfig::default()),
        Some("play") => app::run(&GameConfig::from_args(&rest)?),
        Some("words") => {
            list_words();
            Ok(())
        }
        Some("-h") | Some("--help") => {
            print_help();
            Ok(())
        }
        Some(flag) if flag.starts_with("--") => {
            let mut all = vec![flag.to_string()];
            all.extend(rest);
            app::run(&GameConfig::from_args(&all)?)
        }
        Some(other) => Err(AppError::UnknownCommand(other.to_string())),
    }
}

fn list_words()
{
    println!("Words ({}):", words::WORDS.len());
    for word in words::WORDS {
        println!("  {word}");
    }
}

fn print_help()
{
    println!("guess-the-word");
    println!("\nUsage:");
    println!("  guess-the-word [play] [--time=10] [--quiet]");
    println!("  guess-the-word words");
    println!("\nKeys:");
    println!("  Right/Enter/c  word guessed (+1)");
    println!("  Left/Backspace/s  skip word (-1)");
    println!("  Esc  quit");
    println!("\nNotes:");
    println!("  Set GUESS_LOG to a tracing filter (e.g. debug) and GUESS_LOG_FILE to a path");
    println!("  to keep logs out of the game screen.");
}
