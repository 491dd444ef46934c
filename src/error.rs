use std::io;

#[derive(Debug, thiserror::Error)]
pub enum AppError
{
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error("{0}")]
    InvalidOption(String),

    #[error("Unknown command '{0}'. Run with --help.")]
    UnknownCommand(String),
}
