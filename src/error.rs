// std imports
use std::io::{self, Write};

// third-party imports
use config::ConfigError;
use owo_colors::OwoColorize;
use thiserror::Error;

/// Error is an error which may occur in the application.
///
/// Detection itself never fails, these only come from loading settings and reading input.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
}

impl Error {
    /// Writes a human readable error message to `target`.
    pub fn log_to<W: Write>(&self, target: &mut W) -> io::Result<()> {
        writeln!(target, "{} {}", "error:".bright_red().bold(), self)
    }

    /// Writes a human readable error message to stderr.
    pub fn log(&self) {
        // nothing sensible left to do if stderr is gone
        self.log_to(&mut io::stderr()).ok();
    }
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
