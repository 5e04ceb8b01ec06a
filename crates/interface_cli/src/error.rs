//! Driver boundary errors
//!
//! Malformed numeric input is surfaced as a recoverable error at this
//! boundary and handled by re-prompting; it never terminates the session.

use thiserror::Error;

/// Errors that can occur in the console driver
#[derive(Debug, Error)]
pub enum CliError {
    /// Numeric input could not be parsed
    #[error("Not a number: {0}")]
    Parse(#[from] std::num::ParseIntError),

    /// Reading or writing the console failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
