//! Error types and status reporting

use crate::numeral::FormatError;
use crate::theme;
use colored::*;
use std::path::PathBuf;
use thiserror::Error;

/// Prefix that marks a failed status message
pub const ERROR: &str = "ERROR: ";

/// Failures of the project loader/saver
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("File \"{}\" not found.", .0.display())]
    NotFound(PathBuf),

    #[error("File \"{}\" is not a yWriter 7 project.", .0.display())]
    WrongExtension(PathBuf),

    #[error("Can not parse file \"{}\": {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Can not write file \"{}\": {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Anything that can stop a renumbering run
#[derive(Debug, Error)]
pub enum RenumberError {
    #[error(transparent)]
    Project(#[from] ProjectError),

    #[error("Can not number chapter: {0}")]
    Format(#[from] FormatError),
}

/// Collapse a run result into a single status line.
///
/// Failures start with [`ERROR`] so callers can branch on the text alone.
pub fn status_message<T, E>(result: &Result<T, E>) -> String
where
    T: std::fmt::Display,
    E: std::fmt::Display,
{
    match result {
        Ok(message) => message.to_string(),
        Err(e) => format!("{}{}", ERROR, e),
    }
}

/// Whether a status line reports a failure
pub fn is_error_status(message: &str) -> bool {
    message.starts_with(ERROR)
}

/// Print a failure as an `ERROR: ` status line followed by its causes
pub fn print_error(error: &anyhow::Error) {
    eprintln!("{}{}", theme::error(ERROR).bold(), theme::error(&error.to_string()));

    // Show chain of causes
    let mut current = error.source();
    while let Some(cause) = current {
        eprintln!("  {} {}", "Caused by:".dimmed(), cause.to_string().dimmed());
        current = std::error::Error::source(cause);
    }
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", theme::warning("Warning:").bold(), message);
}
