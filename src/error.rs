//! Application error types.
//!
//! Every failure is terminal: the run reports the error and stops without
//! touching the output file.

use std::path::PathBuf;
use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types with the path that caused them
#[derive(Debug, Error)]
pub enum Error {
    /// The input word list does not exist
    #[error("{} not found!", .path.display())]
    InputNotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// Reading the input failed for a reason other than it being missing
    #[error("could not read {}: {}", .path.display(), .source.kind())]
    Read {
        /// The underlying IO error.
        source: std::io::Error,
        /// File that could not be read.
        path: PathBuf,
    },

    /// Writing the output failed
    #[error("could not write {}: {}", .path.display(), .source.kind())]
    Write {
        /// The underlying IO error.
        source: std::io::Error,
        /// File that could not be written.
        path: PathBuf,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },
}

impl Error {
    /// Classify a failed read of `path`, splitting out the missing-file case
    pub fn read(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::InputNotFound { path }
        } else {
            Self::Read { source, path }
        }
    }

    /// Create a write error with path context
    pub fn write(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Write { source, path: path.into() }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }

    /// Whether this error means the input file was missing
    pub const fn is_input_not_found(&self) -> bool {
        matches!(self, Self::InputNotFound { .. })
    }
}
