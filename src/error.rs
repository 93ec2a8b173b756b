//! Error types for todotxt.
//!
//! [`ParseError`] covers the failures of the line parser. [`TodoError`] is the
//! crate-wide error returned by list, file, config and command operations.

use thiserror::Error;

/// A line could not be parsed into a task.
///
/// Each variant names the extraction stage that failed and carries the
/// offending token.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The date following the completion marker is not a valid calendar date.
    #[error("failed to parse completed date '{token}': {source}")]
    MalformedCompletionDate {
        token: String,
        source: chrono::ParseError,
    },

    /// The created date is not a valid calendar date.
    #[error("failed to parse created date '{token}': {source}")]
    MalformedCreatedDate {
        token: String,
        source: chrono::ParseError,
    },

    /// The value of a `due:` tag is not a valid calendar date.
    #[error("failed to parse due date '{token}': {source}")]
    MalformedDueDate {
        token: String,
        source: chrono::ParseError,
    },
}

impl ParseError {
    /// The token that failed to parse.
    #[must_use]
    pub fn token(&self) -> &str {
        match self {
            Self::MalformedCompletionDate { token, .. }
            | Self::MalformedCreatedDate { token, .. }
            | Self::MalformedDueDate { token, .. } => token,
        }
    }
}

/// Errors that can occur in todotxt operations.
#[derive(Debug, Error)]
pub enum TodoError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("line {line}: {source}")]
    Line { line: usize, source: ParseError },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No task with id {0}")]
    NotFound(usize),

    #[error("{} is not in canonical form", .0.display())]
    NotCanonical(std::path::PathBuf),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
