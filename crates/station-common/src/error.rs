//! Error types for loading station sources.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias using LoadError.
pub type LoadResult<T> = Result<T, LoadError>;

/// Failure raised while reading a station source.
///
/// Only the loader produces these. Every later stage works on whatever
/// records made it through and treats an empty set as a valid map.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    #[error("Source not found: {0}")]
    SourceUnavailable(String),

    #[error("Source is missing required columns: {}", .missing.join(", "))]
    SchemaInvalid { missing: Vec<String> },

    #[error("Malformed row at line {line}: {message}")]
    ParseFailure { line: u64, message: String },

    #[error("Failed to read source: {0}")]
    Unexpected(String),
}

/// Coarse classification of a [`LoadError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    SourceUnavailable,
    SchemaInvalid,
    ParseFailure,
    Unexpected,
}

impl ErrorKind {
    /// Snake-case label, used for metric labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::SourceUnavailable => "source_unavailable",
            ErrorKind::SchemaInvalid => "schema_invalid",
            ErrorKind::ParseFailure => "parse_failure",
            ErrorKind::Unexpected => "unexpected",
        }
    }
}

impl LoadError {
    /// Get the error kind for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LoadError::SourceUnavailable(_) => ErrorKind::SourceUnavailable,
            LoadError::SchemaInvalid { .. } => ErrorKind::SchemaInvalid,
            LoadError::ParseFailure { .. } => ErrorKind::ParseFailure,
            LoadError::Unexpected(_) => ErrorKind::Unexpected,
        }
    }

    /// Build the user-facing report for this error.
    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            kind: self.kind(),
            message: self.to_string(),
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => LoadError::SourceUnavailable(err.to_string()),
            _ => LoadError::Unexpected(err.to_string()),
        }
    }
}

/// Serializable error surfaced to the UI next to an empty map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&LoadError> for ErrorReport {
    fn from(err: &LoadError) -> Self {
        err.report()
    }
}
