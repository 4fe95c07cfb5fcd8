//! Error types for version parsing and construction

use thiserror::Error;

/// Broad classification of a [`VersionError`].
///
/// Lexically malformed input reports [`ErrorKind::Format`]; input that is
/// well-formed but violates a version invariant reports [`ErrorKind::Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input is lexically malformed (garbage token, empty segment).
    Format,
    /// The input is well-formed but semantically invalid.
    Value,
}

/// Error type for version parsing and direct construction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("version string must not be empty or whitespace")]
    Empty,
    #[error("version string must not have more than 4 segments, got {0}")]
    TooManySegments(usize),
    #[error("invalid version segment \"{0}\"")]
    InvalidSegment(String),
    #[error("{0} segment must not hold a value after a wildcard segment")]
    SegmentAfterWildcard(&'static str),
    #[error("version segments must not be negative")]
    Negative,
}

impl VersionError {
    /// Classify this error as a format or value violation
    pub fn kind(&self) -> ErrorKind {
        match self {
            VersionError::InvalidSegment(_) => ErrorKind::Format,
            _ => ErrorKind::Value,
        }
    }
}
