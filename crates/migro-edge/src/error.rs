//! Error types for migration edge validation

use thiserror::Error;

/// Broad classification of an [`EdgeError`].
///
/// Lexically malformed input reports [`ErrorKind::Format`]; input that is
/// well-formed but contradictory reports [`ErrorKind::Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input is lexically malformed.
    Format,
    /// The input is well-formed but semantically invalid.
    Value,
}

/// Error type for migration edge construction and spec parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EdgeError {
    #[error("target version must not be empty or whitespace")]
    EmptyTarget,
    #[error("target version must be an integer, got \"{0}\"")]
    TargetNotInteger(String),
    #[error("source spec must not be empty or whitespace")]
    EmptySource,
    #[error("range spec must have exactly two bounds, got {0}")]
    RangeBoundCount(usize),
    #[error("range bound must be an integer, got \"{0}\"")]
    InvalidRangeBound(String),
    #[error("source version must be an integer, got \"{0}\"")]
    InvalidSourceVersion(String),
    #[error("source list must contain at least one version")]
    EmptySourceList,
    #[error("source list entry must be an integer, got \"{0}\"")]
    ListEntryNotInteger(String),
    #[error("range start {start} must be less than range end {end}")]
    InvalidRange { start: i64, end: i64 },
    #[error("target version {to} must lie outside the source range {start}..{end}")]
    TargetInsideRange { start: i64, end: i64, to: i64 },
    #[error("target version {0} must not appear among the source versions")]
    TargetInSources(i64),
    #[error("{0} schema must not be blank")]
    BlankSchema(&'static str),
    #[error("an initial setup edge must start and end in the same schema")]
    InitialEdgeSchemaMismatch,
}

impl EdgeError {
    /// Classify this error as a format or value violation
    pub fn kind(&self) -> ErrorKind {
        match self {
            EdgeError::InvalidRangeBound(_) | EdgeError::InvalidSourceVersion(_) => {
                ErrorKind::Format
            }
            _ => ErrorKind::Value,
        }
    }
}
