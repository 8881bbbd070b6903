// src/error.rs
// Standardized error types for Linesmith

use thiserror::Error;

/// Main error type for the Linesmith library
#[derive(Error, Debug)]
pub enum LinesmithError {
    #[error("range error: {0}")]
    Range(String),

    #[error("invalid pattern: {0}")]
    Pattern(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Result using LinesmithError
pub type Result<T> = std::result::Result<T, LinesmithError>;

impl LinesmithError {
    /// Build a range error for a line range against the current line count.
    pub fn bad_range(start: i64, end: i64, total: usize) -> Self {
        LinesmithError::Range(format!(
            "invalid line range {}-{} (file has {} lines)",
            start, end, total
        ))
    }

    /// Build a range error for a single out-of-bounds line in an edit batch.
    pub fn bad_line(line: i64, total: usize) -> Self {
        LinesmithError::Range(format!(
            "line {} out of range (file has {} lines)",
            line, total
        ))
    }

    /// Build a range error for an insertion position.
    pub fn bad_position(position: i64, total: usize) -> Self {
        LinesmithError::Range(format!(
            "invalid position {} (must be between 0 and {})",
            position, total
        ))
    }
}

impl From<regex::Error> for LinesmithError {
    fn from(err: regex::Error) -> Self {
        LinesmithError::Pattern(err.to_string())
    }
}

impl From<LinesmithError> for String {
    fn from(err: LinesmithError) -> Self {
        err.to_string()
    }
}
