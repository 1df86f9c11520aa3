//! Error handling for the triage crate.
//!
//! The core never errors on validation: out-of-range ages and severities
//! are normalised or ignored, unknown ids come back as `None`. Hard
//! failures only exist at the edges, when external CSV data is malformed
//! or the filesystem misbehaves.

use std::io;

/// Specialized error type for triage operations
#[derive(Debug, thiserror::Error)]
pub enum TriageError {
    /// Error opening, reading, or writing a file
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The patient CSV contained no header line at all
    #[error("patient CSV is empty: {0}")]
    EmptyCsv(String),

    /// The patient CSV header did not match `id,name,age,severity`
    #[error("invalid CSV header: {0}")]
    InvalidHeader(String),

    /// A CSV row had the wrong field count or an empty required field
    #[error("malformed CSV row: {0}")]
    MalformedRow(String),

    /// Age or severity in a CSV row failed to parse as an integer
    #[error("invalid number in CSV row: {0}")]
    InvalidNumber(String),
}

/// Alias for Result with `TriageError`
pub type Result<T> = std::result::Result<T, TriageError>;
