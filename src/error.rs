//! Error types for blockrule.

use thiserror::Error;

/// Error type for blockrule operations.
///
/// None of these ever reach the classification path: `classify` is
/// infallible and fails open. They surface only while building a
/// [`RuleStore`](crate::RuleStore) from external input.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Unknown section header in a rule list
    #[error("invalid section at line {line}: {name}")]
    InvalidSection { line: usize, name: String },

    /// Entry appeared before any section header
    #[error("entry outside of any section at line {0}")]
    MissingSection(usize),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for blockrule operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for compiling a single rule pattern.
#[derive(Error, Debug)]
pub enum PatternError {
    /// Empty pattern
    #[error("empty rule pattern")]
    EmptyPattern,

    /// Pattern is not valid regex syntax
    #[error("failed to compile pattern {pattern}: {source}")]
    Compile {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
