//! Error types for tracker-core.

use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors raised when decoding stored or user-supplied codes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown routine code: {0}")]
    UnknownRoutineCode(String),

    #[error("unknown todo type: {0}")]
    UnknownTodoType(String),

    #[error("unknown score kind: {0}")]
    UnknownScoreKind(String),

    #[error("invalid date {value}: expected YYYY-MM-DD")]
    InvalidDate { value: String },
}
