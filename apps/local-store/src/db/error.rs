//! Database error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    /// The store file could not be created, opened or initialized.
    #[error("storage unavailable at {}: {reason}", path.display())]
    StorageUnavailable { path: PathBuf, reason: String },

    #[error("sqlite error: {0}")]
    Statement(#[from] rusqlite::Error),

    #[error("{operation} rolled back: {reason}")]
    TransactionAborted { operation: String, reason: String },

    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl From<tracker_core::ParseError> for DbError {
    fn from(e: tracker_core::ParseError) -> Self {
        Self::InvalidData(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_unavailable_names_the_path() {
        let error = DbError::StorageUnavailable {
            path: PathBuf::from("/nowhere/tracker.db"),
            reason: "permission denied".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "storage unavailable at /nowhere/tracker.db: permission denied"
        );
    }

    #[test]
    fn transaction_aborted_display() {
        let error = DbError::TransactionAborted {
            operation: "save_session".to_string(),
            reason: "constraint failed".to_string(),
        };
        assert_eq!(error.to_string(), "save_session rolled back: constraint failed");
    }
}
