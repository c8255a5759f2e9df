//! Error types for EVO-A

use thiserror::Error;

/// Main error type for EVO-A core operations.
///
/// Only preference storage is fallible; everything else in the crate is
/// plain in-memory state.
#[derive(Error, Debug)]
pub enum EvoaError {
    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Preference storage is not reachable (disabled, locked, missing)
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// A persisted value could not be interpreted
    #[error("Unknown {key} value: {value:?}")]
    UnknownValue { key: String, value: String },
}

/// Result type alias using EvoaError
pub type EvoaResult<T> = Result<T, EvoaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EvoaError::StorageUnavailable("quota exceeded".to_string());
        assert_eq!(format!("{}", err), "Storage unavailable: quota exceeded");
    }

    #[test]
    fn test_unknown_value_display() {
        let err = EvoaError::UnknownValue {
            key: "evoa-theme".to_string(),
            value: "sepia".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown evoa-theme value: \"sepia\"");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: EvoaError = io_err.into();
        assert!(matches!(err, EvoaError::Io(_)));
    }
}
