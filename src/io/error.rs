use std::io;
use thiserror::Error;

use crate::storage::StorageError;

/// IO-level errors for CSV parsing and snapshot writing
#[derive(Error, Debug)]
pub enum IoError {
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv_async::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid amount format: {0}")]
    InvalidAmount(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formats_correctly() {
        assert_eq!(
            IoError::InvalidOperation("transfer".to_string()).to_string(),
            "Invalid operation: transfer"
        );
        assert_eq!(
            IoError::MissingField("amount required for deposit".to_string()).to_string(),
            "Missing required field: amount required for deposit"
        );
        assert_eq!(
            IoError::InvalidAmount("xyz".to_string()).to_string(),
            "Invalid amount format: xyz"
        );
    }

    #[test]
    fn io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let wrapped = IoError::from(io_err);

        assert!(matches!(wrapped, IoError::Io(_)));
    }

    #[test]
    fn storage_error_conversion() {
        let err = IoError::from(StorageError::AccountNotFound("669-7788".to_string()));

        assert!(matches!(err, IoError::Storage(_)));
    }
}
