use thiserror::Error;

use crate::domain::DomainError;
use crate::storage::StorageError;

/// Caller-visible failures of the account service
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Account already exists: {0}")]
    DuplicateAccount(String),

    #[error("Amount must be greater than zero")]
    InvalidAmount,

    #[error("Insufficient balance for withdrawal")]
    InsufficientBalance,

    #[error("Unexpected error: {0}")]
    Unexpected(#[source] StorageError),
}

impl From<StorageError> for ServiceError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::AccountNotFound(number) => Self::AccountNotFound(number),
            StorageError::DuplicateAccount(number) => Self::DuplicateAccount(number),
            StorageError::Domain(DomainError::InsufficientBalance) => Self::InsufficientBalance,
            StorageError::Domain(DomainError::InvalidAmount) => Self::InvalidAmount,
            other => Self::Unexpected(other),
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::from(StorageError::Domain(err))
    }
}
