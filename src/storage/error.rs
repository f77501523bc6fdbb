use std::io;
use thiserror::Error;

use crate::domain::DomainError;

/// Storage-level errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Account already exists: {0}")]
    DuplicateAccount(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}
