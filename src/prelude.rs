//! Prelude module for convenient imports
//!
//! Import everything you need with: `use simplebank::prelude::*;`

// Domain types
pub use crate::domain::{Account, AmountType, DomainError, FixedPoint, Transaction, TransactionKind};

// Storage types
pub use crate::storage::{
    AccountEntry, AccountStore, ConcurrentAccountStore, ConcurrentTransactionStore, StorageError,
    TransactionStore,
};

// Service types
pub use crate::service::{AccountService, AccountSnapshot, ServiceError, TransactionView};

// Audit types
pub use crate::audit::{AuditLogger, AuditSink, Level, LogMessage, QueueSink};

// IO types
pub use crate::io::{CsvOperationStream, IoError, OperationRequest, write_snapshot};

// App types
pub use crate::app::{
    AbortOnError, AppError, CliApp, ErrorPolicy, OperationSession, SilentSkip, SkipErrors,
};

// Configuration
pub use crate::config::{AppConfig, AuditConfig};
