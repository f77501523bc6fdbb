pub mod account;
pub mod amount;
pub mod error;
pub mod operations;
pub mod transaction;

// Re-export commonly used types
pub use account::Account;
pub use amount::{AmountType, FixedPoint};
pub use error::DomainError;
pub use operations::{credit, debit, post};
pub use transaction::{Transaction, TransactionKind};
