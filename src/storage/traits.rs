use async_trait::async_trait;
use tokio::io::AsyncWrite;

use super::error::StorageError;
use crate::domain::{Account, AmountType, DomainError, Transaction};

/// Persistence collaborator for posted transactions, keyed by approval code.
/// Records are immutable once inserted.
pub trait TransactionStore<A: AmountType>: Send + Sync {
    /// Store a posted transaction under its approval code
    fn insert(&self, transaction: Transaction<A>);

    /// Look a transaction up by approval code (returns a clone)
    fn get(&self, approval_code: &str) -> Option<Transaction<A>>;

    /// Check whether an approval code is already taken
    fn contains(&self, approval_code: &str) -> bool;
}

/// Lookup + persistence collaborator for accounts, with pluggable backends.
///
/// Accounts exist only after `create`; `entry` and `get` report missing
/// account numbers as not-found rather than creating on demand.
#[async_trait]
pub trait AccountStore<A: AmountType>: Send + Sync {
    type Entry<'a>: AccountEntry<'a, A>
    where
        Self: 'a;

    /// Register a new account; rejects duplicate account numbers
    fn create(&self, account: Account<A>) -> Result<(), StorageError>;

    /// Get an entry handle for an existing account
    fn entry(&self, account_number: &str) -> Result<Self::Entry<'_>, StorageError>;

    /// Owned snapshot of a single account
    fn get(&self, account_number: &str) -> Option<Account<A>>;

    /// Async CSV snapshot of all accounts
    async fn snapshot<W>(&self, writer: W) -> Result<(), StorageError>
    where
        W: AsyncWrite + Unpin + Send;
}

/// Entry pattern for atomic per-account operations. `try_update` runs the
/// closure as one read-modify-write, which is what serializes concurrent
/// posts against the same account.
pub trait AccountEntry<'a, A: AmountType> {
    /// Clone of the current account state
    fn read(&self) -> Result<Account<A>, StorageError>;

    /// Atomic read-modify-write; the closure's failure leaves the stored
    /// account untouched only if the closure itself mutates nothing on
    /// failure (the domain operations hold that guarantee)
    fn try_update<F>(&mut self, update_fn: F) -> Result<(), StorageError>
    where
        F: FnOnce(&mut Account<A>) -> Result<(), DomainError>;
}
