use async_trait::async_trait;
use dashmap::{DashMap, Entry};
use tokio::io::AsyncWrite;

use super::error::StorageError;
use super::traits::{AccountEntry, AccountStore};
use crate::domain::{Account, AmountType, DomainError};

/// Concurrent in-memory account store using DashMap.
///
/// `try_update` holds the shard lock for the account while the closure runs,
/// so posts against the same account number are serialized; accounts with
/// different numbers proceed in parallel.
pub struct ConcurrentAccountStore<A: AmountType> {
    accounts: DashMap<String, Account<A>>,
}

impl<A: AmountType> ConcurrentAccountStore<A> {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
        }
    }

    /// Number of registered accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl<A: AmountType> Default for ConcurrentAccountStore<A> {
    fn default() -> Self {
        Self::new()
    }
}

/// Entry handle for one account number
pub struct ConcurrentEntry<'a, A: AmountType> {
    account_number: String,
    accounts: &'a DashMap<String, Account<A>>,
}

impl<'a, A: AmountType> AccountEntry<'a, A> for ConcurrentEntry<'a, A> {
    fn read(&self) -> Result<Account<A>, StorageError> {
        self.accounts
            .get(&self.account_number)
            .map(|r| r.value().clone())
            .ok_or_else(|| StorageError::AccountNotFound(self.account_number.clone()))
    }

    fn try_update<F>(&mut self, update_fn: F) -> Result<(), StorageError>
    where
        F: FnOnce(&mut Account<A>) -> Result<(), DomainError>,
    {
        match self.accounts.entry(self.account_number.clone()) {
            Entry::Occupied(mut e) => {
                update_fn(e.get_mut())?;
                Ok(())
            }
            Entry::Vacant(_) => Err(StorageError::AccountNotFound(self.account_number.clone())),
        }
    }
}

#[async_trait]
impl<A: AmountType> AccountStore<A> for ConcurrentAccountStore<A> {
    type Entry<'a>
        = ConcurrentEntry<'a, A>
    where
        Self: 'a;

    fn create(&self, account: Account<A>) -> Result<(), StorageError> {
        match self.accounts.entry(account.account_number().to_string()) {
            Entry::Occupied(e) => Err(StorageError::DuplicateAccount(e.key().clone())),
            Entry::Vacant(e) => {
                e.insert(account);
                Ok(())
            }
        }
    }

    fn entry(&self, account_number: &str) -> Result<Self::Entry<'_>, StorageError> {
        if !self.accounts.contains_key(account_number) {
            return Err(StorageError::AccountNotFound(account_number.to_string()));
        }

        Ok(ConcurrentEntry {
            account_number: account_number.to_string(),
            accounts: &self.accounts,
        })
    }

    fn get(&self, account_number: &str) -> Option<Account<A>> {
        self.accounts.get(account_number).map(|r| r.value().clone())
    }

    async fn snapshot<W>(&self, mut writer: W) -> Result<(), StorageError>
    where
        W: AsyncWrite + Unpin + Send,
    {
        use tokio::io::AsyncWriteExt;

        writer
            .write_all(b"account,owner,balance,transactions,last_approval_code\n")
            .await?;

        // DashMap holds brief per-shard locks during iteration
        for entry in self.accounts.iter() {
            let account = entry.value();
            let line = format!(
                "{},{},{},{},{}\n",
                account.account_number(),
                account.owner(),
                account.balance().to_decimal_string(),
                account.transactions().len(),
                account.last_transaction_approval_code().unwrap_or(""),
            );
            writer.write_all(line.as_bytes()).await?;
        }

        writer.flush().await?;
        Ok(())
    }
}

// Forwarding impl so the store can be shared across tasks behind an Arc
#[async_trait]
impl<A: AmountType> AccountStore<A> for std::sync::Arc<ConcurrentAccountStore<A>> {
    type Entry<'a>
        = ConcurrentEntry<'a, A>
    where
        Self: 'a;

    fn create(&self, account: Account<A>) -> Result<(), StorageError> {
        (**self).create(account)
    }

    fn entry(&self, account_number: &str) -> Result<Self::Entry<'_>, StorageError> {
        (**self).entry(account_number)
    }

    fn get(&self, account_number: &str) -> Option<Account<A>> {
        (**self).get(account_number)
    }

    async fn snapshot<W>(&self, writer: W) -> Result<(), StorageError>
    where
        W: AsyncWrite + Unpin + Send,
    {
        (**self).snapshot(writer).await
    }
}
