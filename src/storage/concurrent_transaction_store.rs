use dashmap::DashMap;

use super::traits::TransactionStore;
use crate::domain::{AmountType, Transaction};

/// DashMap-based concurrent transaction store, keyed by approval code.
/// Records are immutable once inserted.
pub struct ConcurrentTransactionStore<A: AmountType> {
    records: DashMap<String, Transaction<A>>,
}

impl<A: AmountType> ConcurrentTransactionStore<A> {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// Number of stored transactions
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<A: AmountType> Default for ConcurrentTransactionStore<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: AmountType> TransactionStore<A> for ConcurrentTransactionStore<A> {
    fn insert(&self, transaction: Transaction<A>) {
        self.records
            .insert(transaction.approval_code().to_string(), transaction);
    }

    fn get(&self, approval_code: &str) -> Option<Transaction<A>> {
        self.records.get(approval_code).map(|r| r.clone())
    }

    fn contains(&self, approval_code: &str) -> bool {
        self.records.contains_key(approval_code)
    }
}

// Forwarding impl so the store can be shared across tasks behind an Arc
impl<A: AmountType> TransactionStore<A> for std::sync::Arc<ConcurrentTransactionStore<A>> {
    fn insert(&self, transaction: Transaction<A>) {
        (**self).insert(transaction)
    }

    fn get(&self, approval_code: &str) -> Option<Transaction<A>> {
        (**self).get(approval_code)
    }

    fn contains(&self, approval_code: &str) -> bool {
        (**self).contains(approval_code)
    }
}
