use chrono::{DateTime, Utc};

use super::amount::AmountType;
use super::transaction::Transaction;

/// Single-currency account with private fields enforcing invariants.
///
/// The balance never goes negative across successful posts and is always on
/// the 4-decimal grid; the transaction history is append-only in posting
/// order. All mutation goes through the operations module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account<A: AmountType> {
    account_number: String,
    owner: String,
    balance: A,
    transactions: Vec<Transaction<A>>,
    create_date: DateTime<Utc>,
    last_transaction_approval_code: Option<String>,
}

impl<A: AmountType> Account<A> {
    /// Create a new account with zero balance and empty history
    pub fn new(owner: impl Into<String>, account_number: impl Into<String>) -> Self {
        Self {
            account_number: account_number.into(),
            owner: owner.into(),
            balance: A::zero(),
            transactions: Vec::new(),
            create_date: Utc::now(),
            last_transaction_approval_code: None,
        }
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> A {
        self.balance
    }

    /// Posted transactions in posting order
    pub fn transactions(&self) -> &[Transaction<A>] {
        &self.transactions
    }

    pub fn create_date(&self) -> DateTime<Utc> {
        self.create_date
    }

    /// Approval code of the most recently posted transaction
    pub fn last_transaction_approval_code(&self) -> Option<&str> {
        self.last_transaction_approval_code.as_deref()
    }

    // Internal mutation methods for use by the operations module.
    // set_balance is also the administrative path; the amount representation
    // keeps every written value rounded to 4 decimal places.
    pub(crate) fn set_balance(&mut self, balance: A) {
        self.balance = balance;
    }

    pub(crate) fn push_transaction(&mut self, transaction: Transaction<A>) {
        self.transactions.push(transaction);
    }

    pub(crate) fn set_last_approval_code(&mut self, code: &str) {
        self.last_transaction_approval_code = Some(code.to_string());
    }
}
