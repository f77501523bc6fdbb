use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::amount::AmountType;

/// Transaction variants. Debit-class variants (withdrawal, phone bill
/// payment) share the same balance effect; the bill payment additionally
/// carries payee details for audit purposes only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
    PhoneBillPayment {
        payee: String,
        phone_number: String,
    },
}

impl TransactionKind {
    /// Stable name for snapshots, logs, and routing
    pub fn label(&self) -> &'static str {
        match self {
            Self::Deposit => "deposit",
            Self::Withdrawal => "withdrawal",
            Self::PhoneBillPayment { .. } => "phone-bill-payment",
        }
    }
}

/// One ledger event.
///
/// Created standalone with a fresh random approval code and a creation
/// timestamp; attached to exactly one account when posted, and owned by that
/// account's history from then on. The approval code may be overwritten by
/// the posting caller before the post; nothing else is mutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction<A: AmountType> {
    kind: TransactionKind,
    amount: A,
    date: DateTime<Utc>,
    approval_code: String,
    account_number: Option<String>,
}

impl<A: AmountType> Transaction<A> {
    fn new(kind: TransactionKind, amount: A) -> Self {
        Self {
            kind,
            amount,
            date: Utc::now(),
            approval_code: Uuid::new_v4().to_string(),
            account_number: None,
        }
    }

    /// Create a deposit of the given (already rounded) amount
    pub fn deposit(amount: A) -> Self {
        Self::new(TransactionKind::Deposit, amount)
    }

    /// Create a withdrawal of the given (already rounded) amount
    pub fn withdrawal(amount: A) -> Self {
        Self::new(TransactionKind::Withdrawal, amount)
    }

    /// Create a phone bill payment towards the given payee and number
    pub fn phone_bill_payment(
        payee: impl Into<String>,
        phone_number: impl Into<String>,
        amount: A,
    ) -> Self {
        Self::new(
            TransactionKind::PhoneBillPayment {
                payee: payee.into(),
                phone_number: phone_number.into(),
            },
            amount,
        )
    }

    pub fn kind(&self) -> &TransactionKind {
        &self.kind
    }

    pub fn amount(&self) -> A {
        self.amount
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn approval_code(&self) -> &str {
        &self.approval_code
    }

    /// Overwrite the construction-time approval code. Only meaningful before
    /// the transaction is posted; posted transactions are reachable solely
    /// through immutable references.
    pub fn set_approval_code(&mut self, code: impl Into<String>) {
        self.approval_code = code.into();
    }

    /// Number of the account this transaction was posted against, if any
    pub fn account_number(&self) -> Option<&str> {
        self.account_number.as_deref()
    }

    // Back-reference, set by the posting path before the balance mutation
    pub(crate) fn attach(&mut self, account_number: &str) {
        self.account_number = Some(account_number.to_string());
    }
}
