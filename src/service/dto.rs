use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{Account, AmountType, Transaction, TransactionKind};

/// Owned view of one posted transaction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionView {
    #[serde(rename = "type")]
    pub tx_type: String,
    pub amount: f64,
    pub date: DateTime<Utc>,
    pub approval_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl TransactionView {
    fn from_transaction<A: AmountType>(transaction: &Transaction<A>) -> Self {
        let (payee, phone_number) = match transaction.kind() {
            TransactionKind::PhoneBillPayment { payee, phone_number } => {
                (Some(payee.clone()), Some(phone_number.clone()))
            }
            _ => (None, None),
        };

        Self {
            tx_type: transaction.kind().label().to_string(),
            amount: transaction.amount().to_f64(),
            date: transaction.date(),
            approval_code: transaction.approval_code().to_string(),
            payee,
            phone_number,
        }
    }
}

/// Owned view of an account and its history
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountSnapshot {
    pub account_number: String,
    pub owner: String,
    pub balance: f64,
    pub create_date: DateTime<Utc>,
    pub transactions: Vec<TransactionView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_transaction_approval_code: Option<String>,
}

impl AccountSnapshot {
    pub fn from_account<A: AmountType>(account: &Account<A>) -> Self {
        Self {
            account_number: account.account_number().to_string(),
            owner: account.owner().to_string(),
            balance: account.balance().to_f64(),
            create_date: account.create_date(),
            transactions: account
                .transactions()
                .iter()
                .map(TransactionView::from_transaction)
                .collect(),
            last_transaction_approval_code: account
                .last_transaction_approval_code()
                .map(str::to_string),
        }
    }
}
