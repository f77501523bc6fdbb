use serde::Deserialize;

use super::error::IoError;

/// Raw CSV record as read from an operations file
#[derive(Debug, Deserialize)]
pub struct RawOperationRecord {
    pub op: String,
    pub account: String,
    pub owner: Option<String>,
    pub amount: Option<String>,
    pub payee: Option<String>,
    pub phone: Option<String>,
}

/// Typed operation request fed to the account service.
/// Amounts stay floating here; the service rounds and validates them.
#[derive(Debug, Clone, PartialEq)]
pub enum OperationRequest {
    Open {
        account_number: String,
        owner: String,
    },
    Deposit {
        account_number: String,
        amount: f64,
    },
    Withdraw {
        account_number: String,
        amount: f64,
    },
    BillPayment {
        account_number: String,
        payee: String,
        phone_number: String,
        amount: f64,
    },
}

impl OperationRequest {
    pub fn account_number(&self) -> &str {
        match self {
            Self::Open { account_number, .. }
            | Self::Deposit { account_number, .. }
            | Self::Withdraw { account_number, .. }
            | Self::BillPayment { account_number, .. } => account_number,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_amount(value: Option<String>, op: &str) -> Result<f64, IoError> {
    let raw = non_empty(value)
        .ok_or_else(|| IoError::MissingField(format!("amount required for {op}")))?;

    raw.trim()
        .parse::<f64>()
        .map_err(|_| IoError::InvalidAmount(raw))
}

impl RawOperationRecord {
    /// Parse this raw record into a strongly-typed operation request
    pub fn parse(self) -> Result<OperationRequest, IoError> {
        let op = self.op.trim().to_lowercase();
        let account_number = self.account.trim().to_string();

        match op.as_str() {
            "open" => {
                let owner = non_empty(self.owner)
                    .ok_or_else(|| IoError::MissingField("owner required for open".to_string()))?;
                Ok(OperationRequest::Open {
                    account_number,
                    owner,
                })
            }
            "deposit" => Ok(OperationRequest::Deposit {
                account_number,
                amount: parse_amount(self.amount, "deposit")?,
            }),
            "withdraw" | "withdrawal" => Ok(OperationRequest::Withdraw {
                account_number,
                amount: parse_amount(self.amount, "withdrawal")?,
            }),
            "bill-payment" => {
                let amount = parse_amount(self.amount, "bill-payment")?;
                let payee = non_empty(self.payee).ok_or_else(|| {
                    IoError::MissingField("payee required for bill-payment".to_string())
                })?;
                let phone_number = non_empty(self.phone).ok_or_else(|| {
                    IoError::MissingField("phone required for bill-payment".to_string())
                })?;
                Ok(OperationRequest::BillPayment {
                    account_number,
                    payee,
                    phone_number,
                    amount,
                })
            }
            _ => Err(IoError::InvalidOperation(self.op)),
        }
    }
}
