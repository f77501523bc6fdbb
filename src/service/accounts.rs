use std::marker::PhantomData;

use tracing::debug;
use uuid::Uuid;

use super::dto::AccountSnapshot;
use super::error::ServiceError;
use crate::audit::AuditLogger;
use crate::domain::{Account, AmountType, Transaction, operations};
use crate::storage::{AccountEntry, AccountStore, StorageError, TransactionStore};

const COMPONENT: &str = "AccountService";

/// Caller layer around the posting protocol.
///
/// Validates amounts before the core is invoked, resolves account numbers
/// through the lookup collaborator, runs each post as one atomic unit of
/// work on the account entry, persists posted transactions, and reports
/// every outcome to the audit logger. Audit delivery is observational only
/// and never affects the result.
pub struct AccountService<A, S, T>
where
    A: AmountType,
    S: AccountStore<A>,
    T: TransactionStore<A>,
{
    accounts: S,
    transactions: T,
    audit: AuditLogger,
    _phantom: PhantomData<A>,
}

impl<A, S, T> AccountService<A, S, T>
where
    A: AmountType,
    S: AccountStore<A>,
    T: TransactionStore<A>,
{
    pub fn new(accounts: S, transactions: T, audit: AuditLogger) -> Self {
        Self {
            accounts,
            transactions,
            audit,
            _phantom: PhantomData,
        }
    }

    /// Reference to the account store, for snapshot output
    pub fn accounts(&self) -> &S {
        &self.accounts
    }

    /// Register a new account with a zero balance
    pub fn open_account(&self, owner: &str, account_number: &str) -> Result<(), ServiceError> {
        debug!(account_number, "Opening account");

        match self.accounts.create(Account::new(owner, account_number)) {
            Ok(()) => {
                self.audit.info(
                    &format!("Account opened: {account_number}"),
                    COMPONENT,
                    "open_account",
                );
                Ok(())
            }
            Err(e) => {
                self.audit.error(
                    &format!("Error opening account: {account_number}"),
                    COMPONENT,
                    "open_account",
                    &e,
                );
                Err(e.into())
            }
        }
    }

    /// Look an account up and return an owned snapshot of it
    pub fn find_account(&self, account_number: &str) -> Result<AccountSnapshot, ServiceError> {
        match self.accounts.get(account_number) {
            Some(account) => {
                self.audit.info(
                    &format!("Account found: {account_number}"),
                    COMPONENT,
                    "find_account",
                );
                Ok(AccountSnapshot::from_account(&account))
            }
            None => {
                let err = ServiceError::AccountNotFound(account_number.to_string());
                self.audit.error(
                    &format!("Account not found: {account_number}"),
                    COMPONENT,
                    "find_account",
                    &err,
                );
                Err(err)
            }
        }
    }

    /// Deposit into the account; returns the approval code
    pub fn credit(&self, account_number: &str, amount: f64) -> Result<String, ServiceError> {
        let amount = self.validate_amount(amount, "credit")?;

        let code = self.post_transaction(account_number, Transaction::deposit(amount), "credit")?;

        self.audit.info(
            &format!(
                "Credit successful: account={account_number}, amount={}",
                amount.to_decimal_string()
            ),
            COMPONENT,
            "credit",
        );
        Ok(code)
    }

    /// Withdraw from the account; returns the approval code
    pub fn debit(&self, account_number: &str, amount: f64) -> Result<String, ServiceError> {
        let amount = self.validate_amount(amount, "debit")?;

        let code =
            self.post_transaction(account_number, Transaction::withdrawal(amount), "debit")?;

        self.audit.info(
            &format!(
                "Debit successful: account={account_number}, amount={}",
                amount.to_decimal_string()
            ),
            COMPONENT,
            "debit",
        );
        Ok(code)
    }

    /// Pay a phone bill from the account; returns the approval code
    pub fn pay_phone_bill(
        &self,
        account_number: &str,
        payee: &str,
        phone_number: &str,
        amount: f64,
    ) -> Result<String, ServiceError> {
        let amount = self.validate_amount(amount, "pay_phone_bill")?;

        let code = self.post_transaction(
            account_number,
            Transaction::phone_bill_payment(payee, phone_number, amount),
            "pay_phone_bill",
        )?;

        self.audit.info(
            &format!(
                "Bill payment successful: account={account_number}, payee={payee}, amount={}",
                amount.to_decimal_string()
            ),
            COMPONENT,
            "pay_phone_bill",
        );
        Ok(code)
    }

    // Round to 4 decimal places, then reject anything not strictly positive.
    // The core assumes this has happened and performs no positivity check.
    fn validate_amount(&self, amount: f64, operation: &str) -> Result<A, ServiceError> {
        if let Ok(rounded) = A::from_f64(amount)
            && rounded.is_positive()
        {
            return Ok(rounded);
        }

        let err = ServiceError::InvalidAmount;
        self.audit.error(
            &format!("Invalid amount for {operation}: {amount}"),
            COMPONENT,
            operation,
            &err,
        );
        Err(err)
    }

    fn post_transaction(
        &self,
        account_number: &str,
        mut transaction: Transaction<A>,
        operation: &str,
    ) -> Result<String, ServiceError> {
        debug!(account_number, operation, "Posting transaction");

        // The posting caller assigns a fresh approval code, overwriting the
        // construction-time one
        let approval_code = Uuid::new_v4().to_string();
        transaction.set_approval_code(approval_code.clone());

        let mut entry = match self.accounts.entry(account_number) {
            Ok(entry) => entry,
            Err(e) => {
                self.audit.error(
                    &format!("Account not found for {operation}: {account_number}"),
                    COMPONENT,
                    operation,
                    &e,
                );
                return Err(e.into());
            }
        };

        // Unit of work: the post runs atomically against the stored account
        if let Err(e) = entry.try_update(|account| operations::post(account, transaction)) {
            let message = match &e {
                StorageError::Domain(_) => {
                    format!("Insufficient balance for {operation}: {account_number}")
                }
                _ => format!("Error processing {operation}: {account_number}"),
            };
            self.audit.error(&message, COMPONENT, operation, &e);
            return Err(e.into());
        }

        // Persist the posted transaction independently of the account
        if let Ok(account) = entry.read()
            && let Some(posted) = account.transactions().last()
        {
            self.transactions.insert(posted.clone());
        }

        Ok(approval_code)
    }
}
