use futures::{Stream, StreamExt};

use super::policy::ErrorPolicy;
use crate::domain::AmountType;
use crate::io::{IoError, OperationRequest};
use crate::service::{AccountService, ServiceError};
use crate::storage::{AccountStore, TransactionStore};

/// Drives a stream of operation requests through the account service
pub struct OperationSession<A, S, T, P>
where
    A: AmountType,
    S: AccountStore<A>,
    T: TransactionStore<A>,
    P: ErrorPolicy,
{
    service: AccountService<A, S, T>,
    error_policy: P,
}

impl<A, S, T, P> OperationSession<A, S, T, P>
where
    A: AmountType,
    S: AccountStore<A>,
    T: TransactionStore<A>,
    P: ErrorPolicy,
{
    /// Create a new session over the given service
    pub fn new(service: AccountService<A, S, T>, error_policy: P) -> Self {
        Self {
            service,
            error_policy,
        }
    }

    /// Process a stream of operation requests.
    /// Returns true if the whole stream was consumed (errors skipped per
    /// policy), false if the policy aborted the batch.
    pub async fn process_stream<St>(&mut self, mut stream: St) -> bool
    where
        St: Stream<Item = Result<OperationRequest, IoError>> + Unpin,
    {
        while let Some(result) = stream.next().await {
            match result {
                Ok(request) => {
                    if let Err(e) = self.apply(request)
                        && !self.error_policy.handle_service_error(e)
                    {
                        return false;
                    }
                }
                Err(e) => {
                    if !self.error_policy.handle_io_error(e) {
                        return false;
                    }
                }
            }
        }

        true
    }

    fn apply(&self, request: OperationRequest) -> Result<(), ServiceError> {
        match request {
            OperationRequest::Open {
                account_number,
                owner,
            } => self.service.open_account(&owner, &account_number),
            OperationRequest::Deposit {
                account_number,
                amount,
            } => self.service.credit(&account_number, amount).map(|_| ()),
            OperationRequest::Withdraw {
                account_number,
                amount,
            } => self.service.debit(&account_number, amount).map(|_| ()),
            OperationRequest::BillPayment {
                account_number,
                payee,
                phone_number,
                amount,
            } => self
                .service
                .pay_phone_bill(&account_number, &payee, &phone_number, amount)
                .map(|_| ()),
        }
    }

    /// Reference to the underlying service
    pub fn service(&self) -> &AccountService<A, S, T> {
        &self.service
    }

    /// Consume the session and return the service
    pub fn into_service(self) -> AccountService<A, S, T> {
        self.service
    }
}
