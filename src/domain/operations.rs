use super::account::Account;
use super::amount::AmountType;
use super::error::DomainError;
use super::transaction::{Transaction, TransactionKind};

/// Credit the account by an already rounded amount
pub fn credit<A: AmountType>(account: &mut Account<A>, amount: A) -> Result<(), DomainError> {
    let new_balance = account
        .balance()
        .checked_add(amount)
        .ok_or(DomainError::Overflow)?;

    account.set_balance(new_balance);
    Ok(())
}

/// Debit the account by an already rounded amount.
/// Fails without mutation when the balance cannot cover it.
pub fn debit<A: AmountType>(account: &mut Account<A>, amount: A) -> Result<(), DomainError> {
    if account.balance() < amount {
        return Err(DomainError::InsufficientBalance);
    }

    let new_balance = account
        .balance()
        .checked_sub(amount)
        .ok_or(DomainError::Overflow)?;

    account.set_balance(new_balance);
    Ok(())
}

/// Post a transaction against the account.
///
/// The back-reference is attached before the balance mutation and is not
/// cleared when the mutation fails. On failure the balance, the history,
/// and the approval-code mirror are all left unchanged; on success the
/// transaction is appended to the history and its approval code becomes the
/// account's last approval code. This is the only path that mutates any of
/// the three.
pub fn post<A: AmountType>(
    account: &mut Account<A>,
    mut transaction: Transaction<A>,
) -> Result<(), DomainError> {
    transaction.attach(account.account_number());

    match transaction.kind() {
        TransactionKind::Deposit => credit(account, transaction.amount())?,
        TransactionKind::Withdrawal | TransactionKind::PhoneBillPayment { .. } => {
            debit(account, transaction.amount())?
        }
    }

    let code = transaction.approval_code().to_string();
    account.push_transaction(transaction);
    account.set_last_approval_code(&code);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::amount::FixedPoint;

    fn amount(value: f64) -> FixedPoint {
        FixedPoint::from_f64(value).unwrap()
    }

    #[test]
    fn credit_increases_balance() {
        let mut account = Account::new("Kerem Karaca", "669-7788");

        credit(&mut account, amount(1000.0)).unwrap();

        assert_eq!(account.balance(), amount(1000.0));
    }

    #[test]
    fn debit_decreases_balance() {
        let mut account = Account::new("Kerem Karaca", "669-7788");
        credit(&mut account, amount(1000.0)).unwrap();

        debit(&mut account, amount(300.0)).unwrap();

        assert_eq!(account.balance(), amount(700.0));
    }

    #[test]
    fn debit_insufficient_balance_fails_without_mutation() {
        let mut account = Account::new("Kerem Karaca", "669-7788");
        credit(&mut account, amount(100.0)).unwrap();

        let result = debit(&mut account, amount(100.0001));

        assert_eq!(result, Err(DomainError::InsufficientBalance));
        assert_eq!(account.balance(), amount(100.0));
    }

    #[test]
    fn debit_entire_balance_is_allowed() {
        let mut account = Account::new("Kerem Karaca", "669-7788");
        credit(&mut account, amount(100.0)).unwrap();

        debit(&mut account, amount(100.0)).unwrap();

        assert_eq!(account.balance(), FixedPoint::zero());
    }

    #[test]
    fn credit_overflow_is_detected() {
        let mut account = Account::new("Kerem Karaca", "669-7788");
        account.set_balance(FixedPoint::from_raw(i64::MAX));

        let result = credit(&mut account, FixedPoint::from_raw(1));

        assert_eq!(result, Err(DomainError::Overflow));
        assert_eq!(account.balance(), FixedPoint::from_raw(i64::MAX));
    }

    #[test]
    fn post_deposit_credits_and_records() {
        let mut account = Account::new("Kerem Karaca", "669-7788");
        let deposit = Transaction::deposit(amount(1000.0));
        let code = deposit.approval_code().to_string();

        post(&mut account, deposit).unwrap();

        assert_eq!(account.balance(), amount(1000.0));
        assert_eq!(account.transactions().len(), 1);
        assert_eq!(account.last_transaction_approval_code(), Some(code.as_str()));
    }

    #[test]
    fn post_withdrawal_debits_and_records() {
        let mut account = Account::new("Kerem Karaca", "669-7788");
        post(&mut account, Transaction::deposit(amount(1000.0))).unwrap();

        let withdrawal = Transaction::withdrawal(amount(500.0));
        let code = withdrawal.approval_code().to_string();
        post(&mut account, withdrawal).unwrap();

        assert_eq!(account.balance(), amount(500.0));
        assert_eq!(account.transactions().len(), 2);
        assert_eq!(account.last_transaction_approval_code(), Some(code.as_str()));
    }

    #[test]
    fn post_attaches_back_reference() {
        let mut account = Account::new("Kerem Karaca", "669-7788");
        post(&mut account, Transaction::deposit(amount(1.0))).unwrap();

        assert_eq!(
            account.transactions()[0].account_number(),
            Some("669-7788")
        );
    }

    #[test]
    fn post_insufficient_balance_leaves_account_unchanged() {
        let mut account = Account::<FixedPoint>::new("Kerem Karaca", "669-7788");

        let result = post(&mut account, Transaction::withdrawal(amount(500.0)));

        assert_eq!(result, Err(DomainError::InsufficientBalance));
        assert_eq!(account.balance(), FixedPoint::zero());
        assert!(account.transactions().is_empty());
        assert!(account.last_transaction_approval_code().is_none());
    }

    #[test]
    fn post_phone_bill_payment_debits_and_keeps_payee() {
        let mut account = Account::new("Kerem Karaca", "669-7788");
        post(&mut account, Transaction::deposit(amount(1500.0))).unwrap();

        post(
            &mut account,
            Transaction::phone_bill_payment("Vodafone", "5423345566", amount(350.0)),
        )
        .unwrap();

        assert_eq!(account.balance(), amount(1150.0));
        match account.transactions()[1].kind() {
            TransactionKind::PhoneBillPayment { payee, phone_number } => {
                assert_eq!(payee, "Vodafone");
                assert_eq!(phone_number, "5423345566");
            }
            other => panic!("expected phone bill payment, got {other:?}"),
        }
    }

    #[test]
    fn failed_bill_payment_mutates_nothing() {
        let mut account = Account::new("Kerem Karaca", "669-7788");
        post(&mut account, Transaction::deposit(amount(100.0))).unwrap();
        let mirror = account.last_transaction_approval_code().map(str::to_string);

        let result = post(
            &mut account,
            Transaction::phone_bill_payment("Vodafone", "5423345566", amount(350.0)),
        );

        assert_eq!(result, Err(DomainError::InsufficientBalance));
        assert_eq!(account.balance(), amount(100.0));
        assert_eq!(account.transactions().len(), 1);
        assert_eq!(
            account.last_transaction_approval_code().map(str::to_string),
            mirror
        );
    }

    #[test]
    fn deposit_then_withdraw_same_amount_restores_balance() {
        let mut account = Account::new("Kerem Karaca", "669-7788");
        post(&mut account, Transaction::deposit(amount(123.4567))).unwrap();
        let before = account.balance();

        post(&mut account, Transaction::deposit(amount(77.7777))).unwrap();
        post(&mut account, Transaction::withdrawal(amount(77.7777))).unwrap();

        assert_eq!(account.balance(), before);
    }

    #[test]
    fn mirror_follows_each_successful_post() {
        let mut account = Account::new("Kerem Karaca", "669-7788");

        for value in [2000.0, 500.0, 350.0] {
            let tx = if value == 2000.0 {
                Transaction::deposit(amount(value))
            } else {
                Transaction::withdrawal(amount(value))
            };
            let code = tx.approval_code().to_string();
            post(&mut account, tx).unwrap();
            assert_eq!(account.last_transaction_approval_code(), Some(code.as_str()));
        }
    }

    #[test]
    fn complex_scenario() {
        let mut account = Account::new("Kerem Karaca", "669-7788");

        post(&mut account, Transaction::deposit(amount(2000.0))).unwrap();
        assert_eq!(account.balance(), amount(2000.0));

        post(&mut account, Transaction::withdrawal(amount(500.0))).unwrap();
        assert_eq!(account.balance(), amount(1500.0));

        post(
            &mut account,
            Transaction::phone_bill_payment("Vodafone", "5423345566", amount(350.0)),
        )
        .unwrap();
        assert_eq!(account.balance(), amount(1150.0));

        post(&mut account, Transaction::deposit(amount(1000.0))).unwrap();
        assert_eq!(account.balance(), amount(2150.0));

        assert_eq!(account.transactions().len(), 4);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Deposit(f64),
            Withdraw(f64),
            BillPayment(f64),
        }

        fn op_strategy() -> impl Strategy<Value = Op> {
            let value = 0.0001f64..50_000.0;
            prop_oneof![
                value.clone().prop_map(Op::Deposit),
                value.clone().prop_map(Op::Withdraw),
                value.prop_map(Op::BillPayment),
            ]
        }

        proptest! {
            // Balance equals the rounded sum of signed deltas of the posts
            // that succeeded, never goes negative, and the history grows by
            // exactly one entry per successful post.
            #[test]
            fn balance_is_rounded_sum_of_successful_posts(ops in prop::collection::vec(op_strategy(), 1..60)) {
                let mut account = Account::new("prop", "000-0000");
                let mut expected_raw: i64 = 0;
                let mut expected_len = 0usize;

                for op in ops {
                    let (tx, signed) = match op {
                        Op::Deposit(v) => {
                            let a = FixedPoint::from_f64(v).unwrap();
                            (Transaction::deposit(a), a.raw())
                        }
                        Op::Withdraw(v) => {
                            let a = FixedPoint::from_f64(v).unwrap();
                            (Transaction::withdrawal(a), -a.raw())
                        }
                        Op::BillPayment(v) => {
                            let a = FixedPoint::from_f64(v).unwrap();
                            (Transaction::phone_bill_payment("Vodafone", "5423345566", a), -a.raw())
                        }
                    };

                    match post(&mut account, tx) {
                        Ok(()) => {
                            expected_raw += signed;
                            expected_len += 1;
                        }
                        Err(DomainError::InsufficientBalance) => {
                            prop_assert!(expected_raw + signed < 0);
                        }
                        Err(other) => prop_assert!(false, "unexpected error: {other}"),
                    }

                    prop_assert_eq!(account.balance().raw(), expected_raw);
                    prop_assert!(account.balance() >= FixedPoint::zero());
                    prop_assert_eq!(account.transactions().len(), expected_len);
                }
            }
        }
    }
}
