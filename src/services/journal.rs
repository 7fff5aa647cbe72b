//! Journal rules
//!
//! Maps every income or expense event to exactly one balanced pair of journal
//! lines. The functions here are pure; persisting the pair is the caller's
//! job.
//!
//! | event                      | debit                | credit               |
//! |----------------------------|----------------------|----------------------|
//! | income, cash               | Cash                 | Revenue              |
//! | income, transfer           | Bank                 | Revenue              |
//! | income, receivable         | AccountsReceivable   | Revenue              |
//! | income, receivable payment | Cash                 | AccountsReceivable   |
//! | expense, cash              | sub-category         | Cash                 |
//! | expense, transfer          | sub-category         | Bank                 |
//! | expense, payable           | sub-category         | AccountsPayable      |
//! | expense, payable payment   | AccountsPayable      | Cash                 |

use chrono::NaiveDate;

use crate::error::{SipadiError, SipadiResult};
use crate::models::{
    ExpenseMethod, ExpenseTransaction, IncomeMethod, IncomeTransaction, JournalLine, Money,
    SystemAccount, TransactionId,
};

/// Build the balanced pair `[debit line, credit line]`
///
/// No validation happens here: a zero amount gives a degenerate pair that
/// contributes nothing to any report.
pub fn derive_journal_lines(
    date: NaiveDate,
    debit_account: &str,
    credit_account: &str,
    amount: Money,
    description: &str,
) -> [JournalLine; 2] {
    [
        JournalLine::debit(date, debit_account, amount, description),
        JournalLine::credit(date, credit_account, amount, description),
    ]
}

/// Debit and credit accounts for an income
pub fn income_accounts(method: IncomeMethod) -> (SystemAccount, SystemAccount) {
    match method {
        IncomeMethod::Cash => (SystemAccount::Cash, SystemAccount::Revenue),
        IncomeMethod::Transfer => (SystemAccount::Bank, SystemAccount::Revenue),
        IncomeMethod::Receivable => (SystemAccount::AccountsReceivable, SystemAccount::Revenue),
        IncomeMethod::ReceivablePayment => {
            (SystemAccount::Cash, SystemAccount::AccountsReceivable)
        }
    }
}

/// Debit and credit account names for an expense on `subcategory_account`
pub fn expense_accounts(
    method: ExpenseMethod,
    subcategory_account: &str,
) -> (&str, &'static str) {
    match method {
        ExpenseMethod::Cash => (subcategory_account, SystemAccount::Cash.name()),
        ExpenseMethod::Transfer => (subcategory_account, SystemAccount::Bank.name()),
        ExpenseMethod::Payable => (subcategory_account, SystemAccount::AccountsPayable.name()),
        ExpenseMethod::PayablePayment => (
            SystemAccount::AccountsPayable.name(),
            SystemAccount::Cash.name(),
        ),
    }
}

/// The journal pair for a stored income, described by its source label
pub fn income_entry(txn: &IncomeTransaction) -> SipadiResult<[JournalLine; 2]> {
    let date = txn.date.ok_or_else(|| missing_date(txn.id))?;
    let (debit, credit) = income_accounts(txn.method);
    let pair = derive_journal_lines(
        date,
        debit.name(),
        credit.name(),
        txn.amount,
        txn.source.label(),
    );
    Ok(pair.map(|line| line.for_transaction(txn.id)))
}

/// The journal pair for a stored expense, described by its note
pub fn expense_entry(txn: &ExpenseTransaction) -> SipadiResult<[JournalLine; 2]> {
    let date = txn.date.ok_or_else(|| missing_date(txn.id))?;
    let (debit, credit) = expense_accounts(txn.method, txn.subcategory.label());
    let pair = derive_journal_lines(date, debit, credit, txn.amount, &txn.note);
    Ok(pair.map(|line| line.for_transaction(txn.id)))
}

fn missing_date(id: TransactionId) -> SipadiError {
    SipadiError::Validation(format!("Transaction {} has no readable date", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseSubcategory, IncomeSource, Owner};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    fn owner() -> Owner {
        Owner::parse("budi").unwrap()
    }

    fn rp(units: i64) -> Money {
        Money::from_units(units)
    }

    fn income(method: IncomeMethod) -> IncomeTransaction {
        IncomeTransaction::new(owner(), date(), IncomeSource::RiceSale, rp(100_000), method)
    }

    fn expense(method: ExpenseMethod) -> ExpenseTransaction {
        ExpenseTransaction::new(owner(), date(), ExpenseSubcategory::Urea, rp(50_000), method)
            .with_note("pupuk musim tanam")
    }

    #[test]
    fn test_pair_shape() {
        let [debit, credit] = derive_journal_lines(date(), "Cash", "Revenue", rp(100_000), "x");
        assert_eq!(debit.account, "Cash");
        assert_eq!(debit.debit, rp(100_000));
        assert!(debit.credit.is_zero());
        assert_eq!(credit.account, "Revenue");
        assert!(credit.debit.is_zero());
        assert_eq!(credit.credit, rp(100_000));
        assert_eq!(debit.date, credit.date);
        assert_eq!(debit.description, credit.description);
    }

    #[test]
    fn test_zero_amount_is_degenerate_not_rejected() {
        let pair = derive_journal_lines(date(), "Cash", "Revenue", Money::zero(), "");
        assert!(pair.iter().all(|l| l.debit.is_zero() && l.credit.is_zero()));
    }

    #[test]
    fn test_cash_income() {
        let txn = income(IncomeMethod::Cash);
        let [debit, credit] = income_entry(&txn).unwrap();
        assert_eq!(debit.account, "Cash");
        assert_eq!(credit.account, "Revenue");
        assert_eq!(debit.description, "Penjualan Padi");
        assert_eq!(debit.transaction_id, Some(txn.id));
        assert_eq!(credit.transaction_id, Some(txn.id));
    }

    #[test]
    fn test_income_routing() {
        let cases = [
            (IncomeMethod::Cash, "Cash", "Revenue"),
            (IncomeMethod::Transfer, "Bank", "Revenue"),
            (IncomeMethod::Receivable, "AccountsReceivable", "Revenue"),
            (IncomeMethod::ReceivablePayment, "Cash", "AccountsReceivable"),
        ];
        for (method, debit, credit) in cases {
            let [d, c] = income_entry(&income(method)).unwrap();
            assert_eq!((d.account.as_str(), c.account.as_str()), (debit, credit), "{method}");
        }
    }

    #[test]
    fn test_expense_routing() {
        let cases = [
            (ExpenseMethod::Cash, "Urea", "Cash"),
            (ExpenseMethod::Transfer, "Urea", "Bank"),
            (ExpenseMethod::Payable, "Urea", "AccountsPayable"),
            (ExpenseMethod::PayablePayment, "AccountsPayable", "Cash"),
        ];
        for (method, debit, credit) in cases {
            let [d, c] = expense_entry(&expense(method)).unwrap();
            assert_eq!((d.account.as_str(), c.account.as_str()), (debit, credit), "{method}");
        }
    }

    #[test]
    fn test_expense_description_is_note() {
        let [debit, _] = expense_entry(&expense(ExpenseMethod::Transfer)).unwrap();
        assert_eq!(debit.description, "pupuk musim tanam");
        assert_eq!(debit.debit, rp(50_000));
    }

    #[test]
    fn test_every_pair_balances() {
        for method in IncomeMethod::all() {
            let pair = income_entry(&income(*method)).unwrap();
            let net: Money = pair.iter().map(JournalLine::net).sum();
            assert!(net.is_zero());
        }
        for method in ExpenseMethod::all() {
            let pair = expense_entry(&expense(*method)).unwrap();
            let net: Money = pair.iter().map(JournalLine::net).sum();
            assert!(net.is_zero());
        }
    }

    #[test]
    fn test_missing_date_cannot_be_posted() {
        let mut txn = income(IncomeMethod::Cash);
        txn.date = None;
        assert!(income_entry(&txn).unwrap_err().is_validation());
    }
}
