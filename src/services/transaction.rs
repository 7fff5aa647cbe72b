//! Transaction service
//!
//! Validates new income and expense records, derives their journal pair and
//! posts both through the owner's book. Also lists records and repairs books
//! whose journal lost pairs.

use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::{info, instrument, warn};

use crate::error::{SipadiError, SipadiResult};
use crate::models::{
    DateRange, ExpenseCategory, ExpenseMethod, ExpenseSubcategory, ExpenseTransaction,
    IncomeMethod, IncomeSource, IncomeTransaction, Money, Session, TransactionId,
};
use crate::storage::{Book, Storage};

use super::journal::{expense_entry, income_entry};

/// Input for recording an income
#[derive(Debug, Clone)]
pub struct RecordIncomeInput {
    pub date: NaiveDate,
    pub source: IncomeSource,
    pub amount: Money,
    pub method: IncomeMethod,
    pub note: Option<String>,
}

/// Input for recording an expense
#[derive(Debug, Clone)]
pub struct RecordExpenseInput {
    pub date: NaiveDate,
    pub category: ExpenseCategory,
    pub subcategory: ExpenseSubcategory,
    pub amount: Money,
    pub method: ExpenseMethod,
    pub note: Option<String>,
}

/// Outcome of a journal repair
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Transactions whose pair was appended
    pub replayed: usize,
    /// Transactions without a journal pair that could not be replayed
    /// because their date is unreadable
    pub skipped: usize,
}

/// Service for recording and listing transactions of the logged-in owner
pub struct TransactionService<'a> {
    storage: &'a Storage,
    session: &'a Session,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service for a session
    pub fn new(storage: &'a Storage, session: &'a Session) -> Self {
        Self { storage, session }
    }

    fn book(&self) -> Book {
        self.storage.book(&self.session.owner)
    }

    /// Record an income and its journal pair
    #[instrument(skip(self, input), fields(owner = %self.session.owner))]
    pub fn record_income(&self, input: RecordIncomeInput) -> SipadiResult<IncomeTransaction> {
        validate_amount(input.amount)?;

        let mut txn = IncomeTransaction::new(
            self.session.owner.clone(),
            input.date,
            input.source,
            input.amount,
            input.method,
        );
        if let Some(note) = input.note {
            txn = txn.with_note(note.trim());
        }

        let pair = income_entry(&txn)?;
        self.book().post_income(&txn, &pair)?;

        Ok(txn)
    }

    /// Record an expense and its journal pair
    #[instrument(skip(self, input), fields(owner = %self.session.owner))]
    pub fn record_expense(&self, input: RecordExpenseInput) -> SipadiResult<ExpenseTransaction> {
        validate_amount(input.amount)?;

        if input.subcategory.category() != input.category {
            return Err(SipadiError::Validation(format!(
                "'{}' is not a sub-category of '{}'",
                input.subcategory, input.category
            )));
        }

        let mut txn = ExpenseTransaction::new(
            self.session.owner.clone(),
            input.date,
            input.subcategory,
            input.amount,
            input.method,
        );
        if let Some(note) = input.note {
            txn = txn.with_note(note.trim());
        }

        let pair = expense_entry(&txn)?;
        self.book().post_expense(&txn, &pair)?;

        Ok(txn)
    }

    /// Income records dated inside the range, in stored order
    pub fn list_income(&self, range: DateRange) -> SipadiResult<Vec<IncomeTransaction>> {
        Ok(self
            .book()
            .load_income()?
            .into_iter()
            .filter(|txn| range.contains(txn.date))
            .collect())
    }

    /// Expense records dated inside the range, in stored order
    pub fn list_expenses(&self, range: DateRange) -> SipadiResult<Vec<ExpenseTransaction>> {
        Ok(self
            .book()
            .load_expenses()?
            .into_iter()
            .filter(|txn| range.contains(txn.date))
            .collect())
    }

    /// Append the journal pair of every transaction that has none
    ///
    /// Pairs are matched by transaction id, so running this again appends
    /// nothing.
    #[instrument(skip(self), fields(owner = %self.session.owner))]
    pub fn replay_missing_journal(&self) -> SipadiResult<ReplaySummary> {
        let book = self.book();
        let posted: HashSet<TransactionId> = book
            .load_journal_lines()?
            .into_iter()
            .filter_map(|line| line.transaction_id)
            .collect();

        let mut summary = ReplaySummary::default();

        for txn in book.load_income()? {
            if posted.contains(&txn.id) {
                continue;
            }
            match income_entry(&txn) {
                Ok(pair) => {
                    book.append_journal_lines(&pair)?;
                    summary.replayed += 1;
                }
                Err(e) => {
                    warn!(id = %txn.id, error = %e, "cannot replay income");
                    summary.skipped += 1;
                }
            }
        }

        for txn in book.load_expenses()? {
            if posted.contains(&txn.id) {
                continue;
            }
            match expense_entry(&txn) {
                Ok(pair) => {
                    book.append_journal_lines(&pair)?;
                    summary.replayed += 1;
                }
                Err(e) => {
                    warn!(id = %txn.id, error = %e, "cannot replay expense");
                    summary.skipped += 1;
                }
            }
        }

        info!(
            replayed = summary.replayed,
            skipped = summary.skipped,
            "journal replay finished"
        );
        Ok(summary)
    }
}

fn validate_amount(amount: Money) -> SipadiResult<()> {
    if !amount.is_positive() {
        return Err(SipadiError::Validation(format!(
            "Amount must be greater than zero (got {})",
            amount
        )));
    }
    if amount > Money::MAX_INPUT {
        return Err(SipadiError::Validation(format!(
            "Amount must not exceed {} (got {})",
            Money::MAX_INPUT,
            amount
        )));
    }
    Ok(())
}
