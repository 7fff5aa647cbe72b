//! Per-owner ledger files
//!
//! A `Book` is one owner's income, expense and journal tables. Everything an
//! owner records goes through their book; nothing reads across books.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::paths::SipadiPaths;
use crate::error::{SipadiError, SipadiResult};
use crate::models::{
    ExpenseTransaction, IncomeTransaction, JournalLine, Owner, Transaction, TransactionKind,
};

use super::csv_io::{append_records, file_len, read_records, truncate_to};

/// One owner's transaction store
#[derive(Debug, Clone)]
pub struct Book {
    owner: Owner,
    income_path: PathBuf,
    expense_path: PathBuf,
    journal_path: PathBuf,
}

impl Book {
    /// Open the book for an owner (files are created on first write)
    pub fn new(paths: &SipadiPaths, owner: Owner) -> Self {
        Self {
            income_path: paths.transactions_file(TransactionKind::Income, &owner),
            expense_path: paths.transactions_file(TransactionKind::Expense, &owner),
            journal_path: paths.journal_file(&owner),
            owner,
        }
    }

    /// The owner this book belongs to
    pub fn owner(&self) -> &Owner {
        &self.owner
    }

    /// Path of the income, expense or journal table
    pub fn transactions_path(&self, kind: TransactionKind) -> &Path {
        match kind {
            TransactionKind::Income => &self.income_path,
            TransactionKind::Expense => &self.expense_path,
        }
    }

    pub fn journal_path(&self) -> &Path {
        &self.journal_path
    }

    /// Append an income record
    pub fn append_income(&self, record: &IncomeTransaction) -> SipadiResult<()> {
        self.check_owner(&record.owner)?;
        append_records(&self.income_path, std::slice::from_ref(record))
    }

    /// Append an expense record
    pub fn append_expense(&self, record: &ExpenseTransaction) -> SipadiResult<()> {
        self.check_owner(&record.owner)?;
        append_records(&self.expense_path, std::slice::from_ref(record))
    }

    /// Append journal lines
    pub fn append_journal_lines(&self, lines: &[JournalLine]) -> SipadiResult<()> {
        append_records(&self.journal_path, lines)
    }

    /// Write an income record and its journal pair as one operation
    ///
    /// If the journal write fails, both files are cut back to their previous
    /// length and the journal error is returned.
    pub fn post_income(&self, record: &IncomeTransaction, pair: &[JournalLine]) -> SipadiResult<()> {
        self.check_owner(&record.owner)?;
        self.post(&self.income_path, pair, || self.append_income(record))?;
        info!(owner = %self.owner, id = %record.id, amount = %record.amount, "posted income");
        Ok(())
    }

    /// Write an expense record and its journal pair as one operation
    pub fn post_expense(
        &self,
        record: &ExpenseTransaction,
        pair: &[JournalLine],
    ) -> SipadiResult<()> {
        self.check_owner(&record.owner)?;
        self.post(&self.expense_path, pair, || self.append_expense(record))?;
        info!(owner = %self.owner, id = %record.id, amount = %record.amount, "posted expense");
        Ok(())
    }

    fn post<F>(&self, txn_path: &Path, pair: &[JournalLine], write_txn: F) -> SipadiResult<()>
    where
        F: FnOnce() -> SipadiResult<()>,
    {
        let txn_len = file_len(txn_path)?;
        let journal_len = file_len(&self.journal_path)?;

        write_txn()?;

        if let Err(err) = self.append_journal_lines(pair) {
            warn!(
                owner = %self.owner,
                error = %err,
                "journal write failed, rolling back transaction"
            );
            if let Err(rollback) = truncate_to(txn_path, txn_len) {
                warn!(path = %txn_path.display(), error = %rollback, "rollback failed");
            }
            if let Err(rollback) = truncate_to(&self.journal_path, journal_len) {
                warn!(path = %self.journal_path.display(), error = %rollback, "rollback failed");
            }
            return Err(err);
        }

        Ok(())
    }

    /// All readable income records
    pub fn load_income(&self) -> SipadiResult<Vec<IncomeTransaction>> {
        let records: Vec<IncomeTransaction> = read_records(&self.income_path)?;
        Ok(self.own_rows(records, |r| &r.owner))
    }

    /// All readable expense records
    pub fn load_expenses(&self) -> SipadiResult<Vec<ExpenseTransaction>> {
        let records: Vec<ExpenseTransaction> = read_records(&self.expense_path)?;
        Ok(self.own_rows(records, |r| &r.owner))
    }

    /// All records of one kind
    pub fn load_transactions(&self, kind: TransactionKind) -> SipadiResult<Vec<Transaction>> {
        Ok(match kind {
            TransactionKind::Income => self
                .load_income()?
                .into_iter()
                .map(Transaction::from)
                .collect(),
            TransactionKind::Expense => self
                .load_expenses()?
                .into_iter()
                .map(Transaction::from)
                .collect(),
        })
    }

    /// All readable journal lines in stored order
    pub fn load_journal_lines(&self) -> SipadiResult<Vec<JournalLine>> {
        read_records(&self.journal_path)
    }

    fn check_owner(&self, owner: &Owner) -> SipadiResult<()> {
        if owner != &self.owner {
            return Err(SipadiError::Validation(format!(
                "Record belongs to '{}', not '{}'",
                owner, self.owner
            )));
        }
        Ok(())
    }

    fn own_rows<T, F>(&self, records: Vec<T>, owner_of: F) -> Vec<T>
    where
        F: Fn(&T) -> &Owner,
    {
        let total = records.len();
        let own: Vec<T> = records
            .into_iter()
            .filter(|r| owner_of(r) == &self.owner)
            .collect();
        if own.len() != total {
            debug!(
                owner = %self.owner,
                skipped = total - own.len(),
                "ignoring rows recorded for another owner"
            );
        }
        own
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ExpenseMethod, ExpenseSubcategory, IncomeMethod, IncomeSource, Money,
    };
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Book) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SipadiPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        let book = Book::new(&paths, Owner::parse("budi").unwrap());
        (temp_dir, book)
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    fn income(book: &Book) -> IncomeTransaction {
        IncomeTransaction::new(
            book.owner().clone(),
            date(),
            IncomeSource::RiceSale,
            Money::from_units(100_000),
            IncomeMethod::Cash,
        )
    }

    fn pair(id: crate::models::TransactionId) -> Vec<JournalLine> {
        vec![
            JournalLine::debit(date(), "Cash", Money::from_units(100_000), "Penjualan Padi")
                .for_transaction(id),
            JournalLine::credit(date(), "Revenue", Money::from_units(100_000), "Penjualan Padi")
                .for_transaction(id),
        ]
    }

    #[test]
    fn test_empty_book_loads_empty() {
        let (_temp, book) = setup();
        assert!(book.load_income().unwrap().is_empty());
        assert!(book.load_expenses().unwrap().is_empty());
        assert!(book.load_journal_lines().unwrap().is_empty());
    }

    #[test]
    fn test_post_income_writes_both_tables() {
        let (_temp, book) = setup();
        let txn = income(&book).with_note("panen");
        book.post_income(&txn, &pair(txn.id)).unwrap();

        let loaded = book.load_income().unwrap();
        assert_eq!(loaded, vec![txn.clone()]);

        let lines = book.load_journal_lines().unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.transaction_id == Some(txn.id)));
        assert_eq!(lines[0].date, Some(date()));
    }

    #[test]
    fn test_expense_round_trip() {
        let (_temp, book) = setup();
        let txn = ExpenseTransaction::new(
            book.owner().clone(),
            date(),
            ExpenseSubcategory::DailyWage,
            Money::from_units(75_000),
            ExpenseMethod::Payable,
        )
        .with_note("tanam");
        book.append_expense(&txn).unwrap();

        let loaded = book.load_transactions(TransactionKind::Expense).unwrap();
        assert_eq!(loaded, vec![Transaction::Expense(txn)]);
    }

    #[test]
    fn test_failed_journal_write_rolls_back() {
        let (_temp, book) = setup();
        let first = income(&book);
        book.post_income(&first, &pair(first.id)).unwrap();

        // A directory where the journal file should be makes the append fail
        std::fs::remove_file(book.journal_path()).unwrap();
        std::fs::create_dir(book.journal_path()).unwrap();

        let second = income(&book);
        assert!(book.post_income(&second, &pair(second.id)).is_err());

        let loaded = book.load_income().unwrap();
        assert_eq!(loaded, vec![first]);
    }

    #[test]
    fn test_rejects_foreign_owner() {
        let (_temp, book) = setup();
        let mut txn = income(&book);
        txn.owner = Owner::parse("siti").unwrap();
        assert!(book.append_income(&txn).unwrap_err().is_validation());
        assert!(book.load_income().unwrap().is_empty());
    }

    #[test]
    fn test_unreadable_date_loads_as_missing() {
        let (_temp, book) = setup();
        let txn = income(&book);
        book.append_income(&txn).unwrap();

        let content = std::fs::read_to_string(book.transactions_path(TransactionKind::Income))
            .unwrap()
            .replace("2024-05-01 00:00:00", "besok");
        std::fs::write(book.transactions_path(TransactionKind::Income), content).unwrap();

        let loaded = book.load_income().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].date, None);
    }
}
