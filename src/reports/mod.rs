//! Reports module for SiPadi
//!
//! Summary, general journal, general ledger, income statement and balance
//! sheet, all for an inclusive date range, plus the all-time dashboard.
//! Each report can be computed from in-memory records or generated from an
//! owner's book.

pub mod balance_sheet;
pub mod dashboard;
pub mod general_journal;
pub mod income_statement;
pub mod ledger;
pub mod summary;

pub use balance_sheet::BalanceSheet;
pub use dashboard::Dashboard;
pub use general_journal::GeneralJournal;
pub use income_statement::IncomeStatement;
pub use ledger::{build_ledger, AccountLedger, GeneralLedger, LedgerEntry};
pub use summary::Summary;

use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;

use crate::error::{SipadiError, SipadiResult};
use crate::models::{ChartOfAccounts, DateRange, JournalLine, Money};
use crate::storage::Book;

/// An account and an amount attributed to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountAmount {
    pub account: String,
    pub amount: Money,
}

impl AccountAmount {
    fn from_map(map: BTreeMap<&str, Money>) -> Vec<Self> {
        map.into_iter()
            .map(|(account, amount)| Self {
                account: account.to_string(),
                amount,
            })
            .collect()
    }
}

/// Every report for one period
#[derive(Debug, Clone, Serialize)]
pub struct FinancialReport {
    pub summary: Summary,
    pub journal: GeneralJournal,
    pub ledger: GeneralLedger,
    pub income_statement: IncomeStatement,
    pub balance_sheet: BalanceSheet,
}

impl FinancialReport {
    /// Generate all reports, reading each file once
    pub fn generate(book: &Book, range: DateRange, chart: &ChartOfAccounts) -> SipadiResult<Self> {
        let income = book.load_income()?;
        let expenses = book.load_expenses()?;
        let lines = book.load_journal_lines()?;
        let in_period: Vec<JournalLine> = lines
            .iter()
            .filter(|line| in_range(line, &range))
            .cloned()
            .collect();

        Ok(Self {
            summary: Summary::compute(&income, &expenses, range),
            journal: GeneralJournal::compute(&lines, range),
            ledger: build_ledger(&in_period, chart),
            income_statement: IncomeStatement::compute(&lines, range, chart),
            balance_sheet: BalanceSheet::compute(&lines, range, chart),
        })
    }

    /// Format every report for terminal display
    pub fn format_terminal(&self) -> String {
        [
            self.summary.format_terminal(),
            self.journal.format_terminal(),
            self.ledger.format_terminal(&self.summary.range),
            self.income_statement.format_terminal(),
            self.balance_sheet.format_terminal(),
        ]
        .join("\n")
    }

    /// Export every report as consecutive CSV tables separated by a blank line
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> SipadiResult<()> {
        self.summary.export_csv(writer)?;
        writeln!(writer).map_err(export_error)?;
        self.journal.export_csv(writer)?;
        writeln!(writer).map_err(export_error)?;
        self.ledger.export_csv(writer)?;
        writeln!(writer).map_err(export_error)?;
        self.income_statement.export_csv(writer)?;
        writeln!(writer).map_err(export_error)?;
        self.balance_sheet.export_csv(writer)
    }
}

pub(crate) fn in_range(line: &JournalLine, range: &DateRange) -> bool {
    range.contains(line.date)
}

pub(crate) fn export_error(err: impl std::fmt::Display) -> SipadiError {
    SipadiError::Export(err.to_string())
}
