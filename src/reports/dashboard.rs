//! Home dashboard
//!
//! All-time totals for the logged-in owner, independent of any report period.

use chrono::NaiveDate;
use serde::Serialize;

use crate::display::report::{double_separator, format_date};
use crate::error::SipadiResult;
use crate::models::{DateRange, Money, Owner};
use crate::storage::Book;

use super::summary::Summary;

/// All-time totals
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub owner: Owner,
    pub total_income: Money,
    pub total_expense: Money,
    pub net: Money,
    pub transaction_count: usize,
    /// Most recent dated transaction
    pub last_activity: Option<NaiveDate>,
}

impl Dashboard {
    /// Generate the dashboard for a book
    pub fn generate(book: &Book) -> SipadiResult<Self> {
        let income = book.load_income()?;
        let expenses = book.load_expenses()?;
        let summary = Summary::compute(&income, &expenses, DateRange::all_time());

        let last_activity = income
            .iter()
            .filter_map(|txn| txn.date)
            .chain(expenses.iter().filter_map(|txn| txn.date))
            .max();

        Ok(Self {
            owner: book.owner().clone(),
            total_income: summary.total_income,
            total_expense: summary.total_expense,
            net: summary.net,
            transaction_count: summary.income_count + summary.expense_count,
            last_activity,
        })
    }

    /// Format the dashboard for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("SiPadi: {}\n", self.owner));
        output.push_str(&double_separator(40));
        output.push('\n');
        output.push_str(&format!("Total Income:  {:>22}\n", self.total_income));
        output.push_str(&format!("Total Expense: {:>22}\n", self.total_expense));
        output.push_str(&format!("Net:           {:>22}\n", self.net));
        output.push_str(&format!(
            "\n{} transactions, last on {}\n",
            self.transaction_count,
            format_date(self.last_activity)
        ));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SipadiPaths;
    use crate::models::{IncomeMethod, IncomeSource, IncomeTransaction};
    use tempfile::TempDir;

    #[test]
    fn test_all_time_totals() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SipadiPaths::with_base_dir(temp_dir.path().to_path_buf());
        let book = Book::new(&paths, Owner::parse("budi").unwrap());

        for (year, amount) in [(2019, 10_000), (2024, 90_000)] {
            let txn = IncomeTransaction::new(
                book.owner().clone(),
                NaiveDate::from_ymd_opt(year, 1, 15).unwrap(),
                IncomeSource::Other,
                Money::from_units(amount),
                IncomeMethod::Cash,
            );
            book.append_income(&txn).unwrap();
        }

        let dashboard = Dashboard::generate(&book).unwrap();
        assert_eq!(dashboard.total_income.units(), 100_000);
        assert_eq!(dashboard.net.units(), 100_000);
        assert_eq!(dashboard.transaction_count, 2);
        assert_eq!(dashboard.last_activity, NaiveDate::from_ymd_opt(2024, 1, 15));
    }

    #[test]
    fn test_empty_book() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SipadiPaths::with_base_dir(temp_dir.path().to_path_buf());
        let book = Book::new(&paths, Owner::parse("siti").unwrap());

        let dashboard = Dashboard::generate(&book).unwrap();
        assert!(dashboard.total_income.is_zero());
        assert!(dashboard.last_activity.is_none());
        assert!(dashboard.format_terminal().contains("last on -"));
    }
}
