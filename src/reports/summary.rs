//! Summary Report
//!
//! Income and expense totals for a period, taken from the transaction
//! records themselves rather than the journal.

use std::io::Write;

use serde::Serialize;

use crate::display::report::{format_bar, format_percentage, format_title};
use crate::error::SipadiResult;
use crate::models::{DateRange, ExpenseTransaction, IncomeTransaction, Money};
use crate::storage::Book;

use super::export_error;

const BAR_WIDTH: usize = 30;

/// Income and expense totals for a period
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub range: DateRange,
    pub total_income: Money,
    pub total_expense: Money,
    /// `total_income - total_expense`
    pub net: Money,
    pub income_count: usize,
    pub expense_count: usize,
}

impl Summary {
    /// Generate the summary from an owner's transaction records
    pub fn generate(book: &Book, range: DateRange) -> SipadiResult<Self> {
        let income = book.load_income()?;
        let expenses = book.load_expenses()?;
        Ok(Self::compute(&income, &expenses, range))
    }

    /// Compute the summary from transaction records
    pub fn compute(
        income: &[IncomeTransaction],
        expenses: &[ExpenseTransaction],
        range: DateRange,
    ) -> Self {
        let income: Vec<Money> = income
            .iter()
            .filter(|txn| range.contains(txn.date))
            .map(|txn| txn.amount)
            .collect();
        let expenses: Vec<Money> = expenses
            .iter()
            .filter(|txn| range.contains(txn.date))
            .map(|txn| txn.amount)
            .collect();

        let total_income: Money = income.iter().sum();
        let total_expense: Money = expenses.iter().sum();

        Self {
            range,
            total_income,
            total_expense,
            net: total_income - total_expense,
            income_count: income.len(),
            expense_count: expenses.len(),
        }
    }

    /// Income as a percentage of all money moved; 0 when nothing moved
    pub fn income_share(&self) -> f64 {
        share(self.total_income, self.total_income + self.total_expense)
    }

    /// Expense as a percentage of all money moved; 0 when nothing moved
    pub fn expense_share(&self) -> f64 {
        share(self.total_expense, self.total_income + self.total_expense)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = format_title("Summary", &self.range);

        output.push_str(&format!(
            "Total Income:  {:>18}  ({} records)\n",
            self.total_income, self.income_count
        ));
        output.push_str(&format!(
            "Total Expense: {:>18}  ({} records)\n",
            self.total_expense, self.expense_count
        ));
        output.push_str(&format!("Net:           {:>18}\n\n", self.net));

        if self.income_count + self.expense_count > 0 {
            output.push_str(&format!(
                "Income  {} {:>6}\n",
                format_bar(self.income_share(), 100.0, BAR_WIDTH),
                format_percentage(self.income_share())
            ));
            output.push_str(&format!(
                "Expense {} {:>6}\n",
                format_bar(self.expense_share(), 100.0, BAR_WIDTH),
                format_percentage(self.expense_share())
            ));
        } else {
            output.push_str("No transactions in this period.\n");
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> SipadiResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["Metric", "Amount", "Count"])
            .map_err(export_error)?;

        let rows = [
            ("Total Income", self.total_income, self.income_count.to_string()),
            ("Total Expense", self.total_expense, self.expense_count.to_string()),
            ("Net", self.net, String::new()),
        ];
        for (label, amount, count) in rows {
            csv.write_record([label, amount.units().to_string().as_str(), count.as_str()])
                .map_err(export_error)?;
        }

        csv.flush().map_err(export_error)?;
        Ok(())
    }
}

fn share(part: Money, whole: Money) -> f64 {
    if whole.is_positive() {
        part.units() as f64 / whole.units() as f64 * 100.0
    } else {
        0.0
    }
}
