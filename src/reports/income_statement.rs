//! Income Statement
//!
//! Revenue is the credit side of revenue accounts, expense the debit side of
//! expense accounts, both taken from journal lines in the period.

use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;

use crate::display::report::{format_title, separator, REPORT_WIDTH};
use crate::error::SipadiResult;
use crate::models::{AccountClass, ChartOfAccounts, DateRange, JournalLine, Money};
use crate::storage::Book;

use super::{export_error, in_range, AccountAmount};

/// Income statement for a period
#[derive(Debug, Clone, Serialize)]
pub struct IncomeStatement {
    pub range: DateRange,
    pub revenue: Money,
    pub expense: Money,
    pub net_income: Money,
    /// Revenue per account
    pub revenue_accounts: Vec<AccountAmount>,
    /// Expense per account
    pub expense_accounts: Vec<AccountAmount>,
}

impl IncomeStatement {
    /// Generate the income statement from an owner's journal
    pub fn generate(book: &Book, range: DateRange, chart: &ChartOfAccounts) -> SipadiResult<Self> {
        let lines = book.load_journal_lines()?;
        Ok(Self::compute(&lines, range, chart))
    }

    /// Compute the statement from journal lines
    pub fn compute(lines: &[JournalLine], range: DateRange, chart: &ChartOfAccounts) -> Self {
        let mut revenue: BTreeMap<&str, Money> = BTreeMap::new();
        let mut expense: BTreeMap<&str, Money> = BTreeMap::new();

        for line in lines.iter().filter(|line| in_range(line, &range)) {
            match chart.classify(&line.account) {
                AccountClass::Revenue => {
                    *revenue.entry(line.account.as_str()).or_default() += line.credit;
                }
                AccountClass::Expense => {
                    *expense.entry(line.account.as_str()).or_default() += line.debit;
                }
                _ => {}
            }
        }

        let revenue_accounts = AccountAmount::from_map(revenue);
        let expense_accounts = AccountAmount::from_map(expense);
        let revenue: Money = revenue_accounts.iter().map(|a| a.amount).sum();
        let expense: Money = expense_accounts.iter().map(|a| a.amount).sum();

        Self {
            range,
            revenue,
            expense,
            net_income: revenue - expense,
            revenue_accounts,
            expense_accounts,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = format_title("Income Statement", &self.range);

        output.push_str("Revenue\n");
        for row in &self.revenue_accounts {
            output.push_str(&format!("  {:<40} {:>18}\n", row.account, row.amount));
        }
        output.push_str(&format!("{:<42} {:>18}\n\n", "Total Revenue", self.revenue));

        output.push_str("Expenses\n");
        for row in &self.expense_accounts {
            output.push_str(&format!("  {:<40} {:>18}\n", row.account, row.amount));
        }
        output.push_str(&format!("{:<42} {:>18}\n", "Total Expenses", self.expense));

        output.push_str(&separator(REPORT_WIDTH));
        output.push('\n');
        output.push_str(&format!("{:<42} {:>18}\n", "Net Income", self.net_income));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> SipadiResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["Section", "Account", "Amount"])
            .map_err(export_error)?;

        for row in &self.revenue_accounts {
            csv.write_record([
                "Revenue",
                row.account.as_str(),
                row.amount.units().to_string().as_str(),
            ])
            .map_err(export_error)?;
        }
        for row in &self.expense_accounts {
            csv.write_record([
                "Expense",
                row.account.as_str(),
                row.amount.units().to_string().as_str(),
            ])
            .map_err(export_error)?;
        }

        for (label, amount) in [
            ("Total Revenue", self.revenue),
            ("Total Expenses", self.expense),
            ("Net Income", self.net_income),
        ] {
            csv.write_record(["Summary", label, amount.units().to_string().as_str()])
                .map_err(export_error)?;
        }

        csv.flush().map_err(export_error)?;
        Ok(())
    }
}
