//! Balance Sheet
//!
//! Assets and liabilities from the period's journal lines, with equity equal
//! to the period's net income.

use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;

use crate::display::report::{format_title, separator, REPORT_WIDTH};
use crate::error::SipadiResult;
use crate::models::{AccountClass, ChartOfAccounts, DateRange, JournalLine, Money};
use crate::storage::Book;

use super::income_statement::IncomeStatement;
use super::{export_error, in_range, AccountAmount};

/// Balance sheet for a period
#[derive(Debug, Clone, Serialize)]
pub struct BalanceSheet {
    pub range: DateRange,
    /// Σ debit − Σ credit over asset accounts
    pub assets: Money,
    /// Σ credit − Σ debit over liability accounts
    pub liabilities: Money,
    /// Net income of the same period
    pub equity: Money,
    pub asset_accounts: Vec<AccountAmount>,
    pub liability_accounts: Vec<AccountAmount>,
}

impl BalanceSheet {
    /// Generate the balance sheet from an owner's journal
    pub fn generate(book: &Book, range: DateRange, chart: &ChartOfAccounts) -> SipadiResult<Self> {
        let lines = book.load_journal_lines()?;
        Ok(Self::compute(&lines, range, chart))
    }

    /// Compute the balance sheet from journal lines
    pub fn compute(lines: &[JournalLine], range: DateRange, chart: &ChartOfAccounts) -> Self {
        let mut assets: BTreeMap<&str, Money> = BTreeMap::new();
        let mut liabilities: BTreeMap<&str, Money> = BTreeMap::new();

        for line in lines.iter().filter(|line| in_range(line, &range)) {
            match chart.classify(&line.account) {
                AccountClass::Asset => {
                    *assets.entry(line.account.as_str()).or_default() += line.debit - line.credit;
                }
                AccountClass::Liability => {
                    *liabilities.entry(line.account.as_str()).or_default() +=
                        line.credit - line.debit;
                }
                _ => {}
            }
        }

        let asset_accounts = AccountAmount::from_map(assets);
        let liability_accounts = AccountAmount::from_map(liabilities);

        Self {
            range,
            assets: asset_accounts.iter().map(|a| a.amount).sum(),
            liabilities: liability_accounts.iter().map(|a| a.amount).sum(),
            equity: IncomeStatement::compute(lines, range, chart).net_income,
            asset_accounts,
            liability_accounts,
        }
    }

    /// Whether assets equal liabilities plus equity
    pub fn is_balanced(&self) -> bool {
        self.assets == self.liabilities + self.equity
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = format_title("Balance Sheet", &self.range);

        output.push_str("Assets\n");
        for row in &self.asset_accounts {
            output.push_str(&format!("  {:<40} {:>18}\n", row.account, row.amount));
        }
        output.push_str(&format!("{:<42} {:>18}\n\n", "Total Assets", self.assets));

        output.push_str("Liabilities\n");
        for row in &self.liability_accounts {
            output.push_str(&format!("  {:<40} {:>18}\n", row.account, row.amount));
        }
        output.push_str(&format!(
            "{:<42} {:>18}\n\n",
            "Total Liabilities", self.liabilities
        ));

        output.push_str(&format!("{:<42} {:>18}\n", "Equity (net income)", self.equity));
        output.push_str(&separator(REPORT_WIDTH));
        output.push('\n');
        output.push_str(&format!(
            "{:<42} {:>18}\n",
            "Liabilities + Equity",
            self.liabilities + self.equity
        ));
        if !self.is_balanced() {
            output.push_str("\nWarning: assets do not equal liabilities + equity\n");
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> SipadiResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["Section", "Account", "Amount"])
            .map_err(export_error)?;

        let rows = self
            .asset_accounts
            .iter()
            .map(|row| ("Asset", row))
            .chain(self.liability_accounts.iter().map(|row| ("Liability", row)));
        for (section, row) in rows {
            csv.write_record([
                section,
                row.account.as_str(),
                row.amount.units().to_string().as_str(),
            ])
            .map_err(export_error)?;
        }

        for (label, amount) in [
            ("Total Assets", self.assets),
            ("Total Liabilities", self.liabilities),
            ("Equity", self.equity),
        ] {
            csv.write_record(["Summary", label, amount.units().to_string().as_str()])
                .map_err(export_error)?;
        }

        csv.flush().map_err(export_error)?;
        Ok(())
    }
}
