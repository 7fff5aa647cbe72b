//! General Ledger
//!
//! Groups journal lines by account, orders each account's lines by date and
//! carries a running balance (`debit - credit`) through them.

use std::collections::BTreeMap;
use std::io::Write;

use chrono::NaiveDate;
use serde::Serialize;

use crate::display::report::{format_title, separator, truncate, REPORT_WIDTH};
use crate::error::SipadiResult;
use crate::models::{AccountClass, ChartOfAccounts, DateRange, JournalLine, Money};
use crate::storage::Book;

use super::{export_error, in_range};

/// One posted line within an account, with the balance after it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerEntry {
    pub date: NaiveDate,
    pub description: String,
    pub debit: Money,
    pub credit: Money,
    /// Cumulative `debit - credit` up to and including this entry
    pub balance: Money,
}

/// All entries of one account
#[derive(Debug, Clone, Serialize)]
pub struct AccountLedger {
    pub account: String,
    pub class: AccountClass,
    pub entries: Vec<LedgerEntry>,
    pub total_debit: Money,
    pub total_credit: Money,
    /// Final running balance
    pub balance: Money,
}

impl AccountLedger {
    fn new(account: &str, class: AccountClass) -> Self {
        Self {
            account: account.to_string(),
            class,
            entries: Vec::new(),
            total_debit: Money::zero(),
            total_credit: Money::zero(),
            balance: Money::zero(),
        }
    }

    fn post(&mut self, date: NaiveDate, line: &JournalLine) {
        self.total_debit += line.debit;
        self.total_credit += line.credit;
        self.balance += line.net();
        self.entries.push(LedgerEntry {
            date,
            description: line.description.clone(),
            debit: line.debit,
            credit: line.credit,
            balance: self.balance,
        });
    }
}

/// Account name -> account ledger, ordered by account name
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct GeneralLedger {
    accounts: BTreeMap<String, AccountLedger>,
}

impl GeneralLedger {
    /// Build the ledger of an owner's journal for a period
    pub fn generate(book: &Book, range: DateRange, chart: &ChartOfAccounts) -> SipadiResult<Self> {
        let lines: Vec<JournalLine> = book
            .load_journal_lines()?
            .into_iter()
            .filter(|line| in_range(line, &range))
            .collect();
        Ok(build_ledger(&lines, chart))
    }

    pub fn get(&self, account: &str) -> Option<&AccountLedger> {
        self.accounts.get(account)
    }

    /// Accounts in name order
    pub fn accounts(&self) -> impl Iterator<Item = &AccountLedger> {
        self.accounts.values()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Format the ledger for terminal display
    pub fn format_terminal(&self, range: &DateRange) -> String {
        let mut output = format_title("General Ledger", range);

        if self.is_empty() {
            output.push_str("No journal entries in this period.\n");
            return output;
        }

        for ledger in self.accounts() {
            output.push_str(&format!("\n{} ({})\n", ledger.account, ledger.class));
            output.push_str(&format!(
                "{:<10} {:<22} {:>12} {:>12} {:>12}\n",
                "Date", "Description", "Debit", "Credit", "Balance"
            ));
            output.push_str(&separator(REPORT_WIDTH));
            output.push('\n');

            for entry in &ledger.entries {
                output.push_str(&format!(
                    "{:<10} {:<22} {:>12} {:>12} {:>12}\n",
                    entry.date.format("%Y-%m-%d"),
                    truncate(&entry.description, 22),
                    entry.debit,
                    entry.credit,
                    entry.balance
                ));
            }

            output.push_str(&format!(
                "{:<33} {:>12} {:>12} {:>12}\n",
                "Total", ledger.total_debit, ledger.total_credit, ledger.balance
            ));
        }

        output
    }

    /// Export the ledger to CSV, one row per entry
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> SipadiResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record([
            "Account",
            "Class",
            "Date",
            "Description",
            "Debit",
            "Credit",
            "Balance",
        ])
        .map_err(export_error)?;

        for ledger in self.accounts() {
            for entry in &ledger.entries {
                csv.write_record([
                    ledger.account.clone(),
                    ledger.class.to_string(),
                    entry.date.format("%Y-%m-%d").to_string(),
                    entry.description.clone(),
                    entry.debit.units().to_string(),
                    entry.credit.units().to_string(),
                    entry.balance.units().to_string(),
                ])
                .map_err(export_error)?;
            }
        }

        csv.flush().map_err(export_error)?;
        Ok(())
    }
}

/// Group journal lines by account with running balances
///
/// Within an account, entries are ordered by date; lines sharing a date keep
/// their input order. Lines without a readable date are left out.
pub fn build_ledger(lines: &[JournalLine], chart: &ChartOfAccounts) -> GeneralLedger {
    let mut grouped: BTreeMap<&str, Vec<(NaiveDate, &JournalLine)>> = BTreeMap::new();
    for line in lines {
        if let Some(date) = line.date {
            grouped
                .entry(line.account.as_str())
                .or_default()
                .push((date, line));
        }
    }

    let accounts = grouped
        .into_iter()
        .map(|(account, mut dated)| {
            // stable: same-day lines stay in posting order
            dated.sort_by_key(|(date, _)| *date);

            let mut ledger = AccountLedger::new(account, chart.classify(account));
            for (date, line) in dated {
                ledger.post(date, line);
            }
            (account.to_string(), ledger)
        })
        .collect();

    GeneralLedger { accounts }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    fn rp(units: i64) -> Money {
        Money::from_units(units)
    }

    #[test]
    fn test_empty_input() {
        let ledger = build_ledger(&[], &ChartOfAccounts::standard());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_running_balance_in_date_order() {
        let lines = vec![
            JournalLine::debit(date(5), "Cash", rp(100_000), "jual"),
            JournalLine::credit(date(2), "Cash", rp(30_000), "bibit"),
            JournalLine::debit(date(9), "Cash", rp(10_000), "jual lagi"),
        ];
        let ledger = build_ledger(&lines, &ChartOfAccounts::standard());
        let cash = ledger.get("Cash").unwrap();

        let dates: Vec<_> = cash.entries.iter().map(|e| e.date).collect();
        assert_eq!(dates, vec![date(2), date(5), date(9)]);

        let balances: Vec<_> = cash.entries.iter().map(|e| e.balance.units()).collect();
        assert_eq!(balances, vec![-30_000, 70_000, 80_000]);

        assert_eq!(cash.total_debit, rp(110_000));
        assert_eq!(cash.total_credit, rp(30_000));
        assert_eq!(cash.balance, rp(80_000));
        assert_eq!(cash.class, AccountClass::Asset);
    }

    #[test]
    fn test_same_day_keeps_input_order() {
        let lines = vec![
            JournalLine::debit(date(3), "Bank", rp(1), "first"),
            JournalLine::debit(date(1), "Bank", rp(2), "earlier"),
            JournalLine::debit(date(3), "Bank", rp(3), "second"),
        ];
        let ledger = build_ledger(&lines, &ChartOfAccounts::standard());
        let descriptions: Vec<_> = ledger
            .get("Bank")
            .unwrap()
            .entries
            .iter()
            .map(|e| e.description.as_str())
            .collect();
        assert_eq!(descriptions, vec!["earlier", "first", "second"]);
    }

    #[test]
    fn test_undated_lines_excluded() {
        let mut undated = JournalLine::debit(date(1), "Urea", rp(5_000), "");
        undated.date = None;
        let lines = vec![undated, JournalLine::credit(date(1), "Cash", rp(5_000), "")];

        let ledger = build_ledger(&lines, &ChartOfAccounts::standard());
        assert!(ledger.get("Urea").is_none());
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_groups_by_account() {
        let lines = vec![
            JournalLine::debit(date(1), "Cash", rp(100_000), "Penjualan Padi"),
            JournalLine::credit(date(1), "Revenue", rp(100_000), "Penjualan Padi"),
            JournalLine::debit(date(2), "Urea", rp(50_000), ""),
            JournalLine::credit(date(2), "Cash", rp(50_000), ""),
        ];
        let ledger = build_ledger(&lines, &ChartOfAccounts::standard());

        let names: Vec<_> = ledger.accounts().map(|a| a.account.as_str()).collect();
        assert_eq!(names, vec!["Cash", "Revenue", "Urea"]);
        assert_eq!(ledger.get("Cash").unwrap().balance, rp(50_000));
        assert_eq!(ledger.get("Revenue").unwrap().balance, rp(-100_000));
        assert_eq!(ledger.get("Urea").unwrap().class, AccountClass::Expense);
    }

    #[test]
    fn test_receivable_settled_in_ledger() {
        use crate::models::{IncomeMethod, IncomeSource, IncomeTransaction, Owner};
        use crate::services::income_entry;

        let owner = Owner::parse("budi").unwrap();
        let sale = |d, method| {
            IncomeTransaction::new(
                owner.clone(),
                date(d),
                IncomeSource::RiceSale,
                rp(20_000),
                method,
            )
        };
        let mut lines = income_entry(&sale(4, IncomeMethod::Receivable)).unwrap().to_vec();
        lines.extend(income_entry(&sale(10, IncomeMethod::ReceivablePayment)).unwrap());

        let ledger = build_ledger(&lines, &ChartOfAccounts::standard());
        let receivable = ledger.get("AccountsReceivable").unwrap();

        let rows: Vec<_> = receivable
            .entries
            .iter()
            .map(|e| (e.date, e.debit.units(), e.credit.units(), e.balance.units()))
            .collect();
        assert_eq!(
            rows,
            vec![(date(4), 20_000, 0, 20_000), (date(10), 0, 20_000, 0)]
        );
        assert!(receivable.balance.is_zero());
        assert_eq!(ledger.get("Cash").unwrap().balance, rp(20_000));
    }

    #[test]
    fn test_appending_a_line_extends_balances() {
        let chart = ChartOfAccounts::standard();
        let mut lines = vec![
            JournalLine::debit(date(1), "Cash", rp(100_000), "jual"),
            JournalLine::credit(date(3), "Cash", rp(40_000), "pupuk"),
        ];
        let before = build_ledger(&lines, &chart);

        lines.push(JournalLine::debit(date(7), "Cash", rp(15_000), "jual lagi"));
        let after = build_ledger(&lines, &chart);

        let before_cash = before.get("Cash").unwrap();
        let after_cash = after.get("Cash").unwrap();
        assert_eq!(
            &after_cash.entries[..before_cash.entries.len()],
            &before_cash.entries[..]
        );
        let last = after_cash.entries.last().unwrap();
        assert_eq!(last.balance, before_cash.balance + rp(15_000));
        assert_eq!(after_cash.balance, rp(75_000));

        // Same input, same ledger
        let again = build_ledger(&lines, &chart);
        assert_eq!(again.get("Cash").unwrap().entries, after_cash.entries);
    }

    #[test]
    fn test_export_csv() {
        let lines = vec![JournalLine::debit(date(1), "Cash", rp(100_000), "jual, panen")];
        let ledger = build_ledger(&lines, &ChartOfAccounts::standard());

        let mut out = Vec::new();
        ledger.export_csv(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Account,Class,Date,Description,Debit,Credit,Balance\n"));
        assert!(text.contains("Cash,Asset,2024-05-01,\"jual, panen\",100000,0,100000"));
    }
}
