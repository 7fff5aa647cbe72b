//! General Journal
//!
//! The period's journal lines in the order they were posted.

use std::io::Write;

use serde::Serialize;

use crate::display::report::{format_date, format_title, separator, truncate, REPORT_WIDTH};
use crate::error::SipadiResult;
use crate::models::{DateRange, JournalLine, Money};
use crate::storage::Book;

use super::{export_error, in_range};

/// Journal lines of a period with their totals
#[derive(Debug, Clone, Serialize)]
pub struct GeneralJournal {
    pub range: DateRange,
    pub lines: Vec<JournalLine>,
    pub total_debit: Money,
    pub total_credit: Money,
}

impl GeneralJournal {
    /// Generate the journal view from an owner's book
    pub fn generate(book: &Book, range: DateRange) -> SipadiResult<Self> {
        let lines = book.load_journal_lines()?;
        Ok(Self::compute(&lines, range))
    }

    /// Select the lines in range, keeping stored order
    pub fn compute(lines: &[JournalLine], range: DateRange) -> Self {
        let lines: Vec<JournalLine> = lines
            .iter()
            .filter(|line| in_range(line, &range))
            .cloned()
            .collect();

        Self {
            range,
            total_debit: lines.iter().map(|l| l.debit).sum(),
            total_credit: lines.iter().map(|l| l.credit).sum(),
            lines,
        }
    }

    /// Whether total debits equal total credits
    pub fn is_balanced(&self) -> bool {
        self.total_debit == self.total_credit
    }

    /// Format the journal for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = format_title("General Journal", &self.range);

        if self.lines.is_empty() {
            output.push_str("No journal entries in this period.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<10} {:<18} {:<14} {:>12} {:>12}\n",
            "Date", "Account", "Description", "Debit", "Credit"
        ));
        output.push_str(&separator(REPORT_WIDTH));
        output.push('\n');

        for line in &self.lines {
            output.push_str(&format!(
                "{:<10} {:<18} {:<14} {:>12} {:>12}\n",
                format_date(line.date),
                truncate(&line.account, 18),
                truncate(&line.description, 14),
                line.debit,
                line.credit
            ));
        }

        output.push_str(&separator(REPORT_WIDTH));
        output.push('\n');
        output.push_str(&format!(
            "{:<44} {:>12} {:>12}\n",
            "Total", self.total_debit, self.total_credit
        ));

        output
    }

    /// Export the journal to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> SipadiResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["Date", "Account", "Description", "Debit", "Credit", "TransactionId"])
            .map_err(export_error)?;

        for line in &self.lines {
            csv.write_record([
                format_date(line.date),
                line.account.clone(),
                line.description.clone(),
                line.debit.units().to_string(),
                line.credit.units().to_string(),
                line.transaction_id
                    .map(|id| id.as_uuid().to_string())
                    .unwrap_or_default(),
            ])
            .map_err(export_error)?;
        }

        csv.flush().map_err(export_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    fn rp(units: i64) -> Money {
        Money::from_units(units)
    }

    #[test]
    fn test_keeps_stored_order_and_totals() {
        let lines = vec![
            JournalLine::debit(date(9), "Cash", rp(100_000), "Penjualan Padi"),
            JournalLine::credit(date(9), "Revenue", rp(100_000), "Penjualan Padi"),
            JournalLine::debit(date(2), "Urea", rp(50_000), ""),
            JournalLine::credit(date(2), "Bank", rp(50_000), ""),
        ];
        let journal = GeneralJournal::compute(&lines, DateRange::all_time());

        let accounts: Vec<_> = journal.lines.iter().map(|l| l.account.as_str()).collect();
        assert_eq!(accounts, vec!["Cash", "Revenue", "Urea", "Bank"]);
        assert_eq!(journal.total_debit, rp(150_000));
        assert!(journal.is_balanced());
    }

    #[test]
    fn test_range_excludes_outside_and_undated() {
        let mut undated = JournalLine::debit(date(1), "Cash", rp(5), "");
        undated.date = None;
        let lines = vec![
            undated,
            JournalLine::debit(date(20), "Cash", rp(7), ""),
            JournalLine::debit(date(3), "Cash", rp(9), ""),
        ];

        let journal = GeneralJournal::compute(&lines, DateRange::new(date(1), date(10)));
        assert_eq!(journal.lines.len(), 1);
        assert_eq!(journal.total_debit, rp(9));
    }

    #[test]
    fn test_empty() {
        let journal = GeneralJournal::compute(&[], DateRange::all_time());
        assert!(journal.lines.is_empty());
        assert!(journal.format_terminal().contains("No journal entries"));
    }
}
