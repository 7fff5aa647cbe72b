//! Transaction display formatting
//!
//! Register-style listings of income and expense records.

use crate::models::{ExpenseTransaction, IncomeTransaction, Money};

use super::report::{format_date, separator, truncate};

/// Format income records as a register
pub fn format_income_register(records: &[IncomeTransaction]) -> String {
    if records.is_empty() {
        return "No income recorded in this period.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<10} {:<16} {:<18} {:>16}  {}\n",
        "Date", "Source", "Method", "Amount", "Note"
    ));
    output.push_str(&separator(76));
    output.push('\n');

    for txn in records {
        output.push_str(&format!(
            "{:<10} {:<16} {:<18} {:>16}  {}\n",
            format_date(txn.date),
            txn.source.label(),
            txn.method.to_string(),
            txn.amount,
            truncate(&txn.note, 20)
        ));
    }

    let total: Money = records.iter().map(|t| t.amount).sum();
    output.push_str(&separator(76));
    output.push('\n');
    output.push_str(&format!("{:<46} {:>16}\n", "Total", total));

    output
}

/// Format expense records as a register
pub fn format_expense_register(records: &[ExpenseTransaction]) -> String {
    if records.is_empty() {
        return "No expenses recorded in this period.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<10} {:<13} {:<12} {:<16} {:>16}  {}\n",
        "Date", "Category", "Item", "Method", "Amount", "Note"
    ));
    output.push_str(&separator(84));
    output.push('\n');

    for txn in records {
        output.push_str(&format!(
            "{:<10} {:<13} {:<12} {:<16} {:>16}  {}\n",
            format_date(txn.date),
            txn.category.label(),
            txn.subcategory.label(),
            txn.method.to_string(),
            txn.amount,
            truncate(&txn.note, 20)
        ));
    }

    let total: Money = records.iter().map(|t| t.amount).sum();
    output.push_str(&separator(84));
    output.push('\n');
    output.push_str(&format!("{:<54} {:>16}\n", "Total", total));

    output
}

/// One-line confirmation after an income is recorded
pub fn format_income_recorded(txn: &IncomeTransaction) -> String {
    format!(
        "Recorded income {} of {} from {} ({})",
        txn.id,
        txn.amount,
        txn.source,
        txn.method
    )
}

/// One-line confirmation after an expense is recorded
pub fn format_expense_recorded(txn: &ExpenseTransaction) -> String {
    format!(
        "Recorded expense {} of {} for {} / {} ({})",
        txn.id, txn.amount, txn.category, txn.subcategory, txn.method
    )
}
