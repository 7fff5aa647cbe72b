//! Catalog display formatting

use crate::models::{ExpenseCategory, ExpenseMethod, IncomeMethod, IncomeSource};

/// Income sources and the accepted payment methods
pub fn format_income_sources() -> String {
    let mut output = String::from("Income sources:\n");
    for source in IncomeSource::all() {
        output.push_str(&format!("  {}\n", source));
    }
    output.push_str("\nMethods: ");
    output.push_str(&join(IncomeMethod::all().iter().map(|m| m.to_string())));
    output.push('\n');
    output
}

/// Expense categories as a tree of their sub-categories
pub fn format_expense_catalog() -> String {
    let mut output = String::new();

    for (i, category) in ExpenseCategory::all().iter().enumerate() {
        output.push_str(&format!("{}\n", category));

        let subs = category.subcategories();
        for (j, sub) in subs.iter().enumerate() {
            let prefix = if j == subs.len() - 1 { "└── " } else { "├── " };
            output.push_str(&format!("  {}{}\n", prefix, sub));
        }

        if i < ExpenseCategory::all().len() - 1 {
            output.push('\n');
        }
    }

    output.push_str("\nMethods: ");
    output.push_str(&join(ExpenseMethod::all().iter().map(|m| m.to_string())));
    output.push('\n');
    output
}

fn join(items: impl Iterator<Item = String>) -> String {
    items.collect::<Vec<_>>().join(", ")
}
