//! Expense CLI commands
//!
//! Record expenses against the catalog and list what has been recorded.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_expense_catalog, format_expense_recorded, format_expense_register};
use crate::error::{SipadiError, SipadiResult};
use crate::models::{ExpenseCategory, ExpenseMethod, ExpenseSubcategory};
use crate::services::{RecordExpenseInput, TransactionService};
use crate::storage::Storage;

use super::{parse_amount, parse_date, posting_failed, require_session, resolve_range, today};

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record an expense
    Add {
        /// Amount in Rupiah (e.g. "50000" or "50.000")
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Expense category (see `sipadi expense categories`)
        #[arg(short, long)]
        category: String,

        /// Sub-category within the category
        #[arg(short = 'i', long)]
        subcategory: String,

        /// cash, transfer, payable or payable-payment
        #[arg(short, long, default_value = "cash")]
        method: String,

        /// Transaction date (defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Free-text note, also used as the journal description
        #[arg(short, long)]
        note: Option<String>,
    },

    /// List recorded expenses
    List {
        /// Start date
        #[arg(short, long)]
        start: Option<String>,

        /// End date
        #[arg(short, long)]
        end: Option<String>,
    },

    /// Show expense categories, sub-categories and payment methods
    Categories,
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> SipadiResult<()> {
    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            subcategory,
            method,
            date,
            note,
        } => {
            let session = require_session(storage)?;

            let category_value = ExpenseCategory::parse(&category).ok_or_else(|| {
                SipadiError::Validation(format!(
                    "Unknown expense category: '{}'. Run 'sipadi expense categories'",
                    category
                ))
            })?;
            let subcategory_value = ExpenseSubcategory::parse_in(category_value, &subcategory)
                .ok_or_else(|| {
                    SipadiError::Validation(format!(
                        "'{}' is not a sub-category of '{}'",
                        subcategory, category_value
                    ))
                })?;

            let input = RecordExpenseInput {
                date: match date {
                    Some(d) => parse_date(&d, settings)?,
                    None => today(),
                },
                category: category_value,
                subcategory: subcategory_value,
                amount: parse_amount(&amount)?,
                method: ExpenseMethod::parse(&method).ok_or_else(|| {
                    SipadiError::Validation(format!("Unknown expense method: '{}'", method))
                })?,
                note,
            };

            let txn = TransactionService::new(storage, &session)
                .record_expense(input)
                .map_err(posting_failed)?;
            println!("{}", format_expense_recorded(&txn));
        }

        ExpenseCommands::List { start, end } => {
            let session = require_session(storage)?;
            let range = resolve_range(start.as_deref(), end.as_deref(), settings, today())?;

            let records = TransactionService::new(storage, &session).list_expenses(range)?;
            println!("Expenses for {} ({})\n", session.owner, range);
            print!("{}", format_expense_register(&records));
        }

        ExpenseCommands::Categories => {
            print!("{}", format_expense_catalog());
        }
    }

    Ok(())
}
