//! Income CLI commands
//!
//! Record income and list what has been recorded.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_income_recorded, format_income_register, format_income_sources};
use crate::error::{SipadiError, SipadiResult};
use crate::models::{IncomeMethod, IncomeSource};
use crate::services::{RecordIncomeInput, TransactionService};
use crate::storage::Storage;

use super::{parse_amount, parse_date, posting_failed, require_session, resolve_range, today};

/// Income subcommands
#[derive(Subcommand, Debug)]
pub enum IncomeCommands {
    /// Record an income
    Add {
        /// Amount in Rupiah (e.g. "100000" or "100.000")
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Income source (see `sipadi income sources`)
        #[arg(short, long, default_value = "Penjualan Padi")]
        source: String,

        /// cash, transfer, receivable or receivable-payment
        #[arg(short, long, default_value = "cash")]
        method: String,

        /// Transaction date (defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Free-text note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// List recorded income
    List {
        /// Start date
        #[arg(short, long)]
        start: Option<String>,

        /// End date
        #[arg(short, long)]
        end: Option<String>,
    },

    /// Show income sources and payment methods
    Sources,
}

/// Handle an income command
pub fn handle_income_command(
    storage: &Storage,
    settings: &Settings,
    cmd: IncomeCommands,
) -> SipadiResult<()> {
    match cmd {
        IncomeCommands::Add {
            amount,
            source,
            method,
            date,
            note,
        } => {
            let session = require_session(storage)?;

            let input = RecordIncomeInput {
                date: match date {
                    Some(d) => parse_date(&d, settings)?,
                    None => today(),
                },
                source: IncomeSource::parse(&source).ok_or_else(|| {
                    SipadiError::Validation(format!(
                        "Unknown income source: '{}'. Run 'sipadi income sources'",
                        source
                    ))
                })?,
                amount: parse_amount(&amount)?,
                method: IncomeMethod::parse(&method).ok_or_else(|| {
                    SipadiError::Validation(format!("Unknown income method: '{}'", method))
                })?,
                note,
            };

            let txn = TransactionService::new(storage, &session)
                .record_income(input)
                .map_err(posting_failed)?;
            println!("{}", format_income_recorded(&txn));
        }

        IncomeCommands::List { start, end } => {
            let session = require_session(storage)?;
            let range = resolve_range(start.as_deref(), end.as_deref(), settings, today())?;

            let records = TransactionService::new(storage, &session).list_income(range)?;
            println!("Income for {} ({})\n", session.owner, range);
            print!("{}", format_income_register(&records));
        }

        IncomeCommands::Sources => {
            print!("{}", format_income_sources());
        }
    }

    Ok(())
}
