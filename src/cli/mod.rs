//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod income;
pub mod report;
pub mod user;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use income::{handle_income_command, IncomeCommands};
pub use report::{handle_report_command, OutputFormat, ReportCommands};
pub use user::{handle_login, handle_logout, handle_register, handle_whoami};

use chrono::NaiveDate;

use crate::config::settings::{DefaultRange, Settings};
use crate::error::{SipadiError, SipadiResult};
use crate::models::{DateRange, Money, Session};
use crate::services::AuthService;
use crate::storage::Storage;

/// Today's date in local time
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a date given on the command line
///
/// Tries the configured format first, then ISO `YYYY-MM-DD`.
pub fn parse_date(s: &str, settings: &Settings) -> SipadiResult<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, &settings.date_format)
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .map_err(|_| {
            SipadiError::Validation(format!(
                "Invalid date: {}. Use {} (e.g. 2024-05-01)",
                s, settings.date_format
            ))
        })
}

/// Parse an amount given on the command line
pub fn parse_amount(s: &str) -> SipadiResult<Money> {
    Money::parse(s).map_err(|e| SipadiError::Validation(format!("Invalid amount: {}", e)))
}

/// Build the report range from optional `--start` / `--end` flags
///
/// A missing bound comes from the configured default range.
pub fn resolve_range(
    start: Option<&str>,
    end: Option<&str>,
    settings: &Settings,
    today: NaiveDate,
) -> SipadiResult<DateRange> {
    let default = match settings.default_range {
        DefaultRange::MonthToDate => DateRange::month_to_date(today),
        DefaultRange::AllTime => DateRange::all_time(),
    };

    let start = match start {
        Some(s) => parse_date(s, settings)?,
        None => default.start,
    };
    let end = match end {
        Some(e) => parse_date(e, settings)?,
        None => default.end,
    };

    Ok(DateRange::new(start, end))
}

/// Wrap a storage failure while posting; validation errors pass through
pub(crate) fn posting_failed(err: SipadiError) -> SipadiError {
    if err.is_validation() {
        err
    } else {
        SipadiError::Storage(format!("Transaction was not saved: {}", err))
    }
}

/// The logged-in session, or `NotLoggedIn`
pub fn require_session(storage: &Storage) -> SipadiResult<Session> {
    AuthService::new(storage).require_session()
}
