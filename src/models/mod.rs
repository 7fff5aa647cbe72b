//! Core data models for SiPadi
//!
//! This module contains the data structures of the farm bookkeeping domain:
//! the catalog, transactions, journal lines, the chart of accounts, users
//! and the value types they are built from.

pub mod account;
pub mod category;
pub mod date;
pub mod ids;
pub mod journal;
pub mod money;
pub mod period;
pub mod transaction;
pub mod user;

pub use account::{AccountClass, ChartOfAccounts, SystemAccount};
pub use category::{ExpenseCategory, ExpenseSubcategory, IncomeSource};
pub use date::{format_record_date, parse_record_date, RECORD_DATE_FORMAT};
pub use ids::TransactionId;
pub use journal::JournalLine;
pub use money::{Money, MoneyParseError};
pub use period::DateRange;
pub use transaction::{
    ExpenseMethod, ExpenseTransaction, IncomeMethod, IncomeTransaction, Transaction,
    TransactionKind,
};
pub use user::{Owner, OwnerValidationError, Session, UserAccount};
