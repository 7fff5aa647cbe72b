//! Service layer for SiPadi
//!
//! The service layer provides business logic on top of the storage layer:
//! validation, the journal rules, posting and authentication.

pub mod auth;
pub mod journal;
pub mod transaction;

pub use auth::AuthService;
pub use journal::{derive_journal_lines, expense_entry, income_entry};
pub use transaction::{RecordExpenseInput, RecordIncomeInput, ReplaySummary, TransactionService};
