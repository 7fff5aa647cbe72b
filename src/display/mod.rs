//! Display formatting for terminal output
//!
//! Provides utilities for formatting records, the catalog and reports for
//! terminal display.

pub mod catalog;
pub mod report;
pub mod transaction;

pub use catalog::{format_expense_catalog, format_income_sources};
pub use transaction::{
    format_expense_recorded, format_expense_register, format_income_recorded,
    format_income_register,
};
