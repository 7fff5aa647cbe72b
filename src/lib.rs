//! SiPadi - double-entry bookkeeping for rice farmers
//!
//! This library provides the core functionality for the SiPadi application.
//! Farmers record income and expenses; every record is posted to a journal as
//! a balanced debit/credit pair, and the journal feeds the general ledger, the
//! income statement and the balance sheet.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, journal lines, accounts)
//! - `storage`: CSV and JSON file storage
//! - `services`: Journal rules, recording and authentication
//! - `reports`: Summary, journal, ledger, income statement, balance sheet
//! - `display`: Terminal formatting
//! - `crypto`: Password hashing
//! - `cli`: Command handlers for the `sipadi` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use sipadi::config::paths::SipadiPaths;
//! use sipadi::models::{ChartOfAccounts, DateRange};
//! use sipadi::reports::IncomeStatement;
//! use sipadi::storage::Storage;
//!
//! let storage = Storage::new(SipadiPaths::new()?)?;
//! let book = storage.book(&owner);
//! let statement = IncomeStatement::generate(&book, DateRange::all_time(), &ChartOfAccounts::standard())?;
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{SipadiError, SipadiResult};
