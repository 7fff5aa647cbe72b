//! Journal lines
//!
//! One side of a double-entry record. Lines are produced in balanced pairs
//! by the posting rules and are append-only.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::date::record_date;
use super::ids::TransactionId;
use super::money::Money;

/// A single debit or credit line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalLine {
    /// Transaction that produced this line; empty for lines written by hand
    #[serde(rename = "TransactionId", default)]
    pub transaction_id: Option<TransactionId>,

    /// `None` when the stored date could not be read
    #[serde(rename = "Date", with = "record_date")]
    pub date: Option<NaiveDate>,

    #[serde(rename = "Account")]
    pub account: String,

    #[serde(rename = "Debit")]
    pub debit: Money,

    #[serde(rename = "Credit")]
    pub credit: Money,

    #[serde(rename = "Description", default)]
    pub description: String,
}

impl JournalLine {
    /// A debit line
    pub fn debit(
        date: NaiveDate,
        account: impl Into<String>,
        amount: Money,
        description: impl Into<String>,
    ) -> Self {
        Self {
            transaction_id: None,
            date: Some(date),
            account: account.into(),
            debit: amount,
            credit: Money::zero(),
            description: description.into(),
        }
    }

    /// A credit line
    pub fn credit(
        date: NaiveDate,
        account: impl Into<String>,
        amount: Money,
        description: impl Into<String>,
    ) -> Self {
        Self {
            transaction_id: None,
            date: Some(date),
            account: account.into(),
            debit: Money::zero(),
            credit: amount,
            description: description.into(),
        }
    }

    /// Tag the line with the transaction that produced it
    pub fn for_transaction(mut self, id: TransactionId) -> Self {
        self.transaction_id = Some(id);
        self
    }

    /// `debit - credit`
    pub fn net(&self) -> Money {
        self.debit - self.credit
    }

    /// Whether exactly one side carries a non-zero amount
    pub fn is_one_sided(&self) -> bool {
        self.debit.is_zero() != self.credit.is_zero()
    }
}
