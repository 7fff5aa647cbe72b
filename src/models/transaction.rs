//! Income and expense transactions
//!
//! Both kinds are immutable once written: the store only ever appends them.
//! Field renames give the ledger files readable column headers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::{ExpenseCategory, ExpenseSubcategory, IncomeSource};
use super::date::record_date;
use super::ids::TransactionId;
use super::money::Money;
use super::user::Owner;

/// Which transaction table a record lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// File name stem for this kind's table
    pub fn file_stem(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// How an income was received
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum IncomeMethod {
    /// Paid in cash
    #[default]
    Cash,
    /// Paid into the bank account
    Transfer,
    /// Sold on credit; the buyer owes us
    Receivable,
    /// A buyer settling an earlier receivable
    ReceivablePayment,
}

impl IncomeMethod {
    /// All methods in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Cash,
            Self::Transfer,
            Self::Receivable,
            Self::ReceivablePayment,
        ]
    }

    /// Parse a method from user input
    ///
    /// Accepts the English names in any case and separator style, and the
    /// Indonesian terms farmers use.
    pub fn parse(s: &str) -> Option<Self> {
        match normalize(s).as_str() {
            "cash" | "tunai" => Some(Self::Cash),
            "transfer" => Some(Self::Transfer),
            "receivable" | "piutang" => Some(Self::Receivable),
            "receivablepayment" | "pelunasanpiutang" => Some(Self::ReceivablePayment),
            _ => None,
        }
    }

    /// Whether this settles an earlier receivable rather than earning revenue
    pub fn is_settlement(&self) -> bool {
        matches!(self, Self::ReceivablePayment)
    }
}

impl fmt::Display for IncomeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cash => write!(f, "Cash"),
            Self::Transfer => write!(f, "Transfer"),
            Self::Receivable => write!(f, "Receivable"),
            Self::ReceivablePayment => write!(f, "Receivable Payment"),
        }
    }
}

/// How an expense was paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ExpenseMethod {
    /// Paid in cash
    #[default]
    Cash,
    /// Paid from the bank account
    Transfer,
    /// Bought on credit; we owe the supplier
    Payable,
    /// Settling an earlier payable
    PayablePayment,
}

impl ExpenseMethod {
    /// All methods in display order
    pub fn all() -> &'static [Self] {
        &[Self::Cash, Self::Transfer, Self::Payable, Self::PayablePayment]
    }

    /// Parse a method from user input
    pub fn parse(s: &str) -> Option<Self> {
        match normalize(s).as_str() {
            "cash" | "tunai" => Some(Self::Cash),
            "transfer" => Some(Self::Transfer),
            "payable" | "utang" | "hutang" => Some(Self::Payable),
            "payablepayment" | "pelunasanutang" | "pelunasanhutang" => {
                Some(Self::PayablePayment)
            }
            _ => None,
        }
    }

    /// Whether this settles an earlier payable rather than incurring expense
    pub fn is_settlement(&self) -> bool {
        matches!(self, Self::PayablePayment)
    }
}

impl fmt::Display for ExpenseMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cash => write!(f, "Cash"),
            Self::Transfer => write!(f, "Transfer"),
            Self::Payable => write!(f, "Payable"),
            Self::PayablePayment => write!(f, "Payable Payment"),
        }
    }
}

/// "Receivable-Payment", "receivable_payment" and "receivable payment" all
/// normalize to "receivablepayment"
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// A recorded income
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeTransaction {
    #[serde(rename = "Id")]
    pub id: TransactionId,

    /// `None` when the stored date could not be read
    #[serde(rename = "Date", with = "record_date")]
    pub date: Option<NaiveDate>,

    #[serde(rename = "Source")]
    pub source: IncomeSource,

    #[serde(rename = "Amount")]
    pub amount: Money,

    #[serde(rename = "Method")]
    pub method: IncomeMethod,

    #[serde(rename = "Note", default)]
    pub note: String,

    #[serde(rename = "Username")]
    pub owner: Owner,
}

impl IncomeTransaction {
    /// Create a new income record with a fresh id
    pub fn new(
        owner: Owner,
        date: NaiveDate,
        source: IncomeSource,
        amount: Money,
        method: IncomeMethod,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            date: Some(date),
            source,
            amount,
            method,
            note: String::new(),
            owner,
        }
    }

    /// Attach a free-text note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }
}

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseTransaction {
    #[serde(rename = "Id")]
    pub id: TransactionId,

    /// `None` when the stored date could not be read
    #[serde(rename = "Date", with = "record_date")]
    pub date: Option<NaiveDate>,

    #[serde(rename = "Category")]
    pub category: ExpenseCategory,

    #[serde(rename = "Subcategory")]
    pub subcategory: ExpenseSubcategory,

    #[serde(rename = "Amount")]
    pub amount: Money,

    #[serde(rename = "Method")]
    pub method: ExpenseMethod,

    #[serde(rename = "Note", default)]
    pub note: String,

    #[serde(rename = "Username")]
    pub owner: Owner,
}

impl ExpenseTransaction {
    /// Create a new expense record with a fresh id
    ///
    /// The category is taken from the sub-category, so the pair is always
    /// consistent.
    pub fn new(
        owner: Owner,
        date: NaiveDate,
        subcategory: ExpenseSubcategory,
        amount: Money,
        method: ExpenseMethod,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            date: Some(date),
            category: subcategory.category(),
            subcategory,
            amount,
            method,
            note: String::new(),
            owner,
        }
    }

    /// Attach a free-text note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }
}

/// A stored transaction of either kind
#[derive(Debug, Clone, PartialEq)]
pub enum Transaction {
    Income(IncomeTransaction),
    Expense(ExpenseTransaction),
}

impl Transaction {
    pub fn id(&self) -> TransactionId {
        match self {
            Self::Income(txn) => txn.id,
            Self::Expense(txn) => txn.id,
        }
    }

    pub fn kind(&self) -> TransactionKind {
        match self {
            Self::Income(_) => TransactionKind::Income,
            Self::Expense(_) => TransactionKind::Expense,
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Income(txn) => txn.date,
            Self::Expense(txn) => txn.date,
        }
    }

    pub fn amount(&self) -> Money {
        match self {
            Self::Income(txn) => txn.amount,
            Self::Expense(txn) => txn.amount,
        }
    }
}

impl From<IncomeTransaction> for Transaction {
    fn from(txn: IncomeTransaction) -> Self {
        Self::Income(txn)
    }
}

impl From<ExpenseTransaction> for Transaction {
    fn from(txn: ExpenseTransaction) -> Self {
        Self::Expense(txn)
    }
}
