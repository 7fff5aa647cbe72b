//! Chart of accounts
//!
//! Every account name a journal line may carry is mapped to a closed
//! classification. Reports look the class up here instead of guessing it
//! from the name.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::category::ExpenseSubcategory;

/// Classification of an account in the balance sheet / income statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountClass {
    Asset,
    Liability,
    Equity,
    Revenue,
    Expense,
}

impl AccountClass {
    /// Whether the account's natural balance is on the debit side
    pub fn is_debit_normal(&self) -> bool {
        matches!(self, Self::Asset | Self::Expense)
    }
}

impl fmt::Display for AccountClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asset => write!(f, "Asset"),
            Self::Liability => write!(f, "Liability"),
            Self::Equity => write!(f, "Equity"),
            Self::Revenue => write!(f, "Revenue"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// Accounts the posting rules route money through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemAccount {
    Cash,
    Bank,
    AccountsReceivable,
    AccountsPayable,
    Revenue,
}

impl SystemAccount {
    /// All system accounts, assets first
    pub fn all() -> &'static [Self] {
        &[
            Self::Cash,
            Self::Bank,
            Self::AccountsReceivable,
            Self::AccountsPayable,
            Self::Revenue,
        ]
    }

    /// Account name as written on journal lines
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::Bank => "Bank",
            Self::AccountsReceivable => "AccountsReceivable",
            Self::AccountsPayable => "AccountsPayable",
            Self::Revenue => "Revenue",
        }
    }

    /// Classification of this account
    pub fn class(&self) -> AccountClass {
        match self {
            Self::Cash | Self::Bank | Self::AccountsReceivable => AccountClass::Asset,
            Self::AccountsPayable => AccountClass::Liability,
            Self::Revenue => AccountClass::Revenue,
        }
    }
}

impl fmt::Display for SystemAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Mapping from account name to classification
#[derive(Debug, Clone)]
pub struct ChartOfAccounts {
    accounts: HashMap<String, AccountClass>,
}

impl ChartOfAccounts {
    /// Create an empty chart
    pub fn empty() -> Self {
        Self {
            accounts: HashMap::new(),
        }
    }

    /// The farm chart: system accounts plus one expense account per
    /// catalog sub-category
    pub fn standard() -> Self {
        let mut chart = Self::empty();
        for account in SystemAccount::all() {
            chart.register(account.name(), account.class());
        }
        for sub in ExpenseSubcategory::all() {
            chart.register(sub.label(), AccountClass::Expense);
        }
        chart
    }

    /// Add or reclassify an account
    pub fn register(&mut self, name: impl Into<String>, class: AccountClass) {
        self.accounts.insert(name.into(), class);
    }

    /// Look up an account's class
    pub fn get(&self, name: &str) -> Option<AccountClass> {
        self.accounts.get(name).copied()
    }

    /// Class used by the reports
    ///
    /// Names missing from the chart are treated as expenses, which is how
    /// ledgers written before the chart existed were read.
    pub fn classify(&self, name: &str) -> AccountClass {
        self.get(name).unwrap_or_else(|| {
            tracing::debug!(account = name, "account not in chart, treating as expense");
            AccountClass::Expense
        })
    }

    /// Whether the chart knows this account
    pub fn contains(&self, name: &str) -> bool {
        self.accounts.contains_key(name)
    }

    /// Number of accounts in the chart
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the chart has no accounts
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl Default for ChartOfAccounts {
    fn default() -> Self {
        Self::standard()
    }
}
