//! The fixed farm catalog
//!
//! Income sources and the two-level expense catalog (category, then
//! sub-category). Labels are the names farmers see and are also what gets
//! written to the ledger files; every expense sub-category label doubles as
//! an expense account name in the chart of accounts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where an income came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum IncomeSource {
    #[default]
    #[serde(rename = "Penjualan Padi")]
    RiceSale,
    #[serde(rename = "Lain-lain")]
    Other,
}

impl IncomeSource {
    /// All sources in catalog order
    pub fn all() -> &'static [Self] {
        &[Self::RiceSale, Self::Other]
    }

    /// Catalog label
    pub fn label(&self) -> &'static str {
        match self {
            Self::RiceSale => "Penjualan Padi",
            Self::Other => "Lain-lain",
        }
    }

    /// Parse a source from its label (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|source| source.label().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for IncomeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Top-level expense category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    #[serde(rename = "Bibit")]
    Seed,
    #[serde(rename = "Pupuk")]
    Fertilizer,
    #[serde(rename = "Pestisida")]
    Pesticide,
    #[serde(rename = "Alat Tani")]
    FarmTools,
    #[serde(rename = "Tenaga Kerja")]
    Labor,
    #[serde(rename = "Lainnya")]
    Other,
}

impl ExpenseCategory {
    /// All categories in catalog order
    pub fn all() -> &'static [Self] {
        &[
            Self::Seed,
            Self::Fertilizer,
            Self::Pesticide,
            Self::FarmTools,
            Self::Labor,
            Self::Other,
        ]
    }

    /// Catalog label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Seed => "Bibit",
            Self::Fertilizer => "Pupuk",
            Self::Pesticide => "Pestisida",
            Self::FarmTools => "Alat Tani",
            Self::Labor => "Tenaga Kerja",
            Self::Other => "Lainnya",
        }
    }

    /// Sub-categories that belong to this category
    pub fn subcategories(&self) -> &'static [ExpenseSubcategory] {
        use ExpenseSubcategory::*;
        match self {
            Self::Seed => &[Intani, Inpari, Ciherang],
            Self::Fertilizer => &[Urea, Npk, Organic],
            Self::Pesticide => &[Furadan, Bpmc, Dursban],
            Self::FarmTools => &[Sickle, Hoe, Sack],
            Self::Labor => &[DailyWage, Contract],
            Self::Other => &[Miscellaneous],
        }
    }

    /// Parse a category from its label (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|category| category.label().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Second-level expense item; its label is also its expense account name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseSubcategory {
    Intani,
    Inpari,
    Ciherang,
    Urea,
    #[serde(rename = "NPK")]
    Npk,
    #[serde(rename = "Organik")]
    Organic,
    Furadan,
    #[serde(rename = "BPMC")]
    Bpmc,
    Dursban,
    #[serde(rename = "Sabit")]
    Sickle,
    #[serde(rename = "Cangkul")]
    Hoe,
    #[serde(rename = "Karung")]
    Sack,
    #[serde(rename = "Upah Harian")]
    DailyWage,
    #[serde(rename = "Borongan")]
    Contract,
    #[serde(rename = "Lain-lain")]
    Miscellaneous,
}

impl ExpenseSubcategory {
    /// Every sub-category across all categories, in catalog order
    pub fn all() -> impl Iterator<Item = ExpenseSubcategory> {
        ExpenseCategory::all()
            .iter()
            .flat_map(|category| category.subcategories().iter().copied())
    }

    /// Catalog label, used verbatim as the expense account name
    pub fn label(&self) -> &'static str {
        match self {
            Self::Intani => "Intani",
            Self::Inpari => "Inpari",
            Self::Ciherang => "Ciherang",
            Self::Urea => "Urea",
            Self::Npk => "NPK",
            Self::Organic => "Organik",
            Self::Furadan => "Furadan",
            Self::Bpmc => "BPMC",
            Self::Dursban => "Dursban",
            Self::Sickle => "Sabit",
            Self::Hoe => "Cangkul",
            Self::Sack => "Karung",
            Self::DailyWage => "Upah Harian",
            Self::Contract => "Borongan",
            Self::Miscellaneous => "Lain-lain",
        }
    }

    /// The category this sub-category belongs to
    pub fn category(&self) -> ExpenseCategory {
        use ExpenseSubcategory::*;
        match self {
            Intani | Inpari | Ciherang => ExpenseCategory::Seed,
            Urea | Npk | Organic => ExpenseCategory::Fertilizer,
            Furadan | Bpmc | Dursban => ExpenseCategory::Pesticide,
            Sickle | Hoe | Sack => ExpenseCategory::FarmTools,
            DailyWage | Contract => ExpenseCategory::Labor,
            Miscellaneous => ExpenseCategory::Other,
        }
    }

    /// Parse a sub-category within a category (case-insensitive)
    pub fn parse_in(category: ExpenseCategory, s: &str) -> Option<Self> {
        let s = s.trim();
        category
            .subcategories()
            .iter()
            .copied()
            .find(|sub| sub.label().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for ExpenseSubcategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
