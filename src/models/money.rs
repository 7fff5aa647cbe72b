//! Money type for representing Rupiah amounts
//!
//! Rupiah is bookkept in whole units, so amounts are stored as `i64` units
//! with no fractional part.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount in whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from whole units
    ///
    /// # Examples
    /// ```
    /// use sipadi::models::Money;
    /// let amount = Money::from_units(100_000); // Rp 100,000
    /// assert_eq!(amount.units(), 100_000);
    /// ```
    pub const fn from_units(units: i64) -> Self {
        Self(units)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in whole units
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Largest amount accepted from user input (one quadrillion Rupiah)
    pub const MAX_INPUT: Money = Money(1_000_000_000_000_000);

    /// Parse a money amount from a string
    ///
    /// Accepts "100000", "100,000", "100.000", "Rp 100.000", "-20000".
    /// `,` `.` and `_` group thousands. A trailing group of one or two digits
    /// is a decimal part: "1.500,00" is 1,500, while "100.50" is rejected
    /// because amounts are whole Rupiah.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, rest) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped.trim_start()),
            None => (false, s),
        };

        let rest = rest
            .strip_prefix("Rp")
            .or_else(|| rest.strip_prefix("rp"))
            .unwrap_or(rest)
            .trim_start();

        let whole = match rest.rfind(|c: char| matches!(c, ',' | '.')) {
            Some(pos) if (1..=2).contains(&(rest.len() - pos - 1)) => {
                let decimals = &rest[pos + 1..];
                if !decimals.chars().all(|c| c.is_ascii_digit()) {
                    return Err(MoneyParseError::InvalidFormat(s.to_string()));
                }
                if decimals.chars().any(|c| c != '0') {
                    return Err(MoneyParseError::Fractional(s.to_string()));
                }
                &rest[..pos]
            }
            _ => rest,
        };

        let digits: String = whole
            .chars()
            .filter(|c| !matches!(c, ',' | '.' | '_'))
            .collect();

        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let units: i64 = digits
            .parse()
            .map_err(|_| MoneyParseError::OutOfRange(s.to_string()))?;
        if units > Self::MAX_INPUT.0 {
            return Err(MoneyParseError::OutOfRange(s.to_string()));
        }

        Ok(Self(if negative { -units } else { units }))
    }

    /// Format with a currency symbol, e.g. `Rp 1,250,000`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let grouped = group_thousands(self.0.unsigned_abs());
        if self.is_negative() {
            format!("-{} {}", symbol, grouped)
        } else {
            format!("{} {}", symbol, grouped)
        }
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Route through pad so `{:>15}` alignment works in reports
        f.pad(&self.format_with_symbol("Rp"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    OutOfRange(String),
    /// A non-zero decimal part
    Fractional(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::OutOfRange(s) => write!(f, "Amount out of range: {}", s),
            MoneyParseError::Fractional(s) => {
                write!(f, "Amounts are whole Rupiah, no decimals: {}", s)
            }
        }
    }
}

impl std::error::Error for MoneyParseError {}
