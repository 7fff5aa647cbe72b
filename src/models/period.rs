//! Inclusive date ranges for reports

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An inclusive `[start, end]` date range
///
/// A range whose start is after its end is valid and contains nothing.
/// Records with a missing date are never contained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a new range
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// First day of `today`'s month through `today`
    pub fn month_to_date(today: NaiveDate) -> Self {
        let start = today.with_day(1).unwrap_or(today);
        Self::new(start, today)
    }

    /// A range wide enough to include every record
    pub fn all_time() -> Self {
        Self::new(NaiveDate::MIN, NaiveDate::MAX)
    }

    /// Whether the range contains nothing
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Check whether a record date falls inside the range
    pub fn contains(&self, date: Option<NaiveDate>) -> bool {
        match date {
            Some(date) => self.start <= date && date <= self.end,
            None => false,
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::all_time() {
            write!(f, "all time")
        } else {
            write!(f, "{} to {}", self.start, self.end)
        }
    }
}
