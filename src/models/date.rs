//! Record dates as they are stored in the ledger files
//!
//! Dates are written as `YYYY-MM-DD HH:MM:SS` at midnight. Reading is lenient:
//! a bare date or an RFC 3339 timestamp is also accepted, and anything else
//! becomes `None` so the record drops out of every date-filtered computation
//! instead of failing the whole load.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Storage format for record dates
pub const RECORD_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a stored date, returning `None` when it cannot be understood
pub fn parse_record_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, RECORD_DATE_FORMAT) {
        return Some(dt.date());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Format a date for storage
pub fn format_record_date(date: NaiveDate) -> String {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.format(RECORD_DATE_FORMAT).to_string())
        .unwrap_or_else(|| date.format("%Y-%m-%d").to_string())
}

/// serde adapter for `Option<NaiveDate>` record fields
///
/// Deserialization never fails: unreadable values become `None`.
pub mod record_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.serialize_str(&super::format_record_date(*date)),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(super::parse_record_date(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_storage_format() {
        assert_eq!(
            parse_record_date("2024-05-01 00:00:00"),
            Some(date(2024, 5, 1))
        );
    }

    #[test]
    fn test_parse_lenient_forms() {
        assert_eq!(parse_record_date("2024-05-02"), Some(date(2024, 5, 2)));
        assert_eq!(
            parse_record_date("2024-05-03T08:30:00+07:00"),
            Some(date(2024, 5, 3))
        );
        assert_eq!(parse_record_date("  2024-05-04 "), Some(date(2024, 5, 4)));
    }

    #[test]
    fn test_unparseable_becomes_missing() {
        assert_eq!(parse_record_date(""), None);
        assert_eq!(parse_record_date("kemarin"), None);
        assert_eq!(parse_record_date("2024-13-45"), None);
    }

    #[test]
    fn test_format_record_date() {
        assert_eq!(format_record_date(date(2024, 5, 1)), "2024-05-01 00:00:00");
    }
}
