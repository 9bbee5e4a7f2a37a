//! Calendar date type for settlement and as-of dates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::error::{CovercheckError, CovercheckResult};

/// A calendar date.
///
/// Newtype over `chrono::NaiveDate`. Serializes as `YYYY-MM-DD`.
///
/// # Example
///
/// ```rust
/// use covercheck_core::types::Date;
///
/// let as_of = Date::from_ymd(2025, 6, 13).unwrap();
/// let settle = Date::parse("2025-06-15").unwrap();
/// assert_eq!(settle - as_of, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `CovercheckError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CovercheckResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| CovercheckError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns `CovercheckError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> CovercheckResult<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|_| CovercheckError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns today's date in UTC.
    #[must_use]
    pub fn today_utc() -> Self {
        Date(chrono::Utc::now().date_naive())
    }

    /// Adds a number of days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Calculates the number of calendar days from `self` to `other`.
    ///
    /// Positive when `other` is later.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for Date {
    type Err = CovercheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl Add<i64> for Date {
    type Output = Self;

    /// Adds days to a date.
    fn add(self, days: i64) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<i64> for Date {
    type Output = Self;

    /// Subtracts days from a date.
    fn sub(self, days: i64) -> Self::Output {
        self.add_days(-days)
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

/// Parses a caller-supplied as-of date.
///
/// Distinct from [`Date::parse`] only in the error it raises: a bad as-of is
/// reported as `InvalidAsOf` so callers can tell it apart from bad stored data.
///
/// # Errors
///
/// Returns `CovercheckError::InvalidAsOf` if the string is not a valid date.
pub fn parse_as_of(s: &str) -> CovercheckResult<Date> {
    Date::parse(s).map_err(|_| CovercheckError::invalid_as_of(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_creation() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        assert_eq!(date.to_string(), "2025-06-15");
        let naive = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        assert_eq!(Date::from(naive), date);
    }

    #[test]
    fn test_invalid_date() {
        assert!(Date::from_ymd(2025, 2, 30).is_err());
        assert!(Date::from_ymd(2025, 13, 1).is_err());
    }

    #[test]
    fn test_parse() {
        let date = Date::parse("2025-06-15").unwrap();
        assert_eq!(date, Date::from_ymd(2025, 6, 15).unwrap());
        assert_eq!(Date::parse(" 2025-06-15 ").unwrap(), date);

        assert!(Date::parse("2025-02-30").is_err());
        assert!(Date::parse("15/06/2025").is_err());
        assert!(Date::parse("").is_err());
    }

    #[test]
    fn test_parse_as_of() {
        assert!(parse_as_of("2025-06-15").is_ok());
        let err = parse_as_of("tomorrow").unwrap_err();
        assert!(matches!(err, CovercheckError::InvalidAsOf { .. }));
    }

    #[test]
    fn test_days_between() {
        let d1 = Date::from_ymd(2025, 1, 1).unwrap();
        let d2 = Date::from_ymd(2025, 1, 31).unwrap();
        assert_eq!(d1.days_between(&d2), 30);
        assert_eq!(d2.days_between(&d1), -30);
    }

    #[test]
    fn test_days_across_month_end() {
        let as_of = Date::from_ymd(2024, 2, 28).unwrap();
        let settle = Date::from_ymd(2024, 3, 1).unwrap();
        assert_eq!(settle - as_of, 2); // leap day in between
    }

    #[test]
    fn test_date_arithmetic_operators() {
        let d1 = Date::from_ymd(2025, 1, 1).unwrap();

        let d2 = d1 + 10;
        assert_eq!(d2, Date::from_ymd(2025, 1, 11).unwrap());

        let d3 = d2 - 5;
        assert_eq!(d3, Date::from_ymd(2025, 1, 6).unwrap());

        assert_eq!(d2 - d1, 10);
    }

    #[test]
    fn test_display() {
        let date = Date::from_ymd(2025, 6, 5).unwrap();
        assert_eq!(format!("{}", date), "2025-06-05");
    }

    #[test]
    fn test_serde() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2025-06-15\"");
        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }
}
