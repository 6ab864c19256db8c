//! Date type for financial calculations.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// A calendar date for financial calculations.
///
/// This is a newtype wrapper around `chrono::NaiveDate` providing
/// financial-specific operations and ensuring type safety.
///
/// # Example
///
/// ```rust
/// use credix_core::types::Date;
///
/// let date = Date::from_ymd(2026, 6, 20).unwrap();
/// let future = date.add_months(6).unwrap();
/// assert_eq!(future.year(), 2026);
/// assert_eq!(future.month(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CoreResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> CoreResult<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|_| CoreError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Adds a number of days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Adds a number of months to the date.
    ///
    /// If the resulting day would be invalid (e.g., Jan 31 + 1 month),
    /// it rolls back to the last valid day of the month.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the resulting date is out of range.
    pub fn add_months(&self, months: i32) -> CoreResult<Self> {
        let total = i64::from(self.year()) * 12 + i64::from(self.month()) - 1 + i64::from(months);
        let year =
            i32::try_from(total.div_euclid(12)).map_err(|_| CoreError::invalid_date("overflow"))?;
        let month = u32::try_from(total.rem_euclid(12) + 1).expect("month in 1..=12");

        let mut day = self.day();
        loop {
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                return Ok(Date(date));
            }
            if day <= 28 {
                return Err(CoreError::invalid_date(format!("{year}-{month:02}-{day:02}")));
            }
            day -= 1;
        }
    }

    /// Adds a number of years to the date.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the resulting date is out of range.
    pub fn add_years(&self, years: i32) -> CoreResult<Self> {
        self.add_months(years * 12)
    }

    /// Returns the signed number of days from `self` to `other`.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the ACT/365 Fixed year fraction from `self` to `other`.
    ///
    /// Negative when `other` precedes `self`.
    #[must_use]
    pub fn year_fraction(&self, other: &Date) -> f64 {
        self.days_between(other) as f64 / 365.0
    }

    /// Returns the underlying `chrono::NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }

    /// Returns the earlier of two dates.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        if self <= other { self } else { other }
    }

    /// Returns the later of two dates.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        if self >= other { self } else { other }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_ymd() {
        let date = Date::from_ymd(2026, 3, 20).unwrap();
        assert_eq!(date.year(), 2026);
        assert_eq!(date.month(), 3);
        assert_eq!(date.day(), 20);
    }

    #[test]
    fn test_invalid_date() {
        assert!(Date::from_ymd(2026, 2, 30).is_err());
        assert!(Date::from_ymd(2026, 13, 1).is_err());
    }

    #[test]
    fn test_parse() {
        let date = Date::parse("2026-06-20").unwrap();
        assert_eq!(date, Date::from_ymd(2026, 6, 20).unwrap());
        assert!(Date::parse("not-a-date").is_err());
    }

    #[test]
    fn test_add_days() {
        let date = Date::from_ymd(2026, 12, 30).unwrap();
        assert_eq!(date.add_days(2), Date::from_ymd(2027, 1, 1).unwrap());
        assert_eq!(date.add_days(-30), Date::from_ymd(2026, 11, 30).unwrap());
    }

    #[test]
    fn test_add_months_end_of_month() {
        // Jan 31 + 1 month rolls back to Feb 28 (non-leap)
        let date = Date::from_ymd(2026, 1, 31).unwrap();
        assert_eq!(date.add_months(1).unwrap(), Date::from_ymd(2026, 2, 28).unwrap());
    }

    #[test]
    fn test_add_months_across_year() {
        let date = Date::from_ymd(2026, 11, 15).unwrap();
        assert_eq!(date.add_months(3).unwrap(), Date::from_ymd(2027, 2, 15).unwrap());
        assert_eq!(date.add_months(-12).unwrap(), Date::from_ymd(2025, 11, 15).unwrap());
    }

    #[test]
    fn test_days_between() {
        let d1 = Date::from_ymd(2026, 1, 1).unwrap();
        let d2 = Date::from_ymd(2026, 12, 31).unwrap();
        assert_eq!(d1.days_between(&d2), 364);
        assert_eq!(d2.days_between(&d1), -364);
    }

    #[test]
    fn test_year_fraction() {
        let d1 = Date::from_ymd(2026, 1, 1).unwrap();
        let d2 = d1.add_days(365);
        assert_relative_eq!(d1.year_fraction(&d2), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_ordering() {
        let d1 = Date::from_ymd(2026, 1, 1).unwrap();
        let d2 = Date::from_ymd(2026, 6, 1).unwrap();
        assert!(d1 < d2);
        assert_eq!(d1.min(d2), d1);
        assert_eq!(d1.max(d2), d2);
    }

    #[test]
    fn test_serde_roundtrip() {
        let date = Date::from_ymd(2026, 6, 20).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2026-06-20\"");
        let back: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);
    }

    proptest::proptest! {
        #[test]
        fn prop_add_days_roundtrip(days in -20_000i64..20_000) {
            let base = Date::from_ymd(2026, 1, 1).unwrap();
            let shifted = base.add_days(days);
            proptest::prop_assert_eq!(base.days_between(&shifted), days);
        }
    }
}
