//! Calendar-day helpers.
//!
//! Every date in the engine is a `NaiveDate`: day granularity, no time of
//! day and no time zone. Timestamps coming from callers are truncated to the
//! calendar day in their own offset.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, TimeZone};

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Values that can be read as a calendar day.
pub trait ToDateOnly {
    /// Returns the calendar day, or `None` if the value is empty or invalid.
    fn to_date_only(&self) -> Option<NaiveDate>;
}

impl ToDateOnly for NaiveDate {
    fn to_date_only(&self) -> Option<NaiveDate> {
        Some(*self)
    }
}

impl ToDateOnly for NaiveDateTime {
    fn to_date_only(&self) -> Option<NaiveDate> {
        Some(self.date())
    }
}

impl<Tz: TimeZone> ToDateOnly for DateTime<Tz> {
    fn to_date_only(&self) -> Option<NaiveDate> {
        Some(self.date_naive())
    }
}

impl ToDateOnly for str {
    fn to_date_only(&self) -> Option<NaiveDate> {
        let value = self.trim();
        if value.is_empty() {
            return None;
        }

        if let Some(date) = DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        {
            return Some(date);
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
            return Some(dt.date_naive());
        }

        DATETIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
            .map(|dt| dt.date())
    }
}

impl ToDateOnly for String {
    fn to_date_only(&self) -> Option<NaiveDate> {
        self.as_str().to_date_only()
    }
}

impl<T: ToDateOnly + ?Sized> ToDateOnly for &T {
    fn to_date_only(&self) -> Option<NaiveDate> {
        (**self).to_date_only()
    }
}

impl<T: ToDateOnly> ToDateOnly for Option<T> {
    fn to_date_only(&self) -> Option<NaiveDate> {
        self.as_ref().and_then(ToDateOnly::to_date_only)
    }
}

/// Reads a value as a calendar day. Never panics; invalid input is `None`.
pub fn parse_date_only<T: ToDateOnly + ?Sized>(value: &T) -> Option<NaiveDate> {
    value.to_date_only()
}

/// Formats a calendar day as zero-padded `YYYY-MM-DD`.
pub fn format_date_only(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Adds (or with a negative `days`, subtracts) calendar days.
///
/// Saturates at the bounds of the representable calendar.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days))
        .unwrap_or(if days >= 0 { NaiveDate::MAX } else { NaiveDate::MIN })
}

/// Returns 0 = Sunday through 6 = Saturday.
pub fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// Returns the number of days from `from` to `to` (negative if `to` is earlier).
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}
