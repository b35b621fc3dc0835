//! Calendar date utilities.
//!
//! All date logic in evcal runs on `chrono::NaiveDate`: a plain calendar
//! date with no time-of-day and no timezone, so ordering and equality can
//! never be shifted by UTC conversion. The `YYYY-MM-DD` wire form is the
//! only textual representation.

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::{EvcalError, EvcalResult};

/// Parse a `YYYY-MM-DD` string into a calendar date.
pub fn parse_ymd(s: &str) -> EvcalResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        EvcalError::MalformedRecord(format!("Invalid date '{s}'. Expected YYYY-MM-DD"))
    })
}

/// Format a calendar date as `YYYY-MM-DD`.
pub fn format_ymd(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format a calendar date in the digits-only `YYYYMMDD` form used by
/// iCalendar `VALUE=DATE` properties.
pub fn format_ics_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// The Monday of the week containing `date`.
///
/// Weeks always start on Monday regardless of locale. chrono numbers
/// weekdays with `num_days_from_monday()` (Mon = 0), so the offset back to
/// Monday is that number directly.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// The first day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).expect("day 1 exists in every month")
}

/// Number of days in the month containing `date`.
pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = month_start(date);
    let next_month = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    }
    .expect("first of month is always valid");
    (next_month - first).num_days() as u32
}
