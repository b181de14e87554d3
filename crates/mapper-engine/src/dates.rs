//! Age and calendar-date helpers.
//!
//! Everything here works on [`NaiveDate`], so there is no time-of-day
//! component to round away and no timezone to drift across. Timestamps from
//! the CRUD layer are cut down to their written date by
//! [`parse_calendar_date`] before they reach any arithmetic.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Formats accepted for timestamps without an offset.
const NAIVE_DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Age brackets as `(upper bound inclusive, label)`, youngest first.
const AGE_BRACKETS: [(i32, &str); 4] = [
    (17, "under-18"),
    (29, "18-29"),
    (44, "30-44"),
    (59, "45-59"),
];

/// Label for everyone above the last bracket bound.
const OLDEST_BRACKET: &str = "60+";

/// Whole years elapsed from `birth_date` to `as_of`.
///
/// One year is subtracted when the `(month, day)` anniversary has not yet
/// been reached in `as_of`'s year. A birth date after `as_of` yields a
/// negative age; callers filter those out themselves.
pub fn age_in_years(birth_date: NaiveDate, as_of: NaiveDate) -> i32 {
    let years = as_of.year().saturating_sub(birth_date.year());
    if (as_of.month(), as_of.day()) < (birth_date.month(), birth_date.day()) {
        years.saturating_sub(1)
    } else {
        years
    }
}

/// Absolute number of whole days between two dates.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    days_until(a, b).saturating_abs()
}

/// Signed number of days from `from` to `to` (negative when `to` is earlier).
pub fn days_until(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// Bracket label for an age, or `None` for a negative age.
pub fn age_bracket(age: i32) -> Option<&'static str> {
    if age < 0 {
        return None;
    }
    let label = AGE_BRACKETS
        .iter()
        .find(|(upper, _)| age <= *upper)
        .map_or(OLDEST_BRACKET, |&(_, label)| label);
    Some(label)
}

/// The anniversary of `date` in `year`.
///
/// A 29 February date falls on 28 February in non-leap years.
pub fn anniversary_in(date: NaiveDate, year: i32) -> Option<NaiveDate> {
    date.with_year(year).or_else(|| {
        // Only Feb 29 can fail to exist in another year.
        NaiveDate::from_ymd_opt(year, date.month(), date.day().saturating_sub(1))
    })
}

/// Parse a date coming from the CRUD layer.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (the written date is kept, the
/// offset is ignored), and `YYYY-MM-DD HH:MM:SS` style timestamps. Blank or
/// unparseable input yields `None`.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(timestamp.date_naive());
    }
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|timestamp| timestamp.date())
}
