//! Calendar-date parsing for the recognised date columns.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Canonical output form.
pub const CANONICAL_FORMAT: &str = "%Y-%m-%d";

const DATETIME_FMTS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

const DATE_FMTS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];

/// Parse a timestamp or date string down to its calendar date.
///
/// Offset-qualified timestamps keep the date as written (no conversion to
/// local time), so `2020-01-15T23:00:00-05:00` is the 15th.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    for fmt in DATETIME_FMTS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    for fmt in DATE_FMTS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    None
}

/// Parse and re-render as `YYYY-MM-DD`.
pub fn canonicalize(raw: &str) -> Option<String> {
    parse_calendar_date(raw).map(|d| d.format(CANONICAL_FORMAT).to_string())
}
