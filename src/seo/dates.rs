use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::clock::Clock;
use crate::error::SitemapError;

/// Timestamps without an offset are taken as UTC.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Postgres text output for `timestamptz`, e.g. `2024-03-01 00:00:00+00`.
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%#z"];

pub fn format_day(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

pub fn today(clock: &dyn Clock) -> String {
    format_day(clock.today())
}

/// `YYYY-MM-DD` (UTC) for a stored timestamp. Missing or blank input means
/// "now" per `clock`; anything unparseable is an error.
pub fn normalize_date(value: Option<&str>, clock: &dyn Clock) -> Result<String, SitemapError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(today(clock)),
        Some(raw) => parse_day(raw)
            .map(format_day)
            .ok_or_else(|| SitemapError::InvalidDate {
                value: raw.to_string(),
            }),
    }
}

/// Normalize the first present, non-blank candidate.
pub fn last_modified_from(
    candidates: &[Option<&str>],
    clock: &dyn Clock,
) -> Result<String, SitemapError> {
    let first = candidates
        .iter()
        .flatten()
        .map(|v| v.trim())
        .find(|v| !v.is_empty());
    normalize_date(first, clock)
}

fn parse_day(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(raw, fmt) {
            return Some(dt.with_timezone(&Utc).date_naive());
        }
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
