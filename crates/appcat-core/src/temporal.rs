//! # Temporal Checks — `date_added`
//!
//! The `date_added` field is only checked when it is truthy, and then only
//! for whether it can be read as a calendar date at all. Any recognizable
//! shape is accepted.
//!
//! ## Accepted Values
//!
//! - Strings in RFC 3339, RFC 2822, ISO date / date-time (optionally
//!   suffixed with `UTC`, `GMT` or `Z`), `Date.toString()` style
//!   (`Mon Jan 15 2024 10:30:00 GMT+0000`), slash-separated, dashed
//!   month-name (`15-Jan-2024`), year-month, bare year, and English
//!   month-name forms (see [`parse_permissive_date`]).
//! - Numbers, as millisecond offsets from the Unix epoch, within
//!   ±8.64e15 ms.
//! - `true`, which reads as epoch offset 1.
//!
//! Sequences and mappings are never dates.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// Largest magnitude (in milliseconds from the epoch) of a representable date.
pub const MAX_EPOCH_MILLIS: f64 = 8.64e15;

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%d-%b-%Y",
];

const ZONED_FORMATS: &[&str] = &["%a %b %d %Y %H:%M:%S GMT%z", "%a %b %d %Y %H:%M:%S %z"];

const UTC_SUFFIXES: &[&str] = &[" UTC", " GMT", "Z"];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Returns true if `value` counts as set.
///
/// `null`, `false`, zero, and the empty string are unset; everything else,
/// including empty sequences and mappings, is set.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Returns true if `value` can be read as a calendar date.
pub fn is_valid_date_value(value: &Value) -> bool {
    match value {
        Value::String(s) => parse_permissive_date(s).is_some(),
        Value::Number(n) => n
            .as_f64()
            .is_some_and(|f| f.is_finite() && f.abs() <= MAX_EPOCH_MILLIS),
        Value::Bool(_) => true,
        Value::Null | Value::Array(_) | Value::Object(_) => false,
    }
}

/// Parse a hand-written date string, returning the instant it names.
///
/// Offsets in RFC 3339 / RFC 2822 inputs are normalized to UTC. Inputs
/// without a time of day resolve to midnight.
pub fn parse_permissive_date(input: &str) -> Option<NaiveDateTime> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.naive_utc());
    }

    let unlabelled = strip_zone_name(s);
    for fmt in ZONED_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(unlabelled, fmt) {
            return Some(dt.naive_utc());
        }
    }

    let local = UTC_SUFFIXES
        .iter()
        .find_map(|suffix| s.strip_suffix(suffix))
        .map_or(s, str::trim_end);
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(local, fmt) {
            return Some(dt);
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    parse_partial_date(s)
}

/// Drop a trailing `(Coordinated Universal Time)` style zone label.
fn strip_zone_name(s: &str) -> &str {
    match s.strip_suffix(')').and_then(|rest| rest.rfind(" (").map(|i| &s[..i])) {
        Some(head) => head.trim_end(),
        None => s,
    }
}

/// `YYYY-MM` and `YYYY`.
fn parse_partial_date(s: &str) -> Option<NaiveDateTime> {
    let mut parts = s.splitn(2, '-');
    let year = parts.next().filter(|y| is_digits(y, 4))?;
    let month = match parts.next() {
        Some(m) if is_digits(m, 2) => m.parse().ok()?,
        Some(_) => return None,
        None => 1,
    };
    NaiveDate::from_ymd_opt(year.parse().ok()?, month, 1)?.and_hms_opt(0, 0, 0)
}

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}
