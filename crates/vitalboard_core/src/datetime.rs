//! Timestamp parsing and display labels.
//!
//! # Invariants
//! - Calendar days are taken in UTC so labels do not depend on host timezone.
//! - Parsing never falls back to a default instant; callers get `None`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Short day label used on chart axes, e.g. `Feb 15`.
pub const DAY_LABEL_FORMAT: &str = "%b %-d";
/// Long date label used in summaries, e.g. `Feb 15, 2025`.
pub const LONG_DATE_FORMAT: &str = "%b %-d, %Y";

const NAIVE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parses an ISO 8601 timestamp into a UTC instant.
///
/// Accepted shapes:
/// - RFC 3339 with offset (`2025-02-15T08:00:00Z`, `...-04:00`)
/// - date-time without offset, read as UTC
/// - plain date (`2024-08-10`), read as UTC midnight
pub fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(parsed.and_utc());
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}

/// Formats the calendar day of `instant` as a short axis label.
pub fn day_label(instant: &DateTime<Utc>) -> String {
    instant.format(DAY_LABEL_FORMAT).to_string()
}

/// Formats the calendar day of `instant` with its year.
pub fn long_date_label(instant: &DateTime<Utc>) -> String {
    instant.format(LONG_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::{day_label, long_date_label, parse_instant};

    #[test]
    fn parse_instant_accepts_offsets_and_normalizes_to_utc() {
        let parsed = parse_instant("2024-07-27T06:00:00-04:00").expect("offset timestamp");
        assert_eq!(parsed.to_rfc3339(), "2024-07-27T10:00:00+00:00");
    }

    #[test]
    fn parse_instant_accepts_plain_dates() {
        let parsed = parse_instant("2024-08-10").expect("plain date");
        assert_eq!(day_label(&parsed), "Aug 10");
        assert_eq!(long_date_label(&parsed), "Aug 10, 2024");
    }

    #[test]
    fn parse_instant_rejects_garbage() {
        assert!(parse_instant("").is_none());
        assert!(parse_instant("yesterday").is_none());
        assert!(parse_instant("2025-13-40T08:00:00Z").is_none());
    }

    #[test]
    fn day_label_drops_leading_zero() {
        let parsed = parse_instant("2025-03-01T08:00:00Z").expect("timestamp");
        assert_eq!(day_label(&parsed), "Mar 1");
    }
}
