//! Lenient date parsing. Unparseable values become `None` instead of errors.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const OFFSET_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%:z", "%Y-%m-%d %H:%M:%S%z"];
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Parses a news timestamp and converts it to UTC.
///
/// Offset-aware values are shifted to UTC; naive values are taken as UTC;
/// a bare date becomes midnight UTC.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    for fmt in OFFSET_FORMATS {
        if let Ok(ts) = DateTime::parse_from_str(raw, fmt) {
            return Some(ts.with_timezone(&Utc));
        }
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(ts.and_utc());
        }
    }
    parse_bare_date(raw).and_then(|d| d.and_hms_opt(0, 0, 0)).map(|ts| ts.and_utc())
}

/// Parses a trading-day value and keeps the calendar date as written.
///
/// Timestamps with a time or offset part are truncated without timezone
/// conversion, so `2020-01-02 00:00:00-05:00` is 2020-01-02.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Some(date) = parse_bare_date(raw) {
        return Some(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.date_naive());
    }
    for fmt in OFFSET_FORMATS {
        if let Ok(ts) = DateTime::parse_from_str(raw, fmt) {
            return Some(ts.date_naive());
        }
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|ts| ts.date())
}

fn parse_bare_date(raw: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn timestamp_with_offset_is_converted_to_utc() {
        let ts = parse_timestamp("2020-06-05 22:30:54-04:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2020, 6, 6, 2, 30, 54).unwrap());
    }

    #[test]
    fn rfc3339_timestamp_parses() {
        let ts = parse_timestamp("2020-06-05T10:30:54Z").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2020, 6, 5, 10, 30, 54).unwrap());
    }

    #[test]
    fn naive_timestamp_is_taken_as_utc() {
        let ts = parse_timestamp("2020-06-05 10:30:54").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2020, 6, 5, 10, 30, 54).unwrap());
    }

    #[test]
    fn bare_date_is_midnight_utc() {
        let ts = parse_timestamp("2020-06-05").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2020, 6, 5, 0, 0, 0).unwrap());
    }

    #[test]
    fn malformed_timestamp_is_none() {
        assert!(parse_timestamp("not a date").is_none());
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("2020-13-45").is_none());
    }

    #[test]
    fn price_date_keeps_local_calendar_day() {
        assert_eq!(parse_date("2020-01-02"), Some(ymd(2020, 1, 2)));
        assert_eq!(parse_date("2020-01-02 00:00:00-05:00"), Some(ymd(2020, 1, 2)));
        assert_eq!(parse_date("2020-01-02 16:00:00"), Some(ymd(2020, 1, 2)));
        assert!(parse_date("yesterday").is_none());
    }
}
