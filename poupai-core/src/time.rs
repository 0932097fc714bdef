//! Time utilities: backend timestamp parsing and "today" in a given zone.

use anyhow::Result;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use chrono_tz::Tz;

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Parse a backend date into a local wall-clock timestamp.
///
/// Dates are treated as local calendar dates: `2026-02-18` is midnight of
/// that day, and offset-bearing timestamps keep their own wall-clock time
/// (no conversion to the reader's zone).
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(ndt);
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}

/// Ordering key for a backend date: the UTC instant when the value carries an
/// offset, the wall clock otherwise.
pub fn parse_instant(value: &str) -> Option<NaiveDateTime> {
    match DateTime::parse_from_rfc3339(value.trim()) {
        Ok(dt) => Some(dt.naive_utc()),
        Err(_) => parse_timestamp(value),
    }
}

/// Parse an IANA zone name like "America/Sao_Paulo".
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse()
        .map_err(|_| anyhow::anyhow!("invalid timezone: {name}"))
}

/// Today's date in `tz`, or in the system zone when none is configured.
pub fn local_today(tz: Option<Tz>) -> NaiveDate {
    match tz {
        Some(tz) => Utc::now().with_timezone(&tz).date_naive(),
        None => Local::now().date_naive(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_date_only_is_local_midnight() {
        assert_eq!(parse_timestamp("2026-02-18"), Some(at(2026, 2, 18, 0, 0)));
    }

    #[test]
    fn test_parse_naive_datetimes() {
        assert_eq!(parse_timestamp("2026-02-18T14:30:00"), Some(at(2026, 2, 18, 14, 30)));
        assert_eq!(parse_timestamp("2026-02-18T14:30"), Some(at(2026, 2, 18, 14, 30)));
        assert_eq!(parse_timestamp("2026-02-18 14:30:00"), Some(at(2026, 2, 18, 14, 30)));
        assert_eq!(
            parse_timestamp("2026-02-18T14:30:00.1234567").map(|t| t.date()),
            NaiveDate::from_ymd_opt(2026, 2, 18)
        );
    }

    #[test]
    fn test_offset_keeps_wall_clock() {
        // 23:30 at -03:00 stays on the 18th even though it is the 19th in UTC
        assert_eq!(
            parse_timestamp("2026-02-18T23:30:00-03:00"),
            Some(at(2026, 2, 18, 23, 30))
        );
        assert_eq!(parse_timestamp("2026-02-18T10:00:00Z"), Some(at(2026, 2, 18, 10, 0)));
    }

    #[test]
    fn test_instant_uses_offset() {
        assert_eq!(parse_instant("2026-02-18T12:00:00-05:00"), Some(at(2026, 2, 18, 17, 0)));
        assert_eq!(parse_instant("2026-02-18T14:00:00+00:00"), Some(at(2026, 2, 18, 14, 0)));
        assert_eq!(parse_instant("2026-02-18T14:00:00"), Some(at(2026, 2, 18, 14, 0)));
        assert_eq!(parse_instant("2026-02-18"), Some(at(2026, 2, 18, 0, 0)));
        assert_eq!(parse_instant("nope"), None);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_timestamp("not-a-date"), None);
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("2026-02-30"), None);
        assert_eq!(parse_timestamp("18/02/2026"), None);
    }

    #[test]
    fn test_parse_timezone() {
        assert!(parse_timezone("America/Sao_Paulo").is_ok());
        assert!(parse_timezone("Mars/Olympus").is_err());
    }
}
