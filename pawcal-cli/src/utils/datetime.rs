//! Parsing of the date/time arguments commands accept.

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a local date-time such as "2025-03-20T15:00" or "2025-03-20 15:00".
/// A bare date means midnight.
pub fn parse_datetime(s: &str) -> Result<NaiveDateTime> {
    let s = s.trim();

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(dt);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date.and_time(chrono::NaiveTime::MIN));
    }

    anyhow::bail!("Invalid date/time '{}'. Expected YYYY-MM-DDTHH:MM", s)
}

/// Parse YYYY-MM-DD.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid date format '{}'. Expected YYYY-MM-DD", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_datetime_formats() {
        let expected = NaiveDate::from_ymd_opt(2025, 3, 20)
            .unwrap()
            .and_hms_opt(15, 0, 0)
            .unwrap();

        assert_eq!(parse_datetime("2025-03-20T15:00").unwrap(), expected);
        assert_eq!(parse_datetime("2025-03-20 15:00").unwrap(), expected);
        assert_eq!(parse_datetime("2025-03-20T15:00:00").unwrap(), expected);
        assert_eq!(
            parse_datetime("2025-03-20").unwrap(),
            expected.date().and_hms_opt(0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_datetime("tomorrow at 3").is_err());
        assert!(parse_date("2025-13-01").is_err());
    }
}
