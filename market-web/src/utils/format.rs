//! Date formatting for tables and chart axes.

use chrono::{DateTime, NaiveDate, Utc};

/// Short axis label, e.g. "Jan 5".
pub fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Table label, e.g. "05 Jan 2025".
pub fn medium_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

/// Timestamp label for forum entries, e.g. "05 Jan 2025 14:30".
pub fn timestamp(at: &DateTime<Utc>) -> String {
    at.format("%d %b %Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_short_date() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        assert_eq!(short_date(date), "Jan 5");
        let date = NaiveDate::from_ymd_opt(2025, 11, 21).unwrap();
        assert_eq!(short_date(date), "Nov 21");
    }

    #[test]
    fn test_medium_date() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        assert_eq!(medium_date(date), "05 Jan 2025");
    }

    #[test]
    fn test_timestamp() {
        let at = Utc.with_ymd_and_hms(2025, 1, 5, 14, 30, 0).unwrap();
        assert_eq!(timestamp(&at), "05 Jan 2025 14:30");
    }
}
