//! Display formatting for link and user tables

use chrono::{DateTime, Local, TimeZone, Utc};

/// Day/month/2-digit year, 24-hour clock (en-GB short form)
pub const DATE_FORMAT: &str = "%d/%m/%y, %H:%M";

/// Shorten `url` to `max` characters plus an ellipsis.
///
/// Counts characters, not bytes, so multibyte URLs never split mid-char.
pub fn truncate_url(url: &str, max: usize) -> String {
    if url.chars().count() > max {
        let head: String = url.chars().take(max).collect();
        format!("{}...", head)
    } else {
        url.to_string()
    }
}

/// Render a timestamp in the given zone using [`DATE_FORMAT`]
pub fn format_timestamp<Tz: TimeZone>(ts: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    ts.with_timezone(tz).format(DATE_FORMAT).to_string()
}

/// Render a timestamp in the machine's local zone
pub fn format_local(ts: &DateTime<Utc>) -> String {
    format_timestamp(ts, &Local)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_truncate_long_url() {
        let url = format!("https://example.com/{}", "a".repeat(60));
        let out = truncate_url(&url, 40);
        assert_eq!(out.chars().count(), 43);
        assert!(out.ends_with("..."));
        assert!(url.starts_with(out.trim_end_matches("...")));
    }

    #[test]
    fn test_truncate_short_and_exact() {
        assert_eq!(truncate_url("https://a.b", 40), "https://a.b");
        let exact = "x".repeat(40);
        assert_eq!(truncate_url(&exact, 40), exact);
        let over = "x".repeat(41);
        assert_eq!(truncate_url(&over, 40).len(), 43);
    }

    #[test]
    fn test_truncate_multibyte() {
        let url = "https://例子.测试/".to_string() + &"路".repeat(50);
        let out = truncate_url(&url, 50);
        assert_eq!(out.chars().count(), 53);
    }

    #[test]
    fn test_format_timestamp_utc() {
        let ts = Utc.with_ymd_and_hms(2025, 3, 7, 9, 5, 0).unwrap();
        assert_eq!(format_timestamp(&ts, &Utc), "07/03/25, 09:05");
    }

    #[test]
    fn test_format_timestamp_24h_with_offset() {
        let ts = Utc.with_ymd_and_hms(2025, 12, 31, 22, 30, 0).unwrap();
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(format_timestamp(&ts, &plus_two), "01/01/26, 00:30");
    }
}
