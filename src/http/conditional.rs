//! Conditional GET support
//!
//! `Last-Modified` generation and `If-Modified-Since` evaluation.

use chrono::{DateTime, Utc};
use std::time::SystemTime;

/// Format a timestamp as an HTTP-date (`Sun, 06 Nov 1994 08:49:37 GMT`)
pub fn http_date(time: SystemTime) -> String {
    let dt: DateTime<Utc> = time.into();
    dt.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Parse an HTTP-date in the preferred IMF-fixdate form
pub fn parse_http_date(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(value.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Whether the client's cached copy is still fresh
///
/// `If-None-Match` takes precedence: when present, `If-Modified-Since` is
/// ignored and the full representation is sent. The modification time is
/// compared at one-second resolution, since that is all an HTTP-date carries.
pub fn not_modified(
    if_modified_since: Option<&str>,
    has_if_none_match: bool,
    modified: SystemTime,
) -> bool {
    if has_if_none_match {
        return false;
    }
    let Some(since) = if_modified_since.and_then(parse_http_date) else {
        return false;
    };
    let modified: DateTime<Utc> = modified.into();
    modified.timestamp() <= since.timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    fn at(secs: u64) -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(secs)
    }

    #[test]
    fn test_http_date_format() {
        assert_eq!(http_date(at(784_111_777)), "Sun, 06 Nov 1994 08:49:37 GMT");
    }

    #[test]
    fn test_parse_http_date() {
        let parsed = parse_http_date("Sun, 06 Nov 1994 08:49:37 GMT").unwrap();
        assert_eq!(parsed.timestamp(), 784_111_777);
        assert!(parse_http_date("yesterday").is_none());
    }

    #[test]
    fn test_not_modified() {
        let mtime = at(784_111_777) + Duration::from_millis(400);
        let same = Some("Sun, 06 Nov 1994 08:49:37 GMT");
        let earlier = Some("Sun, 06 Nov 1994 08:49:36 GMT");

        assert!(not_modified(same, false, mtime));
        assert!(!not_modified(earlier, false, mtime));
        assert!(!not_modified(same, true, mtime));
        assert!(!not_modified(Some("garbage"), false, mtime));
        assert!(!not_modified(None, false, mtime));
    }
}
