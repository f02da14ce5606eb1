//! RFC-1123 `Last-Modified` parsing.

use chrono::{DateTime, Utc};

use crate::error::FetchError;

/// Parse an RFC-1123 date (`Sun, 06 Nov 1994 08:49:37 GMT`) into UTC.
///
/// This is the only format accepted; a value in any other form is a
/// [`FetchError::Timestamp`] and the caller must not fall back to guessing.
pub fn parse_http_date(value: &str) -> Result<DateTime<Utc>, FetchError> {
    let parsed = DateTime::parse_from_rfc2822(value).map_err(|source| FetchError::Timestamp {
        value: value.to_owned(),
        source,
    })?;
    Ok(parsed.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn parses_gmt_dates_to_utc() {
        let parsed = parse_http_date("Sun, 06 Nov 1994 08:49:37 GMT").expect("parse");
        assert_eq!(parsed, Utc.with_ymd_and_hms(1994, 11, 6, 8, 49, 37).unwrap());
    }

    #[test]
    fn parses_numeric_offset_and_normalizes() {
        let parsed = parse_http_date("Wed, 21 Feb 2024 17:30:00 +0100").expect("parse");
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 2, 21, 16, 30, 0).unwrap());
    }

    #[test]
    fn rejects_malformed_values() {
        let err = parse_http_date("2024-02-21T17:30:00Z").expect_err("must not parse");
        match err {
            FetchError::Timestamp { value, .. } => assert_eq!(value, "2024-02-21T17:30:00Z"),
            other => panic!("expected timestamp error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_empty_values() {
        assert!(parse_http_date("").is_err());
    }
}
