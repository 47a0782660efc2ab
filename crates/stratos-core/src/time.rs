//! Timestamp formats used on the S3 wire.
//!
//! Two distinct formats are in play and must not be conflated:
//!
//! - **HTTP-date**: the RFC 1123 style `Mon, 03 Dec 2007 09:15:30 GMT`
//!   carried by `Last-Modified` and the `If-(Un)Modified-Since` request
//!   headers. Always GMT, English month and weekday names.
//! - **S3 time**: the service's ISO-8601 variant carried by
//!   `x-amz-object-lock-retain-until-date`, RFC 3339 with optional
//!   fractional seconds, plus the condensed `yyyyMMddTHHmmssZ` form the
//!   service emits in some fields.

use ::time::format_description::BorrowedFormatItem;
use ::time::format_description::well_known::Rfc3339;
use ::time::macros::format_description;
use ::time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

use crate::{Error, Result};

/// RFC 1123 style HTTP-date, anchored to GMT.
const HTTP_DATE: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
);

/// Condensed ISO-8601 form without separators, e.g. `20071203T091530Z`.
const S3_TIME_CONDENSED: &[BorrowedFormatItem<'static>] =
    format_description!("[year][month][day]T[hour][minute][second]Z");

/// Parses an HTTP-date header value, e.g. `Mon, 03 Dec 2007 09:15:30 GMT`.
pub fn parse_http_date(value: &str) -> Result<OffsetDateTime> {
    PrimitiveDateTime::parse(value, HTTP_DATE)
        .map(PrimitiveDateTime::assume_utc)
        .map_err(|source| Error::Timestamp {
            value: value.to_string(),
            source,
        })
}

/// Renders a timestamp as an HTTP-date header value.
///
/// The timestamp is converted to UTC first; HTTP-date is always GMT.
pub fn format_http_date(value: OffsetDateTime) -> Result<String> {
    value
        .to_offset(UtcOffset::UTC)
        .format(HTTP_DATE)
        .map_err(Error::from)
}

/// Parses the service's ISO-8601 timestamp variant.
///
/// Accepts RFC 3339 with or without fractional seconds
/// (`2025-01-01T00:00:00.000Z`) and falls back to the condensed
/// `yyyyMMddTHHmmssZ` form.
pub fn parse_s3_time(value: &str) -> Result<OffsetDateTime> {
    if let Ok(parsed) = OffsetDateTime::parse(value, &Rfc3339) {
        return Ok(parsed);
    }

    PrimitiveDateTime::parse(value, S3_TIME_CONDENSED)
        .map(PrimitiveDateTime::assume_utc)
        .map_err(|source| Error::Timestamp {
            value: value.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use ::time::macros::datetime;

    use super::*;

    #[test]
    fn test_parse_http_date() {
        let parsed = parse_http_date("Mon, 03 Dec 2007 09:15:30 GMT").unwrap();
        assert_eq!(parsed, datetime!(2007-12-03 09:15:30 UTC));
    }

    #[test]
    fn test_parse_http_date_rejects_garbage() {
        assert!(parse_http_date("not a date").is_err());
        assert!(parse_http_date("2007-12-03T09:15:30Z").is_err());
        assert!(parse_http_date("").is_err());
    }

    #[test]
    fn test_format_http_date() {
        let formatted = format_http_date(datetime!(2007-12-03 09:15:30 UTC)).unwrap();
        assert_eq!(formatted, "Mon, 03 Dec 2007 09:15:30 GMT");
    }

    #[test]
    fn test_format_http_date_converts_to_gmt() {
        let formatted = format_http_date(datetime!(2007-12-03 10:15:30 +1)).unwrap();
        assert_eq!(formatted, "Mon, 03 Dec 2007 09:15:30 GMT");
    }

    #[test]
    fn test_http_date_round_trip() {
        let original = datetime!(2024-02-29 23:59:59 UTC);
        let reparsed = parse_http_date(&format_http_date(original).unwrap()).unwrap();
        assert_eq!(reparsed, original);
    }

    #[test]
    fn test_parse_s3_time_rfc3339() {
        let parsed = parse_s3_time("2025-01-01T00:00:00Z").unwrap();
        assert_eq!(parsed, datetime!(2025-01-01 00:00:00 UTC));

        let parsed = parse_s3_time("2025-01-01T00:00:00.000Z").unwrap();
        assert_eq!(parsed, datetime!(2025-01-01 00:00:00 UTC));
    }

    #[test]
    fn test_parse_s3_time_condensed() {
        let parsed = parse_s3_time("20071203T091530Z").unwrap();
        assert_eq!(parsed, datetime!(2007-12-03 09:15:30 UTC));
    }

    #[test]
    fn test_parse_s3_time_rejects_http_date() {
        let err = parse_s3_time("Mon, 03 Dec 2007 09:15:30 GMT").unwrap_err();
        assert!(err.is_timestamp());
    }
}
