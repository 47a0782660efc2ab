//! Decoding of HEAD-object response headers.
//!
//! The service answers a HEAD request with object state spread across a
//! loosely structured header set: standard HTTP headers, `x-amz-*`
//! extensions, and an open-ended `x-amz-meta-*` namespace for user
//! metadata. [`HeadObjectResponse`] resolves all of it into a typed record
//! in a single pass over an immutable header snapshot.
//!
//! Only `Last-Modified` is structurally required; an unknown object-lock
//! mode or checksum type literal also fails the decode. Every other
//! anomaly degrades to an unset or default field, because callers rely on
//! absence-as-signal rather than errors for optional state.

use std::collections::HashMap;
use std::fmt;

use stratos_core::{Headers, parse_http_date, parse_s3_time};
use time::OffsetDateTime;
use tracing::debug;

use crate::types::{ChecksumAlgorithm, ChecksumType, RetentionMode};
use crate::{Error, Result, TRACING_TARGET_RESPONSE, headers};

/// Typed metadata of an object, decoded from HEAD-object response headers.
///
/// Immutable once constructed; every field is resolved from a single
/// header snapshot, which the value retains for read-through accessors
/// such as [`HeadObjectResponse::version_id`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadObjectResponse {
    bucket: String,
    region: String,
    object: String,
    headers: Headers,
    etag: String,
    size: i64,
    last_modified: OffsetDateTime,
    lock_mode: Option<RetentionMode>,
    lock_retain_until: Option<OffsetDateTime>,
    legal_hold: bool,
    delete_marker: bool,
    user_metadata: Headers,
    checksum_type: Option<ChecksumType>,
    checksums: Option<HashMap<ChecksumAlgorithm, String>>,
}

impl HeadObjectResponse {
    /// Decodes a response header snapshot into typed object metadata.
    ///
    /// The bucket/region/object identity is supplied by the caller that
    /// issued the request; it is carried alongside, not derived from
    /// headers.
    ///
    /// # Errors
    ///
    /// Fails if `Last-Modified` is missing or malformed, or if the
    /// object-lock mode or checksum type header carries an unrecognized
    /// literal. All other missing or malformed headers degrade to
    /// unset/default values.
    pub fn from_headers(
        headers: Headers,
        bucket: impl Into<String>,
        region: impl Into<String>,
        object: impl Into<String>,
    ) -> Result<Self> {
        let bucket = bucket.into();
        let region = region.into();
        let object = object.into();

        let etag = headers
            .get(headers::ETAG)
            .map(|value| value.replace('"', ""))
            .unwrap_or_default();

        let size = headers
            .get(headers::CONTENT_LENGTH)
            .and_then(|value| value.parse::<i64>().ok())
            .unwrap_or(-1);

        let last_modified = headers
            .get(headers::LAST_MODIFIED)
            .ok_or(Error::MissingHeader {
                header: headers::LAST_MODIFIED,
            })
            .and_then(|value| {
                parse_http_date(value).map_err(|source| Error::Decode {
                    header: headers::LAST_MODIFIED,
                    reason: source.to_string(),
                })
            })?;

        let lock_mode = headers
            .get(headers::AMZ_OBJECT_LOCK_MODE)
            .map(|value| {
                value
                    .parse::<RetentionMode>()
                    .map_err(|_| Error::Decode {
                        header: headers::AMZ_OBJECT_LOCK_MODE,
                        reason: format!("unknown retention mode '{value}'"),
                    })
            })
            .transpose()?;

        let lock_retain_until = headers
            .get(headers::AMZ_OBJECT_LOCK_RETAIN_UNTIL_DATE)
            .and_then(|value| match parse_s3_time(value) {
                Ok(parsed) => Some(parsed),
                Err(_) => {
                    debug!(
                        target: TRACING_TARGET_RESPONSE,
                        value = %value,
                        "Unparsable retain-until date, leaving unset"
                    );
                    None
                }
            });

        let legal_hold = headers.get(headers::AMZ_OBJECT_LOCK_LEGAL_HOLD) == Some("ON");

        let delete_marker = headers
            .get(headers::AMZ_DELETE_MARKER)
            .is_some_and(|value| value.eq_ignore_ascii_case("true"));

        let mut user_metadata = Headers::new();
        for (name, values) in headers.iter() {
            let lower = name.to_ascii_lowercase();
            if let Some(key) = lower.strip_prefix(headers::AMZ_META_PREFIX) {
                user_metadata.insert(key, values.to_vec());
            }
        }

        let checksum_type = headers
            .get(headers::AMZ_CHECKSUM_TYPE)
            .map(|value| {
                value.parse::<ChecksumType>().map_err(|_| Error::Decode {
                    header: headers::AMZ_CHECKSUM_TYPE,
                    reason: format!("unknown checksum type '{value}'"),
                })
            })
            .transpose()?;

        let mut checksums = HashMap::new();
        for algorithm in ChecksumAlgorithm::ALL {
            if let Some(value) = headers.get(algorithm.header())
                && !value.is_empty()
            {
                checksums.insert(algorithm, value.to_string());
            }
        }
        let checksums = (!checksums.is_empty()).then_some(checksums);

        debug!(
            target: TRACING_TARGET_RESPONSE,
            bucket = %bucket,
            object = %object,
            size = %size,
            "Decoded HEAD-object response"
        );

        Ok(Self {
            bucket,
            region,
            object,
            headers,
            etag,
            size,
            last_modified,
            lock_mode,
            lock_retain_until,
            legal_hold,
            delete_marker,
            user_metadata,
            checksum_type,
            checksums,
        })
    }

    /// Returns the bucket the response belongs to.
    #[inline]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Returns the region the response belongs to.
    #[inline]
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Returns the object key the response belongs to.
    #[inline]
    pub fn object(&self) -> &str {
        &self.object
    }

    /// Returns the raw header snapshot the response was decoded from.
    #[inline]
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Returns the entity tag with surrounding quotes stripped.
    ///
    /// Empty when the service sent no `ETag`; never `None`, so callers do
    /// not need to null-check.
    #[inline]
    pub fn etag(&self) -> &str {
        &self.etag
    }

    /// Returns the object size in bytes, or `-1` if `Content-Length` was
    /// absent.
    #[inline]
    pub fn size(&self) -> i64 {
        self.size
    }

    /// Returns when the object was last modified.
    #[inline]
    pub fn last_modified(&self) -> OffsetDateTime {
        self.last_modified
    }

    /// Returns the object-lock retention mode, if any.
    #[inline]
    pub fn lock_mode(&self) -> Option<RetentionMode> {
        self.lock_mode
    }

    /// Returns the end of the object-lock retention period, if any.
    #[inline]
    pub fn lock_retain_until(&self) -> Option<OffsetDateTime> {
        self.lock_retain_until
    }

    /// Returns whether a legal hold is in effect.
    #[inline]
    pub fn legal_hold(&self) -> bool {
        self.legal_hold
    }

    /// Returns whether the object is a delete marker.
    #[inline]
    pub fn delete_marker(&self) -> bool {
        self.delete_marker
    }

    /// Returns the `x-amz-meta-*` user metadata.
    ///
    /// Keys are the lowercased names with the prefix stripped; values keep
    /// their original content and order.
    #[inline]
    pub fn user_metadata(&self) -> &Headers {
        &self.user_metadata
    }

    /// Returns whether the checksum covers the whole object or is
    /// composite.
    #[inline]
    pub fn checksum_type(&self) -> Option<ChecksumType> {
        self.checksum_type
    }

    /// Returns the content checksums by algorithm.
    ///
    /// `None` when the response carried no checksum header at all, as
    /// opposed to an empty map.
    #[inline]
    pub fn checksums(&self) -> Option<&HashMap<ChecksumAlgorithm, String>> {
        self.checksums.as_ref()
    }

    /// Returns the object version id, read through from the snapshot.
    pub fn version_id(&self) -> Option<&str> {
        self.headers.get(headers::AMZ_VERSION_ID)
    }

    /// Returns the content type, read through from the snapshot.
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get(headers::CONTENT_TYPE)
    }
}

impl fmt::Display for HeadObjectResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HeadObjectResponse{{bucket={}, object={}, last-modified={}, size={}}}",
            self.bucket, self.object, self.last_modified, self.size
        )
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    const LAST_MODIFIED: &str = "Mon, 03 Dec 2007 09:15:30 GMT";

    fn base_headers() -> Headers {
        [(headers::LAST_MODIFIED, LAST_MODIFIED)].into_iter().collect()
    }

    fn decode(headers: Headers) -> Result<HeadObjectResponse> {
        HeadObjectResponse::from_headers(headers, "bucket", "us-east-1", "key")
    }

    #[test]
    fn test_missing_last_modified_is_fatal() {
        let headers: Headers = [(headers::ETAG, "\"abc\"")].into_iter().collect();
        let err = decode(headers).unwrap_err();
        assert!(err.is_decode());
    }

    #[test]
    fn test_malformed_last_modified_is_fatal() {
        let headers: Headers = [(headers::LAST_MODIFIED, "yesterday")].into_iter().collect();
        assert!(decode(headers).unwrap_err().is_decode());
    }

    #[test]
    fn test_only_last_modified_required() {
        let response = decode(base_headers()).unwrap();
        assert_eq!(response.etag(), "");
        assert_eq!(response.size(), -1);
        assert!(response.lock_mode().is_none());
        assert!(response.lock_retain_until().is_none());
        assert!(!response.legal_hold());
        assert!(!response.delete_marker());
        assert!(response.user_metadata().is_empty());
        assert!(response.checksum_type().is_none());
        assert!(response.checksums().is_none());
        assert!(response.version_id().is_none());
        assert!(response.content_type().is_none());
    }

    #[test]
    fn test_etag_quotes_stripped() {
        let mut headers = base_headers();
        headers.append(headers::ETAG, "\"abc123\"");
        let response = decode(headers).unwrap();
        assert_eq!(response.etag(), "abc123");
    }

    #[test]
    fn test_etag_whitespace_kept() {
        let mut headers = base_headers();
        headers.append(headers::ETAG, "\" abc \"");
        let response = decode(headers).unwrap();
        assert_eq!(response.etag(), " abc ");
    }

    #[test]
    fn test_size() {
        let mut headers = base_headers();
        headers.append(headers::CONTENT_LENGTH, "42");
        assert_eq!(decode(headers).unwrap().size(), 42);

        // Malformed length degrades like absence
        let mut headers = base_headers();
        headers.append(headers::CONTENT_LENGTH, "many");
        assert_eq!(decode(headers).unwrap().size(), -1);
    }

    #[test]
    fn test_lock_fields_independent() {
        let mut headers = base_headers();
        headers.append(headers::AMZ_OBJECT_LOCK_MODE, "GOVERNANCE");
        let response = decode(headers).unwrap();
        assert_eq!(response.lock_mode(), Some(RetentionMode::Governance));
        assert!(response.lock_retain_until().is_none());

        let mut headers = base_headers();
        headers.append(
            headers::AMZ_OBJECT_LOCK_RETAIN_UNTIL_DATE,
            "2030-01-01T00:00:00Z",
        );
        let response = decode(headers).unwrap();
        assert!(response.lock_mode().is_none());
        assert_eq!(
            response.lock_retain_until(),
            Some(datetime!(2030-01-01 00:00:00 UTC))
        );
    }

    #[test]
    fn test_unknown_lock_mode_is_fatal() {
        let mut headers = base_headers();
        headers.append(headers::AMZ_OBJECT_LOCK_MODE, "FOREVER");
        assert!(decode(headers).unwrap_err().is_decode());
    }

    #[test]
    fn test_malformed_retain_until_degrades() {
        let mut headers = base_headers();
        headers.append(headers::AMZ_OBJECT_LOCK_RETAIN_UNTIL_DATE, "soon");
        assert!(decode(headers).unwrap().lock_retain_until().is_none());
    }

    #[test]
    fn test_legal_hold_is_case_sensitive() {
        let mut headers = base_headers();
        headers.append(headers::AMZ_OBJECT_LOCK_LEGAL_HOLD, "ON");
        assert!(decode(headers).unwrap().legal_hold());

        let mut headers = base_headers();
        headers.append(headers::AMZ_OBJECT_LOCK_LEGAL_HOLD, "on");
        assert!(!decode(headers).unwrap().legal_hold());

        let mut headers = base_headers();
        headers.append(headers::AMZ_OBJECT_LOCK_LEGAL_HOLD, "OFF");
        assert!(!decode(headers).unwrap().legal_hold());
    }

    #[test]
    fn test_delete_marker_is_permissive() {
        let mut headers = base_headers();
        headers.append(headers::AMZ_DELETE_MARKER, "TRUE");
        assert!(decode(headers).unwrap().delete_marker());

        let mut headers = base_headers();
        headers.append(headers::AMZ_DELETE_MARKER, "nonsense");
        assert!(!decode(headers).unwrap().delete_marker());
    }

    #[test]
    fn test_user_metadata_prefix_and_order() {
        let mut headers = base_headers();
        headers.append("x-amz-meta-Zeta", "1");
        headers.append("X-Amz-Meta-Alpha", "Original-Case");
        headers.append("x-amz-meta-alpha", "second");
        headers.append("x-amz-metadata", "not metadata");

        let response = decode(headers).unwrap();
        let metadata = response.user_metadata();

        let keys: Vec<&str> = metadata.iter().map(|(name, _)| name).collect();
        assert_eq!(keys, ["zeta", "alpha"]);
        assert_eq!(metadata.get_all("alpha"), &["Original-Case", "second"]);
        assert!(!metadata.contains("data"));
    }

    #[test]
    fn test_checksums_present() {
        let mut headers = base_headers();
        headers.append(headers::AMZ_CHECKSUM_SHA256, "deadbeef");
        let response = decode(headers).unwrap();

        let checksums = response.checksums().unwrap();
        assert_eq!(checksums.len(), 1);
        assert_eq!(
            checksums.get(&ChecksumAlgorithm::Sha256),
            Some(&"deadbeef".to_string())
        );
    }

    #[test]
    fn test_checksums_empty_value_ignored() {
        let mut headers = base_headers();
        headers.append(headers::AMZ_CHECKSUM_SHA256, "");
        assert!(decode(headers).unwrap().checksums().is_none());
    }

    #[test]
    fn test_unknown_checksum_type_is_fatal() {
        let mut headers = base_headers();
        headers.append(headers::AMZ_CHECKSUM_TYPE, "PARTIAL");
        assert!(decode(headers).unwrap_err().is_decode());
    }

    #[test]
    fn test_checksum_type_parsed() {
        let mut headers = base_headers();
        headers.append(headers::AMZ_CHECKSUM_TYPE, "FULL_OBJECT");
        assert_eq!(
            decode(headers).unwrap().checksum_type(),
            Some(ChecksumType::FullObject)
        );
    }

    #[test]
    fn test_read_through_accessors() {
        let mut headers = base_headers();
        headers.append(headers::AMZ_VERSION_ID, "v123");
        headers.append(headers::CONTENT_TYPE, "application/json");

        let response = decode(headers).unwrap();
        assert_eq!(response.version_id(), Some("v123"));
        assert_eq!(response.content_type(), Some("application/json"));
    }

    #[test]
    fn test_full_scenario() {
        let headers: Headers = [
            ("ETag", "\"x\""),
            ("Content-Length", "10"),
            ("Last-Modified", LAST_MODIFIED),
            ("x-amz-meta-Foo", "bar"),
        ]
        .into_iter()
        .collect();

        let response =
            HeadObjectResponse::from_headers(headers, "bucket", "us-east-1", "key").unwrap();

        assert_eq!(response.etag(), "x");
        assert_eq!(response.size(), 10);
        assert_eq!(response.last_modified(), datetime!(2007-12-03 09:15:30 UTC));
        assert_eq!(response.user_metadata().get_all("foo"), &["bar"]);
        assert_eq!(response.bucket(), "bucket");
        assert_eq!(response.object(), "key");

        let summary = response.to_string();
        assert!(summary.contains("bucket=bucket"));
        assert!(summary.contains("size=10"));
    }
}
