//! Object identity shared by read-style requests.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Identity of an object being read: bucket, key, and the optional
/// version id and byte range that narrow the read.
///
/// Equality and hashing cover every field, so finalized request arguments
/// embedding an `ObjectRef` can serve as cache or deduplication keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectRef {
    bucket: String,
    object: String,
    region: Option<String>,
    version_id: Option<String>,
    offset: Option<u64>,
    length: Option<u64>,
}

impl ObjectRef {
    /// Creates a reference to `object` in `bucket`.
    ///
    /// Well-formedness is checked by [`ObjectRef::validate`], which request
    /// builders invoke at finalize time.
    pub fn new(bucket: impl Into<String>, object: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            object: object.into(),
            region: None,
            version_id: None,
            offset: None,
            length: None,
        }
    }

    /// Returns the bucket name.
    #[inline]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Returns the object key.
    #[inline]
    pub fn object(&self) -> &str {
        &self.object
    }

    /// Returns the region, if set.
    #[inline]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Returns the version id, if set.
    #[inline]
    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }

    /// Returns the byte-range offset, if set.
    #[inline]
    pub fn offset(&self) -> Option<u64> {
        self.offset
    }

    /// Returns the byte-range length, if set.
    #[inline]
    pub fn length(&self) -> Option<u64> {
        self.length
    }

    pub(crate) fn set_region(&mut self, region: Option<String>) {
        self.region = region;
    }

    pub(crate) fn set_version_id(&mut self, version_id: Option<String>) {
        self.version_id = version_id;
    }

    pub(crate) fn set_range(&mut self, offset: Option<u64>, length: Option<u64>) {
        self.offset = offset;
        self.length = length;
    }

    /// Validates well-formedness of the reference.
    ///
    /// The bucket and object key must be non-empty; region and version id,
    /// when set, must be non-empty; a byte-range length, when set, must be
    /// greater than zero.
    pub fn validate(&self) -> Result<()> {
        if self.bucket.is_empty() {
            return Err(Error::InvalidArgument {
                field: "bucket",
                reason: "must not be empty".to_string(),
            });
        }
        if self.object.is_empty() {
            return Err(Error::InvalidArgument {
                field: "object",
                reason: "must not be empty".to_string(),
            });
        }
        if self.region.as_deref() == Some("") {
            return Err(Error::InvalidArgument {
                field: "region",
                reason: "must be unset or non-empty".to_string(),
            });
        }
        if self.version_id.as_deref() == Some("") {
            return Err(Error::InvalidArgument {
                field: "version_id",
                reason: "must be unset or non-empty".to_string(),
            });
        }
        if self.length == Some(0) {
            return Err(Error::InvalidArgument {
                field: "length",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
