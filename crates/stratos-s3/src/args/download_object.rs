//! Arguments of a conditional object download.
//!
//! A download request accumulates named constraints one at a time: the
//! destination path, an overwrite flag, and up to four independent
//! conditional-request constraints (entity-tag match/no-match,
//! modification-time bounds). Each setter validates its input at the
//! moment it is supplied; a rejected value aborts that mutation only,
//! leaving the builder and its accumulated state usable.
//!
//! The four conditional constraints are deliberately not checked for
//! mutual exclusivity here. Whether a combination is acceptable is the
//! server's call; the client stays permissive.

use std::fmt;

use stratos_core::{Headers, format_http_date};
use time::OffsetDateTime;

use crate::types::ObjectRef;
use crate::{Error, Result, headers};

/// Finalized arguments of a conditional object download.
///
/// Immutable; build one through [`DownloadObjectArgs::builder`]. Equality
/// and hashing cover every field including the object identity, so values
/// can serve as cache or deduplication keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DownloadObjectArgs {
    object: ObjectRef,
    filename: String,
    overwrite: bool,
    match_etag: Option<String>,
    not_match_etag: Option<String>,
    modified_since: Option<OffsetDateTime>,
    unmodified_since: Option<OffsetDateTime>,
}

impl DownloadObjectArgs {
    /// Starts building download arguments for `object` in `bucket`.
    pub fn builder(
        bucket: impl Into<String>,
        object: impl Into<String>,
    ) -> DownloadObjectArgsBuilder {
        DownloadObjectArgsBuilder {
            object: ObjectRef::new(bucket, object),
            filename: None,
            overwrite: false,
            match_etag: None,
            not_match_etag: None,
            modified_since: None,
            unmodified_since: None,
        }
    }

    /// Returns the identity of the object to download.
    #[inline]
    pub fn object(&self) -> &ObjectRef {
        &self.object
    }

    /// Returns the destination path for the downloaded content.
    #[inline]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Returns whether an existing file at the destination may be
    /// replaced.
    ///
    /// Enforced by the collaborator performing the actual write, not
    /// here.
    #[inline]
    pub fn overwrite(&self) -> bool {
        self.overwrite
    }

    /// Returns the entity tag the object must match, if constrained.
    #[inline]
    pub fn match_etag(&self) -> Option<&str> {
        self.match_etag.as_deref()
    }

    /// Returns the entity tag the object must not match, if constrained.
    #[inline]
    pub fn not_match_etag(&self) -> Option<&str> {
        self.not_match_etag.as_deref()
    }

    /// Returns the lower modification-time bound, if constrained.
    #[inline]
    pub fn modified_since(&self) -> Option<OffsetDateTime> {
        self.modified_since
    }

    /// Returns the upper modification-time bound, if constrained.
    #[inline]
    pub fn unmodified_since(&self) -> Option<OffsetDateTime> {
        self.unmodified_since
    }

    /// Encodes the conditional constraints as outbound request headers.
    ///
    /// Emits `If-Match`, `If-None-Match`, `If-Modified-Since` and
    /// `If-Unmodified-Since` for exactly the constraints that are set;
    /// timestamps are rendered in HTTP-date format.
    pub fn to_headers(&self) -> Result<Headers> {
        let mut encoded = Headers::new();
        if let Some(etag) = &self.match_etag {
            encoded.append(headers::IF_MATCH, etag.clone());
        }
        if let Some(etag) = &self.not_match_etag {
            encoded.append(headers::IF_NONE_MATCH, etag.clone());
        }
        if let Some(since) = self.modified_since {
            encoded.append(headers::IF_MODIFIED_SINCE, format_http_date(since)?);
        }
        if let Some(since) = self.unmodified_since {
            encoded.append(headers::IF_UNMODIFIED_SINCE, format_http_date(since)?);
        }
        Ok(encoded)
    }
}

impl fmt::Display for DownloadObjectArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DownloadObjectArgs{{bucket={}, object={}, filename={}}}",
            self.object.bucket(),
            self.object.object(),
            self.filename
        )
    }
}

/// Staging state for [`DownloadObjectArgs`].
///
/// Setters validate eagerly and take `&mut self`, so a rejected value
/// leaves prior accumulated state intact and the builder usable.
#[derive(Debug, Clone)]
pub struct DownloadObjectArgsBuilder {
    object: ObjectRef,
    filename: Option<String>,
    overwrite: bool,
    match_etag: Option<String>,
    not_match_etag: Option<String>,
    modified_since: Option<OffsetDateTime>,
    unmodified_since: Option<OffsetDateTime>,
}

impl DownloadObjectArgsBuilder {
    /// Sets the destination path for the downloaded content.
    ///
    /// # Errors
    ///
    /// Fails if `path` is empty. The path is not checked against the
    /// filesystem; existence and overwrite are resolved by the
    /// collaborator performing the write.
    pub fn filename(&mut self, path: impl Into<String>) -> Result<&mut Self> {
        let path = path.into();
        if path.is_empty() {
            return Err(Error::InvalidArgument {
                field: "filename",
                reason: "must not be empty".to_string(),
            });
        }
        self.filename = Some(path);
        Ok(self)
    }

    /// Sets whether an existing file at the destination may be replaced.
    pub fn overwrite(&mut self, flag: bool) -> &mut Self {
        self.overwrite = flag;
        self
    }

    /// Constrains the download to an object matching `etag`.
    ///
    /// `None` clears the constraint.
    ///
    /// # Errors
    ///
    /// Fails if `etag` is `Some` but empty.
    pub fn match_etag(&mut self, etag: Option<&str>) -> Result<&mut Self> {
        self.match_etag = Self::validated_etag("match_etag", etag)?;
        Ok(self)
    }

    /// Constrains the download to an object not matching `etag`.
    ///
    /// `None` clears the constraint.
    ///
    /// # Errors
    ///
    /// Fails if `etag` is `Some` but empty.
    pub fn not_match_etag(&mut self, etag: Option<&str>) -> Result<&mut Self> {
        self.not_match_etag = Self::validated_etag("not_match_etag", etag)?;
        Ok(self)
    }

    /// Constrains the download to an object modified after `since`.
    ///
    /// `None` clears the constraint.
    pub fn modified_since(&mut self, since: Option<OffsetDateTime>) -> &mut Self {
        self.modified_since = since;
        self
    }

    /// Constrains the download to an object not modified after `since`.
    ///
    /// `None` clears the constraint.
    pub fn unmodified_since(&mut self, since: Option<OffsetDateTime>) -> &mut Self {
        self.unmodified_since = since;
        self
    }

    /// Sets the region of the bucket. `None` clears it.
    pub fn region(&mut self, region: Option<&str>) -> &mut Self {
        self.object.set_region(region.map(str::to_string));
        self
    }

    /// Sets the object version to download. `None` clears it.
    pub fn version_id(&mut self, version_id: Option<&str>) -> &mut Self {
        self.object.set_version_id(version_id.map(str::to_string));
        self
    }

    /// Sets the byte range to download.
    pub fn range(&mut self, offset: Option<u64>, length: Option<u64>) -> &mut Self {
        self.object.set_range(offset, length);
        self
    }

    /// Finalizes the accumulated mutations into an immutable value.
    ///
    /// Per-field validation already happened at each setter; this step
    /// checks only cross-field well-formedness: the object reference and
    /// the presence of a destination path.
    ///
    /// # Errors
    ///
    /// Fails if the object reference is malformed or no filename was
    /// supplied.
    pub fn build(&self) -> Result<DownloadObjectArgs> {
        self.object.validate()?;
        let filename = self.filename.clone().ok_or(Error::InvalidArgument {
            field: "filename",
            reason: "is required".to_string(),
        })?;

        Ok(DownloadObjectArgs {
            object: self.object.clone(),
            filename,
            overwrite: self.overwrite,
            match_etag: self.match_etag.clone(),
            not_match_etag: self.not_match_etag.clone(),
            modified_since: self.modified_since,
            unmodified_since: self.unmodified_since,
        })
    }

    fn validated_etag(field: &'static str, etag: Option<&str>) -> Result<Option<String>> {
        match etag {
            Some("") => Err(Error::InvalidArgument {
                field,
                reason: "must be unset or non-empty".to_string(),
            }),
            other => Ok(other.map(str::to_string)),
        }
    }
}
