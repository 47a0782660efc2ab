//! Content checksum identifiers carried in response headers.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

use crate::headers;

/// Hashing algorithm used to validate object content integrity.
///
/// Parses from and displays as the exact wire literal (`CRC32`, `CRC32C`,
/// `CRC64NVME`, `SHA1`, `SHA256`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum ChecksumAlgorithm {
    Crc32,
    Crc32c,
    Crc64Nvme,
    Sha1,
    Sha256,
}

impl ChecksumAlgorithm {
    /// Every supported algorithm, in the order response headers are probed.
    pub const ALL: [ChecksumAlgorithm; 5] = [
        ChecksumAlgorithm::Crc32,
        ChecksumAlgorithm::Crc32c,
        ChecksumAlgorithm::Crc64Nvme,
        ChecksumAlgorithm::Sha1,
        ChecksumAlgorithm::Sha256,
    ];

    /// Returns the response header carrying this algorithm's digest.
    pub fn header(&self) -> &'static str {
        match self {
            ChecksumAlgorithm::Crc32 => headers::AMZ_CHECKSUM_CRC32,
            ChecksumAlgorithm::Crc32c => headers::AMZ_CHECKSUM_CRC32C,
            ChecksumAlgorithm::Crc64Nvme => headers::AMZ_CHECKSUM_CRC64NVME,
            ChecksumAlgorithm::Sha1 => headers::AMZ_CHECKSUM_SHA1,
            ChecksumAlgorithm::Sha256 => headers::AMZ_CHECKSUM_SHA256,
        }
    }
}

/// Whether a checksum covers the whole object or is composed from
/// part-level checksums.
///
/// Parse is strict: an unrecognized literal is an error, never silently
/// dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChecksumType {
    /// Composed from part-level checksums of a multipart upload.
    Composite,
    /// Covers the entire object content.
    FullObject,
}
