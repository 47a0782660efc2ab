#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

// Tracing target constants for consistent logging
pub const TRACING_TARGET_RESPONSE: &str = "stratos_s3::response";
pub const TRACING_TARGET_ARGS: &str = "stratos_s3::args";
pub const TRACING_TARGET_CREDENTIALS: &str = "stratos_s3::credentials";

pub mod args;
pub mod credentials;
pub mod headers;
pub mod response;
pub mod types;

pub use stratos_core::Headers;

// Re-export for convenience
pub use crate::args::{DownloadObjectArgs, DownloadObjectArgsBuilder};
pub use crate::credentials::Credentials;
pub use crate::response::HeadObjectResponse;
pub use crate::types::{ChecksumAlgorithm, ChecksumType, ObjectRef, RetentionMode};

/// Error type for S3 protocol operations.
#[derive(Debug, thiserror::Error)]
#[must_use = "errors should be handled appropriately"]
pub enum Error {
    /// Configuration error.
    ///
    /// This includes missing environment variables and other issues with
    /// how the client is set up, as opposed to a malformed request.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An argument supplied to a request builder failed validation.
    ///
    /// Raised at the setter that received the value; already-accumulated
    /// builder state is unaffected.
    #[error("Invalid argument `{field}`: {reason}")]
    InvalidArgument {
        /// Name of the rejected field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// A structurally required response header is absent.
    #[error("Missing response header `{header}`")]
    MissingHeader {
        /// Name of the absent header.
        header: &'static str,
    },

    /// A response header is present but does not parse.
    ///
    /// Only raised for headers whose failure is fatal to the decode;
    /// optional headers degrade to unset values instead.
    #[error("Failed to decode response header `{header}`: {reason}")]
    Decode {
        /// Name of the unparsable header.
        header: &'static str,
        /// Why the value did not parse.
        reason: String,
    },

    /// Underlying protocol plumbing error.
    #[error(transparent)]
    Core(#[from] stratos_core::Error),
}

impl Error {
    /// Returns whether this error indicates a configuration issue.
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config(_))
    }

    /// Returns whether this error indicates a rejected builder argument.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument { .. })
    }

    /// Returns whether this error indicates a failed response decode.
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::MissingHeader { .. } | Error::Decode { .. })
    }
}

/// Specialized [`Result`] type for S3 protocol operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
