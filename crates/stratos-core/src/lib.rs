#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

pub mod http;
pub mod time;

// Re-export for convenience
pub use crate::http::Headers;
pub use crate::time::{format_http_date, parse_http_date, parse_s3_time};

/// Error type for shared protocol plumbing.
#[derive(Debug, thiserror::Error)]
#[must_use = "errors should be handled appropriately"]
pub enum Error {
    /// A timestamp string did not match the expected wire format.
    ///
    /// Carries the offending input so callers can report which header
    /// value failed to parse.
    #[error("Invalid timestamp '{value}': {source}")]
    Timestamp {
        /// The input that failed to parse.
        value: String,
        /// The underlying parse error.
        source: ::time::error::Parse,
    },

    /// A timestamp could not be rendered into its wire format.
    #[error("Timestamp formatting failed: {0}")]
    Format(#[from] ::time::error::Format),
}

impl Error {
    /// Returns whether this error came from parsing a timestamp.
    pub fn is_timestamp(&self) -> bool {
        matches!(self, Error::Timestamp { .. })
    }
}

/// Specialized [`Result`] type for stratos-core operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
