//! Validated request arguments for S3 operations.

mod download_object;

pub use download_object::{DownloadObjectArgs, DownloadObjectArgsBuilder};
