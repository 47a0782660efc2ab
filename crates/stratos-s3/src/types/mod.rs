//! Typed values shared by S3 requests and responses.

mod checksum;
mod object_ref;
mod retention;

pub use checksum::{ChecksumAlgorithm, ChecksumType};
pub use object_ref::ObjectRef;
pub use retention::RetentionMode;
