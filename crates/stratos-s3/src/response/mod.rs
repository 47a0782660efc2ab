//! Typed views over S3 response headers.

mod head_object;

pub use head_object::HeadObjectResponse;
