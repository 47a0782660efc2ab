//! HTTP wire primitives shared across stratos crates.

mod headers;

pub use headers::Headers;
