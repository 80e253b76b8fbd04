//! TTL cache for Bolide query responses.
//!
//! In-memory cache keyed by the serialized query parameters, with
//! expiration but no size bound.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod cache;

pub use cache::{CacheConfig, CacheStats, ResponseCache};
