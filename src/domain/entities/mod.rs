//! Core domain entities for the resolution path.
//!
//! [`LinkRecord`] is the durable-store view of a short link; [`CachedLink`]
//! is the volatile snapshot the resolver writes back on a cache miss.

pub mod link;

pub use link::{CachedLink, LinkRecord};
