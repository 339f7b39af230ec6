//! Cache service trait and error types.

use async_trait::async_trait;
use std::fmt;

/// Errors that can occur during cache operations.
#[derive(Debug)]
pub enum CacheError {
    ConnectionError(String),
    OperationError(String),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ConnectionError(e) => write!(f, "Cache connection error: {}", e),
            Self::OperationError(e) => write!(f, "Cache operation error: {}", e),
        }
    }
}

impl std::error::Error for CacheError {}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Single-key primitives over the volatile cache.
///
/// Four stores share one implementation of this trait under distinct key
/// namespaces: the link-snapshot cache, the token blacklist, the reset-token
/// store, and the rate counters. Every operation touches exactly one key and
/// relies only on the backend's own single-key atomicity, so the shared
/// handle needs no coordination between the stores.
///
/// # Failure policy
///
/// Implementations surface transport failures as [`CacheError`]; the policy
/// for a failure is the *consumer's*, and differs deliberately per store:
/// the resolver treats errors as a miss and falls back to the durable store,
/// the token blacklist and rate limiter fail open, the reset-token store
/// degrades to "no token". A cache outage must never take the service down.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed implementation
/// - [`crate::infrastructure::cache::NullCache`] - No-op degraded mode
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Reads the string value stored at `key`, if any.
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Writes `value` at `key` with a TTL after which the backend evicts it.
    async fn set_ex(&self, key: &str, value: &str, ttl_seconds: u64) -> CacheResult<()>;

    /// Removes `key`. Deleting an absent key is not an error.
    async fn delete(&self, key: &str) -> CacheResult<()>;

    /// Returns whether `key` currently exists.
    async fn exists(&self, key: &str) -> CacheResult<bool>;

    /// Atomically increments the integer at `key` by one, returning the new
    /// value. The key's TTL is left untouched.
    async fn incr(&self, key: &str) -> CacheResult<i64>;

    /// Checks if the cache backend is reachable.
    ///
    /// Used by health check endpoints to report cache status.
    async fn health_check(&self) -> bool;
}
