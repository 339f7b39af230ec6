//! No-op cache implementation for the degraded mode.

use super::service::{CacheResult, CacheService};
use async_trait::async_trait;
use tracing::debug;

/// A cache implementation that does nothing.
///
/// Installed when Redis is not configured or the one connection attempt at
/// startup failed. Every read is a miss and every write succeeds without
/// storing anything, so consumers see their documented degraded behavior:
/// the resolver serves from the durable store, the blacklist reports nothing
/// revoked, the rate limiter always allows.
pub struct NullCache;

impl NullCache {
    /// Creates a new NullCache instance.
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheService for NullCache {
    async fn get(&self, _key: &str) -> CacheResult<Option<String>> {
        Ok(None)
    }

    async fn set_ex(&self, _key: &str, _value: &str, _ttl_seconds: u64) -> CacheResult<()> {
        Ok(())
    }

    async fn delete(&self, _key: &str) -> CacheResult<()> {
        Ok(())
    }

    async fn exists(&self, _key: &str) -> CacheResult<bool> {
        Ok(false)
    }

    async fn incr(&self, _key: &str) -> CacheResult<i64> {
        Ok(1)
    }

    async fn health_check(&self) -> bool {
        true
    }
}
