//! Caching layer shared by the resolver and the TTL-keyed stores.
//!
//! Provides a [`CacheService`] trait with two implementations:
//! - [`RedisCache`] - Production Redis-backed cache
//! - [`NullCache`] - No-op implementation for disabled caching
//!
//! plus [`LinkCache`], the typed `link:{slug}` snapshot store, and
//! [`init_cache`], the single connection attempt made at startup.

mod link_cache;
mod null_cache;
mod redis_cache;
mod service;

use std::sync::Arc;

use tracing::{info, warn};

pub use link_cache::LinkCache;
pub use null_cache::NullCache;
pub use redis_cache::RedisCache;
pub use service::{CacheError, CacheResult, CacheService};

/// Establishes the process-wide cache handle.
///
/// Call once at startup and inject the returned handle into every component
/// that needs it. The connection is attempted exactly once: if `redis_url`
/// is absent or the attempt fails, the degraded [`NullCache`] is installed
/// for the life of the process and every consumer falls back to its
/// documented cache-miss behavior. No error is raised either way.
pub async fn init_cache(redis_url: Option<&str>) -> Arc<dyn CacheService> {
    match redis_url {
        Some(url) => match RedisCache::connect(url).await {
            Ok(redis) => {
                info!("Cache enabled (Redis)");
                Arc::new(redis)
            }
            Err(e) => {
                warn!("Failed to connect to Redis: {}. Using NullCache.", e);
                Arc::new(NullCache::new())
            }
        },
        None => {
            info!("Cache disabled (NullCache)");
            Arc::new(NullCache::new())
        }
    }
}
