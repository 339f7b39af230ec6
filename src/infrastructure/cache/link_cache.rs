//! Typed cache for link snapshots under the `link:` namespace.

use std::sync::Arc;

use tracing::{debug, warn};

use super::service::CacheService;
use crate::domain::entities::{CachedLink, LinkRecord};

const KEY_PREFIX: &str = "link:";

/// Store of [`CachedLink`] snapshots, keyed by `link:{slug}`.
///
/// Wraps the shared cache handle with JSON encoding and the link TTL. All
/// operations are best-effort: transport failures are logged and reported as
/// a miss (reads) or swallowed (writes), never propagated, so the resolver
/// stays up when the cache is not.
#[derive(Clone)]
pub struct LinkCache {
    cache: Arc<dyn CacheService>,
    ttl_seconds: u64,
}

impl LinkCache {
    /// Creates a link cache over the shared handle.
    ///
    /// `ttl_seconds` bounds the staleness of a snapshot; entries are evicted
    /// by the backend when it elapses.
    pub fn new(cache: Arc<dyn CacheService>, ttl_seconds: u64) -> Self {
        Self { cache, ttl_seconds }
    }

    fn key(slug: &str) -> String {
        format!("{}{}", KEY_PREFIX, slug)
    }

    /// Reads the cached snapshot for `slug`.
    ///
    /// A transport failure is a miss. A payload that no longer decodes is
    /// evicted and reported as a miss, so a bad entry cannot wedge a slug.
    pub async fn get(&self, slug: &str) -> Option<CachedLink> {
        let raw = match self.cache.get(&Self::key(slug)).await {
            Ok(value) => value?,
            Err(e) => {
                warn!("cache read failed for {}: {}", slug, e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("evicting undecodable cache entry for {}: {}", slug, e);
                self.invalidate(slug).await;
                None
            }
        }
    }

    /// Writes a snapshot back after a cache miss. Best-effort.
    pub async fn store(&self, slug: &str, entry: &CachedLink) {
        let payload = match serde_json::to_string(entry) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("failed to encode cache entry for {}: {}", slug, e);
                return;
            }
        };

        if let Err(e) = self
            .cache
            .set_ex(&Self::key(slug), &payload, self.ttl_seconds)
            .await
        {
            warn!("failed to cache link {}: {}", slug, e);
        }
    }

    /// Removes the snapshot for `slug`. Best-effort.
    ///
    /// Called by the resolver when a cached entry turns out to be
    /// semantically expired, and by the CRUD subsystem when a link is
    /// deleted.
    pub async fn invalidate(&self, slug: &str) {
        if let Err(e) = self.cache.delete(&Self::key(slug)).await {
            warn!("failed to invalidate cache for {}: {}", slug, e);
        } else {
            debug!("invalidated cache for {}", slug);
        }
    }

    /// Overwrites the snapshot from a fresh durable record.
    ///
    /// This is the write-through hook for the CRUD subsystem: it must be
    /// called whenever `original_url`, `is_active`, or `expires_at` changes,
    /// so the cache never serves the old values for a full TTL.
    pub async fn refresh(&self, record: &LinkRecord) {
        self.store(&record.slug, &CachedLink::from(record)).await;
    }
}
