//! Cache-aside slug resolution.

use std::collections::HashSet;
use std::sync::Arc;

use metrics::counter;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::domain::click_event::ClickEvent;
use crate::domain::entities::CachedLink;
use crate::domain::repositories::LinkStore;
use crate::error::{GoneReason, ResolveError};
use crate::infrastructure::cache::LinkCache;

/// Resolves slugs to destination URLs via cache-aside reads.
///
/// # Read Path
///
/// 1. Normalize the slug (trim, lowercase); reserved slugs are rejected
///    before any cache or store I/O so they never occupy cache slots
/// 2. Cache lookup; transport failures count as a miss
/// 3. On a hit, revalidate `is_active` and `expires_at` against the snapshot
///    (the cache TTL may outlive the link's own expiry); semantically
///    expired entries are deleted on read
/// 4. On a miss, query the durable store and write the snapshot back
///    (best-effort)
/// 5. Every successful resolution dispatches exactly one click event
///
/// # Consistency
///
/// No lock guards the write-back: concurrent misses for a hot slug may each
/// query the store and rewrite the cache. The rewritten snapshots are
/// identical for an unchanged record, so the window costs extra reads, not
/// correctness.
///
/// # Errors
///
/// Only durable-store failures propagate; see [`crate::error`].
pub struct LinkResolver<S: LinkStore> {
    store: Arc<S>,
    cache: LinkCache,
    clicks: mpsc::Sender<ClickEvent>,
    reserved_slugs: HashSet<String>,
}

impl<S: LinkStore> LinkResolver<S> {
    /// Creates a new resolver.
    ///
    /// # Arguments
    ///
    /// - `store` - durable link store
    /// - `cache` - link snapshot cache over the shared cache handle
    /// - `clicks` - bounded click queue drained by the background worker
    /// - `reserved_slugs` - slugs that must never resolve (route words like
    ///   `api` or `login`)
    pub fn new(
        store: Arc<S>,
        cache: LinkCache,
        clicks: mpsc::Sender<ClickEvent>,
        reserved_slugs: HashSet<String>,
    ) -> Self {
        Self {
            store,
            cache,
            clicks,
            reserved_slugs,
        }
    }

    /// Resolves a raw slug to its destination URL.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::NotFound`] - slug empty, reserved, or absent from
    ///   both cache and store
    /// - [`ResolveError::Gone`] - link exists but is disabled or expired
    /// - [`ResolveError::Store`] - durable store failed on the miss path
    pub async fn resolve(&self, raw_slug: &str) -> Result<String, ResolveError> {
        let slug = raw_slug.trim().to_lowercase();

        if slug.is_empty() {
            return Err(ResolveError::NotFound);
        }

        if self.reserved_slugs.contains(&slug) {
            debug!("rejected reserved slug {}", slug);
            return Err(ResolveError::NotFound);
        }

        if let Some(entry) = self.cache.get(&slug).await {
            counter!("resolver_cache_hits_total").increment(1);
            return self.serve_cached(&slug, entry).await;
        }

        counter!("resolver_cache_misses_total").increment(1);
        self.resolve_from_store(&slug).await
    }

    async fn serve_cached(&self, slug: &str, entry: CachedLink) -> Result<String, ResolveError> {
        if !entry.is_active {
            return Err(ResolveError::Gone(GoneReason::Disabled));
        }

        // The snapshot was accessible when written; its semantic expiry may
        // have passed while the cache TTL had not.
        if entry.is_expired() {
            self.cache.invalidate(slug).await;
            return Err(ResolveError::Gone(GoneReason::Expired));
        }

        self.dispatch_click(slug);
        Ok(entry.original_url)
    }

    async fn resolve_from_store(&self, slug: &str) -> Result<String, ResolveError> {
        let record = self
            .store
            .find_by_slug(slug)
            .await?
            .ok_or(ResolveError::NotFound)?;

        if !record.is_active {
            return Err(ResolveError::Gone(GoneReason::Disabled));
        }

        if record.is_expired() {
            return Err(ResolveError::Gone(GoneReason::Expired));
        }

        self.cache.store(slug, &CachedLink::from(&record)).await;

        self.dispatch_click(slug);
        Ok(record.original_url)
    }

    fn dispatch_click(&self, slug: &str) {
        if self.clicks.try_send(ClickEvent::new(slug)).is_err() {
            warn!("click queue full, dropping click for {}", slug);
        }
    }
}
