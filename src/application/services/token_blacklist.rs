//! Revocation list for authentication credentials.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::infrastructure::cache::CacheService;

const KEY_PREFIX: &str = "blacklist:";
const REVOKED_MARKER: &str = "1";

/// TTL-keyed revocation list, keyed by the credential's jti.
///
/// An entry's TTL should equal the remaining lifetime of the credential it
/// revokes, so entries expire together with the credential and never need a
/// cleanup job.
///
/// # Trust trade-off
///
/// Both operations fail open: if the cache is unavailable, `revoke` is a
/// no-op and `is_revoked` reports `false`. Availability over safety: a cache
/// outage must not lock out every authenticated user, at the cost of
/// honoring revoked credentials until the cache returns. This is a
/// deliberate product decision, not a fallback of convenience.
pub struct TokenBlacklist {
    cache: Arc<dyn CacheService>,
    default_ttl_seconds: u64,
}

impl TokenBlacklist {
    /// Creates a blacklist over the shared cache handle.
    ///
    /// `default_ttl_seconds` caps entries revoked without an explicit TTL;
    /// callers normally pass the credential's remaining lifetime instead.
    pub fn new(cache: Arc<dyn CacheService>, default_ttl_seconds: u64) -> Self {
        Self {
            cache,
            default_ttl_seconds,
        }
    }

    fn key(jti: &str) -> String {
        format!("{}{}", KEY_PREFIX, jti)
    }

    /// Marks a credential as revoked for `ttl_seconds` (or the default).
    pub async fn revoke(&self, jti: &str, ttl_seconds: Option<u64>) {
        let ttl = ttl_seconds.unwrap_or(self.default_ttl_seconds);

        match self.cache.set_ex(&Self::key(jti), REVOKED_MARKER, ttl).await {
            Ok(()) => debug!("token revoked (ttl {}s)", ttl),
            Err(e) => warn!("failed to revoke token, cache unavailable: {}", e),
        }
    }

    /// Returns whether a credential has been revoked.
    ///
    /// Called on every authenticated request before trusting a credential.
    /// Reports `false` when the cache is unavailable (fail open).
    pub async fn is_revoked(&self, jti: &str) -> bool {
        match self.cache.exists(&Self::key(jti)).await {
            Ok(revoked) => revoked,
            Err(e) => {
                warn!("blacklist check failed, failing open: {}", e);
                false
            }
        }
    }
}
