//! Single-use password-reset token store.

use std::sync::Arc;

use tracing::warn;

use crate::infrastructure::cache::CacheService;

const KEY_PREFIX: &str = "reset:";

/// Maps opaque reset tokens to user identifiers with a TTL.
///
/// Tokens are generated by the caller (cryptographically random, opaque to
/// this store); this component only persists the token→user mapping until it
/// is redeemed or expires.
///
/// # Single-use contract
///
/// The store does not auto-invalidate on read. A redemption must pair
/// [`resolve`](Self::resolve) with [`invalidate`](Self::invalidate), or use
/// [`redeem`](Self::redeem) which does both; otherwise the token remains
/// redeemable until its TTL elapses.
pub struct ResetTokenStore {
    cache: Arc<dyn CacheService>,
    default_ttl_seconds: u64,
}

impl ResetTokenStore {
    /// Creates a reset-token store over the shared cache handle.
    pub fn new(cache: Arc<dyn CacheService>, default_ttl_seconds: u64) -> Self {
        Self {
            cache,
            default_ttl_seconds,
        }
    }

    fn key(token: &str) -> String {
        format!("{}{}", KEY_PREFIX, token)
    }

    /// Stores a token→user mapping for `ttl_seconds` (or the default).
    ///
    /// Returns `false` if the mapping could not be persisted; the caller
    /// should abort the reset flow rather than email a dead token.
    pub async fn store(&self, token: &str, user_id: &str, ttl_seconds: Option<u64>) -> bool {
        let ttl = ttl_seconds.unwrap_or(self.default_ttl_seconds);

        match self.cache.set_ex(&Self::key(token), user_id, ttl).await {
            Ok(()) => true,
            Err(e) => {
                warn!("failed to store reset token: {}", e);
                false
            }
        }
    }

    /// Looks up the user a token belongs to without consuming it.
    pub async fn resolve(&self, token: &str) -> Option<String> {
        match self.cache.get(&Self::key(token)).await {
            Ok(user_id) => user_id,
            Err(e) => {
                warn!("failed to resolve reset token: {}", e);
                None
            }
        }
    }

    /// Removes a token so it can never be redeemed again.
    pub async fn invalidate(&self, token: &str) {
        if let Err(e) = self.cache.delete(&Self::key(token)).await {
            warn!("failed to invalidate reset token: {}", e);
        }
    }

    /// Resolves and consumes a token in one call.
    ///
    /// Prefer this over a hand-written resolve/invalidate pair when the
    /// caller commits to the reset immediately; forgetting the invalidate
    /// half is a token-reuse bug.
    pub async fn redeem(&self, token: &str) -> Option<String> {
        let user_id = self.resolve(token).await?;
        self.invalidate(token).await;
        Some(user_id)
    }
}
