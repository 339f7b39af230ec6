//! Fixed-window rate counter on the cache substrate.

use std::sync::Arc;

use tracing::warn;

use crate::infrastructure::cache::CacheService;

const KEY_PREFIX: &str = "rate:";

/// Outcome of a rate-limit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateDecision {
    pub allowed: bool,
    /// Requests left in the current window. Reports the full limit when the
    /// limiter is failing open.
    pub remaining: u32,
}

/// Fixed-window request counter keyed by caller-chosen identifiers.
///
/// The first request in a window writes `1` with TTL = window length; each
/// subsequent request reads and increments. The window reset is the key's
/// natural expiry.
///
/// # Characteristics
///
/// - **Fixed window, not sliding**: a burst straddling a window boundary can
///   admit up to `2×limit` requests across the boundary. Known and accepted.
/// - **Fail open**: if the cache is unavailable, every request is allowed,
///   matching the blacklist's availability bias.
/// - The read/increment pair is not atomic; concurrent requests near the
///   threshold may slightly overshoot the limit. Same accepted relaxation.
pub struct RateLimiter {
    cache: Arc<dyn CacheService>,
    default_limit: u32,
    default_window_seconds: u64,
}

impl RateLimiter {
    /// Creates a rate limiter over the shared cache handle with the default
    /// window pair from configuration.
    pub fn new(cache: Arc<dyn CacheService>, default_limit: u32, default_window_seconds: u64) -> Self {
        Self {
            cache,
            default_limit,
            default_window_seconds,
        }
    }

    fn key(identifier: &str) -> String {
        format!("{}{}", KEY_PREFIX, identifier)
    }

    /// Checks `identifier` against the configured default window pair.
    pub async fn check(&self, identifier: &str) -> RateDecision {
        self.check_and_increment(identifier, self.default_limit, self.default_window_seconds)
            .await
    }

    /// Counts a request against `identifier`'s current window.
    ///
    /// Returns whether the request is allowed and how many remain in the
    /// window. Denied requests are not counted.
    pub async fn check_and_increment(
        &self,
        identifier: &str,
        limit: u32,
        window_seconds: u64,
    ) -> RateDecision {
        let rate_key = Self::key(identifier);

        let current = match self.cache.get(&rate_key).await {
            Ok(value) => value,
            Err(e) => {
                warn!("rate limit check failed, failing open: {}", e);
                return RateDecision {
                    allowed: true,
                    remaining: limit,
                };
            }
        };

        match current {
            None => {
                // First request in the window starts the counter and the
                // window clock together.
                if let Err(e) = self.cache.set_ex(&rate_key, "1", window_seconds).await {
                    warn!("failed to start rate window, failing open: {}", e);
                }
                RateDecision {
                    allowed: true,
                    remaining: limit.saturating_sub(1),
                }
            }
            Some(raw) => {
                let count: u32 = raw.parse().unwrap_or(0);

                if count >= limit {
                    return RateDecision {
                        allowed: false,
                        remaining: 0,
                    };
                }

                if let Err(e) = self.cache.incr(&rate_key).await {
                    warn!("failed to count request, failing open: {}", e);
                }

                RateDecision {
                    allowed: true,
                    remaining: limit - count - 1,
                }
            }
        }
    }
}
