mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{FailingCache, MemoryCache};
use url_resolver::prelude::*;

#[tokio::test]
async fn test_window_admits_limit_then_denies() {
    let limiter = RateLimiter::new(Arc::new(MemoryCache::new()), 200, 3600);

    let first = limiter.check_and_increment("10.0.0.1", 3, 60).await;
    assert_eq!(first, RateDecision { allowed: true, remaining: 2 });

    let second = limiter.check_and_increment("10.0.0.1", 3, 60).await;
    assert_eq!(second, RateDecision { allowed: true, remaining: 1 });

    let third = limiter.check_and_increment("10.0.0.1", 3, 60).await;
    assert_eq!(third, RateDecision { allowed: true, remaining: 0 });

    let fourth = limiter.check_and_increment("10.0.0.1", 3, 60).await;
    assert_eq!(fourth, RateDecision { allowed: false, remaining: 0 });
}

#[tokio::test]
async fn test_identifiers_are_counted_independently() {
    let limiter = RateLimiter::new(Arc::new(MemoryCache::new()), 200, 3600);

    limiter.check_and_increment("10.0.0.1", 1, 60).await;
    let denied = limiter.check_and_increment("10.0.0.1", 1, 60).await;
    assert!(!denied.allowed);

    let other = limiter.check_and_increment("10.0.0.2", 1, 60).await;
    assert!(other.allowed);
}

#[tokio::test(start_paused = true)]
async fn test_window_expiry_resets_the_count() {
    let limiter = RateLimiter::new(Arc::new(MemoryCache::new()), 200, 3600);

    limiter.check_and_increment("client", 2, 60).await;
    limiter.check_and_increment("client", 2, 60).await;
    assert!(!limiter.check_and_increment("client", 2, 60).await.allowed);

    tokio::time::advance(Duration::from_secs(61)).await;

    let fresh = limiter.check_and_increment("client", 2, 60).await;
    assert_eq!(fresh, RateDecision { allowed: true, remaining: 1 });
}

#[tokio::test]
async fn test_check_uses_configured_defaults() {
    let limiter = RateLimiter::new(Arc::new(MemoryCache::new()), 2, 60);

    assert_eq!(limiter.check("client").await.remaining, 1);
    assert_eq!(limiter.check("client").await.remaining, 0);
    assert!(!limiter.check("client").await.allowed);
}

#[tokio::test]
async fn test_cache_outage_fails_open() {
    let limiter = RateLimiter::new(Arc::new(FailingCache), 200, 3600);

    // Every request is allowed while the cache is down, matching the
    // blacklist's availability bias.
    for _ in 0..5 {
        let decision = limiter.check_and_increment("client", 1, 60).await;
        assert!(decision.allowed);
        assert_eq!(decision.remaining, 1);
    }
}
