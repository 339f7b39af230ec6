//! # URL Resolver
//!
//! The link-resolution cache core of a URL shortening service: cache-aside
//! redirects, asynchronous click counting, and three TTL-keyed stores
//! (credential blacklist, reset tokens, rate counters) sharing one cache
//! handle.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities, durable-store trait, click worker
//! - **Application Layer** ([`application`]) - Resolver and the TTL-keyed stores
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis cache and PostgreSQL store
//!
//! HTTP routing, link CRUD, auth protocol, and process bootstrap live in the
//! embedding application; this crate exposes the seams they plug into
//! ([`infrastructure::cache::LinkCache::refresh`] for write-through on link
//! mutation, [`application::services::TokenBlacklist`] for logout, and so
//! on).
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use tokio::sync::mpsc;
//! use url_resolver::prelude::*;
//!
//! let config = url_resolver::config::load_from_env()?;
//!
//! let pool = Arc::new(sqlx::PgPool::connect(&config.database_url).await?);
//! let cache = url_resolver::infrastructure::cache::init_cache(config.redis_url.as_deref()).await;
//!
//! let (click_tx, click_rx) = mpsc::channel(config.click_queue_capacity);
//! tokio::spawn(url_resolver::domain::click_worker::run_click_worker(
//!     click_rx,
//!     Arc::new(PgLinkStore::new(pool.clone())),
//!     config.click_worker_concurrency,
//! ));
//!
//! let resolver = LinkResolver::new(
//!     Arc::new(PgLinkStore::new(pool)),
//!     LinkCache::new(cache.clone(), config.cache_ttl_link_seconds),
//!     click_tx,
//!     config.reserved_slugs.clone(),
//! );
//! ```
//!
//! ## Failure Policy
//!
//! A cache outage never takes resolution down: the resolver falls back to
//! the durable store, the blacklist and rate limiter fail open, and the
//! reset-token store degrades to "no token". Only durable-store failures
//! surface to callers. See [`error`] for the full taxonomy.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::{GoneReason, ResolveError, StoreError};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        LinkResolver, RateDecision, RateLimiter, ResetTokenStore, TokenBlacklist,
    };
    pub use crate::domain::entities::{CachedLink, LinkRecord};
    pub use crate::domain::repositories::LinkStore;
    pub use crate::error::{GoneReason, ResolveError, StoreError};
    pub use crate::infrastructure::cache::{CacheService, LinkCache, NullCache, RedisCache};
    pub use crate::infrastructure::persistence::PgLinkStore;
}
