//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations over the cache and the durable
//! store, and owns the per-component failure policies (fall back, fail open)
//! described in each service's docs.
//!
//! # Available Services
//!
//! - [`services::resolver::LinkResolver`] - Cache-aside slug resolution
//! - [`services::token_blacklist::TokenBlacklist`] - Credential revocation list
//! - [`services::reset_tokens::ResetTokenStore`] - Single-use reset tokens
//! - [`services::rate_limiter::RateLimiter`] - Fixed-window rate counting

pub mod services;
