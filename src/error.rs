//! Error taxonomy for the resolution core.
//!
//! Failures fall into two classes with very different propagation rules:
//!
//! - **Durable-store failures** ([`StoreError`]) are fatal for the request
//!   that hit them. There is no further fallback once the database is the
//!   source of truth, so they surface to the caller of
//!   [`crate::application::services::LinkResolver::resolve`].
//! - **Cache transport failures** ([`crate::infrastructure::cache::CacheError`])
//!   are never fatal. Each consumer recovers locally: the resolver treats
//!   them as a miss, the token blacklist and rate limiter fail open.

use std::fmt;

use thiserror::Error;

/// Why an existing link is no longer served.
///
/// Distinguished from [`ResolveError::NotFound`] so clients can render a
/// specific message (the HTTP layer maps these to `410 Gone`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoneReason {
    /// The owning user switched the link off.
    Disabled,
    /// The link's `expires_at` has passed.
    Expired,
}

impl fmt::Display for GoneReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Disabled => write!(f, "disabled"),
            Self::Expired => write!(f, "expired"),
        }
    }
}

/// Errors from the durable link store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("durable store unavailable: {0}")]
    Unavailable(String),
}

/// Outcome of a failed slug resolution.
///
/// `NotFound` and `Gone` are expected terminal outcomes, not faults; only
/// [`ResolveError::Store`] indicates a server-side failure.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("short link not found")]
    NotFound,

    #[error("short link gone: {0}")]
    Gone(GoneReason),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ResolveError {
    /// Returns true for the 404-equivalent outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Returns the gone reason, if this is a 410-equivalent outcome.
    pub fn gone_reason(&self) -> Option<GoneReason> {
        match self {
            Self::Gone(reason) => Some(*reason),
            _ => None,
        }
    }
}
