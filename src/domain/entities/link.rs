//! Link record and its cached projection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A short link as read from the durable store.
///
/// This core reads every field and mutates only `clicks` (via the click
/// worker). Creating and editing records belongs to the CRUD subsystem.
#[derive(Debug, Clone)]
pub struct LinkRecord {
    /// Case-normalized short identifier, unique in the store.
    pub slug: String,
    pub original_url: String,
    pub is_active: bool,
    /// Absent means the link never expires.
    pub expires_at: Option<DateTime<Utc>>,
    /// Monotonically non-decreasing click counter.
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl LinkRecord {
    /// Returns true if the link has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|e| Utc::now() >= e)
    }

    /// Returns true if the link may be served: active and not expired.
    pub fn is_accessible(&self) -> bool {
        self.is_active && !self.is_expired()
    }
}

/// Snapshot of a link stored in the volatile cache under `link:{slug}`.
///
/// A projection, not a source of truth: it may be stale by up to its TTL,
/// or briefly stale when the durable record changes without a write-through.
/// Readers must revalidate `is_active` and `expires_at` against wall-clock
/// time, since the cache TTL and the link's own expiry are independent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedLink {
    pub original_url: String,
    pub is_active: bool,
    pub expires_at: Option<DateTime<Utc>>,
}

impl CachedLink {
    /// Returns true if the snapshot's semantic expiry has passed.
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|e| Utc::now() >= e)
    }
}

impl From<&LinkRecord> for CachedLink {
    fn from(record: &LinkRecord) -> Self {
        Self {
            original_url: record.original_url.clone(),
            is_active: record.is_active,
            expires_at: record.expires_at,
        }
    }
}
