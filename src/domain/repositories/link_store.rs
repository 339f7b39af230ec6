//! Durable-store trait for short link records.

use crate::domain::entities::LinkRecord;
use crate::error::StoreError;
use async_trait::async_trait;

/// Authoritative store of link records, keyed by slug.
///
/// The resolution core needs exactly two operations from the durable store:
/// a point lookup and an atomic click increment. Everything else (creation,
/// updates, deletion) is owned by the CRUD subsystem.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkStore`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Finds a link by its normalized slug.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(LinkRecord))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on database errors. Callers must treat this as
    /// fatal for the request: there is no fallback behind the durable store.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<LinkRecord>, StoreError>;

    /// Atomically increments the click counter for a slug by one.
    ///
    /// A missing slug is not an error; the increment simply affects no rows
    /// (the link may have been deleted after the click was recorded).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on database errors. The click worker logs and
    /// drops these without retry.
    async fn increment_clicks(&self, slug: &str) -> Result<(), StoreError>;
}
