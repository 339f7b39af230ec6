//! PostgreSQL implementation of the durable link store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::LinkRecord;
use crate::domain::repositories::LinkStore;
use crate::error::StoreError;

/// PostgreSQL store for link lookups and click increments.
///
/// Reads only the columns the resolution core consumes; the rest of the
/// `links` schema belongs to the CRUD subsystem.
pub struct PgLinkStore {
    pool: Arc<PgPool>,
}

impl PgLinkStore {
    /// Creates a new store over a database connection pool.
    ///
    /// The click worker should be given its own `PgLinkStore` over the same
    /// pool rather than borrowing one scoped to an inbound request.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct LinkRow {
    slug: String,
    original_url: String,
    is_active: bool,
    expires_at: Option<DateTime<Utc>>,
    clicks: i64,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for LinkRecord {
    fn from(row: LinkRow) -> Self {
        Self {
            slug: row.slug,
            original_url: row.original_url,
            is_active: row.is_active,
            expires_at: row.expires_at,
            clicks: row.clicks,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl LinkStore for PgLinkStore {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<LinkRecord>, StoreError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT slug, original_url, is_active, expires_at, clicks, created_at
            FROM links
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn increment_clicks(&self, slug: &str) -> Result<(), StoreError> {
        sqlx::query("UPDATE links SET clicks = clicks + 1 WHERE slug = $1")
            .bind(slug)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
