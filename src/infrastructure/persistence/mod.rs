//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgLinkStore`] - Link lookup and click increment

pub mod pg_link_store;

pub use pg_link_store::PgLinkStore;
