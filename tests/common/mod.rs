#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::time::Instant;

use url_resolver::domain::entities::LinkRecord;
use url_resolver::domain::repositories::LinkStore;
use url_resolver::error::StoreError;
use url_resolver::infrastructure::cache::{CacheError, CacheResult, CacheService};

/// In-memory cache honoring TTLs on tokio's clock, so suites running with
/// `start_paused` can advance time deterministically.
pub struct MemoryCache {
    entries: Mutex<HashMap<String, Entry>>,
    get_calls: AtomicUsize,
}

struct Entry {
    value: String,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|e| Instant::now() >= e)
    }
}

impl MemoryCache {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            get_calls: AtomicUsize::new(0),
        }
    }

    /// Number of live (unexpired) entries.
    pub fn len(&self) -> usize {
        let mut entries = self.entries.lock().unwrap();
        entries.retain(|_, e| !e.is_expired());
        entries.len()
    }

    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    /// Plants a raw value without a TTL, bypassing the trait.
    pub fn raw_set(&self, key: &str, value: &str) {
        self.entries.lock().unwrap().insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: None,
            },
        );
    }

    pub fn raw_get(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().unwrap();
        entries
            .get(key)
            .filter(|e| !e.is_expired())
            .map(|e| e.value.clone())
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        let mut entries = self.entries.lock().unwrap();
        if entries.get(key).is_some_and(|e| e.is_expired()) {
            entries.remove(key);
        }
        Ok(entries.get(key).map(|e| e.value.clone()))
    }

    async fn set_ex(&self, key: &str, value: &str, ttl_seconds: u64) -> CacheResult<()> {
        self.entries.lock().unwrap().insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: Some(Instant::now() + Duration::from_secs(ttl_seconds)),
            },
        );
        Ok(())
    }

    async fn delete(&self, key: &str) -> CacheResult<()> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }

    async fn exists(&self, key: &str) -> CacheResult<bool> {
        let mut entries = self.entries.lock().unwrap();
        if entries.get(key).is_some_and(|e| e.is_expired()) {
            entries.remove(key);
        }
        Ok(entries.contains_key(key))
    }

    async fn incr(&self, key: &str) -> CacheResult<i64> {
        let mut entries = self.entries.lock().unwrap();
        if entries.get(key).is_some_and(|e| e.is_expired()) {
            entries.remove(key);
        }

        let (next, expires_at) = match entries.get(key) {
            Some(entry) => (
                entry.value.parse::<i64>().unwrap_or(0) + 1,
                entry.expires_at,
            ),
            None => (1, None),
        };

        entries.insert(
            key.to_string(),
            Entry {
                value: next.to_string(),
                expires_at,
            },
        );
        Ok(next)
    }

    async fn health_check(&self) -> bool {
        true
    }
}

/// Cache whose every operation fails, simulating an unreachable backend.
pub struct FailingCache;

fn unreachable_err() -> CacheError {
    CacheError::OperationError("cache unreachable".to_string())
}

#[async_trait]
impl CacheService for FailingCache {
    async fn get(&self, _key: &str) -> CacheResult<Option<String>> {
        Err(unreachable_err())
    }

    async fn set_ex(&self, _key: &str, _value: &str, _ttl_seconds: u64) -> CacheResult<()> {
        Err(unreachable_err())
    }

    async fn delete(&self, _key: &str) -> CacheResult<()> {
        Err(unreachable_err())
    }

    async fn exists(&self, _key: &str) -> CacheResult<bool> {
        Err(unreachable_err())
    }

    async fn incr(&self, _key: &str) -> CacheResult<i64> {
        Err(unreachable_err())
    }

    async fn health_check(&self) -> bool {
        false
    }
}

/// In-memory durable store counting lookups, so tests can assert which path
/// served a resolution.
pub struct MemoryLinkStore {
    links: Mutex<HashMap<String, LinkRecord>>,
    find_calls: AtomicUsize,
}

impl MemoryLinkStore {
    pub fn new() -> Self {
        Self {
            links: Mutex::new(HashMap::new()),
            find_calls: AtomicUsize::new(0),
        }
    }

    pub fn insert(&self, record: LinkRecord) {
        self.links
            .lock()
            .unwrap()
            .insert(record.slug.clone(), record);
    }

    pub fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }

    pub fn clicks(&self, slug: &str) -> i64 {
        self.links
            .lock()
            .unwrap()
            .get(slug)
            .map(|r| r.clicks)
            .unwrap_or(0)
    }
}

#[async_trait]
impl LinkStore for MemoryLinkStore {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<LinkRecord>, StoreError> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.links.lock().unwrap().get(slug).cloned())
    }

    async fn increment_clicks(&self, slug: &str) -> Result<(), StoreError> {
        if let Some(record) = self.links.lock().unwrap().get_mut(slug) {
            record.clicks += 1;
        }
        Ok(())
    }
}

pub fn active_link(slug: &str, url: &str) -> LinkRecord {
    LinkRecord {
        slug: slug.to_string(),
        original_url: url.to_string(),
        is_active: true,
        expires_at: None,
        clicks: 0,
        created_at: Utc::now(),
    }
}

pub fn disabled_link(slug: &str, url: &str) -> LinkRecord {
    LinkRecord {
        is_active: false,
        ..active_link(slug, url)
    }
}

pub fn expiring_link(slug: &str, url: &str, expires_at: DateTime<Utc>) -> LinkRecord {
    LinkRecord {
        expires_at: Some(expires_at),
        ..active_link(slug, url)
    }
}
