//! In-Memory Cache Backend
//!
//! Shares one `CacheStore` across every request behind a tokio `RwLock`.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::cache::{CacheBackend, CacheStats, CacheStore, Clock};
use crate::error::Result;

// == Memory Cache ==
/// Cloneable handle to a shared in-process cache store.
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    store: Arc<RwLock<CacheStore>>,
}

impl MemoryCache {
    /// Creates an empty cache driven by the system clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty cache driven by `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            store: Arc::new(RwLock::new(CacheStore::with_clock(clock))),
        }
    }

    /// Drops every expired entry, returning how many were removed.
    pub async fn purge_expired(&self) -> usize {
        self.store.write().await.purge_expired()
    }

    /// Remaining lifetime of `key` in seconds.
    pub async fn ttl(&self, key: &str) -> Option<u64> {
        self.store.read().await.ttl(key)
    }

    /// Number of stored entries.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

#[async_trait]
impl CacheBackend for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        // Write lock: lookups update counters and may drop expired entries
        Ok(self.store.write().await.get(key))
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<()> {
        self.store.write().await.set(key.to_string(), value, ttl)
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.store.write().await.delete(key);
        Ok(())
    }

    async fn stats_info(&self) -> Result<CacheStats> {
        Ok(self.store.read().await.stats())
    }
}
