//! Read-Through Fetcher
//!
//! Serves the property collection from the cache, falling back to the
//! record store and writing the result back on a miss.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::cache::CacheBackend;
use crate::error::Result;
use crate::listing::{ALL_PROPERTIES_KEY, ALL_PROPERTIES_TTL};
use crate::records::{Property, RecordStore};

// == Property Fetcher ==
#[derive(Clone)]
pub struct PropertyFetcher {
    cache: Arc<dyn CacheBackend>,
    records: Arc<dyn RecordStore>,
    ttl: Duration,
}

impl PropertyFetcher {
    /// Creates a fetcher caching for the standard one hour.
    pub fn new(cache: Arc<dyn CacheBackend>, records: Arc<dyn RecordStore>) -> Self {
        Self {
            cache,
            records,
            ttl: ALL_PROPERTIES_TTL,
        }
    }

    /// Overrides how long a fetched snapshot stays cached.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Fetch All ==
    /// Returns every property, from cache when possible.
    ///
    /// Concurrent misses each query the store and overwrite the entry; the
    /// last write wins. Store and cache failures propagate unchanged.
    pub async fn fetch_all(&self) -> Result<Vec<Property>> {
        if let Some(cached) = self.cache.get(ALL_PROPERTIES_KEY).await? {
            info!(cache_key = ALL_PROPERTIES_KEY, "Cache HIT for {}", ALL_PROPERTIES_KEY);
            return Ok(serde_json::from_str(&cached)?);
        }

        info!(
            cache_key = ALL_PROPERTIES_KEY,
            "Cache MISS for {} - fetching from record store", ALL_PROPERTIES_KEY
        );
        let properties = self.records.query_all().await?;

        let snapshot = serde_json::to_string(&properties)?;
        self.cache.set(ALL_PROPERTIES_KEY, snapshot, self.ttl).await?;
        info!(
            cache_key = ALL_PROPERTIES_KEY,
            count = properties.len(),
            "Cached {} properties for {}s",
            properties.len(),
            self.ttl.as_secs()
        );

        Ok(properties)
    }
}
