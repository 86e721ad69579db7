//! Cache Store Module
//!
//! Keyed storage with per-entry TTL and keyspace hit/miss accounting.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats, Clock, SystemClock, MAX_KEY_LENGTH, MAX_VALUE_SIZE};
use crate::error::{AppError, Result};

// == Cache Store ==
/// Main cache storage with TTL support.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Keyspace statistics
    stats: CacheStats,
    /// Time source for stamping and expiring entries
    clock: Arc<dyn Clock>,
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store driven by the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates an empty store driven by `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            clock,
        }
    }

    // == Set ==
    /// Stores a value under `key` for `ttl`.
    ///
    /// An existing entry is replaced and its lifetime restarts.
    pub fn set(&mut self, key: String, value: String, ttl: Duration) -> Result<()> {
        if key.is_empty() {
            return Err(AppError::InvalidRequest("Cache key cannot be empty".to_string()));
        }

        if key.len() > MAX_KEY_LENGTH {
            return Err(AppError::InvalidRequest(format!(
                "Cache key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            )));
        }

        // Values are written by the service itself, so an oversized one is a
        // store failure rather than a bad request
        if value.len() > MAX_VALUE_SIZE {
            return Err(AppError::CacheUnavailable(format!(
                "Cache value of {} bytes exceeds maximum size of {} bytes",
                value.len(),
                MAX_VALUE_SIZE
            )));
        }

        let ttl_ms = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX);
        let entry = CacheEntry::new(value, self.clock.now_ms(), ttl_ms);
        self.entries.insert(key, entry);
        self.stats.set_keys(self.entries.len());

        Ok(())
    }

    // == Get ==
    /// Retrieves a live value by key.
    ///
    /// Expired entries are dropped on access and count as misses.
    pub fn get(&mut self, key: &str) -> Option<String> {
        let now = self.clock.now_ms();

        match self.entries.get(key) {
            Some(entry) if entry.is_expired_at(now) => {
                self.entries.remove(key);
                self.stats.record_expired(1);
                self.stats.set_keys(self.entries.len());
                self.stats.record_miss();
                None
            }
            Some(entry) => {
                let value = entry.value.clone();
                self.stats.record_hit();
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Delete ==
    /// Removes an entry by key, returning whether a live entry was removed.
    pub fn delete(&mut self, key: &str) -> bool {
        let now = self.clock.now_ms();
        let removed = self
            .entries
            .remove(key)
            .map(|entry| !entry.is_expired_at(now))
            .unwrap_or(false);
        self.stats.set_keys(self.entries.len());
        removed
    }

    // == TTL ==
    /// Remaining lifetime of a live entry in whole seconds.
    ///
    /// Does not touch the hit/miss counters.
    pub fn ttl(&self, key: &str) -> Option<u64> {
        let now = self.clock.now_ms();
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired_at(now))
            .map(|entry| entry.ttl_remaining_ms(now) / 1000)
    }

    // == Stats ==
    /// Returns current keyspace statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_keys(self.entries.len());
        stats
    }

    // == Purge Expired ==
    /// Removes all expired entries from the store.
    ///
    /// Returns the number of entries removed.
    pub fn purge_expired(&mut self) -> usize {
        let now = self.clock.now_ms();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired_at(now));

        let count = before - self.entries.len();
        self.stats.record_expired(count);
        self.stats.set_keys(self.entries.len());
        count
    }

    // == Length ==
    /// Returns the number of stored entries, expired ones included until purged.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
