//! Cache Statistics Module
//!
//! Cumulative keyspace counters, the same ones a Redis `INFO stats` reports.

use serde::Serialize;

// == Cache Stats ==
/// Keyspace hit/miss counters for the whole store.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups that found a live entry
    pub keyspace_hits: u64,
    /// Lookups that found nothing or an expired entry
    pub keyspace_misses: u64,
    /// Entries removed because their TTL elapsed
    pub expired_keys: u64,
    /// Current number of entries in the store
    pub keys: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Hit ==
    pub fn record_hit(&mut self) {
        self.keyspace_hits += 1;
    }

    // == Record Miss ==
    pub fn record_miss(&mut self) {
        self.keyspace_misses += 1;
    }

    // == Record Expiry ==
    pub fn record_expired(&mut self, count: usize) {
        self.expired_keys += count as u64;
    }

    // == Update Key Count ==
    pub fn set_keys(&mut self, count: usize) {
        self.keys = count;
    }
}
