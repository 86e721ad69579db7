//! Cache Backend Module
//!
//! The capability the caching core consumes. Anything that can get, set
//! with a TTL, delete and report keyspace counters can stand behind it.

use std::time::Duration;

use async_trait::async_trait;

use crate::cache::CacheStats;
use crate::error::Result;

// == Cache Backend ==
/// Process-wide key/value store with expiration.
///
/// Each call is atomic on its own; a sequence of calls is not.
#[async_trait]
pub trait CacheBackend: Send + Sync {
    /// Returns the live value for `key`, `None` when absent or expired.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous entry.
    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<()>;

    /// Removes `key`. Removing a missing key succeeds.
    async fn delete(&self, key: &str) -> Result<()>;

    /// Store-wide cumulative counters.
    async fn stats_info(&self) -> Result<CacheStats>;
}
