//! Active Expiry Task
//!
//! Background task that periodically purges expired cache entries, so
//! entries nobody reads again still release their memory.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::MemoryCache;

/// Spawns a background task that purges expired entries every
/// `interval_secs` seconds.
///
/// Returns the task handle so shutdown can abort it.
///
/// # Example
/// ```ignore
/// let cache = MemoryCache::new();
/// let expiry_handle = spawn_expiry_task(cache.clone(), 1);
/// // Later, during shutdown:
/// expiry_handle.abort();
/// ```
pub fn spawn_expiry_task(cache: MemoryCache, interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting cache expiry task with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.purge_expired().await;

            if removed > 0 {
                info!("Cache expiry: removed {} expired entries", removed);
            } else {
                debug!("Cache expiry: no expired entries found");
            }
        }
    })
}
