//! Listing Cache Module
//!
//! The read-through cache for the full property collection: one fixed key,
//! filled on a miss, evicted on any write, with store-wide hit metrics.
//!
//! A fetch that misses can read the record store before a write commits and
//! then store its snapshot after that write's invalidation has run. The stale
//! aggregate then survives until the next write or until its TTL runs out.

mod fetcher;
mod invalidation;
mod metrics;

#[cfg(test)]
pub(crate) mod test_support;

pub use fetcher::PropertyFetcher;
pub use invalidation::{InvalidationHooks, WriteKind};
pub use metrics::{CacheMetrics, MetricsCollector};

use std::time::Duration;

// == Public Constants ==
/// Cache key holding the whole property collection
pub const ALL_PROPERTIES_KEY: &str = "all_properties";

/// Lifetime of the cached collection
pub const ALL_PROPERTIES_TTL: Duration = Duration::from_secs(3600);
