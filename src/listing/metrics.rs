//! Metrics Collector
//!
//! Derives a hit ratio from the cache store's keyspace counters.
//!
//! The counters cover every key in the store, not just the listing key, so a
//! store shared with other systems reports their traffic too.

use std::fmt::Display;
use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info};

use crate::cache::CacheBackend;

// == Cache Metrics ==
/// Hit/miss summary as reported to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheMetrics {
    /// Set only when the counters could not be read
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub keyspace_hits: u64,
    pub keyspace_misses: u64,
    pub total_requests: u64,
    /// Percentage of lookups that hit, rounded to two decimals
    pub hit_ratio: f64,
}

impl CacheMetrics {
    /// Builds metrics from raw counters.
    pub fn from_counts(hits: u64, misses: u64) -> Self {
        let total_requests = hits.saturating_add(misses);
        let hit_ratio = if total_requests > 0 {
            round2(hits as f64 / total_requests as f64 * 100.0)
        } else {
            0.0
        };

        Self {
            error: None,
            keyspace_hits: hits,
            keyspace_misses: misses,
            total_requests,
            hit_ratio,
        }
    }

    /// Zeroed metrics carrying the failure description.
    pub fn failed(err: impl Display) -> Self {
        Self {
            error: Some(err.to_string()),
            ..Self::from_counts(0, 0)
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// == Metrics Collector ==
#[derive(Clone)]
pub struct MetricsCollector {
    cache: Arc<dyn CacheBackend>,
}

impl MetricsCollector {
    pub fn new(cache: Arc<dyn CacheBackend>) -> Self {
        Self { cache }
    }

    // == Collect ==
    /// Reads the store counters. Never fails: an unreadable store yields
    /// zeroed metrics with `error` set.
    pub async fn collect(&self) -> CacheMetrics {
        match self.cache.stats_info().await {
            Ok(stats) => {
                let metrics = CacheMetrics::from_counts(stats.keyspace_hits, stats.keyspace_misses);
                info!(
                    hits = metrics.keyspace_hits,
                    misses = metrics.keyspace_misses,
                    hit_ratio = metrics.hit_ratio,
                    "Cache metrics: {:?}",
                    metrics
                );
                metrics
            }
            Err(e) => {
                error!("Error retrieving cache metrics: {}", e);
                CacheMetrics::failed(e)
            }
        }
    }
}
