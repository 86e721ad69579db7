//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Lifetime in seconds of the cached property collection
    pub cache_ttl: u64,
    /// Lifetime in seconds of the rendered listing page, 0 disables page caching
    pub page_cache_ttl: u64,
    /// Interval in seconds between expired-entry sweeps
    pub expiry_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CACHE_TTL` - Collection cache TTL in seconds (default: 3600)
    /// - `PAGE_CACHE_TTL` - Listing page cache TTL in seconds (default: 900)
    /// - `EXPIRY_INTERVAL` - Expiry sweep frequency in seconds (default: 1)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env_or("SERVER_PORT", defaults.server_port),
            cache_ttl: env_or("CACHE_TTL", defaults.cache_ttl),
            page_cache_ttl: env_or("PAGE_CACHE_TTL", defaults.page_cache_ttl),
            expiry_interval: env_or("EXPIRY_INTERVAL", defaults.expiry_interval),
        }
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    pub fn page_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.page_cache_ttl)
    }
}

/// Parses `name` from the environment, falling back on absence or bad input.
fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            cache_ttl: 3600,
            page_cache_ttl: 900,
            expiry_interval: 1,
        }
    }
}
