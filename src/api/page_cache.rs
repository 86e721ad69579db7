//! Page Cache
//!
//! Caches rendered response bodies in the cache store, independent of the
//! collection cache. Writes do not evict pages; they age out on their TTL.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::cache::CacheBackend;
use crate::error::Result;

/// Cache key of the rendered property listing
pub const LISTING_PAGE_KEY: &str = "page:/properties/";

// == Page Cache ==
#[derive(Clone)]
pub struct PageCache {
    cache: Arc<dyn CacheBackend>,
    ttl: Duration,
}

impl PageCache {
    /// A zero `ttl` disables page caching.
    pub fn new(cache: Arc<dyn CacheBackend>, ttl: Duration) -> Self {
        Self { cache, ttl }
    }

    pub fn is_enabled(&self) -> bool {
        !self.ttl.is_zero()
    }

    /// Previously rendered body for `key`, if any.
    pub async fn lookup(&self, key: &str) -> Result<Option<String>> {
        if !self.is_enabled() {
            return Ok(None);
        }
        let body = self.cache.get(key).await?;
        if body.is_some() {
            debug!(page = key, "Serving cached page");
        }
        Ok(body)
    }

    pub async fn store(&self, key: &str, body: &str) -> Result<()> {
        if !self.is_enabled() {
            return Ok(());
        }
        self.cache.set(key, body.to_string(), self.ttl).await
    }

    // == Respond ==
    /// Wraps a JSON body, advertising the page lifetime to clients.
    pub fn respond(&self, body: String) -> Response {
        let mut response = ([(header::CONTENT_TYPE, "application/json")], body).into_response();

        if self.is_enabled() {
            if let Ok(value) = HeaderValue::from_str(&format!("max-age={}", self.ttl.as_secs())) {
                response.headers_mut().insert(header::CACHE_CONTROL, value);
            }
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryCache;

    #[tokio::test]
    async fn test_store_and_lookup() {
        let pages = PageCache::new(Arc::new(MemoryCache::new()), Duration::from_secs(900));

        pages.store(LISTING_PAGE_KEY, "{}").await.unwrap();

        assert_eq!(
            pages.lookup(LISTING_PAGE_KEY).await.unwrap().as_deref(),
            Some("{}")
        );
    }

    #[tokio::test]
    async fn test_large_page_is_cached() {
        let pages = PageCache::new(Arc::new(MemoryCache::new()), Duration::from_secs(900));
        let body = format!("{{\"blob\":\"{}\"}}", "p".repeat(9 * 1024 * 1024));

        pages.store(LISTING_PAGE_KEY, &body).await.unwrap();

        assert_eq!(pages.lookup(LISTING_PAGE_KEY).await.unwrap(), Some(body));
    }

    #[tokio::test]
    async fn test_disabled_page_cache_stores_nothing() {
        let cache = MemoryCache::new();
        let pages = PageCache::new(Arc::new(cache.clone()), Duration::ZERO);

        pages.store(LISTING_PAGE_KEY, "{}").await.unwrap();

        assert!(!pages.is_enabled());
        assert!(pages.lookup(LISTING_PAGE_KEY).await.unwrap().is_none());
        assert!(cache.is_empty().await);
    }

    #[test]
    fn test_respond_headers() {
        let pages = PageCache::new(Arc::new(MemoryCache::new()), Duration::from_secs(900));
        let response = pages.respond("{}".to_string());

        assert_eq!(response.headers()[header::CACHE_CONTROL], "max-age=900");
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");

        let disabled = PageCache::new(Arc::new(MemoryCache::new()), Duration::ZERO);
        assert!(disabled
            .respond("{}".to_string())
            .headers()
            .get(header::CACHE_CONTROL)
            .is_none());
    }
}
