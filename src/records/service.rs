//! Property Write Path
//!
//! Commits writes to the record store, then fires the invalidation hooks.

use std::sync::Arc;

use crate::error::Result;
use crate::listing::InvalidationHooks;
use crate::records::{NewProperty, Property, PropertyChanges, RecordStore};

// == Property Service ==
/// The only way writes reach the record store.
///
/// Hooks run after the store acknowledges the write; a failed write fires
/// nothing. If the hook itself fails the write stays committed and the
/// error is returned.
#[derive(Clone)]
pub struct PropertyService {
    records: Arc<dyn RecordStore>,
    hooks: InvalidationHooks,
}

impl PropertyService {
    pub fn new(records: Arc<dyn RecordStore>, hooks: InvalidationHooks) -> Self {
        Self { records, hooks }
    }

    pub async fn create(&self, new: NewProperty) -> Result<Property> {
        let property = self.records.insert(new).await?;
        self.hooks.on_saved(&property, true).await?;
        Ok(property)
    }

    pub async fn update(&self, id: i64, changes: PropertyChanges) -> Result<Property> {
        let property = self.records.update(id, changes).await?;
        self.hooks.on_saved(&property, false).await?;
        Ok(property)
    }

    pub async fn delete(&self, id: i64) -> Result<Property> {
        let property = self.records.remove(id).await?;
        self.hooks.on_deleted(&property).await?;
        Ok(property)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{CacheBackend, MemoryCache};
    use crate::error::AppError;
    use crate::listing::test_support::{sample, FailingRecords};
    use crate::listing::{PropertyFetcher, ALL_PROPERTIES_KEY, ALL_PROPERTIES_TTL};
    use crate::records::MemoryRecordStore;

    struct Harness {
        cache: MemoryCache,
        records: Arc<MemoryRecordStore>,
        fetcher: PropertyFetcher,
        service: PropertyService,
    }

    fn harness() -> Harness {
        let cache = MemoryCache::new();
        let records = Arc::new(MemoryRecordStore::new());
        let backend: Arc<dyn CacheBackend> = Arc::new(cache.clone());
        Harness {
            fetcher: PropertyFetcher::new(backend.clone(), records.clone()),
            service: PropertyService::new(records.clone(), InvalidationHooks::new(backend)),
            cache,
            records,
        }
    }

    #[tokio::test]
    async fn test_create_update_delete_each_force_requery() {
        let h = harness();
        let created = h.service.create(sample("Loft")).await.unwrap();
        h.service.create(sample("Barn")).await.unwrap();

        h.fetcher.fetch_all().await.unwrap();
        assert_eq!(h.records.query_count(), 1);

        let changes = PropertyChanges {
            title: Some("Penthouse".to_string()),
            ..Default::default()
        };
        h.service.update(created.id, changes).await.unwrap();
        let listed = h.fetcher.fetch_all().await.unwrap();
        assert_eq!(h.records.query_count(), 2);
        assert!(listed.iter().any(|p| p.title == "Penthouse"));

        h.service.delete(created.id).await.unwrap();
        let listed = h.fetcher.fetch_all().await.unwrap();
        assert_eq!(h.records.query_count(), 3);
        assert_eq!(listed.len(), 1);

        h.fetcher.fetch_all().await.unwrap();
        assert_eq!(h.records.query_count(), 3);
    }

    #[tokio::test]
    async fn test_failed_write_keeps_cache() {
        let h = harness();
        h.fetcher.fetch_all().await.unwrap();

        let result = h.service.delete(42).await;

        assert!(matches!(result, Err(AppError::NotFound(42))));
        assert!(h.cache.get(ALL_PROPERTIES_KEY).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_store_error_fires_no_hook() {
        let cache = MemoryCache::new();
        cache
            .set(ALL_PROPERTIES_KEY, "[]".to_string(), ALL_PROPERTIES_TTL)
            .await
            .unwrap();
        let service = PropertyService::new(
            Arc::new(FailingRecords),
            InvalidationHooks::new(Arc::new(cache.clone())),
        );

        assert!(service.create(sample("Loft")).await.is_err());
        assert!(cache.get(ALL_PROPERTIES_KEY).await.unwrap().is_some());
    }
}
