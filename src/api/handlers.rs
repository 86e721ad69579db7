//! API Handlers
//!
//! HTTP request handlers for each property cache endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    Json,
};

use crate::api::page_cache::{PageCache, LISTING_PAGE_KEY};
use crate::cache::CacheBackend;
use crate::config::Config;
use crate::error::Result;
use crate::listing::{CacheMetrics, InvalidationHooks, MetricsCollector, PropertyFetcher};
use crate::models::{
    CreatePropertyRequest, DeleteResponse, HealthResponse, PropertyListResponse,
    PropertyResponse, UpdatePropertyRequest,
};
use crate::records::{PropertyService, RecordStore};

/// Application state shared across all handlers.
///
/// Every component holds the same cache store handle.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: PropertyFetcher,
    pub service: PropertyService,
    pub metrics: MetricsCollector,
    pub pages: PageCache,
}

impl AppState {
    /// Wires the caching core over the given stores.
    pub fn new(
        cache: Arc<dyn CacheBackend>,
        records: Arc<dyn RecordStore>,
        config: &Config,
    ) -> Self {
        Self {
            fetcher: PropertyFetcher::new(cache.clone(), records.clone())
                .with_ttl(config.cache_ttl()),
            service: PropertyService::new(records, InvalidationHooks::new(cache.clone())),
            metrics: MetricsCollector::new(cache.clone()),
            pages: PageCache::new(cache, config.page_cache_ttl()),
        }
    }
}

/// Handler for GET /properties/
///
/// Lists every property. The rendered page is itself cached.
pub async fn list_properties_handler(State(state): State<AppState>) -> Result<Response> {
    if let Some(body) = state.pages.lookup(LISTING_PAGE_KEY).await? {
        return Ok(state.pages.respond(body));
    }

    let properties = state.fetcher.fetch_all().await?;
    let body = serde_json::to_string(&PropertyListResponse::from(properties))?;
    state.pages.store(LISTING_PAGE_KEY, &body).await?;

    Ok(state.pages.respond(body))
}

/// Handler for POST /properties/
pub async fn create_property_handler(
    State(state): State<AppState>,
    Json(req): Json<CreatePropertyRequest>,
) -> Result<(StatusCode, Json<PropertyResponse>)> {
    let property = state.service.create(req.into_new_property()?).await?;
    Ok((StatusCode::CREATED, Json(property.into())))
}

/// Handler for PUT /properties/:id
pub async fn update_property_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdatePropertyRequest>,
) -> Result<Json<PropertyResponse>> {
    let property = state.service.update(id, req.into_changes()?).await?;
    Ok(Json(property.into()))
}

/// Handler for DELETE /properties/:id
pub async fn delete_property_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>> {
    let property = state.service.delete(id).await?;
    Ok(Json(DeleteResponse::new(property.id)))
}

/// Handler for GET /properties/metrics/
///
/// Always 200; a failed stats read is reported in the body.
pub async fn metrics_handler(State(state): State<AppState>) -> Json<CacheMetrics> {
    Json(state.metrics.collect().await)
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::error::AppError;
    use crate::records::MemoryRecordStore;

    fn test_state() -> (AppState, Arc<MemoryRecordStore>) {
        let records = Arc::new(MemoryRecordStore::new());
        let config = Config {
            page_cache_ttl: 0,
            ..Config::default()
        };
        let state = AppState::new(Arc::new(MemoryCache::new()), records.clone(), &config);
        (state, records)
    }

    fn create_request(title: &str) -> CreatePropertyRequest {
        CreatePropertyRequest {
            title: title.to_string(),
            description: String::new(),
            price: "100.00".to_string(),
            location: "Lisbon".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let (state, records) = test_state();

        let (status, created) =
            create_property_handler(State(state.clone()), Json(create_request("Loft")))
                .await
                .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created.price, "100.00");

        list_properties_handler(State(state.clone())).await.unwrap();
        list_properties_handler(State(state)).await.unwrap();
        assert_eq!(records.query_count(), 1);
    }

    #[tokio::test]
    async fn test_create_invalid_request() {
        let (state, records) = test_state();

        let result = create_property_handler(State(state), Json(create_request(""))).await;

        assert!(matches!(result, Err(AppError::InvalidRequest(_))));
        assert!(records.is_empty().await);
    }

    #[tokio::test]
    async fn test_update_missing_property() {
        let (state, _) = test_state();

        let result = update_property_handler(
            State(state),
            Path(77),
            Json(UpdatePropertyRequest::default()),
        )
        .await;

        assert!(matches!(result, Err(AppError::NotFound(77))));
    }

    #[tokio::test]
    async fn test_delete_handler() {
        let (state, records) = test_state();
        let (_, created) =
            create_property_handler(State(state.clone()), Json(create_request("Loft")))
                .await
                .unwrap();

        let response = delete_property_handler(State(state), Path(created.id))
            .await
            .unwrap();

        assert_eq!(response.id, created.id);
        assert!(records.is_empty().await);
    }

    #[tokio::test]
    async fn test_metrics_handler() {
        let (state, _) = test_state();

        let response = metrics_handler(State(state)).await;
        assert_eq!(response.keyspace_hits, 0);
        assert_eq!(response.keyspace_misses, 0);
        assert!(response.error.is_none());
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
