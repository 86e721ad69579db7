//! Shared fakes for listing tests.

use std::time::Duration;

use async_trait::async_trait;

use crate::cache::{CacheBackend, CacheStats};
use crate::error::{AppError, Result};
use crate::records::{NewProperty, Price, Property, PropertyChanges, RecordStore};

pub fn sample(title: &str) -> NewProperty {
    NewProperty::new(title, "Two bedrooms", Price::from_cents(12_500_000), "Nairobi")
}

/// A cache whose every call fails, as if the server were down.
pub struct UnreachableCache;

#[async_trait]
impl CacheBackend for UnreachableCache {
    async fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(AppError::CacheUnavailable("connection refused".to_string()))
    }

    async fn set(&self, _key: &str, _value: String, _ttl: Duration) -> Result<()> {
        Err(AppError::CacheUnavailable("connection refused".to_string()))
    }

    async fn delete(&self, _key: &str) -> Result<()> {
        Err(AppError::CacheUnavailable("connection refused".to_string()))
    }

    async fn stats_info(&self) -> Result<CacheStats> {
        Err(AppError::CacheUnavailable("connection refused".to_string()))
    }
}

/// A record store whose every call fails.
pub struct FailingRecords;

#[async_trait]
impl RecordStore for FailingRecords {
    async fn query_all(&self) -> Result<Vec<Property>> {
        Err(AppError::RecordStore("database is locked".to_string()))
    }

    async fn get(&self, _id: i64) -> Result<Property> {
        Err(AppError::RecordStore("database is locked".to_string()))
    }

    async fn insert(&self, _new: NewProperty) -> Result<Property> {
        Err(AppError::RecordStore("database is locked".to_string()))
    }

    async fn update(&self, _id: i64, _changes: PropertyChanges) -> Result<Property> {
        Err(AppError::RecordStore("database is locked".to_string()))
    }

    async fn remove(&self, _id: i64) -> Result<Property> {
        Err(AppError::RecordStore("database is locked".to_string()))
    }
}
