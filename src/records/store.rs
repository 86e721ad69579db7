//! Record Store Module
//!
//! The persistent home of property records, consumed through `RecordStore`.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::{AppError, Result};
use crate::records::{NewProperty, Property, PropertyChanges};

// == Record Store ==
/// Backing store of property records.
///
/// A write returning `Ok` is durably committed.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Every stored property, in no particular order.
    async fn query_all(&self) -> Result<Vec<Property>>;

    async fn get(&self, id: i64) -> Result<Property>;

    /// Stores a new property, assigning its id and creation time.
    async fn insert(&self, new: NewProperty) -> Result<Property>;

    async fn update(&self, id: i64, changes: PropertyChanges) -> Result<Property>;

    /// Removes a property, returning the removed record.
    async fn remove(&self, id: i64) -> Result<Property>;
}

// == Memory Record Store ==
#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i64, Property>,
    next_id: i64,
}

/// In-process record store.
///
/// Counts `query_all` calls so callers can observe how often the listing
/// actually reached the store.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    table: RwLock<Table>,
    queries: AtomicU64,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `query_all` calls served so far.
    pub fn query_count(&self) -> u64 {
        self.queries.load(Ordering::SeqCst)
    }

    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.table.read().await.rows.is_empty()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn query_all(&self) -> Result<Vec<Property>> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<Property> {
        let table = self.table.read().await;
        table.rows.get(&id).cloned().ok_or(AppError::NotFound(id))
    }

    async fn insert(&self, new: NewProperty) -> Result<Property> {
        let mut table = self.table.write().await;
        table.next_id += 1;

        let property = Property {
            id: table.next_id,
            title: new.title,
            description: new.description,
            price: new.price,
            location: new.location,
            created_at: Utc::now(),
        };
        table.rows.insert(property.id, property.clone());

        Ok(property)
    }

    async fn update(&self, id: i64, changes: PropertyChanges) -> Result<Property> {
        let mut table = self.table.write().await;
        let property = table.rows.get_mut(&id).ok_or(AppError::NotFound(id))?;
        changes.apply_to(property);
        Ok(property.clone())
    }

    async fn remove(&self, id: i64) -> Result<Property> {
        let mut table = self.table.write().await;
        table.rows.remove(&id).ok_or(AppError::NotFound(id))
    }
}
