//! Invalidation Hooks
//!
//! Post-commit handlers that evict the cached collection whenever a
//! property is created, updated or deleted.

use std::fmt;
use std::sync::Arc;

use tracing::info;

use crate::cache::CacheBackend;
use crate::error::Result;
use crate::listing::ALL_PROPERTIES_KEY;
use crate::records::Property;

// == Write Kind ==
/// Which committed write fired a hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteKind {
    Created,
    Updated,
    Deleted,
}

impl fmt::Display for WriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WriteKind::Created => "created",
            WriteKind::Updated => "updated",
            WriteKind::Deleted => "deleted",
        };
        f.write_str(label)
    }
}

// == Invalidation Hooks ==
/// Evicts the whole cached collection on any single-record change.
///
/// Must only be called once the write is durably committed.
#[derive(Clone)]
pub struct InvalidationHooks {
    cache: Arc<dyn CacheBackend>,
}

impl InvalidationHooks {
    pub fn new(cache: Arc<dyn CacheBackend>) -> Self {
        Self { cache }
    }

    /// Fires after a property was created (`created == true`) or updated.
    pub async fn on_saved(&self, property: &Property, created: bool) -> Result<()> {
        let kind = if created {
            WriteKind::Created
        } else {
            WriteKind::Updated
        };
        self.invalidate(property.id, kind).await
    }

    /// Fires after a property was deleted.
    pub async fn on_deleted(&self, property: &Property) -> Result<()> {
        self.invalidate(property.id, WriteKind::Deleted).await
    }

    async fn invalidate(&self, id: i64, kind: WriteKind) -> Result<()> {
        self.cache.delete(ALL_PROPERTIES_KEY).await?;

        info!(
            property_id = id,
            action = %kind,
            cache_key = ALL_PROPERTIES_KEY,
            "Property {} {} - cache '{}' invalidated",
            id,
            kind,
            ALL_PROPERTIES_KEY
        );
        Ok(())
    }
}
