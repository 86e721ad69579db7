//! Response DTOs for the property cache API
//!
//! Defines the structure of outgoing HTTP response bodies.

use chrono::SecondsFormat;
use serde::Serialize;

use crate::records::Property;

/// One property as rendered on the wire.
///
/// `price` is a decimal string and `created_at` is ISO-8601.
#[derive(Debug, Clone, Serialize)]
pub struct PropertyResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: String,
    pub location: String,
    pub created_at: String,
}

impl From<Property> for PropertyResponse {
    fn from(property: Property) -> Self {
        Self {
            id: property.id,
            title: property.title,
            description: property.description,
            price: property.price.to_string(),
            location: property.location,
            created_at: property
                .created_at
                .to_rfc3339_opts(SecondsFormat::AutoSi, false),
        }
    }
}

/// Response body for GET /properties/
#[derive(Debug, Clone, Serialize)]
pub struct PropertyListResponse {
    pub count: usize,
    pub properties: Vec<PropertyResponse>,
}

impl From<Vec<Property>> for PropertyListResponse {
    fn from(properties: Vec<Property>) -> Self {
        let properties: Vec<PropertyResponse> =
            properties.into_iter().map(PropertyResponse::from).collect();
        Self {
            count: properties.len(),
            properties,
        }
    }
}

/// Response body for DELETE /properties/:id
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Success message
    pub message: String,
    /// The id that was deleted
    pub id: i64,
}

impl DeleteResponse {
    pub fn new(id: i64) -> Self {
        Self {
            message: format!("Property {} deleted successfully", id),
            id,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
