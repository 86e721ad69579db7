//! API Module
//!
//! HTTP handlers and routing for the property listing service.
//!
//! # Endpoints
//! - `GET /properties/` - List all properties
//! - `POST /properties/` - Create a property
//! - `PUT /properties/:id` - Update a property
//! - `DELETE /properties/:id` - Delete a property
//! - `GET /properties/metrics/` - Cache metrics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod page_cache;
pub mod routes;

pub use handlers::*;
pub use page_cache::{PageCache, LISTING_PAGE_KEY};
pub use routes::create_router;
