//! Property Cache - a read-through caching layer for property listings
//!
//! Serves the full property collection from a cache store, evicts it on
//! every write, and reports the store's hit/miss ratio.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod listing;
pub mod models;
pub mod records;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use error::{AppError, Result};
pub use tasks::spawn_expiry_task;
