//! Records Module
//!
//! Property records, the store that persists them, and the write path that
//! keeps the listing cache honest.

mod model;
mod service;
mod store;

pub use model::{
    NewProperty, Price, Property, PropertyChanges, MAX_LOCATION_LENGTH, MAX_PRICE_INTEGER_DIGITS,
    MAX_TITLE_LENGTH,
};
pub use service::PropertyService;
pub use store::{MemoryRecordStore, RecordStore};
