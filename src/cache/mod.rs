//! Cache Module
//!
//! The key/value store the listing cache sits on: TTL expiration and
//! keyspace hit/miss counters behind the `CacheBackend` capability.

mod backend;
mod clock;
mod entry;
mod memory;
mod stats;
mod store;


// Re-export public types
pub use backend::CacheBackend;
pub use clock::{current_timestamp_ms, Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use memory::MemoryCache;
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Maximum allowed value size in bytes, the same ceiling as a Redis string
pub const MAX_VALUE_SIZE: usize = 512 * 1024 * 1024; // 512 MB
