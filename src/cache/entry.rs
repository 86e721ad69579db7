//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

// == Cache Entry ==
/// A single stored value together with its lifetime.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored value (serialized snapshot)
    pub value: String,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry stamped at `now_ms` that lives for `ttl_ms`.
    pub fn new(value: String, now_ms: u64, ttl_ms: u64) -> Self {
        Self {
            value,
            created_at: now_ms,
            expires_at: now_ms.saturating_add(ttl_ms),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired at `now_ms`.
    ///
    /// An entry is expired once the current time reaches its expiration
    /// time, so it is gone the instant its TTL has fully elapsed.
    pub fn is_expired_at(&self, now_ms: u64) -> bool {
        now_ms >= self.expires_at
    }

    // == Time To Live ==
    /// Remaining lifetime in milliseconds, zero once expired.
    pub fn ttl_remaining_ms(&self, now_ms: u64) -> u64 {
        self.expires_at.saturating_sub(now_ms)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new("test_value".to_string(), 10_000, 60_000);

        assert_eq!(entry.value, "test_value");
        assert_eq!(entry.created_at, 10_000);
        assert_eq!(entry.expires_at, 70_000);
        assert!(!entry.is_expired_at(10_000));
    }

    #[test]
    fn test_entry_expiration_boundary() {
        let entry = CacheEntry::new("v".to_string(), 0, 3_600_000);

        assert!(!entry.is_expired_at(3_599_000));
        assert!(!entry.is_expired_at(3_599_999));
        assert!(entry.is_expired_at(3_600_000), "Entry should be expired at boundary");
        assert!(entry.is_expired_at(3_601_000));
    }

    #[test]
    fn test_ttl_remaining() {
        let entry = CacheEntry::new("v".to_string(), 1_000, 10_000);

        assert_eq!(entry.ttl_remaining_ms(1_000), 10_000);
        assert_eq!(entry.ttl_remaining_ms(6_000), 5_000);
        assert_eq!(entry.ttl_remaining_ms(20_000), 0);
    }

    #[test]
    fn test_expiry_saturates() {
        let entry = CacheEntry::new("v".to_string(), u64::MAX - 5, 100);
        assert_eq!(entry.expires_at, u64::MAX);
    }
}
