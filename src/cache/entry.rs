//! Cache Entry Module
//!
//! Defines a single cached response body and the moment it was stored.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A raw response body plus its insertion timestamp.
///
/// Entries are immutable once created; overwriting a key replaces the whole
/// entry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload
    value: Vec<u8>,
    /// When the entry was inserted
    created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry stamped with the current time.
    pub fn new(value: Vec<u8>) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    /// Returns the stored payload.
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Returns the insertion timestamp.
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    // == Age ==
    /// Time elapsed since insertion.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived `ttl`.
    ///
    /// Boundary condition: an entry whose age equals `ttl` exactly is still
    /// live; it only expires once its age is strictly greater.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.age() > ttl
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_keeps_value() {
        let entry = CacheEntry::new(vec![1, 2, 3]);

        assert_eq!(entry.value(), &[1, 2, 3]);
        assert!(entry.created_at() <= Instant::now());
    }

    #[test]
    fn test_fresh_entry_not_expired() {
        let entry = CacheEntry::new(b"fresh".to_vec());

        assert!(!entry.is_expired(Duration::from_secs(60)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_expires_after_ttl() {
        let ttl = Duration::from_millis(100);
        let entry = CacheEntry::new(b"stale".to_vec());

        tokio::time::advance(ttl).await;
        assert!(!entry.is_expired(ttl), "Age equal to ttl is not expired");

        tokio::time::advance(Duration::from_millis(1)).await;
        assert!(entry.is_expired(ttl));
    }

    #[tokio::test(start_paused = true)]
    async fn test_age_tracks_elapsed_time() {
        let entry = CacheEntry::new(Vec::new());

        tokio::time::advance(Duration::from_secs(3)).await;

        assert_eq!(entry.age(), Duration::from_secs(3));
    }
}
