//! Cache Store Module
//!
//! Unsynchronized response storage keyed by request URL. Shared access goes
//! through [`Cache`](crate::cache::Cache), which wraps the store in a lock.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::CacheEntry;

// == Cache Store ==
/// Key-value storage with a fixed expiry window.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// How long an entry stays live after insertion
    ttl: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store with the given expiry window.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    /// Returns the expiry window.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Insert ==
    /// Stores `value` under `key`, replacing any previous entry and resetting
    /// its timestamp.
    pub fn insert(&mut self, key: String, value: Vec<u8>) {
        self.entries.insert(key, CacheEntry::new(value));
    }

    // == Lookup ==
    /// Returns a copy of the value stored under `key`.
    ///
    /// Age is not checked here: an entry stays visible until the reaper
    /// removes it.
    pub fn lookup(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.get(key).map(|entry| entry.value().to_vec())
    }

    // == Reap Expired ==
    /// Removes every entry older than the ttl.
    ///
    /// Returns the number of entries removed.
    pub fn reap_expired(&mut self) -> usize {
        let ttl = self.ttl;
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(ttl));
        before - self.entries.len()
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
