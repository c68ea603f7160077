//! Cache Store Module
//!
//! Key to payload map with age-based eviction. The store itself is not
//! synchronised; [`Cache`](crate::cache::Cache) wraps it in a lock.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::trace;

use crate::cache::CacheEntry;

// == Cache Store ==
/// Response storage keyed on request URL.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Maximum age of an entry before the reaper may evict it
    max_age: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose entries live for `max_age`.
    pub fn new(max_age: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            max_age,
        }
    }

    // == Add ==
    /// Stores a payload under `key`, stamped with the current instant.
    ///
    /// An existing entry for the key is replaced as a whole and its age resets.
    pub fn add(&mut self, key: String, value: Vec<u8>) {
        self.add_at(key, value, Instant::now());
    }

    /// Stores a payload with an explicit creation instant.
    pub fn add_at(&mut self, key: String, value: Vec<u8>, created_at: Instant) {
        self.entries
            .insert(key, CacheEntry::with_created_at(value, created_at));
    }

    // == Get ==
    /// Returns a copy of the payload stored under `key`.
    ///
    /// Staleness is not checked here: an entry stays readable until the
    /// reaper removes it.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    // == Reap ==
    /// Removes every entry that is expired at `now`.
    ///
    /// Returns the number of entries removed.
    pub fn reap(&mut self, now: Instant) -> usize {
        let max_age = self.max_age;
        let before = self.entries.len();

        self.entries.retain(|key, entry| {
            let expired = entry.is_expired_at(now, max_age);
            if expired {
                trace!(
                    key = %key,
                    age_ms = entry.age_at(now).as_millis() as u64,
                    "Expiring cache entry"
                );
            }
            !expired
        });

        before - self.entries.len()
    }

    // == Max Age ==
    /// Returns the configured entry max-age.
    pub fn max_age(&self) -> Duration {
        self.max_age
    }

    // == Length ==
    /// Returns the current number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
