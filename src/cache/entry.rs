//! Cache Entry Module
//!
//! Defines a single cached response body and its creation time.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A cached payload stamped with the instant it was inserted.
///
/// The payload is opaque to the cache: it is stored and handed back as raw
/// bytes, never parsed.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The raw response body
    pub value: Vec<u8>,
    /// When the entry was inserted (monotonic clock)
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    pub fn new(value: Vec<u8>) -> Self {
        Self::with_created_at(value, Instant::now())
    }

    /// Creates a new entry with an explicit creation instant.
    pub fn with_created_at(value: Vec<u8>, created_at: Instant) -> Self {
        Self { value, created_at }
    }

    // == Is Expired ==
    /// Checks whether the entry is stale at `now` for the given max-age.
    ///
    /// Boundary condition: an entry expires only once `created_at + max_age`
    /// is strictly before `now`. An entry observed exactly at its expiry
    /// instant is still fresh.
    ///
    /// If `created_at + max_age` cannot be represented the entry is treated
    /// as fresh; it will be looked at again on the next reap.
    pub fn is_expired_at(&self, now: Instant, max_age: Duration) -> bool {
        match self.created_at.checked_add(max_age) {
            Some(expiry) => expiry < now,
            None => false,
        }
    }

    // == Age ==
    /// Time elapsed since insertion, saturating at zero.
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }
}
