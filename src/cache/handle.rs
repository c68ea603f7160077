//! Cache Handle Module
//!
//! The thread-safe cache callers hold: a locked [`CacheStore`] plus the
//! reaper task that keeps it bounded by age.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, Notify, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::cache::{CacheStats, CacheStore, StatsCounters, MAX_INTERVAL, MIN_INTERVAL};
use crate::tasks::spawn_reaper;

// == Cache ==
/// Time-expiring response cache.
///
/// One `interval` controls both how long an entry lives and how often the
/// reaper scans. An entry is evicted no earlier than `interval` after it was
/// added, and usually no later than one further interval.
///
/// Share it between tasks with an `Arc<Cache>`. Dropping the cache stops
/// its reaper; [`Cache::shutdown`] does the same and waits for the task.
#[derive(Debug)]
pub struct Cache {
    store: Arc<RwLock<CacheStore>>,
    counters: Arc<StatsCounters>,
    interval: Duration,
    shutdown: Arc<Notify>,
    reaper: Mutex<Option<JoinHandle<()>>>,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper.
    ///
    /// Must be called from within a Tokio runtime. The interval is clamped
    /// to [`MIN_INTERVAL`]..=[`MAX_INTERVAL`].
    pub fn new(interval: Duration) -> Self {
        let interval = if interval < MIN_INTERVAL {
            warn!(
                requested_ms = interval.as_millis() as u64,
                "Cache interval too small, using minimum"
            );
            MIN_INTERVAL
        } else if interval > MAX_INTERVAL {
            warn!(
                requested_secs = interval.as_secs(),
                "Cache interval too large, using maximum"
            );
            MAX_INTERVAL
        } else {
            interval
        };

        let store = Arc::new(RwLock::new(CacheStore::new(interval)));
        let counters = Arc::new(StatsCounters::new());
        let shutdown = Arc::new(Notify::new());

        let reaper = spawn_reaper(store.clone(), counters.clone(), interval, shutdown.clone());

        Self {
            store,
            counters,
            interval,
            shutdown,
            reaper: Mutex::new(Some(reaper)),
        }
    }

    // == Add ==
    /// Stores `value` under `key`, replacing any previous entry.
    pub async fn add(&self, key: impl Into<String>, value: Vec<u8>) {
        let key = key.into();
        let mut store = self.store.write().await;
        store.add(key, value);
    }

    // == Get ==
    /// Returns a copy of the value stored under `key`.
    ///
    /// `None` when the key was never added or has been reaped.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        let value = self.store.read().await.get(key);

        match value {
            Some(_) => {
                self.counters.record_hit();
                debug!(key, "Cache hit");
            }
            None => {
                self.counters.record_miss();
                debug!(key, "Cache miss");
            }
        }

        value
    }

    // == Stats ==
    /// Returns a snapshot of the cache statistics.
    pub async fn stats(&self) -> CacheStats {
        let total_entries = self.store.read().await.len();
        self.counters.snapshot(total_entries)
    }

    /// Returns the max-age / reap interval in effect.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    // == Shutdown ==
    /// Stops the reaper and waits for it to finish.
    ///
    /// Entries already stored stay readable but are no longer evicted.
    /// Calling this more than once is harmless.
    pub async fn shutdown(&self) {
        let handle = self.reaper.lock().await.take();

        if let Some(handle) = handle {
            self.shutdown.notify_one();
            if let Err(e) = handle.await {
                warn!(error = %e, "Cache reaper ended abnormally");
            }
            debug!("Cache reaper stopped");
        }
    }

    /// Returns true once the reaper task has finished.
    pub async fn is_reaper_finished(&self) -> bool {
        match self.reaper.lock().await.as_ref() {
            Some(handle) => handle.is_finished(),
            None => true,
        }
    }
}

impl Drop for Cache {
    fn drop(&mut self) {
        self.shutdown.notify_one();
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_before_add_misses() {
        let cache = Cache::new(Duration::from_secs(5));

        assert!(cache.get("https://pokeapi.co/api/v2/location-area").await.is_none());

        cache.shutdown().await;
    }

    #[tokio::test]
    async fn test_add_then_get_hits() {
        let cache = Cache::new(Duration::from_secs(5));

        cache.add("key", vec![1, 2, 3]).await;

        assert_eq!(cache.get("key").await, Some(vec![1, 2, 3]));

        cache.shutdown().await;
    }

    #[tokio::test]
    async fn test_expiry_scenario() {
        let cache = Cache::new(Duration::from_millis(100));

        cache.add("a", vec![1, 2, 3]).await;

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(cache.get("a").await, Some(vec![1, 2, 3]));

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(cache.get("a").await.is_none());

        cache.shutdown().await;
    }

    #[tokio::test]
    async fn test_overwrite_scenario() {
        let cache = Cache::new(Duration::from_millis(50));

        cache.add("x", b"B1".to_vec()).await;
        tokio::time::sleep(Duration::from_millis(10)).await;
        cache.add("x", b"B2".to_vec()).await;
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert_eq!(cache.get("x").await, Some(b"B2".to_vec()));

        cache.shutdown().await;
    }

    #[tokio::test]
    async fn test_stats_track_hits_misses_and_reaped() {
        let cache = Cache::new(Duration::from_millis(40));

        cache.add("a", b"1".to_vec()).await;
        cache.get("a").await;
        cache.get("b").await;

        let stats = cache.stats().await;
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);

        tokio::time::sleep(Duration::from_millis(200)).await;

        let stats = cache.stats().await;
        assert_eq!(stats.reaped, 1);
        assert_eq!(stats.total_entries, 0);

        cache.shutdown().await;
    }

    #[tokio::test]
    async fn test_zero_interval_is_clamped() {
        let cache = Cache::new(Duration::ZERO);

        assert_eq!(cache.interval(), MIN_INTERVAL);

        cache.shutdown().await;
    }

    #[tokio::test]
    async fn test_huge_interval_is_clamped_and_reaper_keeps_running() {
        let cache = Cache::new(Duration::MAX);

        assert_eq!(cache.interval(), MAX_INTERVAL);

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!cache.is_reaper_finished().await);

        cache.add("k", b"v".to_vec()).await;
        assert_eq!(cache.get("k").await, Some(b"v".to_vec()));

        cache.shutdown().await;
    }

    #[tokio::test]
    async fn test_drop_stops_reaper_and_releases_store() {
        let cache = Cache::new(Duration::from_millis(20));
        cache.add("k", b"v".to_vec()).await;
        let store = Arc::downgrade(&cache.store);

        drop(cache);
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert!(
            store.upgrade().is_none(),
            "Reaper should exit and release the store once the cache is dropped"
        );
    }

    #[tokio::test]
    async fn test_shutdown_stops_reaper_and_is_idempotent() {
        let cache = Cache::new(Duration::from_millis(20));

        assert!(!cache.is_reaper_finished().await);

        cache.shutdown().await;
        assert!(cache.is_reaper_finished().await);

        // Second call is a no-op
        cache.shutdown().await;
    }

    #[tokio::test]
    async fn test_entries_survive_after_shutdown() {
        let cache = Cache::new(Duration::from_millis(20));
        cache.shutdown().await;

        cache.add("kept", b"v".to_vec()).await;
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(cache.get("kept").await, Some(b"v".to_vec()));
    }
}
