//! Cache Reaper Task
//!
//! Background task that periodically evicts stale cache entries.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::{Notify, RwLock};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::cache::{CacheStore, StatsCounters, MAX_INTERVAL};

/// Spawns a background task that evicts expired entries every `interval`.
///
/// On each tick the task takes the write lock, scans the whole store and
/// releases the lock once the scan is done. Entries added while the scan
/// waits for the lock are judged on the following tick.
///
/// The task runs until `shutdown` is notified. A notification sent while a
/// scan is in progress is kept and honoured right after that scan.
///
/// # Arguments
/// * `store` - Shared reference to the cache store
/// * `counters` - Statistics updated with the number of reaped entries
/// * `interval` - Period between scans; must be non-zero, capped at [`MAX_INTERVAL`]
/// * `shutdown` - Signal that stops the task
///
/// # Example
/// ```ignore
/// let store = Arc::new(RwLock::new(CacheStore::new(Duration::from_secs(5))));
/// let shutdown = Arc::new(Notify::new());
/// let counters = Arc::new(StatsCounters::new());
/// let handle = spawn_reaper(store, counters, Duration::from_secs(5), shutdown.clone());
/// // Later:
/// shutdown.notify_one();
/// handle.await?;
/// ```
pub fn spawn_reaper(
    store: Arc<RwLock<CacheStore>>,
    counters: Arc<StatsCounters>,
    interval: Duration,
    shutdown: Arc<Notify>,
) -> JoinHandle<()> {
    let interval = interval.min(MAX_INTERVAL);

    tokio::spawn(async move {
        debug!(interval_ms = interval.as_millis() as u64, "Starting cache reaper");

        // First scan happens one full interval after start
        let start = tokio::time::Instant::now() + interval;
        let mut ticker = tokio::time::interval_at(start, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = shutdown.notified() => {
                    debug!("Cache reaper stopping");
                    break;
                }
                _ = ticker.tick() => {
                    let (removed, remaining) = {
                        let mut store_guard = store.write().await;
                        let removed = store_guard.reap(Instant::now());
                        (removed, store_guard.len())
                    };

                    counters.record_reaped(removed);

                    if removed > 0 {
                        info!(removed, remaining, "Cache reap: evicted expired entries");
                    } else {
                        debug!(remaining, "Cache reap: no expired entries found");
                    }
                }
            }
        }
    })
}
