//! Cache Module
//!
//! Provides an in-memory response cache whose entries expire by age.

mod entry;
mod handle;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use handle::Cache;
pub use stats::{CacheStats, StatsCounters};
pub use store::CacheStore;

// == Public Constants ==
/// Smallest accepted cache interval
pub const MIN_INTERVAL: std::time::Duration = std::time::Duration::from_millis(1);

/// Largest accepted cache interval (one year)
pub const MAX_INTERVAL: std::time::Duration = std::time::Duration::from_secs(365 * 24 * 60 * 60);
