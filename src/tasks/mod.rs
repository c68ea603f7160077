//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of a cache.
//!
//! # Tasks
//! - Reaper: Evicts stale cache entries at the cache interval

mod reaper;

pub use reaper::spawn_reaper;
