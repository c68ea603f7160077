//! Configuration Module
//!
//! Handles loading client configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default PokeAPI root URL
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache entry max-age and reap period in seconds
    pub cache_interval: u64,
    /// Root URL of the PokeAPI
    pub base_url: String,
    /// Per-request HTTP timeout in seconds
    pub http_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_INTERVAL` - Cache max-age / reap period in seconds (default: 5)
    /// - `POKEAPI_BASE_URL` - PokeAPI root URL (default: https://pokeapi.co/api/v2)
    /// - `HTTP_TIMEOUT` - Request timeout in seconds (default: 10)
    ///
    /// Missing, unparseable or zero durations fall back to the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_interval: positive_from_env("CACHE_INTERVAL").unwrap_or(defaults.cache_interval),
            base_url: env::var("POKEAPI_BASE_URL")
                .ok()
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.base_url),
            http_timeout: positive_from_env("HTTP_TIMEOUT").unwrap_or(defaults.http_timeout),
        }
    }

    /// Cache interval as a Duration.
    pub fn cache_interval(&self) -> Duration {
        Duration::from_secs(self.cache_interval)
    }

    /// HTTP timeout as a Duration.
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_interval: 5,
            base_url: DEFAULT_BASE_URL.to_string(),
            http_timeout: 10,
        }
    }
}

fn positive_from_env(name: &str) -> Option<u64> {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .filter(|v: &u64| *v > 0)
}
