//! Pokedex - An interactive PokeAPI client
//!
//! Pages through location areas and the Pokemon found in them. Every API
//! response is kept in a time-expiring cache reaped in the background.

use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::{commands, Cache, Config, PokeApiClient};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables
/// 3. Create the response cache, which starts its reaper
/// 4. Build the PokeAPI client around the cache
/// 5. Run the REPL on stdin/stdout until `exit`, end of input or Ctrl+C
/// 6. Stop the reaper
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so logs stay out of the way of the prompt,
    // can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_interval={}s, base_url={}, http_timeout={}s",
        config.cache_interval, config.base_url, config.http_timeout
    );

    let cache = Arc::new(Cache::new(config.cache_interval()));
    let client = PokeApiClient::from_config(&config, cache.clone())
        .context("failed to build HTTP client")?;

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    let outcome = commands::run_until(stdin, &mut stdout, &client, ctrl_c()).await;

    let stats = cache.stats().await;
    debug!(
        hits = stats.hits,
        misses = stats.misses,
        reaped = stats.reaped,
        entries = stats.total_entries,
        hit_rate = stats.hit_rate(),
        "Cache statistics"
    );
    cache.shutdown().await;

    outcome.context("terminal I/O failed")
}

/// Waits for Ctrl+C.
///
/// If the handler cannot be installed this never completes, so the REPL
/// still ends through `exit` or end of input.
async fn ctrl_c() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl+C, shutting down..."),
        Err(e) => {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    }
}
