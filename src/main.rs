//! Pokedex - A command-line PokeAPI browser
//!
//! Starts the response cache and runs the interactive command loop on
//! stdin/stdout.

use anyhow::Context;
use tokio::io::BufReader;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::{Cache, Config, HttpFetcher, PokeApiClient, Repl};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables
/// 3. Create the response cache, which starts its reaper
/// 4. Build the HTTP client and the REPL around them
/// 5. Run the REPL until `exit`, end of input, or Ctrl+C
/// 6. Stop the reaper
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so logs stay out of the way of the prompt;
    // override with RUST_LOG
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: api_url={}, cache_ttl={}s, http_timeout={}s",
        config.api_url, config.cache_ttl, config.http_timeout
    );

    let cache = Cache::new(config.cache_ttl());
    info!("Response cache initialized");

    let fetcher =
        HttpFetcher::new(config.http_timeout()).context("failed to build HTTP client")?;
    let client = PokeApiClient::new(fetcher, cache.clone(), config.api_url.clone());
    let mut repl = Repl::new(client);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();

    let interrupted = tokio::select! {
        result = repl.run(stdin, &mut stdout) => {
            result.context("command loop failed")?;
            false
        }
        _ = signal::ctrl_c() => {
            info!("Received Ctrl+C, exiting");
            true
        }
    };

    cache.stop();
    info!("Cache reaper stopped");

    if interrupted {
        // The stdin reader may still be parked in a blocking read that would
        // hold up runtime shutdown
        std::process::exit(130);
    }

    Ok(())
}
