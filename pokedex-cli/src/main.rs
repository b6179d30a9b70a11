//! Pokedex CLI
//!
//! Interactive command-line client for browsing PokeAPI location areas.

mod commands;
mod repl;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pokedex_api::{ClientConfig, PokeApiClient};
use pokedex_cache::ExpiringCache;
use pokedex_core::constants::{DEFAULT_API_BASE_URL, DEFAULT_CACHE_INTERVAL_SECS, DEFAULT_HTTP_TIMEOUT_SECS};

/// Pokedex - browse PokeAPI location areas from your terminal
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Seconds a cached response is kept (also the reaper period)
    #[arg(
        long,
        env = "POKEDEX_CACHE_INTERVAL",
        default_value_t = DEFAULT_CACHE_INTERVAL_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    cache_interval: u64,

    /// PokeAPI root URL
    #[arg(long, env = "POKEAPI_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    base_url: String,

    /// HTTP request timeout in seconds
    #[arg(
        long,
        default_value_t = DEFAULT_HTTP_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with REPL output on stdout.
    let filter = if cli.verbose {
        "pokedex=debug,info"
    } else {
        "pokedex=info,warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cache = ExpiringCache::new(Duration::from_secs(cli.cache_interval))
        .context("Failed to create response cache")?;

    let config = ClientConfig::default()
        .with_base_url(cli.base_url)
        .with_timeout(cli.timeout);
    let client = PokeApiClient::new(config, cache.clone())
        .context("Failed to create PokeAPI client")?;

    println!("\n {}", "Hello from the Pokedex!".cyan().bold());
    println!(" {}\n", format!("Responses are cached for {:?}.", cache.interval()).dimmed());

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    repl::run(&client, stdin, &mut stdout)
        .await
        .context("REPL terminated")?;

    debug!(stats = ?cache.stats(), "Exiting");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["pokedex"]).unwrap();
        assert_eq!(cli.cache_interval, DEFAULT_CACHE_INTERVAL_SECS);
        assert_eq!(cli.base_url, DEFAULT_API_BASE_URL);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_rejects_zero_interval() {
        assert!(Cli::try_parse_from(["pokedex", "--cache-interval", "0"]).is_err());
    }

    #[test]
    fn test_cli_rejects_zero_timeout() {
        assert!(Cli::try_parse_from(["pokedex", "--timeout", "0"]).is_err());
        let cli = Cli::try_parse_from(["pokedex", "--timeout", "1"]).unwrap();
        assert_eq!(cli.timeout, 1);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::try_parse_from([
            "pokedex",
            "-v",
            "--cache-interval",
            "5",
            "--base-url",
            "http://localhost:9000",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.cache_interval, 5);
        assert_eq!(cli.base_url, "http://localhost:9000");
    }
}
