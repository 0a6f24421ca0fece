//! Petrodash API Server
//!
//! Run with: cargo run --bin petrodash
//!
//! # Configuration
//!
//! Loaded from `~/.config/petrodash/config.toml`, `/etc/petrodash/config.toml`
//! or `./config.toml` (first found), or from `--config <path>`.
//!
//! Environment variables override the file:
//! - `PETRODASH_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `PETRODASH_API_PORT`: Port to listen on (default: 8090)
//! - `PETRODASH_HISTORY_SEED`: Pin the synthetic history series
//! - `PETRODASH_LOG_LEVEL`: Log level (default: info)
//! - `PETRODASH_LOG_FORMAT`: `pretty` or `json`
//! - `RUST_LOG`: Full filter directive, wins over the log level

use clap::Parser;
use petrodash::api::{serve, AppState};
use petrodash::config::{Config, LoggingConfig};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "petrodash")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Petrodash API server")]
struct Args {
    /// Config file, instead of the default search path
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };

    init_tracing(&config.logging);

    tracing::info!("Starting Petrodash API server v{}", env!("CARGO_PKG_VERSION"));
    match config.dashboard.history_seed {
        Some(seed) => tracing::info!("History seed pinned to {}", seed),
        None => tracing::info!("History seed drawn per request"),
    }

    let api_config = config.api.clone();
    let state = AppState::new(config);

    tracing::info!("Starting server on {}:{}", api_config.host, api_config.port);
    serve(state, &api_config).await?;

    tracing::info!("Petrodash API server stopped");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("petrodash={},tower_http=debug", logging.level))
    });

    let registry = tracing_subscriber::registry().with(filter);
    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_flag() {
        let args = Args::try_parse_from(["petrodash", "--config", "/etc/pd.toml"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/etc/pd.toml")));

        let args = Args::try_parse_from(["petrodash", "--config=local.toml"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("local.toml")));

        assert!(Args::try_parse_from(["petrodash"]).unwrap().config.is_none());
    }

    #[test]
    fn test_bad_arguments_rejected() {
        assert!(Args::try_parse_from(["petrodash", "--config"]).is_err());
        assert!(Args::try_parse_from(["petrodash", "--cofig", "x"]).is_err());
    }
}
