//! HTTP API entry point for geosearch.
//!
//! ## Environment Variables
//!
//! - `GEOSEARCH_CONFIG`: Path to the configuration file (default: `data/config.toml`)
//! - `RUST_LOG`: Log filter, overrides `logging.level` from the config file

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use geosearch::config::{build_runtime, load_config};
use geosearch::error::Result;
use geosearch::server::{self, AppState};

/// Main entry point for the API server.
#[tokio::main]
async fn main() -> Result<()> {
    let config_path = std::env::var("GEOSEARCH_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data/config.toml"));

    let config = match load_config(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config from {}: {}", config_path.display(), e);
            return Err(e);
        }
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level)),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    info!(version = env!("CARGO_PKG_VERSION"), "starting api server");

    let runtime = build_runtime(config)
        .await
        .inspect_err(|e| error!("Failed to load jobs details: {}", e))?;
    info!(
        number_jobs = runtime.report.job_count,
        skipped_rows = runtime.report.skipped_rows,
        "loaded jobs details and initialized the api server settings"
    );

    let address = runtime.config.server.address();
    let state = Arc::new(AppState::new(runtime.service, runtime.report));
    if let Err(e) = server::serve(&address, state).await {
        error!(address = %address, "failed to bring up the api server: {}", e);
        return Err(e);
    }

    Ok(())
}
