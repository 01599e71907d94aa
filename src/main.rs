//! Pulseboard API Server
//!
//! Run with: cargo run --bin pulseboard
//!
//! # Configuration
//!
//! Read from `config.toml` (see `pulseboard-cli config`) and overridden by
//! environment variables:
//! - `PORT`: Port to listen on (default: 5000)
//! - `PULSEBOARD_HOST`: Host to bind to (default: 0.0.0.0)
//! - `PULSEBOARD_STORE_URL`: Store connection string (default: SQLite under the local data dir)
//! - `PULSEBOARD_STATIC_DIR`: Dashboard build directory (default: pulseboard-ui/dist)
//! - `PULSEBOARD_LOG_FORMAT`: `pretty` or `json`
//! - `RUST_LOG`: Log filter (default: pulseboard=info,tower_http=debug)

use pulseboard::api::{serve, AppState};
use pulseboard::config::{Config, LoggingConfig};
use pulseboard::store::open_store;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let loaded = Config::load_default();
    init_tracing(&loaded.config.logging);
    loaded.report();
    let config = loaded.config;

    tracing::info!("Starting Pulseboard API server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Static directory: {}", config.server.static_dir);

    let store = open_store(&config.store.url)?;
    store.ping().await?;
    let records = store.count().await?;
    tracing::info!(backend = store.backend(), records, "Document store ready");

    let state = AppState::new(store, config.server.clone());

    tracing::info!("Starting server on {}", config.addr());
    serve(state).await?;

    tracing::info!("Pulseboard API server stopped");
    Ok(())
}

/// Install the global subscriber: pretty or JSON output, filtered by `RUST_LOG`
/// or the configured level
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| logging.filter_directive().into());

    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
