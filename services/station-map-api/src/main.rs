//! Station Map API Server
//!
//! Serves per-session station layers to a browser map client.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use station_map_api::config::AppConfig;
use station_map_api::router;
use station_map_api::state::AppState;

/// Station Map API Server
#[derive(Parser, Debug)]
#[command(name = "station-map-api")]
#[command(about = "Interactive map of sampling stations grouped by project")]
struct Args {
    /// Config file
    #[arg(
        short,
        long,
        default_value = "config/station-map.yaml",
        env = "STATION_MAP_CONFIG"
    )]
    config: PathBuf,

    /// Listen address
    #[arg(short, long, default_value = "0.0.0.0:8090", env = "STATION_MAP_LISTEN_ADDR")]
    listen: String,

    /// Station file, overriding `source.path` from the config
    #[arg(short, long, env = "STATION_MAP_SOURCE")]
    source: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .json()
        .init();

    let prometheus = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install Prometheus recorder")?;

    info!("Prometheus metrics exporter initialized");
    info!("Starting station map API server");

    let mut config = AppConfig::load(&args.config)?;
    if let Some(source) = args.source {
        config.source.path = source;
    }
    info!(
        source = %config.source.path.display(),
        delimiter = %config.source.loader.delimiter,
        "Station source configured"
    );

    let state = Arc::new(AppState::new(config));
    let app = router(state, prometheus).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = args
        .listen
        .parse()
        .with_context(|| format!("Invalid listen address: {}", args.listen))?;
    info!(address = %addr, "Listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
