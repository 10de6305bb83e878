//! Launch Dash Server
//!
//! Loads the launch records table and serves the dashboard.
//!
//! Run with: cargo run --bin launch-dash -- --dataset spacex_launch_dash.csv
//!
//! # Configuration
//!
//! Settings come from a TOML file (`--config`, or the default locations),
//! then `LAUNCH_DASH_*` environment variables, then command-line flags.

use anyhow::Context;
use clap::Parser;
use launch_dash::api::{serve, AppState};
use launch_dash::config::Config;
use launch_dash::dataset::Dataset;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "launch-dash")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Serve the launch records dashboard")]
struct Args {
    /// Config file (default: search standard locations)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Launch records CSV
    #[arg(short, long)]
    dataset: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (mut config, source) = match &args.config {
        Some(path) => (Config::load_with_env(path)?, Some(path.clone())),
        None => Config::load_default()?,
    };
    if let Some(dataset) = args.dataset {
        config.dataset.path = dataset.to_string_lossy().to_string();
    }
    if let Some(host) = args.host {
        config.api.host = host;
    }
    if let Some(port) = args.port {
        config.api.port = port;
    }

    launch_dash::logging::init(&config.logging);

    tracing::info!("Starting launch dashboard v{}", env!("CARGO_PKG_VERSION"));
    match &source {
        Some(path) => tracing::info!("Loaded config from {:?}", path),
        None => tracing::info!("Using default config with environment overrides"),
    }
    tracing::info!("Dataset: {}", config.dataset.path);

    let dataset = Dataset::load(&config.dataset.path)
        .with_context(|| format!("failed to load launch dataset {}", config.dataset.path))?;

    let state = AppState::new(
        Arc::new(dataset),
        config.dataset.path.clone(),
        config.api.clone(),
    );

    serve(state, &config.api).await?;

    tracing::info!("Launch dashboard stopped");
    Ok(())
}
