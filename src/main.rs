use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use poi_finder::config::{FileConfig, Overrides};
use poi_finder::server::{AppState, build_app};

/// Points-of-interest, geocoding, weather and translation API backed by OpenStreetMap
///
/// Examples:
///   # Serve on the default port 7860
///   poi-finder
///
///   # Custom address with weather enabled
///   OPENWEATHER_API_KEY=... poi-finder --bind 127.0.0.1:8080
///
///   # Use a config file
///   poi-finder --config my-settings.toml
#[derive(Parser, Debug)]
#[command(name = "poi-finder")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches poi-finder.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Address to listen on
    #[arg(short = 'b', long, env = "POI_FINDER_BIND")]
    bind: Option<SocketAddr>,

    /// OpenWeather API key; the weather endpoint is disabled without one
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    openweather_api_key: Option<String>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let file_config = match args.config {
        Some(ref config_path) => FileConfig::from_path(config_path)?,
        None => FileConfig::load().unwrap_or_default(),
    };
    let config = file_config.with_overrides(Overrides {
        bind: args.bind,
        openweather_api_key: args.openweather_api_key,
        verbose: args.verbose,
    });

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_filter()))
        .context("Invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    if config.upstream.openweather_api_key.is_none() {
        tracing::warn!("OpenWeather API key not configured, /api/weather will fail");
    }

    let state = AppState::from_config(&config.upstream).context("Failed to create HTTP client")?;
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;
    tracing::info!(addr = %config.bind, overpass = %config.upstream.overpass_url, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
