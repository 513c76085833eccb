//! Fast Break leaderboard API server.

use anyhow::{Context, Result};
use clap::Parser;
use fastbreak_api_rest::{create_app, ApiConfig, AppState};
use fastbreak_application::ServiceConfig;
use fastbreak_common::{init_tracing, AppConfig};
use fastbreak_infrastructure::{DatabaseConfig, DatabasePool};
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "fastbreak-api")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, env = "FASTBREAK_CONFIG")]
    config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long, env = "FASTBREAK_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "FASTBREAK_PORT")]
    port: Option<u16>,

    /// SQLite connection URL
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };

    // Override with CLI arguments
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(url) = args.database_url {
        config.database.url = url;
    }
    config.validate()?;

    init_tracing(&config.telemetry)?;

    info!(
        address = %config.server_address(),
        database = %config.database.url,
        "Starting Fast Break leaderboard API"
    );

    let pool = DatabasePool::new(&DatabaseConfig::from(&config.database))
        .await
        .context("Failed to open database")?;
    pool.ensure_schema()
        .await
        .context("Failed to create database schema")?;

    let state = AppState::new(
        ApiConfig::from(&config),
        pool.clone(),
        ServiceConfig::new(config.leaderboard.policy()),
    );
    let app = create_app(state)?;

    let listener = TcpListener::bind(config.server_address())
        .await
        .with_context(|| format!("Failed to bind {}", config.server_address()))?;
    info!(address = %config.server_address(), "Listening");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    pool.close().await;

    if let Err(e) = &served {
        error!(error = %e, "Server error");
    }
    served.context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!(error = %e, "Failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
