//! INSpace Risk API Server
//!
//! Serves the mock insurance portfolio, flood zones, risk KPIs and the
//! status log over HTTP.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use portfolio::DEFAULT_ASSET_COUNT;
use risk_api::config::ServiceConfig;
use risk_api::routes::build_router;
use risk_api::state::AppState;

/// INSpace Risk API Server
#[derive(Parser, Debug)]
#[command(name = "risk-api")]
#[command(about = "Insurance portfolio flood-risk analytics API")]
struct Args {
    /// Listen address
    #[arg(short, long, default_value = "0.0.0.0:8001", env = "RISK_LISTEN_ADDR")]
    listen: String,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Number of worker threads
    #[arg(long, env = "RISK_WORKER_THREADS")]
    worker_threads: Option<usize>,

    /// Status log database URL
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Database name, overriding the one in the URL
    #[arg(long, env = "DB_NAME")]
    db_name: Option<String>,

    /// Comma-separated allowed CORS origins ("*" allows all)
    #[arg(long, default_value = "*", env = "CORS_ORIGINS")]
    cors_origins: String,

    /// Number of mock assets to generate
    #[arg(long, default_value_t = DEFAULT_ASSET_COUNT, env = "RISK_ASSET_COUNT")]
    asset_count: usize,

    /// Seed for the mock portfolio (random when omitted)
    #[arg(long, env = "RISK_SEED")]
    seed: Option<u64>,

    /// Keep status checks in memory instead of a database
    #[arg(long, env = "RISK_IN_MEMORY")]
    in_memory: bool,
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Build runtime with configured threads
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(threads) = args.worker_threads {
        runtime_builder.worker_threads(threads);
    }

    let runtime = runtime_builder
        .build()
        .context("Failed to create Tokio runtime")?;

    runtime.block_on(run_server(args))
}

async fn run_server(args: Args) -> Result<()> {
    // Initialize tracing
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .json()
        .init();

    let prometheus_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install Prometheus recorder")?;

    info!("Starting INSpace risk API server");

    let config = ServiceConfig::new(
        args.database_url,
        args.db_name,
        args.in_memory,
        &args.cors_origins,
        args.asset_count,
        args.seed.unwrap_or_else(rand::random),
    )?;

    let state = match AppState::from_config(&config).await {
        Ok(state) => Arc::new(state.with_prometheus(prometheus_handle)),
        Err(e) => {
            tracing::error!("Failed to initialize application state: {}", e);
            std::process::exit(1);
        }
    };
    let status_log = Arc::clone(&state.status_log);

    let app = build_router(state, config.cors_origins.layer());

    let addr: SocketAddr = args
        .listen
        .parse()
        .with_context(|| format!("Invalid listen address: {}", args.listen))?;

    info!(address = %addr, "Risk API listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server failed")?;

    status_log.close().await;
    info!("Risk API stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.ok();
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Received shutdown signal");
}
