//! motif-save - HTTP service persisting motif JSON for the web front end
//!
//! Serves `POST /api/save-motifs`, overwriting `static/data/motifs.json`
//! under the project root.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use motif_common::config::{ProjectRootResolver, TomlConfig};
use motif_common::ProjectLayout;
use motif_save::api::buildinfo::BUILD_INFO;
use motif_save::{build_router, AppState};
use tokio::signal;
use tracing::info;

/// Command-line arguments for motif-save
#[derive(Parser, Debug)]
#[command(name = "motif-save")]
#[command(about = "Persists motif JSON posted by the web front end")]
#[command(version)]
struct Args {
    /// Web application project root
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Config file (defaults to the per-user motif-tools/config.toml)
    #[arg(short, long, env = "MOTIF_CONFIG")]
    config: Option<PathBuf>,

    /// Address to bind
    #[arg(long, env = "MOTIF_SAVE_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "MOTIF_SAVE_PORT")]
    port: Option<u16>,

    /// Write motifs here instead of <root>/static/data/motifs.json
    #[arg(long)]
    motifs_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = TomlConfig::load(args.config.as_deref()).context("Failed to load config")?;
    motif_common::logging::init_tracing(&config.logging.level);

    info!("Starting {}", BUILD_INFO.banner());

    let root = ProjectRootResolver::new("motif-save")
        .with_cli_arg(args.root)
        .with_config(&config)
        .resolve();
    let layout = ProjectLayout::new(root);
    info!("Project root: {}", layout.root().display());

    let motifs_path = args.motifs_path.unwrap_or_else(|| layout.motifs_path());
    info!("Motifs file: {}", motifs_path.display());

    let state = AppState::new(motifs_path, config.server.max_body_bytes);
    let app = build_router(state);

    let host = args.host.unwrap_or(config.server.host);
    let port = args.port.unwrap_or(config.server.port);
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .with_context(|| format!("Invalid listen address {}:{}", host, port))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("motif-save listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
