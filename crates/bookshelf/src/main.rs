mod app;
mod catalog;
mod config;
mod handlers;
mod mock_data;
mod models;
mod state;
mod storage;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    app::create_app,
    catalog::Catalog,
    config::Config,
    mock_data::seed_catalog,
    state::AppState,
    storage::SqliteRepository,
};

/// Bookshelf - Register authors and books, then browse the catalog
#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "5000", env = "PORT")]
    port: u16,

    /// Keep the catalog in memory instead of the SQLite file
    #[arg(long)]
    in_memory: bool,

    /// Insert demo authors and books when the catalog is empty
    #[arg(long)]
    seed: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookshelf=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Open storage; the SQLite handle is kept here so it can be closed on exit
    let (state, sqlite) = if cli.in_memory {
        tracing::info!("Using in-memory storage");
        (AppState::in_memory(), None)
    } else {
        let repo = Arc::new(SqliteRepository::open(&config.sqlite_path).await?);
        tracing::info!(path = %config.sqlite_path, "Using SQLite storage");
        let catalog = Catalog::new(repo.clone(), repo.clone());
        (AppState::new(catalog), Some(repo))
    };

    if cli.seed {
        seed_catalog(&state.catalog).await?;
    }

    // Build the application router
    let app = create_app(state, &config);

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        // If we are given a tcp listener on listen fd 0, use that one
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        // Otherwise fall back to CLI-specified host:port
        None => {
            let addr = format!("{}:{}", cli.host, cli.port);
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!("listening on {}", listener.local_addr()?);

    // Run the server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    if let Some(repo) = sqlite {
        close_storage(repo).await?;
    }

    Ok(())
}

/// Close the SQLite connection once every other handle has been dropped.
async fn close_storage(repo: Arc<SqliteRepository>) -> Result<()> {
    match Arc::try_unwrap(repo) {
        Ok(repo) => {
            repo.close().await?;
            tracing::info!("Database closed");
        }
        Err(repo) => {
            tracing::warn!(
                handles = Arc::strong_count(&repo),
                "Database still shared at shutdown, leaving it to drop"
            );
        }
    }
    Ok(())
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
