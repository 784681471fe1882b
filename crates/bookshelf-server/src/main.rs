//! Server entry point for the Bookshelf CRUD API.
//!
//! Loads settings from the environment, wires the configured store
//! backend into the controller, and runs one of two transports over
//! the same route table:
//!
//! - `RUN_MODE=server` (default): bind a TCP listener and serve HTTP.
//! - `RUN_MODE=invoke`: suppress local listening and serve JSON
//!   invocation envelopes on stdin/stdout for an embedding host.
//!
//! The database connection is lazy: the first request that reaches the
//! store establishes it, and concurrent first requests share one
//! connect attempt.

mod config;
mod error;
mod invoke;

use std::sync::Arc;

use bookshelf_api::{build_router, start_server, AppState, ServerConfig};
use bookshelf_db::{BookStore, Database, MemoryBookStore, PgBookStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{Backend, RunMode, Settings};
use crate::error::AppError;

/// Application entry point.
///
/// Initializes logging, loads configuration from environment
/// variables, selects the store backend and transport, then serves
/// until the process is terminated (server mode) or the input stream
/// closes (invoke mode).
///
/// # Errors
///
/// Returns an error if configuration is malformed or the selected
/// transport fails.
#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("bookshelf-server starting");

    let settings = Settings::from_env()?;
    info!(
        run_mode = ?settings.run_mode,
        backend = ?settings.backend,
        port = settings.port,
        "configuration loaded"
    );

    let store: Arc<dyn BookStore> = match settings.backend {
        Backend::Postgres => Arc::new(PgBookStore::new(Database::new(
            settings.database_url.clone(),
        ))),
        Backend::Memory => Arc::new(MemoryBookStore::new()),
    };

    let state = Arc::new(AppState::new(store));

    match settings.run_mode {
        RunMode::Server => {
            let server_config = ServerConfig {
                host: settings.host.clone(),
                port: settings.port,
            };
            start_server(&server_config, state).await?;
        }
        RunMode::Invoke => {
            info!("local listening suppressed, serving invocation envelopes");
            let router = build_router(state);
            invoke::run(router, tokio::io::stdin(), tokio::io::stdout()).await?;
        }
    }

    Ok(())
}
