//! Health-check endpoint for taskboard deployments.
//!
//! A small axum server that answers `GET /health` and `GET /` with a JSON
//! status, `404` with a JSON error for any other path, and CORS preflights
//! for every path. It runs as its own process and shares nothing with the
//! board.
//!
//! # Examples
//!
//! ```no_run
//! use taskboard_config::HealthConfig;
//!
//! #[tokio::main]
//! async fn main() -> taskboard_health::Result<()> {
//!     let config = HealthConfig::default();
//!     taskboard_health::run(&config, taskboard_health::shutdown_signal()).await
//! }
//! ```

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use taskboard_config::HealthConfig;
use tokio::net::TcpListener;
use tracing::{info, warn};

pub mod error;
pub mod http;

pub use error::{HealthError, Result};
pub use http::{ErrorResponse, HealthApi, HealthResponse};

/// Binds a listener on `addr`.
///
/// # Errors
///
/// Returns [`HealthError::Bind`] if the address cannot be bound.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| HealthError::Bind { addr, source })
}

/// Serves `router` on `listener` until `shutdown` completes.
///
/// In-flight requests are allowed to finish after `shutdown` fires.
///
/// # Errors
///
/// Returns [`HealthError::Serve`] if the server fails.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(HealthError::Serve)
}

/// Runs the health server described by `config` until `shutdown` completes.
///
/// # Errors
///
/// Returns an error if the configured address is invalid, cannot be bound,
/// or the server fails.
pub async fn run<F>(config: &HealthConfig, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = config.socket_addr()?;
    let listener = bind(addr).await?;
    info!(%addr, "health server listening");

    let router = HealthApi::new(config.message.clone()).router();
    serve(listener, router, shutdown).await?;

    info!("health server stopped");
    Ok(())
}

/// Completes when the process receives Ctrl+C.
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown requested"),
        Err(e) => {
            warn!(error = %e, "failed to listen for Ctrl+C, stopping now");
        }
    }
}
