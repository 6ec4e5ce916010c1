//! Error types for the health server.

use std::net::SocketAddr;

use taskboard_config::ConfigError;
use thiserror::Error;

/// Errors that stop the health server.
#[derive(Debug, Error)]
pub enum HealthError {
    /// The configured address is unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The listener could not be bound.
    #[error("failed to bind health server to {addr}: {source}")]
    Bind {
        /// The address that could not be bound.
        addr: SocketAddr,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("health server failed: {0}")]
    Serve(#[source] std::io::Error),
}

/// A specialized Result type for the health server.
pub type Result<T> = std::result::Result<T, HealthError>;
