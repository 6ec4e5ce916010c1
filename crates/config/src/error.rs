//! Error types for configuration operations.
//!
//! This module defines the error types that can occur during configuration
//! loading, parsing, and validation.

use std::path::PathBuf;

/// Errors that can occur during configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read config file at {path}: {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a configuration file.
    #[error("failed to write config file at {path}: {source}")]
    WriteFile {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse JSON5 configuration.
    #[error("failed to parse config: {0}")]
    ParseJson5(#[from] serde_json5::Error),

    /// Failed to serialize configuration to JSON.
    #[error("failed to serialize config: {0}")]
    SerializeJson(#[from] serde_json::Error),

    /// The board section is invalid.
    #[error("invalid board config: {reason}")]
    InvalidBoard {
        /// Why the board section was refused.
        reason: String,
    },

    /// The health server address cannot be used.
    #[error("invalid health server address '{address}': {reason}")]
    InvalidAddress {
        /// The address as configured.
        address: String,
        /// Why it was refused.
        reason: String,
    },

    /// The log level is not one of the known levels.
    #[error("invalid log level '{0}' (expected one of trace, debug, info, warn, error, off)")]
    InvalidLogLevel(String),

    /// Failed to determine home directory.
    #[error("could not determine home directory")]
    NoHomeDirectory,
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = ConfigError::InvalidBoard {
            reason: "no columns".to_string(),
        };
        assert_eq!(err.to_string(), "invalid board config: no columns");

        let err = ConfigError::InvalidAddress {
            address: "nowhere:0".to_string(),
            reason: "port must not be 0".to_string(),
        };
        assert!(err.to_string().contains("'nowhere:0'"));

        let err = ConfigError::InvalidLogLevel("loud".to_string());
        assert!(err.to_string().starts_with("invalid log level 'loud'"));
    }
}
