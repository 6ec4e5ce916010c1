//! Health server configuration.

use std::net::{SocketAddr, ToSocketAddrs};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default bind host for the health server.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default bind port for the health server.
pub const DEFAULT_PORT: u16 = 8080;

/// Default message returned by the health endpoint.
pub const DEFAULT_MESSAGE: &str = "taskboard is running";

/// Configuration of the companion health-check server.
///
/// # Examples
///
/// ```
/// use taskboard_config::HealthConfig;
///
/// let health = HealthConfig::default();
/// let addr = health.socket_addr().unwrap();
/// assert_eq!(addr.port(), 8080);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthConfig {
    /// Host name or IP address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Message included in healthy responses.
    pub message: String,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            message: DEFAULT_MESSAGE.to_string(),
        }
    }
}

impl HealthConfig {
    /// Returns `host:port` as configured.
    #[must_use]
    pub fn address(&self) -> String {
        if self.host.contains(':') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    /// Resolves the address to bind.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAddress`] if the port is zero or the
    /// host does not resolve.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        if self.port == 0 {
            return Err(self.invalid("port must not be 0"));
        }

        (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(|e| self.invalid(e.to_string()))?
            .next()
            .ok_or_else(|| self.invalid("host did not resolve to any address"))
    }

    /// Validates the health section.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAddress`] if the port is zero or the
    /// host is blank.
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(self.invalid("port must not be 0"));
        }
        if self.host.trim().is_empty() {
            return Err(self.invalid("host is blank"));
        }
        Ok(())
    }

    fn invalid(&self, reason: impl Into<String>) -> ConfigError {
        ConfigError::InvalidAddress {
            address: self.address(),
            reason: reason.into(),
        }
    }
}
