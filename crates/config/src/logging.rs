//! Logging configuration.
//!
//! The board owns the terminal, so its logs go to a file; the health server
//! logs to stderr. Only the level and the file location are configurable.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default log level.
pub const DEFAULT_LEVEL: &str = "info";

/// Levels accepted in `logging.level`.
pub const LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Directory under the user data directory that holds the log file.
const DATA_DIR: &str = "taskboard";

/// File name of the default log file.
const LOG_FILE_NAME: &str = "taskboard.log";

/// Configuration of log output.
///
/// # Examples
///
/// ```
/// use taskboard_config::LoggingConfig;
///
/// let logging = LoggingConfig::default();
/// assert_eq!(logging.level, "info");
/// assert!(logging.file.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level to record.
    pub level: String,

    /// Log file for the board; defaults to the user data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL.to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Returns the file the board logs to.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoHomeDirectory`] if no file is configured and
    /// the user data directory cannot be determined.
    pub fn log_file(&self) -> Result<PathBuf> {
        match &self.file {
            Some(path) => Ok(path.clone()),
            None => default_log_file(),
        }
    }

    /// Validates the logging section.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLogLevel`] for an unknown level.
    pub fn validate(&self) -> Result<()> {
        let level = self.level.to_ascii_lowercase();
        if LEVELS.contains(&level.as_str()) {
            Ok(())
        } else {
            Err(ConfigError::InvalidLogLevel(self.level.clone()))
        }
    }
}

/// Returns the default log file, `<data dir>/taskboard/taskboard.log`.
///
/// # Errors
///
/// Returns [`ConfigError::NoHomeDirectory`] if the user data directory cannot
/// be determined.
pub fn default_log_file() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|d| d.join(DATA_DIR).join(LOG_FILE_NAME))
        .ok_or(ConfigError::NoHomeDirectory)
}
