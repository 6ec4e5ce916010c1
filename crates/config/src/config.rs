//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the taskboard application.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::board::BoardConfig;
use crate::error::Result;
use crate::health::HealthConfig;
use crate::logging::LoggingConfig;
use crate::persistence::{find_config_file, read_config_file, write_config_file};

/// The main configuration struct for the taskboard application.
///
/// Every section falls back to its defaults when missing, so an empty file
/// is a valid configuration.
///
/// # Examples
///
/// ```
/// use taskboard_config::{BoardConfig, Config};
///
/// // Create a default config
/// let config = Config::default();
/// assert_eq!(config.board.columns, ["todo", "doing", "done"]);
///
/// // Create a custom config
/// let config = Config {
///     board: BoardConfig::with_columns(["backlog", "doing", "review", "done"]),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Board view settings.
    #[serde(default)]
    pub board: BoardConfig,

    /// Health server settings.
    #[serde(default)]
    pub health: HealthConfig,

    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Creates a new configuration with all defaults.
    ///
    /// This is equivalent to `Config::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// Searches for configuration files in the following order:
    ///
    /// 1. Local: `./taskboard.json5` or `./taskboard.json`
    /// 2. User: `~/.config/taskboard/config.json5` or `~/.config/taskboard/config.json`
    ///
    /// If no configuration file is found, returns a default configuration.
    /// The path the configuration came from is returned alongside it.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use taskboard_config::Config;
    ///
    /// # fn example() -> taskboard_config::Result<()> {
    /// let (config, source) = Config::load()?;
    /// if let Some(path) = source {
    ///     println!("Loaded {}", path.display());
    /// }
    /// println!("{} columns", config.board.columns.len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn load() -> Result<(Self, Option<PathBuf>)> {
        match find_config_file() {
            Some(path) => {
                let config = Self::load_from(&path)?;
                Ok((config, Some(path)))
            }
            None => Ok((Self::default(), None)),
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use taskboard_config::Config;
    ///
    /// # fn example() -> taskboard_config::Result<()> {
    /// let config = Config::load_from("custom-config.json5")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Validates every section.
    ///
    /// # Errors
    ///
    /// Returns the first section error found.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskboard_config::Config;
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.health.port = 0;
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        self.board.validate()?;
        self.health.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Returns the statuses the store should accept, when enforced.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskboard_config::Config;
    ///
    /// let mut config = Config::default();
    /// assert!(config.allowed_statuses().is_none());
    ///
    /// config.board.enforce_columns = true;
    /// assert_eq!(config.allowed_statuses().unwrap().len(), 3);
    /// ```
    #[must_use]
    pub fn allowed_statuses(&self) -> Option<&[String]> {
        self.board
            .enforce_columns
            .then_some(self.board.columns.as_slice())
    }
}
