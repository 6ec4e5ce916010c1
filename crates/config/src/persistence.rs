//! Configuration file reading and writing.
//!
//! This module handles loading configuration from files and saving
//! configuration back to files.
//!
//! # File Formats
//!
//! The module supports both JSON5 and JSON formats:
//!
//! - JSON5 (`.json5`): Preferred format with comments and trailing commas
//! - JSON (`.json`): Standard JSON format
//!
//! # File Locations
//!
//! Configuration is searched in the following order:
//!
//! 1. Local: `./taskboard.json5` or `./taskboard.json`
//! 2. User: `~/.config/taskboard/config.json5` or `~/.config/taskboard/config.json`

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Configuration file names to search for, in priority order.
const CONFIG_FILE_NAMES: &[&str] = &["taskboard.json5", "taskboard.json"];

/// User config directory name.
const USER_CONFIG_DIR: &str = "taskboard";

/// User config file names to search for, in priority order.
const USER_CONFIG_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// Finds the configuration file path.
///
/// Searches in the following order:
///
/// 1. Local directory: `./taskboard.json5`, `./taskboard.json`
/// 2. User config directory: `~/.config/taskboard/config.json5`, `~/.config/taskboard/config.json`
///
/// # Returns
///
/// Returns `Some(path)` if a config file is found, `None` otherwise.
///
/// # Examples
///
/// ```no_run
/// use taskboard_config::persistence::find_config_file;
///
/// if let Some(path) = find_config_file() {
///     println!("Found config at: {}", path.display());
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    find_config_file_in(Path::new("."), dirs::config_dir().as_deref())
}

/// Finds the configuration file, searching `local_dir` and then the
/// `taskboard` directory under `user_config_root`.
///
/// # Examples
///
/// ```
/// use taskboard_config::persistence::find_config_file_in;
///
/// let dir = std::env::temp_dir().join("taskboard-doc-find-config");
/// std::fs::create_dir_all(&dir).unwrap();
/// std::fs::write(dir.join("taskboard.json"), "{}").unwrap();
///
/// assert_eq!(find_config_file_in(&dir, None), Some(dir.join("taskboard.json")));
/// # std::fs::remove_dir_all(&dir).unwrap();
/// ```
#[must_use]
pub fn find_config_file_in(local_dir: &Path, user_config_root: Option<&Path>) -> Option<PathBuf> {
    let local = CONFIG_FILE_NAMES.iter().map(|name| local_dir.join(name));
    let user = user_config_root
        .map(|root| root.join(USER_CONFIG_DIR))
        .into_iter()
        .flat_map(|dir| USER_CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)));

    local.chain(user).find(|path| path.is_file())
}

/// Reads a JSON5 (or plain JSON) file into `T`.
///
/// # Errors
///
/// Returns [`ConfigError::ReadFile`] if the file cannot be read and
/// [`ConfigError::ParseJson5`] if its content does not parse into `T`.
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json5::from_str(&content)?)
}

/// Writes `config` to `path` as pretty-printed JSON, creating missing
/// parent directories.
///
/// JSON is valid JSON5, so the file reads back with [`read_config_file`].
///
/// # Errors
///
/// Returns [`ConfigError::SerializeJson`] if `config` cannot be serialized
/// and [`ConfigError::WriteFile`] if the directory or file cannot be written.
pub fn write_config_file<T: serde::Serialize>(path: impl AsRef<Path>, config: &T) -> Result<()> {
    let path = path.as_ref();
    let content = serde_json::to_string_pretty(config)?;
    let write_error = |source| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(path, content).map_err(write_error)
}
