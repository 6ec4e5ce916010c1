//! Configuration management for the taskboard application.
//!
//! This crate handles loading, validating, and persisting configuration
//! from files, falling back to built-in defaults.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`board`]: Board title, status columns and notifications
//! - [`health`]: Health server bind address and message
//! - [`logging`]: Log level and log file location
//! - [`persistence`]: Config file reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! 1. An explicit `--config PATH` passed to the binary
//! 2. Local config (`./taskboard.json5` or `./taskboard.json`)
//! 3. User config (`~/.config/taskboard/config.json5` or `~/.config/taskboard/config.json`)
//! 4. Built-in defaults
//!
//! # File Format
//!
//! ```json5
//! {
//!   board: {
//!     title: "Sprint 12",
//!     // Shown even when empty; other statuses get their own columns
//!     columns: ["todo", "doing", "review", "done"],
//!     enforce_columns: false,
//!   },
//!   health: { host: "127.0.0.1", port: 8080 },
//!   logging: { level: "info" },
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use taskboard_config::Config;
//!
//! # fn example() -> taskboard_config::Result<()> {
//! let (config, _source) = Config::load()?;
//! for column in &config.board.columns {
//!     println!("Column: {column}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod health;
pub mod logging;
pub mod persistence;

// Re-export primary types at crate root for convenience
pub use board::BoardConfig;
pub use config::Config;
pub use error::{ConfigError, Result};
pub use health::HealthConfig;
pub use logging::LoggingConfig;
