//! Log output for the taskboard binary.
//!
//! The board owns the terminal, so it logs to a file. The health server logs
//! to stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable overriding the configured level.
pub const LOG_ENV: &str = "TASKBOARD_LOG";

/// Where log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Append to a file, creating it and its directory if needed.
    File(PathBuf),
    /// Write to stderr.
    Stderr,
}

/// Installs the global subscriber.
///
/// The filter is `TASKBOARD_LOG` when set, `level` otherwise.
pub fn init(level: &str, target: LogTarget) -> anyhow::Result<()> {
    let filter = make_filter(&filter_directive(level, std::env::var(LOG_ENV).ok()))?;
    let registry = tracing_subscriber::registry().with(filter);

    match target {
        LogTarget::File(path) => {
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)
                    .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;

            registry
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .try_init()?;
        }
        LogTarget::Stderr => {
            registry
                .with(fmt::layer().with_writer(std::io::stderr))
                .try_init()?;
        }
    }
    Ok(())
}

fn filter_directive(configured: &str, env: Option<String>) -> String {
    match env {
        Some(directive) if !directive.trim().is_empty() => directive,
        _ => configured.to_ascii_lowercase(),
    }
}

fn make_filter(directive: &str) -> anyhow::Result<EnvFilter> {
    EnvFilter::try_new(directive).with_context(|| format!("invalid log filter '{directive}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_overrides_configured_level() {
        assert_eq!(filter_directive("info", Some("debug".to_string())), "debug");
        assert_eq!(
            filter_directive("info", Some("taskboard_dnd=trace".to_string())),
            "taskboard_dnd=trace"
        );
    }

    #[test]
    fn blank_env_falls_back_to_config() {
        assert_eq!(filter_directive("WARN", Some("  ".to_string())), "warn");
        assert_eq!(filter_directive("error", None), "error");
    }

    #[test]
    fn config_levels_are_valid_filters() {
        for level in taskboard_config::logging::LEVELS {
            assert!(make_filter(level).is_ok(), "{level}");
        }
    }

    #[test]
    fn garbage_filter_is_rejected() {
        assert!(make_filter("taskboard=loud").is_err());
    }
}
