//! taskboard - A terminal task board with drag-and-drop status columns.
//!
//! This is the main binary. `taskboard board` (the default) opens the TUI;
//! `taskboard health` serves the health-check endpoint.

mod logging;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use taskboard_config::Config;
use taskboard_protocol::{MemoryTaskStore, TaskStore, dummy::dummy_store};
use taskboard_tui::{App, terminal};
use tracing::info;

use crate::logging::LogTarget;

/// Taskboard - drag tasks between status columns and watch the counts move
#[derive(Parser, Debug)]
#[command(name = "taskboard")]
#[command(version, about, long_about = None)]
#[command(
    after_help = "ENVIRONMENT:\n    TASKBOARD_LOG   Log filter overriding logging.level (e.g. debug, taskboard_dnd=trace)"
)]
struct Cli {
    /// Read configuration from this file instead of searching for one
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum Command {
    /// Open the task board (default)
    Board,
    /// Serve the health-check endpoint until Ctrl+C
    Health,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let (config, source) = load_config(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Board) {
        Command::Board => run_board(config, source).await,
        Command::Health => run_health(config, source).await,
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<(Config, Option<PathBuf>)> {
    match path {
        Some(path) => {
            let config = Config::load_from(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?;
            Ok((config, Some(path.to_path_buf())))
        }
        None => Config::load().context("failed to load config"),
    }
}

async fn run_board(config: Config, source: Option<PathBuf>) -> anyhow::Result<()> {
    let log_file = config.logging.log_file()?;
    logging::init(&config.logging.level, LogTarget::File(log_file))?;
    info!(source = ?source, "configuration loaded");

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();
    let mut terminal = terminal::setup_terminal()?;

    let mut app = App::with_config(board_store(&config), config);
    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    result
}

async fn run_health(config: Config, source: Option<PathBuf>) -> anyhow::Result<()> {
    logging::init(&config.logging.level, LogTarget::Stderr)?;
    info!(source = ?source, "configuration loaded");

    taskboard_health::run(&config.health, taskboard_health::shutdown_signal()).await?;
    Ok(())
}

/// Builds the demo store, restricted to the configured columns when enforced.
fn board_store(config: &Config) -> MemoryTaskStore {
    let demo = dummy_store();
    let Some(allowed) = config.allowed_statuses() else {
        return demo;
    };

    let mut store = MemoryTaskStore::with_allowed_statuses(allowed.iter().cloned());
    for task in demo.list_tasks() {
        store.add_task(task.clone());
    }
    store
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_is_the_default_command() {
        let cli = Cli::try_parse_from(["taskboard"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, None);
    }

    #[test]
    fn parses_health_with_config() {
        let cli = Cli::try_parse_from(["taskboard", "--config", "board.json5", "health"]).unwrap();
        assert_eq!(cli.command, Some(Command::Health));
        assert_eq!(cli.config, Some(PathBuf::from("board.json5")));
    }

    #[test]
    fn rejects_unknown_command() {
        assert!(Cli::try_parse_from(["taskboard", "serve"]).is_err());
    }

    #[test]
    fn demo_store_is_unrestricted_by_default() {
        let store = board_store(&Config::default());
        assert!(store.allowed_statuses().is_none());
        assert_eq!(store.len(), dummy_store().len());
    }

    #[test]
    fn enforced_columns_restrict_the_store() {
        let mut config = Config::default();
        config.board.enforce_columns = true;

        let mut store = board_store(&config);
        let id = store.list_tasks()[0].id;

        assert_eq!(store.allowed_statuses(), config.allowed_statuses());
        assert!(store.set_status(id, "done").is_ok());
        assert!(store.set_status(id, "archived").is_err());
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let err = load_config(Some(Path::new("/nonexistent/taskboard.json5"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/taskboard.json5"));
    }
}
