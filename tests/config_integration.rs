//! Integration tests for the taskboard-config crate.

use std::fs;
use tempfile::TempDir;
use taskboard_config::{BoardConfig, Config, ConfigError, HealthConfig, LoggingConfig};

#[tokio::test]
async fn config_load_from_json5_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("taskboard.json5");

    fs::write(
        &config_path,
        r#"
        {
            // Configuration for taskboard
            board: {
                title: "Sprint 12",
                columns: ["backlog", "doing", "review", "done"],
                enforce_columns: true,
                notification_secs: 5,
            },
            health: {
                host: "0.0.0.0",
                port: 9090,
            },
            logging: {
                level: "debug",
                file: "/tmp/taskboard-test.log",
            },
        }
        "#,
    )
    .unwrap();

    let config = Config::load_from(&config_path).unwrap();

    assert_eq!(config.board.title, "Sprint 12");
    assert_eq!(config.board.columns, ["backlog", "doing", "review", "done"]);
    assert_eq!(config.board.notification_secs, 5);
    assert!(config.board.show_chart);
    assert_eq!(config.health.address(), "0.0.0.0:9090");
    assert_eq!(config.health.message, "taskboard is running");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.allowed_statuses().map(<[String]>::len), Some(4));
}

#[tokio::test]
async fn config_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.json");

    let original = Config {
        board: BoardConfig::with_columns(["todo", "blocked", "done"]),
        health: HealthConfig {
            port: 8181,
            message: "up".to_string(),
            ..HealthConfig::default()
        },
        logging: LoggingConfig {
            level: "warn".to_string(),
            file: Some(dir.path().join("board.log")),
        },
    };

    original.save_to(&config_path).unwrap();
    let loaded = Config::load_from(&config_path).unwrap();

    assert_eq!(original, loaded);

    // Saved as plain JSON
    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&config_path).unwrap()).unwrap();
    assert_eq!(raw["board"]["columns"][1], "blocked");
    assert_eq!(raw["health"]["port"], 8181);
}

#[tokio::test]
async fn config_load_nonexistent_fails() {
    let result = Config::load_from("/nonexistent/path/config.json");
    assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
}

#[test]
fn empty_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("taskboard.json5");
    fs::write(&config_path, "{}").unwrap();

    let config = Config::load_from(&config_path).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn duplicate_columns_are_rejected() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("taskboard.json5");
    fs::write(&config_path, r#"{ board: { columns: ["todo", "done", "todo"] } }"#).unwrap();

    let err = Config::load_from(&config_path).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBoard { .. }));
    assert!(err.to_string().contains("'todo' is listed twice"));
}

#[test]
fn zero_port_is_rejected() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("taskboard.json5");
    fs::write(&config_path, "{ health: { port: 0 } }").unwrap();

    let err = Config::load_from(&config_path).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidAddress { .. }));
}

#[test]
fn unknown_log_level_is_rejected() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("taskboard.json5");
    fs::write(&config_path, r#"{ logging: { level: "loud" } }"#).unwrap();

    let err = Config::load_from(&config_path).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidLogLevel(level) if level == "loud"));
}

#[test]
fn malformed_json5_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("taskboard.json5");
    fs::write(&config_path, "{ board: ").unwrap();

    let err = Config::load_from(&config_path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseJson5(_)));
}

#[test]
fn columns_are_unrestricted_unless_enforced() {
    let config = Config {
        board: BoardConfig::with_columns(["todo", "done"]),
        ..Default::default()
    };
    assert!(config.allowed_statuses().is_none());
}
