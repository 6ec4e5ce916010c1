//! Board configuration.
//!
//! The board section lists the status columns shown even when no task has
//! that status yet, and whether the board refuses drops onto statuses
//! outside that list.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default board title.
pub const DEFAULT_TITLE: &str = "Task Board";

/// Default status columns, left to right.
pub const DEFAULT_COLUMNS: [&str; 3] = ["todo", "doing", "done"];

/// Default lifetime of a notification, in seconds.
pub const DEFAULT_NOTIFICATION_SECS: u64 = 3;

/// Longest allowed notification lifetime, in seconds.
pub const MAX_NOTIFICATION_SECS: u64 = 60;

/// Configuration of the board view.
///
/// # Examples
///
/// ```
/// use taskboard_config::BoardConfig;
///
/// let board = BoardConfig::with_columns(["backlog", "doing", "done"]);
/// assert_eq!(board.columns.len(), 3);
/// assert!(board.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Title shown in the header.
    pub title: String,

    /// Status columns shown even when empty, left to right.
    ///
    /// Statuses found on tasks but missing here get their own column after
    /// these.
    pub columns: Vec<String>,

    /// Refuse drops onto statuses outside `columns`.
    pub enforce_columns: bool,

    /// How long notifications stay in the status bar, in seconds.
    pub notification_secs: u64,

    /// Whether the status chart is shown at startup.
    pub show_chart: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            columns: DEFAULT_COLUMNS.iter().map(ToString::to_string).collect(),
            enforce_columns: false,
            notification_secs: DEFAULT_NOTIFICATION_SECS,
            show_chart: true,
        }
    }
}

impl BoardConfig {
    /// Creates a board configuration with the given columns and defaults
    /// for everything else.
    #[must_use]
    pub fn with_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Validates the board section.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBoard`] if there are no columns, a
    /// column is blank or listed twice, or the notification lifetime is out
    /// of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskboard_config::BoardConfig;
    ///
    /// assert!(BoardConfig::with_columns(["todo", "todo"]).validate().is_err());
    /// assert!(BoardConfig::with_columns(Vec::<String>::new()).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.columns.is_empty() {
            return Err(invalid("at least one column is required"));
        }

        for (i, column) in self.columns.iter().enumerate() {
            if column.trim().is_empty() {
                return Err(invalid(format!("column {} is blank", i + 1)));
            }
            if self.columns[..i].contains(column) {
                return Err(invalid(format!("column '{column}' is listed twice")));
            }
        }

        if !(1..=MAX_NOTIFICATION_SECS).contains(&self.notification_secs) {
            return Err(invalid(format!(
                "notification_secs must be between 1 and {MAX_NOTIFICATION_SECS}"
            )));
        }

        Ok(())
    }
}

fn invalid(reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidBoard {
        reason: reason.into(),
    }
}
