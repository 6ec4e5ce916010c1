//! Task types for the board.
//!
//! This module defines the task identifier and the task structure itself.
//! A task carries a free-form `status` label (see [`crate::status`]) plus
//! attributes that only matter to the views that display it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::status::effective_status;

/// Unique identifier for a task.
///
/// Uses UUID v4 for globally unique identification.
pub type TaskId = uuid::Uuid;

/// A task on the board.
///
/// # Examples
///
/// ```
/// use taskboard_protocol::Task;
///
/// let task = Task::new("Implement feature X", "Add the new feature to the codebase");
/// assert!(task.status.is_empty());
/// assert_eq!(task.effective_status(), "unset");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier for this task.
    pub id: TaskId,
    /// Short summary of the task.
    pub title: String,
    /// Detailed description of what needs to be done.
    #[serde(default)]
    pub description: String,
    /// Status label; empty when the task has no status yet.
    #[serde(default)]
    pub status: String,
    /// When this task was created.
    pub created_at: DateTime<Utc>,
    /// When this task was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task with the given title and description.
    ///
    /// The task starts without a status. Timestamps are set to the current time.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskboard_protocol::Task;
    ///
    /// let task = Task::new("Fix bug", "The login button doesn't work on mobile");
    /// assert_eq!(task.title, "Fix bug");
    /// ```
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_id(TaskId::new_v4(), title, description)
    }

    /// Creates a new task with a specific ID.
    ///
    /// Useful for testing or when recreating tasks from persistent storage.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskboard_protocol::{Task, TaskId};
    ///
    /// let id = TaskId::new_v4();
    /// let task = Task::with_id(id, "Test task", "Description");
    /// assert_eq!(task.id, id);
    /// ```
    #[must_use]
    pub fn with_id(id: TaskId, title: impl Into<String>, description: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: title.into(),
            description: description.into(),
            status: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the task with its status replaced.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskboard_protocol::Task;
    ///
    /// let task = Task::new("Work item", "Do the thing").with_status("todo");
    /// assert_eq!(task.status, "todo");
    /// ```
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Returns the label this task is grouped under.
    #[must_use]
    pub fn effective_status(&self) -> &str {
        effective_status(&self.status)
    }

    /// Updates the task's status and refreshes the `updated_at` timestamp.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskboard_protocol::Task;
    ///
    /// let mut task = Task::new("Work item", "Do the thing");
    /// task.set_status("doing");
    /// assert_eq!(task.status, "doing");
    /// ```
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
        self.updated_at = Utc::now();
    }
}
