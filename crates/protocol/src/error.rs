//! Error types for the taskboard-protocol crate.
//!
//! This module defines the errors a [`TaskStore`](crate::TaskStore) reports
//! when it refuses a mutation.

use thiserror::Error;

use crate::task::TaskId;

/// Errors that can occur when mutating a task store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A task with the given ID was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The store refused the new status.
    #[error("status '{status}' rejected for task {id}: {reason}")]
    Rejected {
        /// The task whose status change was refused.
        id: TaskId,
        /// The status that was refused.
        status: String,
        /// Why the store refused it.
        reason: String,
    },
}

/// A specialized Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let task_id = uuid::Uuid::new_v4();
        let err = StoreError::NotFound(task_id);
        assert!(err.to_string().contains("task not found"));

        let err = StoreError::Rejected {
            id: task_id,
            status: "archived".to_string(),
            reason: "not a board column".to_string(),
        };
        assert!(err.to_string().starts_with("status 'archived' rejected"));
        assert!(err.to_string().ends_with("not a board column"));
    }
}
