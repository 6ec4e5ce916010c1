//! Dummy data generation for testing and demonstration.
//!
//! This module provides a sample task store with realistic tasks for
//! exercising the TUI without any persistence layer behind it.
//!
//! # Examples
//!
//! ```
//! use taskboard_protocol::dummy::dummy_store;
//!
//! let store = dummy_store();
//! assert_eq!(store.len(), 8);
//! ```

use crate::store::MemoryTaskStore;
use crate::task::Task;

/// Columns used by the sample board, in display order.
pub const DUMMY_COLUMNS: [&str; 4] = ["todo", "in_progress", "review", "done"];

/// Generates a sample store with tasks spread across the sample columns.
///
/// - **todo**: 3 tasks
/// - **in_progress**: 2 tasks
/// - **review**: 1 task
/// - **done**: 1 task
/// - one task without a status
///
/// # Examples
///
/// ```
/// use taskboard_protocol::dummy::dummy_store;
///
/// let store = dummy_store();
/// assert_eq!(store.tasks_with_status("todo").count(), 3);
/// assert_eq!(store.tasks_with_status("in_progress").count(), 2);
/// assert_eq!(store.tasks_with_status("unset").count(), 1);
/// ```
#[must_use]
pub fn dummy_store() -> MemoryTaskStore {
    MemoryTaskStore::from_tasks(vec![
        Task::new(
            "Set up CI pipeline",
            "Run tests and lints on every push to main",
        )
        .with_status("todo"),
        Task::new(
            "Write API documentation",
            "Document every public function with an example",
        )
        .with_status("in_progress"),
        Task::new(
            "Add keyboard shortcuts",
            "Arrow keys for navigation, ? for help",
        )
        .with_status("todo"),
        Task::new("Fix flaky login test", "Intermittent timeout on CI runners")
            .with_status("review"),
        Task::new(
            "Design status chart",
            "Bar per status, counts recomputed on every move",
        )
        .with_status("in_progress"),
        Task::new("Triage incoming bug reports", "Nobody has picked this up yet"),
        Task::new("Release 0.1", "Tag, changelog and binaries").with_status("done"),
        Task::new(
            "Profile board rendering",
            "Large boards should still redraw within a frame",
        )
        .with_status("todo"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::TaskStore;

    #[test]
    fn dummy_store_has_expected_distribution() {
        let store = dummy_store();

        assert_eq!(store.tasks_with_status("todo").count(), 3);
        assert_eq!(store.tasks_with_status("in_progress").count(), 2);
        assert_eq!(store.tasks_with_status("review").count(), 1);
        assert_eq!(store.tasks_with_status("done").count(), 1);
        assert_eq!(store.tasks_with_status("").count(), 1);
    }

    #[test]
    fn dummy_statuses_are_known_columns_or_unset() {
        let store = dummy_store();
        for task in store.list_tasks() {
            assert!(
                task.status.is_empty() || DUMMY_COLUMNS.contains(&task.status.as_str()),
                "unexpected status {:?}",
                task.status
            );
        }
    }

    #[test]
    fn dummy_task_ids_are_unique() {
        let store = dummy_store();
        let mut ids: Vec<_> = store.list_tasks().iter().map(|t| t.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), store.len());
    }
}
