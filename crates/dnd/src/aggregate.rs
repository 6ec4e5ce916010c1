//! Per-status task counts.
//!
//! The aggregate is always rebuilt from the full task list; it is never
//! patched after a move. Entries follow the order in which each effective
//! status first appears in the list, and only observed statuses appear.

use std::collections::HashMap;

use taskboard_protocol::{Task, TaskStore};
use tracing::debug;

/// Number of tasks under one effective status.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StatusCount {
    /// Effective status label.
    pub status: String,
    /// Number of tasks with that status; never zero.
    pub count: usize,
}

/// Counts tasks per effective status, in first-seen order.
///
/// # Examples
///
/// ```
/// use taskboard_dnd::{StatusCount, aggregate};
/// use taskboard_protocol::Task;
///
/// let tasks = vec![
///     Task::new("A", "").with_status("todo"),
///     Task::new("B", ""),
///     Task::new("C", "").with_status("todo"),
/// ];
///
/// assert_eq!(
///     aggregate(&tasks),
///     vec![
///         StatusCount { status: "todo".into(), count: 2 },
///         StatusCount { status: "unset".into(), count: 1 },
///     ]
/// );
/// ```
#[must_use]
pub fn aggregate(tasks: &[Task]) -> Vec<StatusCount> {
    let mut counts: Vec<StatusCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for task in tasks {
        let status = task.effective_status();
        match index.get(status) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(status, counts.len());
                counts.push(StatusCount {
                    status: status.to_string(),
                    count: 1,
                });
            }
        }
    }

    counts
}

/// Keeps the aggregate of a store up to date.
///
/// [`sync`](StatusAggregator::sync) recomputes only when the store's revision
/// differs from the one the cached counts were built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusAggregator {
    counts: Vec<StatusCount>,
    revision: Option<u64>,
}

impl StatusAggregator {
    /// Creates an aggregator that has not seen any store yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Brings the counts in line with the store. Returns `true` if they were
    /// recomputed.
    pub fn sync<S: TaskStore + ?Sized>(&mut self, store: &S) -> bool {
        let revision = store.revision();
        if self.revision == Some(revision) {
            return false;
        }

        self.counts = aggregate(store.list_tasks());
        self.revision = Some(revision);
        debug!(revision, statuses = self.counts.len(), "status aggregate recomputed");
        true
    }

    /// Returns the current counts.
    #[must_use]
    pub fn counts(&self) -> &[StatusCount] {
        &self.counts
    }

    /// Returns the count for one status, zero if it was not observed.
    #[must_use]
    pub fn count_of(&self, status: &str) -> usize {
        let status = taskboard_protocol::effective_status(status);
        self.counts
            .iter()
            .find(|c| c.status == status)
            .map_or(0, |c| c.count)
    }

    /// Returns the total number of tasks counted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().map(|c| c.count).sum()
    }
}
