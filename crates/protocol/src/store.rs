//! The task store contract and an in-memory implementation.
//!
//! The store owns the ordered list of tasks. Views only read it; the single
//! write path used by the drag-and-drop engine is [`TaskStore::set_status`].
//! Every observable change bumps the store's revision so derived views know
//! when to recompute.

use crate::error::{Result, StoreError};
use crate::status::{effective_status, is_unset};
use crate::task::{Task, TaskId};

/// Source of truth for the board's tasks.
///
/// Implementations keep tasks in a stable order: the order of
/// [`list_tasks`](TaskStore::list_tasks) is the order columns and the status
/// aggregate are built from.
pub trait TaskStore {
    /// Returns the current tasks, in store order.
    fn list_tasks(&self) -> &[Task];

    /// Sets the status of one task.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no task has the given ID, or
    /// [`StoreError::Rejected`] if the store refuses the status.
    fn set_status(&mut self, id: TaskId, status: &str) -> Result<()>;

    /// Returns a counter that changes whenever the task list changes.
    fn revision(&self) -> u64;
}

/// A [`TaskStore`] backed by a vector.
///
/// Optionally restricts statuses to an allow-list; a status outside the list
/// is rejected. The empty status (unset) is always accepted.
///
/// # Examples
///
/// ```
/// use taskboard_protocol::{MemoryTaskStore, StoreError, Task, TaskStore};
///
/// let mut store = MemoryTaskStore::with_allowed_statuses(["todo", "done"]);
/// let task = Task::new("Task", "Description").with_status("todo");
/// let id = task.id;
/// store.add_task(task);
///
/// assert!(store.set_status(id, "done").is_ok());
/// assert!(matches!(
///     store.set_status(id, "archived"),
///     Err(StoreError::Rejected { .. })
/// ));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryTaskStore {
    tasks: Vec<Task>,
    allowed_statuses: Option<Vec<String>>,
    revision: u64,
}

impl MemoryTaskStore {
    /// Creates an empty store that accepts any status.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store that only accepts the given statuses.
    #[must_use]
    pub fn with_allowed_statuses<I, S>(statuses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_statuses: Some(statuses.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// Creates a store holding the given tasks, accepting any status.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskboard_protocol::{MemoryTaskStore, Task, TaskStore};
    ///
    /// let store = MemoryTaskStore::from_tasks(vec![Task::new("One", ""), Task::new("Two", "")]);
    /// assert_eq!(store.len(), 2);
    /// ```
    #[must_use]
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            ..Self::default()
        }
    }

    /// Returns the status allow-list, if one is enforced.
    #[must_use]
    pub fn allowed_statuses(&self) -> Option<&[String]> {
        self.allowed_statuses.as_deref()
    }

    /// Returns the number of tasks in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if the store has no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Appends a task to the end of the store.
    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
        self.bump();
    }

    /// Removes and returns a task by ID, if found.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskboard_protocol::{MemoryTaskStore, Task};
    ///
    /// let mut store = MemoryTaskStore::new();
    /// let task = Task::new("Task", "Description");
    /// let id = task.id;
    /// store.add_task(task);
    ///
    /// assert!(store.remove_task(id).is_some());
    /// assert!(store.is_empty());
    /// ```
    pub fn remove_task(&mut self, id: TaskId) -> Option<Task> {
        let pos = self.tasks.iter().position(|t| t.id == id)?;
        let task = self.tasks.remove(pos);
        self.bump();
        Some(task)
    }

    /// Returns a reference to a task by ID, if found.
    #[must_use]
    pub fn get_task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Returns the tasks whose effective status is `status`, in store order.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskboard_protocol::{MemoryTaskStore, Task};
    ///
    /// let store = MemoryTaskStore::from_tasks(vec![
    ///     Task::new("A", "").with_status("todo"),
    ///     Task::new("B", ""),
    ///     Task::new("C", "").with_status("todo"),
    /// ]);
    ///
    /// let todo: Vec<_> = store.tasks_with_status("todo").map(|t| t.title.as_str()).collect();
    /// assert_eq!(todo, ["A", "C"]);
    /// assert_eq!(store.tasks_with_status("unset").count(), 1);
    /// ```
    pub fn tasks_with_status<'a>(&'a self, status: &'a str) -> impl Iterator<Item = &'a Task> {
        let wanted = effective_status(status);
        self.tasks
            .iter()
            .filter(move |t| t.effective_status() == wanted)
    }

    fn check_allowed(&self, id: TaskId, status: &str) -> Result<()> {
        let Some(allowed) = &self.allowed_statuses else {
            return Ok(());
        };
        if is_unset(status) || allowed.iter().any(|s| s == status) {
            Ok(())
        } else {
            Err(StoreError::Rejected {
                id,
                status: status.to_string(),
                reason: "status is not one of the board's columns".to_string(),
            })
        }
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl TaskStore for MemoryTaskStore {
    fn list_tasks(&self) -> &[Task] {
        &self.tasks
    }

    fn set_status(&mut self, id: TaskId, status: &str) -> Result<()> {
        let Some(pos) = self.tasks.iter().position(|t| t.id == id) else {
            return Err(StoreError::NotFound(id));
        };
        self.check_allowed(id, status)?;

        self.tasks[pos].set_status(status);
        self.bump();
        Ok(())
    }

    fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(statuses: &[&str]) -> (MemoryTaskStore, Vec<TaskId>) {
        let mut store = MemoryTaskStore::new();
        let mut ids = Vec::new();
        for (i, status) in statuses.iter().enumerate() {
            let task = Task::new(format!("Task {i}"), "").with_status(*status);
            ids.push(task.id);
            store.add_task(task);
        }
        (store, ids)
    }

    #[test]
    fn list_tasks_preserves_insertion_order() {
        let (store, ids) = store_with(&["todo", "done", "todo"]);
        let listed: Vec<_> = store.list_tasks().iter().map(|t| t.id).collect();
        assert_eq!(listed, ids);
    }

    #[test]
    fn set_status_updates_task_in_place() {
        let (mut store, ids) = store_with(&["todo", "done"]);

        store.set_status(ids[0], "done").unwrap();

        assert_eq!(store.get_task(ids[0]).unwrap().status, "done");
        // Position in the list is unchanged
        assert_eq!(store.list_tasks()[0].id, ids[0]);
    }

    #[test]
    fn set_status_unknown_task_is_not_found() {
        let (mut store, _) = store_with(&["todo"]);
        let missing = TaskId::new_v4();

        assert_eq!(
            store.set_status(missing, "done"),
            Err(StoreError::NotFound(missing))
        );
    }

    #[test]
    fn revision_changes_on_every_mutation() {
        let mut store = MemoryTaskStore::new();
        let r0 = store.revision();

        let task = Task::new("Task", "");
        let id = task.id;
        store.add_task(task);
        let r1 = store.revision();
        assert_ne!(r0, r1);

        store.set_status(id, "todo").unwrap();
        let r2 = store.revision();
        assert_ne!(r1, r2);

        store.remove_task(id);
        assert_ne!(r2, store.revision());
    }

    #[test]
    fn failed_mutation_keeps_revision() {
        let mut store = MemoryTaskStore::with_allowed_statuses(["todo"]);
        let task = Task::new("Task", "").with_status("todo");
        let id = task.id;
        store.add_task(task);
        let before = store.revision();

        assert!(store.set_status(id, "archived").is_err());
        assert!(store.set_status(TaskId::new_v4(), "todo").is_err());

        assert_eq!(store.revision(), before);
        assert_eq!(store.get_task(id).unwrap().status, "todo");
    }

    #[test]
    fn allow_list_accepts_unset() {
        let mut store = MemoryTaskStore::with_allowed_statuses(["todo"]);
        let task = Task::new("Task", "").with_status("todo");
        let id = task.id;
        store.add_task(task);

        assert!(store.set_status(id, "").is_ok());
        assert!(store.get_task(id).unwrap().status.is_empty());
    }

    #[test]
    fn remove_missing_task_returns_none() {
        let (mut store, _) = store_with(&["todo"]);
        let before = store.revision();

        assert!(store.remove_task(TaskId::new_v4()).is_none());
        assert_eq!(store.revision(), before);
    }

    #[test]
    fn tasks_with_status_groups_empty_as_unset() {
        let (store, ids) = store_with(&["", "todo", ""]);

        let unset: Vec<_> = store.tasks_with_status("").map(|t| t.id).collect();
        assert_eq!(unset, vec![ids[0], ids[2]]);
    }
}
