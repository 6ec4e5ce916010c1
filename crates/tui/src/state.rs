//! Application state management.
//!
//! This module defines the state the board view keeps between frames: the
//! task store, the columns derived from it, and selection tracking.

use taskboard_protocol::{MemoryTaskStore, Task, TaskStore, UNSET_STATUS, effective_status};

/// Computes the board's columns.
///
/// Configured columns come first, in order, so empty columns stay visible
/// as drop targets. Statuses seen on tasks but not configured follow in
/// first-seen order, and the unset column, when any task lacks a status,
/// is always last.
///
/// # Examples
///
/// ```
/// use taskboard_protocol::Task;
/// use taskboard_tui::state::board_columns;
///
/// let tasks = vec![
///     Task::new("a", "").with_status("blocked"),
///     Task::new("b", ""),
///     Task::new("c", "").with_status("todo"),
/// ];
/// let columns = board_columns(&["todo".to_string(), "done".to_string()], &tasks);
/// assert_eq!(columns, ["todo", "done", "blocked", "unset"]);
/// ```
#[must_use]
pub fn board_columns(configured: &[String], tasks: &[Task]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::with_capacity(configured.len());
    let mut push = |label: &str| {
        if !columns.iter().any(|c| c == label) {
            columns.push(label.to_string());
        }
    };

    for label in configured {
        push(effective_status(label));
    }
    let mut has_unset = false;
    for task in tasks {
        let label = task.effective_status();
        if label == UNSET_STATUS {
            has_unset = true;
        } else {
            push(label);
        }
    }
    if has_unset {
        push(UNSET_STATUS);
    }
    columns
}

/// The application state.
///
/// Owns the task store the board displays and mutates, the column list
/// derived from it, and the keyboard selection.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The tasks being displayed.
    pub store: MemoryTaskStore,
    /// Column labels, left to right. Each is also a droppable zone id.
    pub columns: Vec<String>,
    /// Index of the currently selected column.
    pub selected_column: usize,
    /// Index of the selected task within the current column, if any.
    pub selected_task: Option<usize>,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    /// Whether the status chart is visible.
    pub chart_visible: bool,
    configured: Vec<String>,
}

impl AppState {
    /// Creates a new application state for `store` with the configured
    /// column order.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskboard_protocol::MemoryTaskStore;
    /// use taskboard_tui::AppState;
    ///
    /// let state = AppState::new(MemoryTaskStore::new(), vec!["todo".into(), "done".into()]);
    /// assert_eq!(state.columns, ["todo", "done"]);
    /// assert_eq!(state.selected_column, 0);
    /// ```
    #[must_use]
    pub fn new(store: MemoryTaskStore, configured: Vec<String>) -> Self {
        let mut state = Self {
            store,
            columns: Vec::new(),
            selected_column: 0,
            selected_task: None,
            help_visible: false,
            chart_visible: true,
            configured,
        };
        state.sync_columns();
        state
    }

    /// Recomputes the columns from the store and keeps the selection in range.
    pub fn sync_columns(&mut self) {
        self.columns = board_columns(&self.configured, self.store.list_tasks());
        if self.selected_column >= self.columns.len() {
            self.selected_column = self.columns.len().saturating_sub(1);
        }
        self.clamp_task_selection();
    }

    /// Returns the tasks of the column at `index`, in store order.
    #[must_use]
    pub fn column_tasks(&self, index: usize) -> Vec<&Task> {
        match self.columns.get(index) {
            Some(label) => self.store.tasks_with_status(label).collect(),
            None => Vec::new(),
        }
    }

    /// Returns the label of the selected column.
    #[must_use]
    pub fn selected_column_label(&self) -> Option<&str> {
        self.columns.get(self.selected_column).map(String::as_str)
    }

    /// Returns the currently selected task, if any.
    #[must_use]
    pub fn selected_task(&self) -> Option<&Task> {
        let index = self.selected_task?;
        self.column_tasks(self.selected_column).get(index).copied()
    }

    /// Selects the given task, moving the column selection to its column.
    ///
    /// Returns `false` if the task is not on the board.
    pub fn select_task_by_id(&mut self, id: taskboard_protocol::TaskId) -> bool {
        for column in 0..self.columns.len() {
            let position = self.column_tasks(column).iter().position(|t| t.id == id);
            if let Some(index) = position {
                self.selected_column = column;
                self.selected_task = Some(index);
                return true;
            }
        }
        false
    }

    /// Toggles the help overlay visibility.
    ///
    /// When help is shown, other interactions are blocked until
    /// help is dismissed.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Dismisses the help overlay if it is visible.
    ///
    /// Returns `true` if help was visible and has been dismissed.
    #[must_use]
    pub fn dismiss_help(&mut self) -> bool {
        std::mem::take(&mut self.help_visible)
    }

    /// Toggles the status chart.
    pub fn toggle_chart(&mut self) {
        self.chart_visible = !self.chart_visible;
    }

    /// Moves the column selection to the left, wrapping around if needed.
    pub fn navigate_left(&mut self) {
        let count = self.columns.len();
        if count == 0 {
            return;
        }
        self.selected_column = (self.selected_column + count - 1) % count;
        self.clamp_task_selection();
    }

    /// Moves the column selection to the right, wrapping around if needed.
    pub fn navigate_right(&mut self) {
        let count = self.columns.len();
        if count == 0 {
            return;
        }
        self.selected_column = (self.selected_column + 1) % count;
        self.clamp_task_selection();
    }

    /// Moves the task selection up within the current column, wrapping to
    /// the bottom.
    pub fn navigate_up(&mut self) {
        let len = self.column_tasks(self.selected_column).len();
        self.selected_task = match (len, self.selected_task) {
            (0, _) => None,
            (_, Some(idx)) if idx > 0 => Some(idx - 1),
            (_, Some(_)) => Some(len - 1),
            (_, None) => Some(0),
        };
    }

    /// Moves the task selection down within the current column, wrapping to
    /// the top.
    pub fn navigate_down(&mut self) {
        let len = self.column_tasks(self.selected_column).len();
        self.selected_task = match (len, self.selected_task) {
            (0, _) => None,
            (_, Some(idx)) if idx + 1 < len => Some(idx + 1),
            (_, Some(_)) | (_, None) => Some(0),
        };
    }

    /// Clears the task selection.
    pub fn clear_selection(&mut self) {
        self.selected_task = None;
    }

    /// Keeps the task selection within the current column's bounds.
    fn clamp_task_selection(&mut self) {
        let len = self.column_tasks(self.selected_column).len();
        self.selected_task = match self.selected_task {
            _ if len == 0 => None,
            Some(idx) => Some(idx.min(len - 1)),
            None => None,
        };
    }
}
