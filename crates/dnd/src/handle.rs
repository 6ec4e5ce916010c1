//! Draggable task handles.
//!
//! Each rendered task card mounts a handle carrying its task ID. A press on a
//! handle is the start of a drag gesture; the handle itself never touches the
//! task.

use ratatui::layout::{Position, Rect};
use taskboard_protocol::TaskId;

/// What a drag carries from its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DragPayload {
    /// The task being dragged.
    pub task_id: TaskId,
}

/// A task card on screen that can start a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraggableHandle {
    /// The task the card shows.
    pub task_id: TaskId,
    /// Screen area of the card.
    pub bounds: Rect,
}

impl DraggableHandle {
    /// Creates a handle for a task card.
    #[must_use]
    pub const fn new(task_id: TaskId, bounds: Rect) -> Self {
        Self { task_id, bounds }
    }

    /// Returns the payload a drag from this handle carries.
    #[must_use]
    pub const fn payload(&self) -> DragPayload {
        DragPayload {
            task_id: self.task_id,
        }
    }

    /// Returns `true` if the pointer is on this handle.
    #[must_use]
    pub fn contains(&self, pointer: Position) -> bool {
        self.bounds.contains(pointer)
    }
}

/// The handles mounted by the last render pass.
///
/// # Examples
///
/// ```
/// use ratatui::layout::{Position, Rect};
/// use taskboard_dnd::HandleSet;
/// use taskboard_protocol::TaskId;
///
/// let id = TaskId::new_v4();
/// let mut handles = HandleSet::new();
/// handles.mount(id, Rect::new(1, 1, 10, 4));
///
/// let hit = handles.hit(Position::new(3, 2)).map(|h| h.task_id);
/// assert_eq!(hit, Some(id));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandleSet {
    handles: Vec<DraggableHandle>,
}

impl HandleSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mounts a handle. A task mounted twice keeps its latest bounds.
    pub fn mount(&mut self, task_id: TaskId, bounds: Rect) {
        if let Some(handle) = self.handles.iter_mut().find(|h| h.task_id == task_id) {
            handle.bounds = bounds;
        } else {
            self.handles.push(DraggableHandle::new(task_id, bounds));
        }
    }

    /// Unmounts every handle, ahead of a new render pass.
    pub fn clear(&mut self) {
        self.handles.clear();
    }

    /// Returns the handle under the pointer; later mounts are on top.
    #[must_use]
    pub fn hit(&self, pointer: Position) -> Option<&DraggableHandle> {
        self.handles.iter().rev().find(|h| h.contains(pointer))
    }

    /// Returns `true` if a handle for the task is mounted.
    #[must_use]
    pub fn is_mounted(&self, task_id: TaskId) -> bool {
        self.handles.iter().any(|h| h.task_id == task_id)
    }

    /// Returns the mounted handles, in mount order.
    pub fn iter(&self) -> impl Iterator<Item = &DraggableHandle> {
        self.handles.iter()
    }

    /// Returns the number of mounted handles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Returns `true` if nothing is mounted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_carries_task_id() {
        let id = TaskId::new_v4();
        let handle = DraggableHandle::new(id, Rect::new(0, 0, 5, 5));
        assert_eq!(handle.payload(), DragPayload { task_id: id });
    }

    #[test]
    fn hit_misses_outside_handles() {
        let mut handles = HandleSet::new();
        handles.mount(TaskId::new_v4(), Rect::new(0, 0, 5, 4));

        assert!(handles.hit(Position::new(5, 0)).is_none());
        assert!(handles.hit(Position::new(0, 4)).is_none());
    }

    #[test]
    fn hit_picks_the_card_under_the_pointer() {
        let first = TaskId::new_v4();
        let second = TaskId::new_v4();
        let mut handles = HandleSet::new();
        handles.mount(first, Rect::new(0, 0, 10, 4));
        handles.mount(second, Rect::new(0, 4, 10, 4));

        assert_eq!(handles.hit(Position::new(3, 1)).unwrap().task_id, first);
        assert_eq!(handles.hit(Position::new(3, 5)).unwrap().task_id, second);
    }

    #[test]
    fn remount_updates_bounds() {
        let id = TaskId::new_v4();
        let mut handles = HandleSet::new();
        handles.mount(id, Rect::new(0, 0, 10, 4));
        handles.mount(id, Rect::new(20, 0, 10, 4));

        assert_eq!(handles.len(), 1);
        assert!(handles.hit(Position::new(1, 1)).is_none());
        assert!(handles.hit(Position::new(21, 1)).is_some());
    }

    #[test]
    fn clear_unmounts_everything() {
        let id = TaskId::new_v4();
        let mut handles = HandleSet::new();
        handles.mount(id, Rect::new(0, 0, 10, 4));
        handles.clear();

        assert!(handles.is_empty());
        assert!(!handles.is_mounted(id));
    }
}
