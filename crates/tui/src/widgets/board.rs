//! Board rendering widget.
//!
//! Draws every column side by side and collects what the render pass
//! mounted: one droppable zone per column and one draggable handle per card.

use ratatui::{buffer::Buffer, layout::Rect};
use taskboard_protocol::TaskId;

use super::column::{ColumnPosition, ColumnView, render_column};
use crate::layout::column_areas;
use crate::state::AppState;

/// Drag state the board needs to draw drop targets and the dragged card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragView<'a> {
    /// The task being dragged.
    pub dragged: Option<TaskId>,
    /// The zone under the pointer.
    pub hovered: Option<&'a str>,
}

/// Zones and handles mounted by one render of the board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MountedBoard {
    /// One zone per column: its status label and full screen area.
    pub zones: Vec<(String, Rect)>,
    /// One handle per visible card.
    pub handles: Vec<(TaskId, Rect)>,
}

/// Renders the board and returns what it mounted.
///
/// # Layout
///
/// ```text
/// ╭ Todo (2) ──────┬ Doing (1) ─────┬ Done (0) ──────╮
/// │┌─────────────┐ │┌─────────────┐ │No tasks        │
/// ││Task 1       │ ││Task 3       │ │                │
/// ...
/// ╰────────────────┴────────────────┴────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use taskboard_protocol::{MemoryTaskStore, Task};
/// use taskboard_tui::AppState;
/// use taskboard_tui::widgets::{DragView, render_board};
///
/// let store = MemoryTaskStore::from_tasks(vec![Task::new("Task 1", "").with_status("todo")]);
/// let state = AppState::new(store, vec!["todo".into(), "done".into()]);
///
/// let area = Rect::new(0, 0, 80, 20);
/// let mut buf = Buffer::empty(area);
///
/// let mounted = render_board(&state, DragView::default(), area, &mut buf);
/// assert_eq!(mounted.zones.len(), 2);
/// assert_eq!(mounted.handles.len(), 1);
/// ```
pub fn render_board(
    state: &AppState,
    drag: DragView<'_>,
    area: Rect,
    buf: &mut Buffer,
) -> MountedBoard {
    let count = state.columns.len();
    let areas = column_areas(area, count);
    let mut mounted = MountedBoard::default();

    for (index, (label, column_area)) in state.columns.iter().zip(areas).enumerate() {
        let is_focused = state.selected_column == index;
        let view = ColumnView {
            label: label.as_str(),
            tasks: state.column_tasks(index),
            is_focused,
            selected: if is_focused { state.selected_task } else { None },
            is_drop_target: drag.hovered == Some(label.as_str()),
            dragged: drag.dragged,
            position: ColumnPosition::of(index, count),
        };

        mounted.handles.extend(render_column(&view, column_area, buf));
        mounted.zones.push((label.clone(), column_area));
    }
    mounted
}
