//! Snapshot tests for widget rendering.
//!
//! These tests use insta inline snapshots to pin down the exact output of
//! the smaller widgets, and content checks for full boards.

use ratatui::{buffer::Buffer, layout::Rect};
use taskboard_dnd::aggregate;
use taskboard_protocol::{Task, TaskStore, dummy};

use super::{CardMode, DragView, render_board, render_chart, render_task_card};
use crate::state::AppState;
use crate::test_utils::buffer_to_string;

fn dummy_state() -> AppState {
    let columns = dummy::DUMMY_COLUMNS.iter().map(|c| (*c).to_string()).collect();
    AppState::new(dummy::dummy_store(), columns)
}

#[test]
fn snapshot_task_card() {
    let task = Task::new("Ship it", "Tag release").with_status("todo");
    let area = Rect::new(0, 0, 16, 4);
    let mut buf = Buffer::empty(area);

    render_task_card(&task, CardMode::Normal, area, &mut buf);

    insta::assert_snapshot!(buffer_to_string(&buf).trim_end(), @r"
    ┌──────────────┐
    │Ship it       │
    │Tag release   │
    └──────────────┘
    ");
}

#[test]
fn snapshot_chart() {
    let tasks = vec![
        Task::new("a", "").with_status("todo"),
        Task::new("b", "").with_status("done"),
        Task::new("c", "").with_status("todo"),
    ];
    let area = Rect::new(0, 0, 24, 4);
    let mut buf = Buffer::empty(area);

    render_chart(&aggregate(&tasks), area, &mut buf);

    insta::assert_snapshot!(buffer_to_string(&buf).trim_end(), @r"
    ╭ Status (3) ──────────╮
    │Todo ███████████████ 2│
    │Done ████████ 1       │
    ╰──────────────────────╯
    ");
}

#[test]
fn dummy_board_shows_every_column() {
    let state = dummy_state();
    let area = Rect::new(0, 0, 120, 20);
    let mut buf = Buffer::empty(area);

    let mounted = render_board(&state, DragView::default(), area, &mut buf);

    let content = buffer_to_string(&buf);
    assert!(content.contains("Todo (3)"));
    assert!(content.contains("In Progress (2)"));
    assert!(content.contains("Review (1)"));
    assert!(content.contains("Done (1)"));
    assert!(content.contains("Unset (1)"));
    assert_eq!(mounted.zones.len(), 5);
    assert_eq!(mounted.handles.len(), 8);
}

#[test]
fn dragged_card_and_target_render_together() {
    let state = dummy_state();
    let dragged = state.column_tasks(0)[0].id;
    let area = Rect::new(0, 0, 120, 20);
    let mut buf = Buffer::empty(area);
    let drag = DragView {
        dragged: Some(dragged),
        hovered: Some("done"),
    };

    let mounted = render_board(&state, drag, area, &mut buf);

    assert!(buffer_to_string(&buf).contains("+ drop here"));
    // The source card keeps its slot while it is dragged
    assert!(mounted.handles.iter().any(|(id, _)| *id == dragged));
}

#[test]
fn moved_task_is_drawn_in_its_new_column() {
    let mut state = dummy_state();
    let id = state.column_tasks(3)[0].id;
    state.store.set_status(id, "todo").unwrap();
    state.sync_columns();

    let area = Rect::new(0, 0, 120, 24);
    let mut buf = Buffer::empty(area);
    render_board(&state, DragView::default(), area, &mut buf);

    let content = buffer_to_string(&buf);
    assert!(content.contains("Todo (4)"));
    assert!(content.contains("Done (0)"));
}
