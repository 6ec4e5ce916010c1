//! Column rendering widget.
//!
//! A column is one status label: its header, its cards, and while a drag is
//! in flight, its drop-target state. Rendering a column also reports where
//! each visible card ended up so the app can mount a draggable handle on it.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use taskboard_protocol::{Task, TaskId, display_name};

use super::task_card::{CardMode, render_task_card};
use crate::layout::{TASK_CARD_HEIGHT, visible_cards};

/// Position of a column in the horizontal layout.
///
/// Used to pick which borders to draw so adjacent columns share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnPosition {
    /// The board has a single column.
    Only,
    /// Leftmost column: rounded corners on the left, no right border.
    First,
    /// Inner column: T-connectors on the left, no right border.
    Middle,
    /// Rightmost column: T-connectors on the left, rounded on the right.
    Last,
}

impl ColumnPosition {
    /// Returns the position of column `index` among `count` columns.
    #[must_use]
    pub fn of(index: usize, count: usize) -> Self {
        match (index, count) {
            (_, 0 | 1) => Self::Only,
            (0, _) => Self::First,
            (i, n) if i + 1 == n => Self::Last,
            _ => Self::Middle,
        }
    }

    fn borders(self) -> Borders {
        match self {
            Self::Only | Self::Last => Borders::ALL,
            Self::First | Self::Middle => Borders::TOP | Borders::BOTTOM | Borders::LEFT,
        }
    }

    /// Applies this position's borders to `block`, doubled for a drop target.
    fn frame<'a>(self, block: Block<'a>, drop_target: bool) -> Block<'a> {
        let set = match (self, drop_target) {
            (Self::Only, false) => border::ROUNDED,
            (Self::First, false) => BORDER_SET_FIRST,
            (Self::Middle, false) => BORDER_SET_MIDDLE,
            (Self::Last, false) => BORDER_SET_LAST,
            (Self::Only, true) => border::DOUBLE,
            (Self::First, true) => DROP_SET_FIRST,
            (Self::Middle, true) => DROP_SET_MIDDLE,
            (Self::Last, true) => DROP_SET_LAST,
        };
        block.borders(self.borders()).border_set(set)
    }
}

/// Leftmost column: rounded on the left, open on the right.
const BORDER_SET_FIRST: border::Set = border::Set {
    top_right: "─",
    bottom_right: "─",
    vertical_right: " ",
    ..border::ROUNDED
};

/// Inner column: joins the previous column's top and bottom lines.
const BORDER_SET_MIDDLE: border::Set = border::Set {
    top_left: "┬",
    bottom_left: "┴",
    ..BORDER_SET_FIRST
};

/// Rightmost column: joined on the left, rounded on the right.
const BORDER_SET_LAST: border::Set = border::Set {
    top_left: "┬",
    bottom_left: "┴",
    ..border::ROUNDED
};

const DROP_SET_FIRST: border::Set = border::Set {
    top_right: "═",
    bottom_right: "═",
    vertical_right: " ",
    ..border::DOUBLE
};

const DROP_SET_MIDDLE: border::Set = border::Set {
    top_left: "╦",
    bottom_left: "╩",
    ..DROP_SET_FIRST
};

const DROP_SET_LAST: border::Set = border::Set {
    top_left: "╦",
    bottom_left: "╩",
    ..border::DOUBLE
};

/// Everything needed to draw one column.
#[derive(Debug, Clone)]
pub struct ColumnView<'a> {
    /// Status label, also the droppable zone id.
    pub label: &'a str,
    /// Tasks in this column, in store order.
    pub tasks: Vec<&'a Task>,
    /// Whether the keyboard selection is in this column.
    pub is_focused: bool,
    /// Index of the selected task, when focused.
    pub selected: Option<usize>,
    /// Whether the pointer of an active drag is over this column.
    pub is_drop_target: bool,
    /// The task being dragged, if any.
    pub dragged: Option<TaskId>,
    /// Where the column sits in the row of columns.
    pub position: ColumnPosition,
}

/// Renders a column and returns the screen area of every card drawn.
///
/// # Layout
///
/// ```text
/// ╭ Todo (2) ───────
/// │┌──────────────┐
/// ││Task 1        │
/// ││desc...       │
/// │└──────────────┘
/// ╰────────────────
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use taskboard_protocol::Task;
/// use taskboard_tui::widgets::{ColumnPosition, ColumnView, render_column};
///
/// let task = Task::new("Task 1", "Description").with_status("todo");
/// let view = ColumnView {
///     label: "todo",
///     tasks: vec![&task],
///     is_focused: true,
///     selected: Some(0),
///     is_drop_target: false,
///     dragged: None,
///     position: ColumnPosition::Only,
/// };
///
/// let area = Rect::new(0, 0, 20, 15);
/// let mut buf = Buffer::empty(area);
///
/// let cards = render_column(&view, area, &mut buf);
/// assert_eq!(cards.len(), 1);
/// ```
pub fn render_column(view: &ColumnView<'_>, area: Rect, buf: &mut Buffer) -> Vec<(TaskId, Rect)> {
    let border_style = if view.is_drop_target {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else if view.is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let title_style = if view.is_focused || view.is_drop_target {
        border_style.add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let title = format!(" {} ({}) ", display_name(view.label), view.tasks.len());
    let mut block = view.position.frame(
        Block::default()
            .title(Span::styled(title, title_style))
            .border_style(border_style),
        view.is_drop_target,
    );
    if view.is_drop_target {
        block = block.title_bottom(Line::from(Span::styled(" + drop here ", border_style)));
    }

    let inner = block.inner(area);
    block.render(area, buf);

    if view.tasks.is_empty() {
        render_empty_placeholder(inner, buf);
        return Vec::new();
    }

    let visible = visible_cards(inner.height);
    let focus_idx = view
        .dragged
        .and_then(|id| view.tasks.iter().position(|t| t.id == id))
        .or(view.selected.filter(|_| view.is_focused));
    let offset = calculate_scroll_offset(focus_idx, view.tasks.len(), visible);
    let shown = view.tasks.len().saturating_sub(offset).min(visible);

    let constraints = (0..shown)
        .map(|_| Constraint::Length(TASK_CARD_HEIGHT))
        .chain(std::iter::once(Constraint::Min(0)));
    let card_areas = Layout::vertical(constraints).split(inner);

    let mut mounted = Vec::with_capacity(shown);
    for (i, task) in view.tasks.iter().skip(offset).take(shown).enumerate() {
        let card_area = card_areas[i];
        if card_area.height < TASK_CARD_HEIGHT {
            break;
        }

        let index = offset + i;
        let mode = if view.dragged == Some(task.id) {
            CardMode::Dragged
        } else if view.is_focused && view.selected == Some(index) {
            CardMode::Selected
        } else {
            CardMode::Normal
        };

        render_task_card(task, mode, card_area, buf);
        mounted.push((task.id, card_area));
    }
    mounted
}

/// Renders a placeholder message for empty columns.
fn render_empty_placeholder(area: Rect, buf: &mut Buffer) {
    Paragraph::new(Line::from(Span::styled(
        "No tasks",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )))
    .render(area, buf);
}

/// Calculates the scroll offset that keeps the focused card visible.
fn calculate_scroll_offset(focus: Option<usize>, total: usize, visible: usize) -> usize {
    let Some(focus) = focus else {
        return 0;
    };
    if total <= visible {
        return 0;
    }

    let max_offset = total - visible;
    focus.saturating_sub(visible / 2).min(max_offset)
}
