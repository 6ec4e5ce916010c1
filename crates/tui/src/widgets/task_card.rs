//! Task card rendering widget.
//!
//! Each card shows a task's title and a truncated description inside a
//! border colored after the card's column.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use taskboard_protocol::{Task, effective_status};

/// Returns the accent color for a status label.
///
/// Common workflow words get fixed colors; anything else is cyan. Tasks
/// without a status are gray.
///
/// # Examples
///
/// ```
/// use ratatui::style::Color;
/// use taskboard_tui::widgets::status_color;
///
/// assert_eq!(status_color("done"), Color::Green);
/// assert_eq!(status_color("in_progress"), Color::Blue);
/// assert_eq!(status_color(""), Color::DarkGray);
/// assert_eq!(status_color("someday"), Color::Cyan);
/// ```
#[must_use]
pub fn status_color(status: &str) -> Color {
    let label = effective_status(status).to_ascii_lowercase();
    match label.as_str() {
        "unset" => Color::DarkGray,
        "todo" | "backlog" | "new" => Color::Gray,
        "doing" | "in_progress" | "in-progress" | "wip" => Color::Blue,
        "review" | "in_review" | "blocked" => Color::Yellow,
        "done" | "closed" | "shipped" => Color::Green,
        "cancelled" | "canceled" | "failed" => Color::Red,
        _ => Color::Cyan,
    }
}

/// How a card is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardMode {
    /// Plain card.
    #[default]
    Normal,
    /// The keyboard selection is on this card.
    Selected,
    /// This card is being dragged; it stays in place, dimmed.
    Dragged,
}

/// Renders a task card to the buffer.
///
/// # Layout
///
/// ```text
/// ┌────────────────┐
/// │Title           │
/// │description...  │
/// └────────────────┘
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use taskboard_protocol::Task;
/// use taskboard_tui::widgets::{CardMode, render_task_card};
///
/// let task = Task::new("Implement feature", "Add new functionality").with_status("todo");
/// let area = Rect::new(0, 0, 20, 4);
/// let mut buf = Buffer::empty(area);
///
/// render_task_card(&task, CardMode::Normal, area, &mut buf);
/// ```
pub fn render_task_card(task: &Task, mode: CardMode, area: Rect, buf: &mut Buffer) {
    if area.width < 4 || area.height < 3 {
        return;
    }

    let accent = status_color(&task.status);
    let (border_style, title_style, desc_style) = match mode {
        CardMode::Normal => (
            Style::default().fg(accent),
            Style::default().fg(Color::White),
            Style::default().fg(Color::DarkGray),
        ),
        CardMode::Selected => (
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
            Style::default().fg(Color::White),
        ),
        CardMode::Dragged => {
            let dim = Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM);
            (dim, dim.add_modifier(Modifier::ITALIC), dim)
        }
    };

    let inner_width = area.width.saturating_sub(2) as usize;
    let content = vec![
        Line::from(Span::styled(
            truncate_string(&task.title, inner_width),
            title_style,
        )),
        Line::from(Span::styled(
            truncate_string(&task.description, inner_width),
            desc_style,
        )),
    ];

    Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .render(area, buf);
}

/// Truncates a string to fit within a given width, adding ellipsis if needed.
pub(crate) fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width > 3 {
        let truncated: String = s.chars().take(max_width - 3).collect();
        format!("{truncated}...")
    } else {
        s.chars().take(max_width).collect()
    }
}
