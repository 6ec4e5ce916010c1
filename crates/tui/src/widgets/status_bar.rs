//! Status bar rendering widget.
//!
//! The footer shows keybinding hints, switches to drag hints while a card is
//! being dragged, and puts the current notification in front of them.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::notification::{Notification, NotificationLevel};

/// Renders the status bar.
///
/// # Layout
///
/// ```text
/// ┌────────────────────────────────────────────────────────────┐
/// │Couldn't move task  |  Ctrl+C Quit  ←→↑↓ Navigate  ? Help   │
/// └────────────────────────────────────────────────────────────┘
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use taskboard_tui::widgets::render_status_bar;
///
/// let area = Rect::new(0, 0, 80, 3);
/// let mut buf = Buffer::empty(area);
///
/// render_status_bar(None, false, area, &mut buf);
/// ```
pub fn render_status_bar(
    notification: Option<&Notification>,
    dragging: bool,
    area: Rect,
    buf: &mut Buffer,
) {
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::White);

    let mut spans = Vec::new();
    if let Some(note) = notification {
        let style = match note.level {
            NotificationLevel::Info => Style::default().fg(Color::Cyan),
            NotificationLevel::Error => Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        };
        spans.push(Span::styled(note.text.clone(), style));
        spans.push(Span::styled("  |  ", text_style));
    }

    let hints: &[(&str, &str)] = if dragging {
        &[("Release", " Drop  "), ("Esc", " Cancel")]
    } else {
        &[
            ("Ctrl+C", " Quit  "),
            ("←→↑↓", " Navigate  "),
            ("Drag", " Move  "),
            ("c", " Chart  "),
            ("?", " Help"),
        ]
    };
    for (key, action) in hints {
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(*action, text_style));
    }

    Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL))
        .render(area, buf);
}
