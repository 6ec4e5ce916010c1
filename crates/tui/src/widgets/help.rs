//! Help overlay widget.
//!
//! Lists the keyboard and mouse bindings when the user presses `?`.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

/// The width of the help overlay panel.
const HELP_WIDTH: u16 = 40;

/// Width of the key column, padding included.
const KEY_WIDTH: usize = 13;

/// Sections of the overlay: a heading and its (key, action) rows.
const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("←", "Previous column"),
            ("→", "Next column"),
            ("↑", "Select previous"),
            ("↓", "Select next"),
        ],
    ),
    (
        "Mouse",
        &[
            ("Drag card", "Move to a column"),
            ("Release", "Drop on column"),
            ("Off board", "Drop nowhere"),
        ],
    ),
    (
        "Actions",
        &[
            ("Esc", "Cancel drag"),
            ("c", "Toggle chart"),
            ("Ctrl+C", "Quit"),
            ("?", "Toggle help"),
        ],
    ),
];

/// Renders a centered help overlay on top of whatever is in `area`.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use taskboard_tui::widgets::render_help_overlay;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
///
/// render_help_overlay(area, &mut buf);
/// ```
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    let lines = build_help_lines();
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let popup_area = centered_rect(HELP_WIDTH, height, area);

    Clear.render(popup_area, buf);

    let help_block = Block::default()
        .title(Span::styled(
            " Help ",
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightYellow));

    Paragraph::new(lines)
        .block(help_block)
        .alignment(Alignment::Left)
        .render(popup_area, buf);
}

/// Builds the lines of help content.
fn build_help_lines() -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Green);
    let text_style = Style::default().fg(Color::White);
    let hint_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    let mut lines = vec![Line::from("")];
    for (heading, rows) in SECTIONS {
        lines.push(Line::from(Span::styled(format!("  {heading}"), header_style)));
        for (key, action) in *rows {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<KEY_WIDTH$}"), key_style),
                Span::styled(*action, text_style),
            ]));
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled("  Press any key to close", hint_style)));
    lines
}

/// Creates a centered rectangle within a given area, clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;

    Rect::new(x, y, popup_width, popup_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    fn help_text() -> String {
        build_help_lines()
            .iter()
            .map(|l| {
                l.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn centered_rect_positions_correctly() {
        let centered = centered_rect(20, 10, Rect::new(0, 0, 80, 24));
        assert_eq!(centered, Rect::new(30, 7, 20, 10));
    }

    #[test]
    fn centered_rect_clamps_to_area() {
        let centered = centered_rect(100, 50, Rect::new(0, 0, 40, 12));
        assert_eq!(centered, Rect::new(0, 0, 40, 12));
    }

    #[test]
    fn overlay_renders_every_section() {
        let area = Rect::new(0, 0, 80, 30);
        let mut buf = Buffer::empty(area);

        render_help_overlay(area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Help"));
        assert!(content.contains("Navigation"));
        assert!(content.contains("Mouse"));
        assert!(content.contains("Actions"));
        assert!(content.contains("Press any key to close"));
    }

    #[test]
    fn overlay_handles_small_area() {
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);

        render_help_overlay(area, &mut buf);
    }

    #[test]
    fn help_lists_drag_and_chart_bindings() {
        let content = help_text();

        for key in ["←", "→", "↑", "↓", "Esc", "Ctrl+C", "?"] {
            assert!(content.contains(key), "missing {key}");
        }
        assert!(content.contains("Drag card"));
        assert!(content.contains("Cancel drag"));
        assert!(content.contains("Toggle chart"));
    }
}
