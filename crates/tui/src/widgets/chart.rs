//! Status chart widget.
//!
//! One horizontal bar per status in the aggregate, in aggregate order. Bars
//! are scaled so the largest count fills the available width and every
//! non-zero count gets at least one cell.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use taskboard_dnd::StatusCount;
use taskboard_protocol::display_name;

use super::task_card::{status_color, truncate_string};

/// Longest label shown before truncation.
const MAX_LABEL_WIDTH: usize = 12;

/// Glyph used to draw bars.
const BAR_GLYPH: &str = "█";

/// Returns the length in cells of each bar for a chart `width` cells wide.
///
/// # Examples
///
/// ```
/// use taskboard_dnd::StatusCount;
/// use taskboard_tui::widgets::bar_lengths;
///
/// let counts = [
///     StatusCount { status: "todo".into(), count: 4 },
///     StatusCount { status: "done".into(), count: 1 },
/// ];
/// assert_eq!(bar_lengths(&counts, 8), [8, 2]);
/// ```
#[must_use]
pub fn bar_lengths(counts: &[StatusCount], width: u16) -> Vec<u16> {
    let max = counts.iter().map(|c| c.count).max().unwrap_or(0);
    counts
        .iter()
        .map(|c| {
            if max == 0 || width == 0 || c.count == 0 {
                return 0;
            }
            let scaled = (c.count * usize::from(width) + max / 2) / max;
            u16::try_from(scaled.max(1)).unwrap_or(width).min(width)
        })
        .collect()
}

/// Renders the status chart.
///
/// # Layout
///
/// ```text
/// ╭ Status (7) ───────────────╮
/// │Todo        ██████████ 3   │
/// │In Progress ███████ 2      │
/// │Done        ███ 1          │
/// ╰───────────────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use taskboard_dnd::StatusCount;
/// use taskboard_tui::widgets::render_chart;
///
/// let counts = [StatusCount { status: "todo".into(), count: 2 }];
/// let area = Rect::new(0, 0, 30, 6);
/// let mut buf = Buffer::empty(area);
///
/// render_chart(&counts, area, &mut buf);
/// ```
pub fn render_chart(counts: &[StatusCount], area: Rect, buf: &mut Buffer) {
    let total: usize = counts.iter().map(|c| c.count).sum();
    let block = Block::default()
        .title(Span::styled(
            format!(" Status ({total}) "),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    block.render(area, buf);

    if counts.is_empty() {
        Paragraph::new(Span::styled(
            "No tasks",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
        .render(inner, buf);
        return;
    }

    let labels: Vec<String> = counts
        .iter()
        .map(|c| truncate_string(&display_name(&c.status), MAX_LABEL_WIDTH))
        .collect();
    let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let count_width = counts
        .iter()
        .map(|c| c.count.to_string().len())
        .max()
        .unwrap_or(1);
    // label, space, bar, space, count
    let bar_space = usize::from(inner.width).saturating_sub(label_width + count_width + 2);
    let bars = bar_lengths(counts, u16::try_from(bar_space).unwrap_or(u16::MAX));

    let lines: Vec<Line> = counts
        .iter()
        .zip(labels)
        .zip(bars)
        .map(|((c, label), bar)| {
            Line::from(vec![
                Span::styled(
                    format!("{label:<label_width$} "),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    BAR_GLYPH.repeat(usize::from(bar)),
                    Style::default().fg(status_color(&c.status)),
                ),
                Span::styled(
                    format!(" {}", c.count),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    Paragraph::new(lines).render(inner, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use proptest::prelude::*;

    fn counts(pairs: &[(&str, usize)]) -> Vec<StatusCount> {
        pairs
            .iter()
            .map(|(status, count)| StatusCount {
                status: (*status).to_string(),
                count: *count,
            })
            .collect()
    }

    #[test]
    fn bar_lengths_scale_to_largest() {
        let lengths = bar_lengths(&counts(&[("todo", 3), ("doing", 2), ("done", 1)]), 12);
        insta::assert_debug_snapshot!(lengths, @r"
        [
            12,
            8,
            4,
        ]
        ");
    }

    #[test]
    fn bar_lengths_small_counts_stay_visible() {
        let lengths = bar_lengths(&counts(&[("todo", 100), ("done", 1)]), 10);
        assert_eq!(lengths, [10, 1]);
    }

    #[test]
    fn bar_lengths_zero_width() {
        assert_eq!(bar_lengths(&counts(&[("todo", 3)]), 0), [0]);
        assert!(bar_lengths(&[], 10).is_empty());
    }

    #[test]
    fn chart_shows_labels_counts_and_total() {
        let area = Rect::new(0, 0, 30, 6);
        let mut buf = Buffer::empty(area);

        render_chart(
            &counts(&[("todo", 3), ("in_progress", 2), ("unset", 1)]),
            area,
            &mut buf,
        );

        let content = buffer_to_string(&buf);
        assert!(content.contains("Status (6)"));
        assert!(content.contains("Todo "));
        assert!(content.contains("In Progress "));
        assert!(content.contains("Unset "));
        assert!(content.contains("█ 3"));
        assert!(content.contains("█ 1"));
    }

    #[test]
    fn rows_follow_aggregate_order() {
        let area = Rect::new(0, 0, 30, 6);
        let mut buf = Buffer::empty(area);

        render_chart(&counts(&[("done", 1), ("todo", 5)]), area, &mut buf);

        let content = buffer_to_string(&buf);
        let done = content.find("Done").unwrap();
        let todo = content.find("Todo").unwrap();
        assert!(done < todo);
    }

    #[test]
    fn empty_chart_shows_placeholder() {
        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);

        render_chart(&[], area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Status (0)"));
        assert!(content.contains("No tasks"));
    }

    proptest! {
        #[test]
        fn bars_fit_and_largest_fills(
            values in prop::collection::vec(1usize..500, 1..8),
            width in 1u16..80,
        ) {
            let pairs: Vec<(String, usize)> = values
                .iter()
                .enumerate()
                .map(|(i, v)| (format!("s{i}"), *v))
                .collect();
            let counts: Vec<StatusCount> = pairs
                .iter()
                .map(|(s, c)| StatusCount { status: s.clone(), count: *c })
                .collect();

            let lengths = bar_lengths(&counts, width);

            prop_assert_eq!(lengths.len(), counts.len());
            prop_assert!(lengths.iter().all(|l| (1..=width).contains(l)));
            prop_assert_eq!(lengths.iter().copied().max(), Some(width));
        }
    }
}
