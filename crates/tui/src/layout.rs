//! Centralized layout measurements for the TUI.
//!
//! Besides the shared constants, this module splits the screen into the
//! regions the app draws into. The same [`ScreenLayout`] is used to render a
//! frame and to mount the droppable zones for that frame, so hit-testing
//! always matches what is on screen.

use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the header bar in rows.
///
/// The header displays the board title and help cue.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the status bar in rows.
pub const STATUS_BAR_HEIGHT: u16 = 3;

/// Height of each task card in rows.
///
/// This includes the border (2 rows) and content (2 rows for title and description).
pub const TASK_CARD_HEIGHT: u16 = 4;

/// Width of the chart panel, borders included.
pub const CHART_WIDTH: u16 = 30;

/// Minimum terminal height for useful rendering.
///
/// Below this height, we display a "terminal too small" message. It leaves
/// room for the status bar and a column with one card.
pub const MIN_HEIGHT: u16 = 10;

/// Minimum terminal height for rendering with header.
///
/// When terminal height is between `MIN_HEIGHT` and `MIN_HEIGHT_WITH_HEADER`,
/// we hide the header to reclaim 3 rows of content space.
pub const MIN_HEIGHT_WITH_HEADER: u16 = MIN_HEIGHT + HEADER_HEIGHT;

/// Minimum terminal width for useful rendering.
pub const MIN_WIDTH: u16 = 40;

/// Minimum terminal width for showing the chart next to the board.
///
/// Narrower terminals hide the chart even when it is toggled on.
pub const MIN_WIDTH_WITH_CHART: u16 = MIN_WIDTH + CHART_WIDTH;

/// Screen regions of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenLayout {
    /// Header bar, when shown.
    pub header: Option<Rect>,
    /// Area holding the columns.
    pub board: Rect,
    /// Chart panel, when shown.
    pub chart: Option<Rect>,
    /// Status bar at the bottom.
    pub status_bar: Rect,
}

impl ScreenLayout {
    /// Splits `area` into header, board, chart and status bar.
    ///
    /// The header is dropped below [`MIN_HEIGHT_WITH_HEADER`] rows and the
    /// chart below [`MIN_WIDTH_WITH_CHART`] columns.
    #[must_use]
    pub fn compute(area: Rect, chart_visible: bool) -> Self {
        let show_header = area.height >= MIN_HEIGHT_WITH_HEADER;
        let header_height = if show_header { HEADER_HEIGHT } else { 0 };

        let [header, body, status_bar] = Layout::vertical([
            Constraint::Length(header_height),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .areas(area);

        let (board, chart) = if chart_visible && area.width >= MIN_WIDTH_WITH_CHART {
            let [board, chart] =
                Layout::horizontal([Constraint::Min(0), Constraint::Length(CHART_WIDTH)])
                    .areas(body);
            (board, Some(chart))
        } else {
            (body, None)
        };

        Self {
            header: show_header.then_some(header),
            board,
            chart,
            status_bar,
        }
    }
}

/// Splits the board area into `count` columns of (near) equal width.
///
/// # Examples
///
/// ```
/// use ratatui::layout::Rect;
/// use taskboard_tui::layout::column_areas;
///
/// let areas = column_areas(Rect::new(0, 0, 80, 20), 4);
/// assert_eq!(areas.len(), 4);
/// assert_eq!(areas[0].width, 20);
/// ```
#[must_use]
pub fn column_areas(board: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let constraints = (0..count).map(|_| Constraint::Fill(1));
    Layout::horizontal(constraints).split(board).to_vec()
}

/// Returns how many cards fit in a column body of the given height.
#[must_use]
pub fn visible_cards(inner_height: u16) -> usize {
    (inner_height / TASK_CARD_HEIGHT).max(1) as usize
}
