//! Widget components for the taskboard TUI.
//!
//! Each widget is a plain function rendering state into a buffer. The board
//! and column widgets also return the screen areas they drew, which the app
//! mounts as droppable zones and draggable handles for the next pointer
//! event.
//!
//! # Modules
//!
//! - [`board`]: Renders all columns and collects the mounted zones and handles
//! - [`column`]: Renders one status column, its cards and its drop-target state
//! - [`task_card`]: Renders task cards colored after their status
//! - [`chart`]: Renders the per-status bar chart
//! - [`status_bar`]: Renders the footer with hints and notifications
//! - [`help`]: Renders the keybinding overlay
//!
//! # Example
//!
//! ```
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//! use taskboard_protocol::dummy::{DUMMY_COLUMNS, dummy_store};
//! use taskboard_tui::AppState;
//! use taskboard_tui::widgets::{self, DragView};
//!
//! let columns = DUMMY_COLUMNS.iter().map(|c| c.to_string()).collect();
//! let state = AppState::new(dummy_store(), columns);
//!
//! let area = Rect::new(0, 0, 100, 24);
//! let mut buf = Buffer::empty(area);
//!
//! let mounted = widgets::render_board(&state, DragView::default(), area, &mut buf);
//! assert_eq!(mounted.zones.len(), state.columns.len());
//! ```

pub mod board;
pub mod chart;
pub mod column;
pub mod help;
pub mod status_bar;
pub mod task_card;

pub use board::{DragView, MountedBoard, render_board};
pub use chart::{bar_lengths, render_chart};
pub use column::{ColumnPosition, ColumnView, render_column};
pub use help::render_help_overlay;
pub use status_bar::render_status_bar;
pub use task_card::{CardMode, render_task_card, status_color};

#[cfg(test)]
mod tests;
