//! Drag-and-drop status transitions for taskboard.
//!
//! Board columns mount as [droppable zones](ZoneRegistry) named after their
//! status label, task cards mount as [draggable handles](HandleSet), and the
//! [`DragCoordinator`] turns a press, a series of moves and a release into at
//! most one [`TaskStore::set_status`](taskboard_protocol::TaskStore::set_status)
//! call. The [`StatusAggregator`] then rebuilds the per-status counts the
//! chart draws.
//!
//! # Modules
//!
//! - [`zone`]: Droppable zones, the zone registry and hover resolution
//! - [`handle`]: Draggable handles and the drag payload
//! - [`session`]: Drag sessions, tokens and coordinator state
//! - [`coordinator`]: The drag state machine
//! - [`aggregate`]: Per-status counts
//! - [`error`]: Error types
//!
//! # Examples
//!
//! ```
//! use ratatui::layout::Rect;
//! use taskboard_dnd::{DragCoordinator, DragPayload, StatusAggregator};
//! use taskboard_protocol::{MemoryTaskStore, Task};
//!
//! let todo = Task::new("Write docs", "").with_status("todo");
//! let done = Task::new("Ship it", "").with_status("done");
//! let task_id = todo.id;
//! let mut store = MemoryTaskStore::from_tasks(vec![todo, done]);
//!
//! let mut chart = StatusAggregator::new();
//! chart.sync(&store);
//! assert_eq!(chart.count_of("todo"), 1);
//!
//! let mut dnd = DragCoordinator::new();
//! dnd.mount_zones([
//!     ("todo", Rect::new(0, 0, 20, 10)),
//!     ("done", Rect::new(20, 0, 20, 10)),
//! ]);
//!
//! let token = dnd.start(DragPayload { task_id });
//! dnd.pointer_over(token, "done").unwrap();
//! dnd.drop(token, &mut store).unwrap();
//!
//! chart.sync(&store);
//! assert_eq!(chart.count_of("todo"), 0);
//! assert_eq!(chart.count_of("done"), 2);
//! ```

pub mod aggregate;
pub mod coordinator;
pub mod error;
pub mod handle;
pub mod session;
pub mod zone;

pub use aggregate::{StatusAggregator, StatusCount, aggregate};
pub use coordinator::{DragCoordinator, DropOutcome, NoMoveReason, status_for_zone};
pub use error::{DragError, Result};
pub use handle::{DragPayload, DraggableHandle, HandleSet};
pub use session::{DragSession, DragState, SessionToken};
pub use zone::{DroppableZone, FirstRegistered, HoverResolver, TopmostZone, ZoneId, ZoneRegistry};
