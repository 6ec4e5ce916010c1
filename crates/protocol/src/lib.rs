//! Shared protocol types for the taskboard application.
//!
//! This crate defines the types used across all taskboard components:
//! tasks and their status labels, the [`TaskStore`] contract that the
//! drag-and-drop engine mutates, UI messages, and error types.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`task`]: Task identifiers and the `Task` struct
//! - [`status`]: Status labels and the "unset" sentinel
//! - [`store`]: The `TaskStore` trait and an in-memory implementation
//! - [`message`]: TUI event messages
//! - [`error`]: Error types for store operations
//!
//! # Examples
//!
//! Creating tasks and changing their status through a store:
//!
//! ```
//! use taskboard_protocol::{MemoryTaskStore, Task, TaskStore};
//!
//! let mut store = MemoryTaskStore::new();
//!
//! let task = Task::new("Implement feature", "Add user authentication").with_status("todo");
//! let task_id = task.id;
//! store.add_task(task);
//!
//! store.set_status(task_id, "doing").unwrap();
//! assert_eq!(store.get_task(task_id).unwrap().status, "doing");
//! ```

pub mod dummy;
pub mod error;
pub mod message;
pub mod status;
pub mod store;
pub mod task;

// Re-export primary types at crate root for convenience
pub use error::{Result, StoreError};
pub use message::Message;
pub use status::{UNSET_STATUS, display_name, effective_status, is_unset};
pub use store::{MemoryTaskStore, TaskStore};
pub use task::{Task, TaskId};
