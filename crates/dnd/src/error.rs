//! Error types for the drag-and-drop engine.
//!
//! None of these are fatal. A rejected drop is shown to the user, a stale
//! event is dropped silently, and an ambiguous hover is resolved by the
//! coordinator's [`HoverResolver`](crate::HoverResolver).

use taskboard_protocol::{StoreError, TaskId};
use thiserror::Error;

use crate::session::SessionToken;
use crate::zone::ZoneId;

/// Errors reported by the [`DragCoordinator`](crate::DragCoordinator).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DragError {
    /// The task store refused the status change issued by a drop.
    #[error("couldn't move task {task_id} to '{status}'")]
    DropRejected {
        /// The task that was dropped.
        task_id: TaskId,
        /// The status the drop tried to write.
        status: String,
        /// The store's reason for refusing it.
        source: StoreError,
    },

    /// An event carried the token of a session that is no longer active.
    #[error(
        "stale drag event from session {received} (active: {})",
        .active.map_or_else(|| "none".to_string(), |t| t.to_string())
    )]
    StaleEvent {
        /// The token carried by the event.
        received: SessionToken,
        /// The token of the active session, if any.
        active: Option<SessionToken>,
    },

    /// The pointer is inside more than one zone.
    #[error("pointer is over {} zones: {}", .candidates.len(), .candidates.join(", "))]
    ZoneResolutionAmbiguous {
        /// Every zone containing the pointer, in registration order.
        candidates: Vec<ZoneId>,
    },
}

impl DragError {
    /// Returns `true` if the error should never reach the user.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskboard_dnd::{DragError, SessionToken};
    ///
    /// let err = DragError::StaleEvent {
    ///     received: SessionToken::new(1),
    ///     active: None,
    /// };
    /// assert!(err.is_silent());
    /// ```
    #[must_use]
    pub fn is_silent(&self) -> bool {
        matches!(self, Self::StaleEvent { .. })
    }
}

/// A specialized Result type for drag-and-drop operations.
pub type Result<T> = std::result::Result<T, DragError>;
