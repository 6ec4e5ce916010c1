//! Drag session bookkeeping.

use std::fmt;

use taskboard_protocol::TaskId;

use crate::zone::ZoneId;

/// Identifies one drag gesture.
///
/// Tokens grow monotonically within a coordinator, so an event carrying an
/// older token can always be told apart from one belonging to the active
/// session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionToken(u64);

impl SessionToken {
    /// Wraps a raw token value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw token value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The in-flight drag gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    /// The task being dragged.
    pub task_id: TaskId,
    /// The zone currently under the pointer, if any.
    pub hovered_zone: Option<ZoneId>,
    /// Token of this session.
    pub token: SessionToken,
}

impl DragSession {
    pub(crate) fn new(task_id: TaskId, token: SessionToken) -> Self {
        Self {
            task_id,
            hovered_zone: None,
            token,
        }
    }
}

/// State of a [`DragCoordinator`](crate::DragCoordinator).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A task is being dragged.
    Dragging(DragSession),
}

impl DragState {
    /// Returns the active session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Idle => None,
            Self::Dragging(session) => Some(session),
        }
    }

    /// Returns `true` if no drag is in progress.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
