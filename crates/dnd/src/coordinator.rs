//! The drag coordinator state machine.
//!
//! The coordinator owns the zone registry and at most one [`DragSession`].
//! Every event after [`start`](DragCoordinator::start) carries the session's
//! [`SessionToken`]; events with any other token are rejected as stale and
//! change nothing.
//!
//! ```text
//! Idle --start--> Dragging{hovered: None}
//! Dragging --pointer_over(zone)--> Dragging{hovered: zone}
//! Dragging --pointer_leave_all--> Dragging{hovered: None}
//! Dragging --drop--> Idle        (set_status at most once)
//! Dragging --cancel--> Idle      (never touches the store)
//! ```

use ratatui::layout::{Position, Rect};
use taskboard_protocol::{TaskId, TaskStore, UNSET_STATUS};
use tracing::{debug, info, warn};

use crate::error::{DragError, Result};
use crate::handle::DragPayload;
use crate::session::{DragSession, DragState, SessionToken};
use crate::zone::{HoverResolver, TopmostZone, ZoneId, ZoneRegistry};

/// Why a drop left the task where it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoMoveReason {
    /// The pointer was not over any zone.
    NoTarget,
    /// The hovered zone is the task's current status.
    SameStatus,
}

/// Result of a successful [`DragCoordinator::drop`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// The task's status was changed.
    Moved {
        /// The task that moved.
        task_id: TaskId,
        /// Effective status before the drop.
        from: String,
        /// Zone the task was dropped on.
        to: ZoneId,
    },
    /// The store was not touched.
    Unchanged {
        /// The task that was dropped.
        task_id: TaskId,
        /// Why nothing moved.
        reason: NoMoveReason,
    },
}

impl DropOutcome {
    /// Returns `true` if the drop changed a status.
    #[must_use]
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// Returns the status a drop on `zone` writes.
///
/// The unset zone clears the status; every other zone writes its own label.
///
/// # Examples
///
/// ```
/// use taskboard_dnd::status_for_zone;
///
/// assert_eq!(status_for_zone("done"), "done");
/// assert_eq!(status_for_zone("unset"), "");
/// ```
#[must_use]
pub fn status_for_zone(zone: &str) -> &str {
    if zone == UNSET_STATUS { "" } else { zone }
}

/// Tracks the active drag and turns drops into status changes.
///
/// Each coordinator is independent; two boards never share drag state.
///
/// # Examples
///
/// ```
/// use ratatui::layout::{Position, Rect};
/// use taskboard_dnd::{DragCoordinator, DragPayload};
/// use taskboard_protocol::{MemoryTaskStore, Task, TaskStore};
///
/// let task = Task::new("Write docs", "").with_status("todo");
/// let task_id = task.id;
/// let mut store = MemoryTaskStore::from_tasks(vec![task]);
///
/// let mut dnd = DragCoordinator::new();
/// dnd.register_zone("todo", Rect::new(0, 0, 10, 10));
/// dnd.register_zone("done", Rect::new(10, 0, 10, 10));
///
/// let token = dnd.start(DragPayload { task_id });
/// dnd.pointer_moved(token, Position::new(15, 5)).unwrap();
/// let outcome = dnd.drop(token, &mut store).unwrap();
///
/// assert!(outcome.is_moved());
/// assert_eq!(store.list_tasks()[0].status, "done");
/// assert!(!dnd.is_dragging());
/// ```
#[derive(Debug, Clone)]
pub struct DragCoordinator<R = TopmostZone> {
    state: DragState,
    zones: ZoneRegistry,
    resolver: R,
    last_token: u64,
}

impl DragCoordinator {
    /// Creates an idle coordinator whose overlaps resolve to the topmost zone.
    #[must_use]
    pub fn new() -> Self {
        Self::with_resolver(TopmostZone)
    }
}

impl Default for DragCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: HoverResolver> DragCoordinator<R> {
    /// Creates an idle coordinator with a custom overlap policy.
    #[must_use]
    pub fn with_resolver(resolver: R) -> Self {
        Self {
            state: DragState::Idle,
            zones: ZoneRegistry::new(),
            resolver,
            last_token: 0,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Returns the active session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        self.state.session()
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        !self.state.is_idle()
    }

    /// Returns `true` if the given task is the one being dragged.
    #[must_use]
    pub fn is_dragging_task(&self, task_id: TaskId) -> bool {
        self.session().is_some_and(|s| s.task_id == task_id)
    }

    /// Returns the zone under the pointer of the active drag.
    #[must_use]
    pub fn hovered_zone(&self) -> Option<&str> {
        self.session().and_then(|s| s.hovered_zone.as_deref())
    }

    /// Returns `true` if the active drag hovers over this zone.
    ///
    /// At most one zone reports `true` at any time.
    #[must_use]
    pub fn is_over(&self, zone: &str) -> bool {
        self.hovered_zone() == Some(zone)
    }

    /// Returns the mounted zones.
    #[must_use]
    pub fn zones(&self) -> &ZoneRegistry {
        &self.zones
    }

    /// Mounts a zone, or moves an already mounted one.
    pub fn register_zone(&mut self, id: impl Into<ZoneId>, bounds: Rect) {
        self.zones.register(id, bounds);
    }

    /// Unmounts a zone. If the active drag hovers over it, the hover clears.
    pub fn unregister_zone(&mut self, id: &str) -> bool {
        if let DragState::Dragging(session) = &mut self.state
            && session.hovered_zone.as_deref() == Some(id)
        {
            debug!(zone = id, "hovered zone unmounted");
            session.hovered_zone = None;
        }
        self.zones.unregister(id)
    }

    /// Replaces the mounted zones with the ones of a new render pass.
    ///
    /// Zones in `zones` are registered in order; mounted zones missing from
    /// it are unregistered.
    pub fn mount_zones<I, S>(&mut self, zones: I)
    where
        I: IntoIterator<Item = (S, Rect)>,
        S: Into<ZoneId>,
    {
        let mut mounted: Vec<ZoneId> = Vec::new();
        for (id, bounds) in zones {
            let id = id.into();
            self.zones.register(id.clone(), bounds);
            mounted.push(id);
        }

        let gone: Vec<ZoneId> = self
            .zones
            .zones()
            .iter()
            .filter(|z| !mounted.contains(&z.id))
            .map(|z| z.id.clone())
            .collect();
        for id in gone {
            self.unregister_zone(&id);
        }
    }

    /// Starts dragging a task and returns the new session's token.
    ///
    /// A drag already in progress is cancelled first; its token goes stale.
    pub fn start(&mut self, payload: DragPayload) -> SessionToken {
        if let Some(prior) = self.session() {
            debug!(token = %prior.token, task_id = %prior.task_id, "drag superseded by a new one");
        }

        self.last_token += 1;
        let token = SessionToken::new(self.last_token);
        self.state = DragState::Dragging(DragSession::new(payload.task_id, token));
        debug!(%token, task_id = %payload.task_id, "drag started");
        token
    }

    /// Marks `zone` as hovered.
    ///
    /// A zone that is not mounted cannot be a target, so hovering it clears
    /// the hover instead.
    ///
    /// # Errors
    ///
    /// Returns [`DragError::StaleEvent`] if `token` is not the active session.
    pub fn pointer_over(&mut self, token: SessionToken, zone: &str) -> Result<()> {
        let mounted = self.zones.contains(zone);
        let session = self.session_mut(token)?;
        session.hovered_zone = mounted.then(|| zone.to_string());
        Ok(())
    }

    /// Clears the hover.
    ///
    /// # Errors
    ///
    /// Returns [`DragError::StaleEvent`] if `token` is not the active session.
    pub fn pointer_leave_all(&mut self, token: SessionToken) -> Result<()> {
        self.session_mut(token)?.hovered_zone = None;
        Ok(())
    }

    /// Hit-tests the pointer against the mounted zones and updates the hover.
    ///
    /// Returns the hovered zone afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`DragError::StaleEvent`] if `token` is not the active session.
    pub fn pointer_moved(&mut self, token: SessionToken, pointer: Position) -> Result<Option<&str>> {
        self.check_token(token)?;
        let hovered = self
            .zones
            .zone_at(pointer, &self.resolver)
            .map(|z| z.id.clone());

        let session = self.session_mut(token)?;
        session.hovered_zone = hovered;
        Ok(session.hovered_zone.as_deref())
    }

    /// Ends the drag, moving the task if it was released over another zone.
    ///
    /// The coordinator is idle afterwards, whatever the store answers.
    ///
    /// # Errors
    ///
    /// Returns [`DragError::StaleEvent`] if `token` is not the active session,
    /// leaving the state untouched, or [`DragError::DropRejected`] if the
    /// store refused the new status.
    pub fn drop<S>(&mut self, token: SessionToken, store: &mut S) -> Result<DropOutcome>
    where
        S: TaskStore + ?Sized,
    {
        self.check_token(token)?;
        let DragState::Dragging(session) = std::mem::take(&mut self.state) else {
            return Err(self.stale(token));
        };
        let task_id = session.task_id;

        let Some(zone) = session.hovered_zone else {
            debug!(%token, %task_id, "dropped outside every zone");
            return Ok(DropOutcome::Unchanged {
                task_id,
                reason: NoMoveReason::NoTarget,
            });
        };

        let from = store
            .list_tasks()
            .iter()
            .find(|t| t.id == task_id)
            .map(|t| t.effective_status().to_string());
        if from.as_deref() == Some(zone.as_str()) {
            debug!(%token, %task_id, zone = %zone, "dropped on its own column");
            return Ok(DropOutcome::Unchanged {
                task_id,
                reason: NoMoveReason::SameStatus,
            });
        }

        let status = status_for_zone(&zone);
        match store.set_status(task_id, status) {
            Ok(()) => {
                let from = from.unwrap_or_else(|| UNSET_STATUS.to_string());
                info!(%task_id, from = %from, to = %zone, "task moved");
                Ok(DropOutcome::Moved {
                    task_id,
                    from,
                    to: zone,
                })
            }
            Err(source) => {
                warn!(%task_id, status, error = %source, "drop rejected by the store");
                Err(DragError::DropRejected {
                    task_id,
                    status: status.to_string(),
                    source,
                })
            }
        }
    }

    /// Abandons the drag without touching any task.
    ///
    /// # Errors
    ///
    /// Returns [`DragError::StaleEvent`] if `token` is not the active session.
    pub fn cancel(&mut self, token: SessionToken) -> Result<()> {
        self.check_token(token)?;
        self.state = DragState::Idle;
        debug!(%token, "drag cancelled");
        Ok(())
    }

    /// Abandons whatever drag is in progress, returning its session.
    pub fn abort(&mut self) -> Option<DragSession> {
        match std::mem::take(&mut self.state) {
            DragState::Idle => None,
            DragState::Dragging(session) => {
                debug!(token = %session.token, "drag aborted");
                Some(session)
            }
        }
    }

    /// Reports that the handle of a task is gone from the screen.
    ///
    /// Cancels the drag if that task is being dragged. Returns `true` if a
    /// drag was cancelled.
    pub fn handle_unmounted(&mut self, task_id: TaskId) -> bool {
        if self.is_dragging_task(task_id) {
            debug!(%task_id, "dragged handle unmounted");
            self.abort();
            true
        } else {
            false
        }
    }

    fn active_token(&self) -> Option<SessionToken> {
        self.session().map(|s| s.token)
    }

    fn check_token(&self, token: SessionToken) -> Result<()> {
        if self.active_token() == Some(token) {
            Ok(())
        } else {
            Err(self.stale(token))
        }
    }

    fn session_mut(&mut self, token: SessionToken) -> Result<&mut DragSession> {
        self.check_token(token)?;
        match &mut self.state {
            DragState::Dragging(session) => Ok(session),
            DragState::Idle => Err(DragError::StaleEvent {
                received: token,
                active: None,
            }),
        }
    }

    fn stale(&self, received: SessionToken) -> DragError {
        let err = DragError::StaleEvent {
            received,
            active: self.active_token(),
        };
        debug!("{err}");
        err
    }
}
