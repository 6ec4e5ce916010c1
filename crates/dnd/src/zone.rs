//! Droppable zones and hover resolution.
//!
//! A zone is a screen rectangle registered under the status label it stands
//! for. The [`ZoneRegistry`] keeps them in registration order; a
//! [`HoverResolver`] picks one when the pointer sits inside several.

use ratatui::layout::{Position, Rect};
use tracing::warn;

use crate::error::DragError;

/// Identifier of a droppable zone: the status label its column stands for.
pub type ZoneId = String;

/// A drop target mounted on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppableZone {
    /// The status label of this zone.
    pub id: ZoneId,
    /// Screen area of the zone.
    pub bounds: Rect,
    order: u64,
}

impl DroppableZone {
    /// Returns `true` if the pointer is inside this zone.
    #[must_use]
    pub fn contains(&self, pointer: Position) -> bool {
        self.bounds.contains(pointer)
    }

    /// Registration sequence number; higher means registered more recently.
    #[must_use]
    pub fn order(&self) -> u64 {
        self.order
    }
}

/// Picks the zone under the pointer.
///
/// Implementations only decide between zones that contain the pointer; the
/// tie-break between overlapping zones is the policy.
pub trait HoverResolver {
    /// Returns the zone the pointer is over, or `None` when it is over none.
    fn resolve<'a>(&self, pointer: Position, zones: &'a [DroppableZone])
    -> Option<&'a DroppableZone>;
}

/// Overlaps resolve to the most recently registered zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TopmostZone;

impl HoverResolver for TopmostZone {
    fn resolve<'a>(
        &self,
        pointer: Position,
        zones: &'a [DroppableZone],
    ) -> Option<&'a DroppableZone> {
        zones
            .iter()
            .filter(|z| z.contains(pointer))
            .max_by_key(|z| z.order)
    }
}

/// Overlaps resolve to the zone registered first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FirstRegistered;

impl HoverResolver for FirstRegistered {
    fn resolve<'a>(
        &self,
        pointer: Position,
        zones: &'a [DroppableZone],
    ) -> Option<&'a DroppableZone> {
        zones
            .iter()
            .filter(|z| z.contains(pointer))
            .min_by_key(|z| z.order)
    }
}

/// The zones currently mounted.
///
/// # Examples
///
/// ```
/// use ratatui::layout::{Position, Rect};
/// use taskboard_dnd::{TopmostZone, ZoneRegistry};
///
/// let mut zones = ZoneRegistry::new();
/// zones.register("todo", Rect::new(0, 0, 10, 10));
/// zones.register("done", Rect::new(10, 0, 10, 10));
///
/// let hit = zones.zone_at(Position::new(12, 3), &TopmostZone);
/// assert_eq!(hit.map(|z| z.id.as_str()), Some("done"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneRegistry {
    zones: Vec<DroppableZone>,
    next_order: u64,
}

impl ZoneRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a zone, or updates the bounds of an already registered one.
    ///
    /// Either way the zone becomes the most recently registered.
    pub fn register(&mut self, id: impl Into<ZoneId>, bounds: Rect) {
        let id = id.into();
        self.next_order += 1;
        let order = self.next_order;

        if let Some(zone) = self.zones.iter_mut().find(|z| z.id == id) {
            zone.bounds = bounds;
            zone.order = order;
        } else {
            self.zones.push(DroppableZone { id, bounds, order });
        }
    }

    /// Removes a zone. Returns `true` if it was registered.
    pub fn unregister(&mut self, id: &str) -> bool {
        let before = self.zones.len();
        self.zones.retain(|z| z.id != id);
        self.zones.len() != before
    }

    /// Returns `true` if a zone with this ID is registered.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.zones.iter().any(|z| z.id == id)
    }

    /// Returns a zone by ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&DroppableZone> {
        self.zones.iter().find(|z| z.id == id)
    }

    /// Returns the registered zones, in first-registration order.
    #[must_use]
    pub fn zones(&self) -> &[DroppableZone] {
        &self.zones
    }

    /// Returns the number of registered zones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Returns `true` if no zones are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Resolves the zone under the pointer.
    ///
    /// Logs a warning when the pointer lies inside more than one zone.
    pub fn zone_at<R: HoverResolver + ?Sized>(
        &self,
        pointer: Position,
        resolver: &R,
    ) -> Option<&DroppableZone> {
        if let Some(err) = self.overlap_at(pointer) {
            warn!(x = pointer.x, y = pointer.y, "{err}");
        }
        resolver.resolve(pointer, &self.zones)
    }

    /// Returns [`DragError::ZoneResolutionAmbiguous`] listing every zone
    /// under the pointer, or `None` when at most one zone contains it.
    #[must_use]
    pub fn overlap_at(&self, pointer: Position) -> Option<DragError> {
        let candidates: Vec<ZoneId> = self
            .zones
            .iter()
            .filter(|z| z.contains(pointer))
            .map(|z| z.id.clone())
            .collect();
        (candidates.len() > 1).then_some(DragError::ZoneResolutionAmbiguous { candidates })
    }
}
