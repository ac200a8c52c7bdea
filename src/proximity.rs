//! Interactable tracking around the character.
//!
//! The world holds a fixed set of interactable targets. After every
//! committed transform the dispatcher recomputes which single target is
//! active: the nearest in-range target of the highest-precedence kind,
//! measured in the horizontal plane only. External layers receive events on
//! the enter/leave edges and can forward an interact press to the active
//! target.

use crate::collision::types::Point3;
use crate::constants::DEFAULT_PROXIMITY_RADIUS;
use crate::utils::planar_distance_sq;

/// Identifier assigned by the ingesting layer, unique across all targets.
pub type TargetId = u32;

/// The kinds of interactable placed in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// Walkable doorway to another area.
    Portal,
    /// Readable sign with hint text.
    InfoSign,
    /// The wanted board.
    WantedBoard,
}

impl TargetKind {
    /// Selection precedence when several kinds are in range at once.
    /// Lower wins: the board beats signs, signs beat portals, regardless of
    /// distance.
    #[inline]
    fn rank(self) -> u8 {
        match self {
            TargetKind::WantedBoard => 0,
            TargetKind::InfoSign => 1,
            TargetKind::Portal => 2,
        }
    }
}

/// A single interactable target.
#[derive(Debug, Clone, Copy)]
pub struct ProximityTarget {
    pub id: TargetId,
    pub kind: TargetKind,
    pub position: Point3,
    /// Interaction radius in meters, measured in the horizontal plane.
    pub radius: f32,
}

impl ProximityTarget {
    pub fn new(id: TargetId, kind: TargetKind, position: Point3) -> Self {
        Self {
            id,
            kind,
            position,
            radius: DEFAULT_PROXIMITY_RADIUS,
        }
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }
}

/// Edge event produced when the active target changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProximityEvent {
    BecameActive { id: TargetId, kind: TargetKind },
    BecameInactive { id: TargetId, kind: TargetKind },
}

/// An interact press forwarded to the active target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activation {
    pub id: TargetId,
    pub kind: TargetKind,
}

/// Tracks the single active target across all kinds.
#[derive(Default)]
pub struct ProximityDispatcher {
    targets: Vec<ProximityTarget>,
    active: Option<usize>,
}

impl ProximityDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_target(&mut self, target: ProximityTarget) {
        self.targets.push(target);
    }

    #[inline]
    pub fn targets(&self) -> &[ProximityTarget] {
        &self.targets
    }

    /// The currently active target, if any.
    #[inline]
    pub fn active_target(&self) -> Option<&ProximityTarget> {
        self.active.map(|index| &self.targets[index])
    }

    /// Recompute the active target for the committed character position.
    ///
    /// Returns the edge events this recomputation produced: at most one
    /// `BecameInactive` followed by at most one `BecameActive`. Ticks that
    /// leave the active target unchanged produce nothing.
    pub fn update(&mut self, character_position: &Point3) -> Vec<ProximityEvent> {
        let next = self.select(character_position);

        if next == self.active {
            return Vec::new();
        }

        let mut events = Vec::with_capacity(2);
        if let Some(index) = self.active {
            let target = &self.targets[index];
            events.push(ProximityEvent::BecameInactive {
                id: target.id,
                kind: target.kind,
            });
        }
        if let Some(index) = next {
            let target = &self.targets[index];
            events.push(ProximityEvent::BecameActive {
                id: target.id,
                kind: target.kind,
            });
        }

        self.active = next;
        events
    }

    /// Forward an interact press to the active target.
    pub fn interact(&self) -> Option<Activation> {
        self.active_target().map(|target| Activation {
            id: target.id,
            kind: target.kind,
        })
    }

    /// Index of the best in-range target: highest-precedence kind first,
    /// nearest within that kind. Distance is horizontal only, so the
    /// character's height never affects selection.
    fn select(&self, character_position: &Point3) -> Option<usize> {
        let mut best: Option<(u8, f32, usize)> = None;

        for (index, target) in self.targets.iter().enumerate() {
            let dist_sq = planar_distance_sq(character_position, &target.position);
            if dist_sq > target.radius * target.radius {
                continue;
            }

            let key = (target.kind.rank(), dist_sq);
            let better = match best {
                None => true,
                Some((rank, best_dist_sq, _)) => {
                    key.0 < rank || (key.0 == rank && key.1 < best_dist_sq)
                }
            };
            if better {
                best = Some((key.0, key.1, index));
            }
        }

        best.map(|(_, _, index)| index)
    }
}
