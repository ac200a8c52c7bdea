//! Owned simulation state and per-tick orchestration.
//!
//! `World` holds everything the simulation mutates: the character body, the
//! two obstacle sets, the bounds, and the interactable dispatcher. The host
//! drives it with one [`World::tick`] call per rendered frame and reacts to
//! the returned transform, movement edges, and proximity events.
//!
//! A freshly built `World` has empty obstacle sets and no targets. That is a
//! valid state, not an error: movement is unblocked and nothing is
//! interactable until asset ingestion installs the real sets. Hosts may
//! therefore start ticking before loading finishes.

use log::info;

use crate::collision::ObstacleSet;
use crate::collision::types::{CharacterSpec, Point3};
use crate::input::MovementIntent;
use crate::movement::{Bounds, CharacterBody, TransformUpdate, step_character};
use crate::proximity::{Activation, ProximityDispatcher, ProximityEvent, ProximityTarget};

/// Everything a host needs to react to one simulation tick.
#[derive(Debug)]
pub struct TickOutput {
    /// The committed transform for this tick.
    pub transform: TransformUpdate,
    /// True exactly when the moving flag flipped this tick. Footstep audio
    /// starts and stops on these edges and is otherwise left alone.
    pub moving_changed: bool,
    /// Enter/leave edges for the active interactable, empty on most ticks.
    pub proximity_events: Vec<ProximityEvent>,
}

/// The complete simulation state, exclusively owned by the main loop.
pub struct World {
    spec: CharacterSpec,
    bounds: Bounds,
    body: CharacterBody,
    collidable: ObstacleSet,
    climbable: ObstacleSet,
    dispatcher: ProximityDispatcher,
    moving: bool,
}

impl World {
    /// Build a world with empty obstacle sets and no targets.
    ///
    /// The spawn position is clamped into `bounds` so the bounds invariant
    /// holds from the first tick.
    pub fn new(spec: CharacterSpec, bounds: Bounds, spawn: Point3, yaw: f32) -> Self {
        let (x, z) = bounds.clamp(spawn.x, spawn.z);
        Self {
            spec,
            bounds,
            body: CharacterBody::new(Point3::new(x, spawn.y, z), yaw),
            collidable: ObstacleSet::new(),
            climbable: ObstacleSet::new(),
            dispatcher: ProximityDispatcher::new(),
            moving: false,
        }
    }

    /// Install the set of obstacles that block horizontal movement.
    pub fn install_collidable(&mut self, set: ObstacleSet) {
        info!("installed {} collidable obstacles", set.len());
        self.collidable = set;
    }

    /// Install the set of climbable surfaces read by height resolution.
    /// Climbable geometry never blocks horizontal movement.
    pub fn install_climbable(&mut self, set: ObstacleSet) {
        info!("installed {} climbable surfaces", set.len());
        self.climbable = set;
    }

    pub fn add_target(&mut self, target: ProximityTarget) {
        self.dispatcher.add_target(target);
    }

    #[inline]
    pub fn character(&self) -> &CharacterBody {
        &self.body
    }

    #[inline]
    pub fn spec(&self) -> &CharacterSpec {
        &self.spec
    }

    #[inline]
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.moving
    }

    /// The currently active interactable, if any.
    #[inline]
    pub fn active_target(&self) -> Option<&ProximityTarget> {
        self.dispatcher.active_target()
    }

    /// Advance the simulation by one tick.
    pub fn tick(&mut self, intent: MovementIntent) -> TickOutput {
        let transform = step_character(
            &self.collidable,
            &self.climbable,
            &self.spec,
            &self.bounds,
            &mut self.body,
            intent,
        );

        let moving_changed = transform.moving != self.moving;
        self.moving = transform.moving;

        let proximity_events = self.dispatcher.update(&self.body.position);

        TickOutput {
            transform,
            moving_changed,
            proximity_events,
        }
    }

    /// Forward an interact press to the active target, if any.
    pub fn interact(&self) -> Option<Activation> {
        self.dispatcher.interact()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::types::{Obstacle, ObstacleShape, Transform};
    use crate::proximity::TargetKind;
    use nalgebra as na;

    fn world() -> World {
        World::new(
            CharacterSpec::default(),
            Bounds::new(-50.0, 50.0, -50.0, 50.0),
            na::Point3::new(0.0, 0.85, 0.0),
            0.0,
        )
    }

    #[test]
    fn empty_world_is_fully_runnable() {
        let mut world = world();
        let output = world.tick(MovementIntent::new(1.0, 0.0));

        // No obstacles, no stairs, no targets: the move just commits.
        assert!(output.transform.moving);
        assert!(output.proximity_events.is_empty());
        assert!(world.active_target().is_none());
        assert!(
            (world.character().position.x - world.spec().move_speed).abs() < 1.0e-6
        );
    }

    #[test]
    fn moving_flag_transitions_only_on_edges() {
        let mut world = world();

        let started = world.tick(MovementIntent::new(0.0, 1.0));
        assert!(started.moving_changed);

        let held = world.tick(MovementIntent::new(0.0, 1.0));
        assert!(!held.moving_changed);

        let stopped = world.tick(MovementIntent::IDLE);
        assert!(stopped.moving_changed);
        assert!(!world.is_moving());

        let idle = world.tick(MovementIntent::IDLE);
        assert!(!idle.moving_changed);
    }

    #[test]
    fn installed_collidable_set_blocks_movement() {
        let mut world = world();
        // Unobstructed before installation.
        let before = world.tick(MovementIntent::new(1.0, 0.0));
        let moved_to = before.transform.position.x;
        assert!(moved_to > 0.0);

        // A wall right in front of the character.
        world.install_collidable(
            [Obstacle::new(
                ObstacleShape::Cuboid {
                    half_extents: na::Vector3::new(0.4, 1.0, 2.0),
                },
                Transform::at(na::Vector3::new(moved_to + 0.6, 0.85, 0.0)),
            )]
            .into_iter()
            .collect(),
        );

        let blocked = world.tick(MovementIntent::new(1.0, 0.0));
        assert!((blocked.transform.position.x - moved_to).abs() < 1.0e-6);
    }

    #[test]
    fn walking_into_range_activates_and_interacts() {
        let mut world = world();
        world.add_target(ProximityTarget::new(
            11,
            TargetKind::Portal,
            na::Point3::new(3.0, 0.0, 0.0),
        ));

        // Nothing is active until the first tick recomputes proximity.
        assert!(world.interact().is_none());
        let output = world.tick(MovementIntent::new(1.0, 0.0));

        assert_eq!(output.proximity_events.len(), 1);
        let activation = world.interact().expect("portal active");
        assert_eq!(activation.id, 11);
        assert_eq!(activation.kind, TargetKind::Portal);
    }
}
