//! Per-tick locomotion step.
//!
//! Integrates the movement intent into a candidate position, runs stair and
//! blocking resolution, and commits the resulting transform. When the
//! requested move is blocked, the step falls back to the two single-axis
//! slide vectors before giving up and standing still, which lets the
//! character skim along walls instead of sticking to them.

use crate::collision::settings::DIST_EPS;
use crate::collision::types::{CharacterSpec, Point3};
use crate::collision::{SpatialQuery, is_blocked, resolve_height};
use crate::input::MovementIntent;
use crate::utils::{approach_angle, yaw_from_move};

/// Axis-aligned XZ rectangle the character may not leave.
#[derive(Clone, Copy, Debug)]
pub struct Bounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl Bounds {
    #[inline]
    pub fn new(min_x: f32, max_x: f32, min_z: f32, max_z: f32) -> Self {
        Self {
            min_x,
            max_x,
            min_z,
            max_z,
        }
    }

    /// Clamp a planar position into the rectangle.
    #[inline]
    pub fn clamp(&self, x: f32, z: f32) -> (f32, f32) {
        (
            x.clamp(self.min_x, self.max_x),
            z.clamp(self.min_z, self.max_z),
        )
    }

    #[inline]
    pub fn contains(&self, x: f32, z: f32) -> bool {
        x >= self.min_x && x <= self.max_x && z >= self.min_z && z <= self.max_z
    }
}

/// The character's mutable transform: volume-center position and facing.
///
/// Owned by the simulation state and mutated once per tick by
/// [`step_character`].
#[derive(Clone, Copy, Debug)]
pub struct CharacterBody {
    pub position: Point3,
    pub yaw: f32,
}

impl CharacterBody {
    #[inline]
    pub fn new(position: Point3, yaw: f32) -> Self {
        Self { position, yaw }
    }
}

/// Committed transform for one tick.
#[derive(Clone, Copy, Debug)]
pub struct TransformUpdate {
    pub position: Point3,
    pub yaw: f32,
    /// True whenever movement was requested this tick, even if every
    /// candidate was blocked. External layers key footstep audio on the
    /// edges of this flag.
    pub moving: bool,
}

/// Advance the character by one tick of movement.
///
/// Order of resolution for the requested move and each slide fallback:
/// clamp into bounds, stair height, blocking check. The first candidate
/// that clears the blocking check commits; when none does, the character
/// stays exactly where it was.
pub fn step_character<C: SpatialQuery, S: SpatialQuery>(
    collidable: &C,
    climbable: &S,
    spec: &CharacterSpec,
    bounds: &Bounds,
    body: &mut CharacterBody,
    intent: MovementIntent,
) -> TransformUpdate {
    let Some((dir_x, dir_z)) = intent.direction() else {
        return TransformUpdate {
            position: body.position,
            yaw: body.yaw,
            moving: false,
        };
    };

    let move_x = dir_x * spec.move_speed;
    let move_z = dir_z * spec.move_speed;
    let old = body.position;

    let committed = try_step(collidable, climbable, spec, bounds, old, move_x, move_z)
        .or_else(|| {
            // Pure-X slide, re-normalized to full speed.
            (move_x.abs() > DIST_EPS)
                .then(|| {
                    try_step(
                        collidable,
                        climbable,
                        spec,
                        bounds,
                        old,
                        move_x.signum() * spec.move_speed,
                        0.0,
                    )
                })
                .flatten()
        })
        .or_else(|| {
            // Pure-Z slide.
            (move_z.abs() > DIST_EPS)
                .then(|| {
                    try_step(
                        collidable,
                        climbable,
                        spec,
                        bounds,
                        old,
                        0.0,
                        move_z.signum() * spec.move_speed,
                    )
                })
                .flatten()
        });

    body.position = committed.unwrap_or(old);

    // Facing follows the intended motion, not the slide direction, so the
    // character keeps looking where the player is steering while skimming
    // along a wall.
    if let Some(target) = yaw_from_move(move_x, move_z) {
        body.yaw = approach_angle(body.yaw, target, spec.turn_fraction);
    }

    TransformUpdate {
        position: body.position,
        yaw: body.yaw,
        moving: true,
    }
}

/// Resolve one candidate translation: clamp, stairs, blocking.
fn try_step<C: SpatialQuery, S: SpatialQuery>(
    collidable: &C,
    climbable: &S,
    spec: &CharacterSpec,
    bounds: &Bounds,
    old: Point3,
    step_x: f32,
    step_z: f32,
) -> Option<Point3> {
    let (x, z) = bounds.clamp(old.x + step_x, old.z + step_z);
    let mut candidate = Point3::new(x, old.y, z);

    let stair = resolve_height(climbable, spec, candidate, old.y);
    if stair.on_stair {
        candidate.y = stair.height;
    }

    if is_blocked(collidable, spec, old, candidate) {
        return None;
    }
    Some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::scene::ObstacleSet;
    use crate::collision::types::{Obstacle, ObstacleShape, Transform};
    use nalgebra as na;
    use std::f32::consts::FRAC_PI_2;

    fn spec() -> CharacterSpec {
        CharacterSpec {
            size: 0.5,
            height: 1.7,
            move_speed: 0.06,
            climb_speed: 0.15,
            turn_fraction: 0.15,
        }
    }

    fn wide_bounds() -> Bounds {
        Bounds::new(-100.0, 100.0, -100.0, 100.0)
    }

    fn cuboid(center: [f32; 3], half_extents: [f32; 3]) -> Obstacle {
        Obstacle::new(
            ObstacleShape::Cuboid {
                half_extents: na::Vector3::new(half_extents[0], half_extents[1], half_extents[2]),
            },
            Transform::at(na::Vector3::new(center[0], center[1], center[2])),
        )
    }

    #[test]
    fn idle_intent_changes_nothing() {
        let empty = ObstacleSet::new();
        let mut body = CharacterBody::new(na::Point3::new(1.0, 0.85, -2.0), 0.4);

        for _ in 0..10 {
            let update = step_character(
                &empty,
                &empty,
                &spec(),
                &wide_bounds(),
                &mut body,
                MovementIntent::IDLE,
            );
            assert!(!update.moving);
        }

        assert!((body.position.x - 1.0).abs() < 1.0e-6);
        assert!((body.position.z - (-2.0)).abs() < 1.0e-6);
        assert!((body.yaw - 0.4).abs() < 1.0e-6);
    }

    #[test]
    fn committed_step_has_exact_speed() {
        let empty = ObstacleSet::new();
        let spec = spec();
        let mut body = CharacterBody::new(na::Point3::new(0.0, 0.85, 0.0), 0.0);

        let update = step_character(
            &empty,
            &empty,
            &spec,
            &wide_bounds(),
            &mut body,
            MovementIntent::new(3.0, -4.0),
        );

        assert!(update.moving);
        let dx = update.position.x;
        let dz = update.position.z;
        let travelled = (dx * dx + dz * dz).sqrt();
        assert!((travelled - spec.move_speed).abs() < 1.0e-6);
    }

    #[test]
    fn position_stays_inside_bounds() {
        let empty = ObstacleSet::new();
        let bounds = Bounds::new(-0.1, 0.1, -0.1, 0.1);
        let mut body = CharacterBody::new(na::Point3::new(0.0, 0.85, 0.0), 0.0);

        for _ in 0..20 {
            step_character(
                &empty,
                &empty,
                &spec(),
                &bounds,
                &mut body,
                MovementIntent::new(1.0, 1.0),
            );
            assert!(bounds.contains(body.position.x, body.position.z));
        }

        assert!((body.position.x - 0.1).abs() < 1.0e-6);
        assert!((body.position.z - 0.1).abs() < 1.0e-6);
    }

    #[test]
    fn blocked_diagonal_slides_along_the_free_axis() {
        // Wall ahead in +x; the diagonal candidate comes within the blocking
        // radius, and so does the pure-X slide, but the pure-Z slide stays
        // clear. The committed move is the full-speed Z step.
        let set: ObstacleSet = [cuboid([0.9, 0.0, 0.0], [0.4, 0.4, 0.4])]
            .into_iter()
            .collect();
        let spec = spec();
        let mut body = CharacterBody::new(na::Point3::new(0.18, 0.0, 0.0), 0.0);

        // Climbable set is empty; y must not change.
        let update = step_character(
            &set,
            &ObstacleSet::new(),
            &spec,
            &wide_bounds(),
            &mut body,
            MovementIntent::new(1.0, 1.0),
        );

        assert!(update.moving);
        assert!((update.position.x - 0.18).abs() < 1.0e-6);
        assert!((update.position.z - spec.move_speed).abs() < 1.0e-6);
        assert!((update.position.y - 0.0).abs() < 1.0e-6);
    }

    #[test]
    fn fully_blocked_move_stands_still() {
        // The wall face sits 0.1 m ahead, inside the blocking radius from
        // every candidate, and the intent has no z component to slide on.
        let set: ObstacleSet = [cuboid([0.5, 0.0, 0.0], [0.4, 0.4, 0.4])]
            .into_iter()
            .collect();
        let mut body = CharacterBody::new(na::Point3::new(0.0, 0.0, 0.0), 0.0);

        let update = step_character(
            &set,
            &ObstacleSet::new(),
            &spec(),
            &wide_bounds(),
            &mut body,
            MovementIntent::new(1.0, 0.0),
        );

        // Still reported as moving: movement was requested.
        assert!(update.moving);
        assert!(update.position.x.abs() < 1.0e-6);
        assert!(update.position.z.abs() < 1.0e-6);
    }

    #[test]
    fn facing_turns_by_a_fraction_per_tick() {
        let empty = ObstacleSet::new();
        let spec = spec();
        let mut body = CharacterBody::new(na::Point3::new(0.0, 0.85, 0.0), 0.0);

        let update = step_character(
            &empty,
            &empty,
            &spec,
            &wide_bounds(),
            &mut body,
            MovementIntent::new(1.0, 0.0),
        );

        // Target facing for +x movement is FRAC_PI_2; one tick covers 15%
        // of the difference.
        let expected = 0.15 * FRAC_PI_2;
        assert!((update.yaw - expected).abs() < 1.0e-5);

        // Repeated ticks approach the target without overshooting.
        for _ in 0..100 {
            step_character(
                &empty,
                &empty,
                &spec,
                &wide_bounds(),
                &mut body,
                MovementIntent::new(1.0, 0.0),
            );
            assert!(body.yaw <= FRAC_PI_2 + 1.0e-5);
        }
        assert!((body.yaw - FRAC_PI_2).abs() < 1.0e-3);
    }

    #[test]
    fn stair_height_feeds_into_the_committed_move() {
        // A broad 0.3 m platform under the whole area; walking onto it
        // raises the center by the climb rate on the first tick.
        let climbable: ObstacleSet = [cuboid([0.0, 0.15, 0.0], [3.0, 0.15, 3.0])]
            .into_iter()
            .collect();
        let spec = spec();
        let mut body = CharacterBody::new(na::Point3::new(0.0, spec.half_height(), 0.0), 0.0);

        let update = step_character(
            &ObstacleSet::new(),
            &climbable,
            &spec,
            &wide_bounds(),
            &mut body,
            MovementIntent::new(1.0, 0.0),
        );

        // Base was 0.0, tread top is 0.3: one tick climbs 0.15.
        assert!((spec.base_of(update.position.y) - 0.15).abs() < 1.0e-5);
    }
}
