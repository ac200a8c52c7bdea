/*!
Core collision types and math aliases shared by the collision submodules.

This module intentionally contains no algorithms. It defines the data types
exchanged between:
- the obstacle scene (shape storage, ray and volume queries)
- the horizontal blocking resolver
- the stair height resolver
- the higher-level locomotion step
*/

use nalgebra as na;

use crate::constants::{
    DEFAULT_CHARACTER_HEIGHT, DEFAULT_CHARACTER_SIZE, DEFAULT_CLIMB_SPEED, DEFAULT_MOVE_SPEED,
    DEFAULT_TURN_FRACTION,
};

use super::settings::{COLLISION_RADIUS_SCALE, COLLISION_RAY_RANGE_SCALE};

/// Common math aliases for clarity and consistency.
pub type Vec3 = na::Vector3<f32>;
pub type Point3 = na::Point3<f32>;
pub type Quat = na::UnitQuaternion<f32>;
pub type Iso = na::Isometry3<f32>;

/// A rigid transform (isometry) in world space.
#[derive(Clone, Copy, Debug)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl Transform {
    #[inline]
    pub fn new(translation: Vec3, rotation: Quat) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// A pose with no rotation, placed at `translation`.
    #[inline]
    pub fn at(translation: Vec3) -> Self {
        Self {
            translation,
            rotation: Quat::identity(),
        }
    }

    /// Convert to nalgebra `Isometry3` for use with parry3d queries.
    #[inline]
    pub fn iso(&self) -> Iso {
        Iso::from_parts(
            na::Translation3::new(self.translation.x, self.translation.y, self.translation.z),
            self.rotation,
        )
    }
}

/// Obstacle shapes supported by the scene.
///
/// Scene geometry is ingested by the surrounding asset layer and handed to the
/// core as posed primitives. The resolvers never look at these directly, they
/// only run ray and bounding-volume queries against the set that holds them.
#[derive(Clone, Copy, Debug)]
pub enum ObstacleShape {
    Cuboid {
        /// Local-space half-extents (hx, hy, hz).
        half_extents: Vec3,
    },
    Sphere {
        /// Radius in meters.
        radius: f32,
    },
    Capsule {
        /// Radius of the spherical caps and cylinder.
        radius: f32,
        /// Half of the cylinder length along the local +Y axis.
        half_height: f32,
    },
}

/// A posed obstacle in world space.
#[derive(Clone, Copy, Debug)]
pub struct Obstacle {
    pub shape: ObstacleShape,
    pub transform: Transform,
}

impl Obstacle {
    #[inline]
    pub fn new(shape: ObstacleShape, transform: Transform) -> Self {
        Self { shape, transform }
    }
}

/// Nearest intersection returned by a ray query.
#[derive(Clone, Copy, Debug)]
pub struct RayHit {
    /// Distance from the ray origin to the impact, in meters.
    pub distance: f32,
    /// World-space impact point.
    pub point: Point3,
    /// World-space surface normal at the impact.
    pub normal: Vec3,
}

/// Fixed character dimensions and motion tunables, set once at spawn.
///
/// `size` is the horizontal footprint extent and `height` the full vertical
/// extent of the character volume. The volume center sits at `height / 2`
/// above the character base. All remaining fields are per-tick rates; the
/// simulation advances one fixed step per rendered frame, so no delta time
/// appears anywhere.
#[derive(Clone, Copy, Debug)]
pub struct CharacterSpec {
    /// Horizontal footprint extent in meters.
    pub size: f32,
    /// Full vertical extent in meters.
    pub height: f32,
    /// Horizontal travel per tick in meters.
    pub move_speed: f32,
    /// Minimum vertical approach rate on climbable surfaces, meters per tick.
    pub climb_speed: f32,
    /// Fraction of the remaining angular difference applied to the facing
    /// angle each tick. Values in (0, 1]; 1.0 snaps instantly.
    pub turn_fraction: f32,
}

impl Default for CharacterSpec {
    fn default() -> Self {
        Self {
            size: DEFAULT_CHARACTER_SIZE,
            height: DEFAULT_CHARACTER_HEIGHT,
            move_speed: DEFAULT_MOVE_SPEED,
            climb_speed: DEFAULT_CLIMB_SPEED,
            turn_fraction: DEFAULT_TURN_FRACTION,
        }
    }
}

impl CharacterSpec {
    /// Half of the full vertical extent.
    #[inline]
    pub fn half_height(&self) -> f32 {
        self.height * 0.5
    }

    /// Radius used by the horizontal blocking checks.
    #[inline]
    pub fn collision_radius(&self) -> f32 {
        COLLISION_RADIUS_SCALE * self.size
    }

    /// Maximum length of the horizontal probe rays.
    #[inline]
    pub fn collision_ray_range(&self) -> f32 {
        COLLISION_RAY_RANGE_SCALE * self.collision_radius()
    }

    /// Vertical coordinate of the character base for a given volume center.
    #[inline]
    pub fn base_of(&self, center_y: f32) -> f32 {
        center_y - self.half_height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collision_radius_scales_with_size() {
        let spec = CharacterSpec {
            size: 1.0,
            ..CharacterSpec::default()
        };
        assert!((spec.collision_radius() - 0.6).abs() < 1.0e-6);
        assert!((spec.collision_ray_range() - 0.72).abs() < 1.0e-6);
    }

    #[test]
    fn base_is_half_height_below_center() {
        let spec = CharacterSpec {
            height: 1.8,
            ..CharacterSpec::default()
        };
        assert!((spec.base_of(2.0) - 1.1).abs() < 1.0e-6);
    }
}
