use std::f32::consts::{PI, TAU};

use crate::collision::types::Point3;
use crate::constants::YAW_EPS;

/// Wrap an angle into `[-PI, PI]`.
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped > PI { wrapped - TAU } else { wrapped }
}

/// Facing angle for a planar movement vector, or `None` when the motion is
/// too small to define one. The angle is measured as `atan2(x, z)`.
#[inline]
pub fn yaw_from_move(move_x: f32, move_z: f32) -> Option<f32> {
    if move_x * move_x + move_z * move_z > YAW_EPS * YAW_EPS {
        return Some(move_x.atan2(move_z));
    }

    None
}

/// Advance `current` toward `target` by `fraction` of the shortest wrapped
/// angular difference. The result never passes the target.
#[inline]
pub fn approach_angle(current: f32, target: f32, fraction: f32) -> f32 {
    let difference = wrap_angle(target - current);
    if difference.abs() <= YAW_EPS {
        return wrap_angle(target);
    }
    wrap_angle(current + difference * fraction.clamp(0.0, 1.0))
}

/// Planar (XZ) distance squared between two world positions (meters^2).
#[inline]
pub fn planar_distance_sq(a: &Point3, b: &Point3) -> f32 {
    let x = b.x - a.x;
    let z = b.z - a.z;
    x * x + z * z
}
