/*!
Downward-sampling height resolution over climbable surfaces.

Five downward rays probe the character footprint: the center first, then the
four corners. The first sample that finds an acceptable tread decides the
result; the fixed order is the tie-break when several surfaces lie under the
footprint. The character base then approaches the tread height at a bounded
per-tick rate, so steps are climbed smoothly instead of snapping.
*/

use super::scene::SpatialQuery;
use super::settings::{
    STAIR_PROBE_LIFT, STAIR_PROBE_RANGE_SCALE, STAIR_RATE_SCALE, STAIR_REJECT_SCALE,
    STAIR_SAMPLE_SPREAD,
};
use super::types::{CharacterSpec, Point3, Vec3};

/// Footprint sample offsets as (x, z) signs, scaled by the sample spread.
/// The center is probed first; its hit wins over any corner hit.
const SAMPLE_OFFSETS: [[f32; 2]; 5] = [
    [0.0, 0.0],
    [1.0, 1.0],
    [1.0, -1.0],
    [-1.0, 1.0],
    [-1.0, -1.0],
];

/// Outcome of one height resolution.
#[derive(Clone, Copy, Debug)]
pub struct StairResult {
    /// Whether an acceptable climbable surface was found under the footprint.
    pub on_stair: bool,
    /// Volume-center height to commit this tick. Unchanged from
    /// `current_center_y` when `on_stair` is false.
    pub height: f32,
}

/// Resolve the character's vertical position over the climbable set.
///
/// `position` is the candidate position being probed; `current_center_y` is
/// the committed center height from which the base is measured, so the climb
/// rate applies to the character's actual vertical travel this tick.
pub fn resolve_height<Q: SpatialQuery>(
    climbable: &Q,
    spec: &CharacterSpec,
    position: Point3,
    current_center_y: f32,
) -> StairResult {
    let base = spec.base_of(current_center_y);
    let origin_y = position.y + STAIR_PROBE_LIFT * spec.height;
    let probe_range = STAIR_PROBE_RANGE_SCALE * spec.height;
    let spread = STAIR_SAMPLE_SPREAD * spec.size;
    let down = Vec3::new(0.0, -1.0, 0.0);

    for [sx, sz] in SAMPLE_OFFSETS {
        let origin = Point3::new(position.x + sx * spread, origin_y, position.z + sz * spread);
        let Some(hit) = climbable.cast_ray(origin, down, probe_range) else {
            continue;
        };

        let difference = hit.point.y - base;
        if difference.abs() > STAIR_REJECT_SCALE * spec.height {
            // Surface too far above or below to be a tread; try the next sample.
            continue;
        }

        let rate = spec.climb_speed.max(difference.abs() * STAIR_RATE_SCALE);
        let step = difference.clamp(-rate, rate);
        return StairResult {
            on_stair: true,
            height: base + step + spec.half_height(),
        };
    }

    StairResult {
        on_stair: false,
        height: current_center_y,
    }
}
