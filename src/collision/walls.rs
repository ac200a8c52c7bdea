/*!
Horizontal blocking checks for a proposed character move.

Two independent gates decide whether a candidate position is blocked:

- Probe rays: short rays cast from three heights along the character's
  vertical extent, fanned through eight fixed horizontal directions plus the
  instantaneous movement direction. A nearest hit inside the blocking radius
  means contact.
- Volume overlap: the character's bounding volume at the candidate position
  tested against the bounding volume of every collidable obstacle near it.

Each gate catches contacts the other can miss. Long walls whose volume
center sits outside the coarse cull range are still seen by the rays; thin
obstacles sitting between ray directions are still seen by the overlap test.
Both gates always run; either one blocks the move.
*/

use std::f32::consts::FRAC_1_SQRT_2;

use parry3d::bounding_volume::Aabb;

use super::scene::SpatialQuery;
use super::settings::{COLLISION_RAY_HEIGHT_FRACTIONS, DIST_EPS, OVERLAP_CULL_MARGIN};
use super::types::{CharacterSpec, Point3, Vec3};

/// The eight fixed horizontal probe directions: the four axes and the four
/// unit-normalized diagonals, as (x, z) pairs.
const PROBE_DIRECTIONS: [[f32; 2]; 8] = [
    [1.0, 0.0],
    [-1.0, 0.0],
    [0.0, 1.0],
    [0.0, -1.0],
    [FRAC_1_SQRT_2, FRAC_1_SQRT_2],
    [FRAC_1_SQRT_2, -FRAC_1_SQRT_2],
    [-FRAC_1_SQRT_2, FRAC_1_SQRT_2],
    [-FRAC_1_SQRT_2, -FRAC_1_SQRT_2],
];

/// Decide whether moving the character from `old_pos` to `new_pos` is
/// blocked by the collidable set.
///
/// Both gates are evaluated unconditionally; either one blocks. A move is
/// permitted only when no probe ray reports contact and no obstacle volume
/// overlaps the character volume.
pub fn is_blocked<Q: SpatialQuery>(
    collidable: &Q,
    spec: &CharacterSpec,
    old_pos: Point3,
    new_pos: Point3,
) -> bool {
    let ray_contact = probe_rays_contact(collidable, spec, old_pos, new_pos);
    let volume_contact = volume_overlap_contact(collidable, spec, new_pos);
    ray_contact || volume_contact
}

/// Ray gate: true when any probe ray from the candidate position reports a
/// nearest hit strictly inside the blocking radius.
fn probe_rays_contact<Q: SpatialQuery>(
    collidable: &Q,
    spec: &CharacterSpec,
    old_pos: Point3,
    new_pos: Point3,
) -> bool {
    let radius = spec.collision_radius();
    let range = spec.collision_ray_range();
    let base = spec.base_of(new_pos.y);

    let directions = probe_directions(old_pos, new_pos);

    for fraction in COLLISION_RAY_HEIGHT_FRACTIONS {
        let origin = Point3::new(new_pos.x, base + fraction * spec.height, new_pos.z);
        for dir in &directions {
            if let Some(hit) = collidable.cast_ray(origin, *dir, range) {
                if hit.distance < radius {
                    return true;
                }
            }
        }
    }
    false
}

/// The eight fixed directions plus the instantaneous movement direction,
/// unless the movement direction duplicates a fixed entry.
fn probe_directions(old_pos: Point3, new_pos: Point3) -> Vec<Vec3> {
    let mut directions: Vec<Vec3> = PROBE_DIRECTIONS
        .iter()
        .map(|[x, z]| Vec3::new(*x, 0.0, *z))
        .collect();

    let planar = Vec3::new(new_pos.x - old_pos.x, 0.0, new_pos.z - old_pos.z);
    if let Some(move_dir) = planar.try_normalize(DIST_EPS) {
        let duplicate = directions
            .iter()
            .any(|d| (d - move_dir).norm_squared() <= DIST_EPS);
        if !duplicate {
            directions.push(move_dir);
        }
    }
    directions
}

/// Overlap gate: true when the character volume at `new_pos` overlaps any
/// collidable obstacle volume within the coarse cull range.
fn volume_overlap_contact<Q: SpatialQuery>(
    collidable: &Q,
    spec: &CharacterSpec,
    new_pos: Point3,
) -> bool {
    let character = character_volume(spec, new_pos);
    let cull_range = spec.height + OVERLAP_CULL_MARGIN;

    collidable
        .volumes_near(new_pos, cull_range)
        .iter()
        .any(|volume| aabb_intersects(&character, volume))
}

/// The character's bounding volume at `center`: the blocking radius
/// horizontally and the half height vertically.
fn character_volume(spec: &CharacterSpec, center: Point3) -> Aabb {
    let radius = spec.collision_radius();
    let half_height = spec.half_height();
    Aabb::new(
        Point3::new(center.x - radius, center.y - half_height, center.z - radius),
        Point3::new(center.x + radius, center.y + half_height, center.z + radius),
    )
}

/// Test two AABBs for intersection.
fn aabb_intersects(a: &Aabb, b: &Aabb) -> bool {
    !(a.maxs.x < b.mins.x
        || a.mins.x > b.maxs.x
        || a.maxs.y < b.mins.y
        || a.mins.y > b.maxs.y
        || a.maxs.z < b.mins.z
        || a.mins.z > b.maxs.z)
}
