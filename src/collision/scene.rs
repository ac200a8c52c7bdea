/*!
Spatial queries over scene obstacles.

`SpatialQuery` is the seam between the locomotion core and whatever layer
owns the scene geometry. The core only ever asks two questions: "what is the
nearest surface along this ray" and "which obstacle volumes sit near this
point". `ObstacleSet` is the provider shipped with the crate, a flat list of
posed parry3d primitives with cached world-space bounding boxes. A host that
already has its own physics world can implement the trait over it instead.
*/

use parry3d::bounding_volume::Aabb;
use parry3d::query::{Ray, RayCast};
use parry3d::shape as pshape;

use super::types::{Obstacle, ObstacleShape, Point3, RayHit, Vec3};

/// Read-only geometric queries against one obstacle set.
///
/// Queries are best-effort: a provider that cannot answer (unsupported
/// shape, stale handle) returns `None` or an empty list rather than failing.
/// Implementations must reflect obstacle poses as of the start of the
/// current tick.
pub trait SpatialQuery {
    /// Nearest intersection along `dir` from `origin`, within `max_dist`.
    ///
    /// `dir` must be unit length so the returned distance is in meters.
    fn cast_ray(&self, origin: Point3, dir: Vec3, max_dist: f32) -> Option<RayHit>;

    /// World-space bounding volumes of obstacles whose volume center lies
    /// within `range` of `center`.
    fn volumes_near(&self, center: Point3, range: f32) -> Vec<Aabb>;
}

/// A flat set of posed obstacles with cached world-space bounding boxes.
///
/// Scenes here are small (dozens of obstacles), so queries scan the whole
/// list; the cached boxes keep the overlap gate cheap.
#[derive(Default)]
pub struct ObstacleSet {
    obstacles: Vec<Obstacle>,
    aabbs: Vec<Aabb>,
}

impl ObstacleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, obstacle: Obstacle) {
        self.aabbs.push(world_aabb(&obstacle));
        self.obstacles.push(obstacle);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    #[inline]
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }
}

impl FromIterator<Obstacle> for ObstacleSet {
    fn from_iter<I: IntoIterator<Item = Obstacle>>(iter: I) -> Self {
        let mut set = Self::new();
        for obstacle in iter {
            set.push(obstacle);
        }
        set
    }
}

impl SpatialQuery for ObstacleSet {
    fn cast_ray(&self, origin: Point3, dir: Vec3, max_dist: f32) -> Option<RayHit> {
        let ray = Ray::new(origin, dir);

        let mut best: Option<RayHit> = None;
        for obstacle in &self.obstacles {
            if let Some(hit) = cast_ray_against_obstacle(obstacle, &ray, max_dist) {
                if best.as_ref().map_or(true, |b| hit.distance < b.distance) {
                    best = Some(hit);
                }
            }
        }
        best
    }

    fn volumes_near(&self, center: Point3, range: f32) -> Vec<Aabb> {
        let range_sq = range * range;
        self.aabbs
            .iter()
            .filter(|aabb| (aabb.center() - center).norm_squared() <= range_sq)
            .copied()
            .collect()
    }
}

/// Compute the world-space AABB of a posed obstacle.
fn world_aabb(obstacle: &Obstacle) -> Aabb {
    let iso = obstacle.transform.iso();
    match obstacle.shape {
        ObstacleShape::Cuboid { half_extents } => pshape::Cuboid::new(half_extents).aabb(&iso),
        ObstacleShape::Sphere { radius } => pshape::Ball::new(radius).aabb(&iso),
        ObstacleShape::Capsule {
            radius,
            half_height,
        } => pshape::Capsule::new_y(half_height, radius).aabb(&iso),
    }
}

/// Cast `ray` against a single posed obstacle and return the nearest hit.
///
/// Casts are solid: an origin already inside the shape reports a hit at
/// distance zero, which the blocking checks treat as contact.
fn cast_ray_against_obstacle(obstacle: &Obstacle, ray: &Ray, max_dist: f32) -> Option<RayHit> {
    let iso = obstacle.transform.iso();
    let hit = match obstacle.shape {
        ObstacleShape::Cuboid { half_extents } => {
            pshape::Cuboid::new(half_extents).cast_ray_and_get_normal(&iso, ray, max_dist, true)
        }
        ObstacleShape::Sphere { radius } => {
            pshape::Ball::new(radius).cast_ray_and_get_normal(&iso, ray, max_dist, true)
        }
        ObstacleShape::Capsule {
            radius,
            half_height,
        } => pshape::Capsule::new_y(half_height, radius)
            .cast_ray_and_get_normal(&iso, ray, max_dist, true),
    }?;

    Some(RayHit {
        distance: hit.time_of_impact,
        point: ray.origin + ray.dir * hit.time_of_impact,
        normal: hit.normal,
    })
}
