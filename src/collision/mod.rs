/*!
Collision root module.

This module re-exports submodules that implement the geometric side of the
locomotion core, using parry3d for ray and bounding-volume queries. The code
is split for clarity:

- types:    shared data types (Transform, Obstacle, CharacterSpec, etc.)
- settings: blocking and stair-resolution tolerances
- scene:    the SpatialQuery seam and the shipped ObstacleSet provider
- walls:    horizontal blocking checks (probe rays + volume overlap)
- stairs:   downward-sampling height resolution over climbable surfaces
*/

pub mod scene;
pub mod settings;
pub mod stairs;
pub mod types;
pub mod walls;

// Re-export commonly used types and functions.
pub use scene::{ObstacleSet, SpatialQuery};
pub use stairs::{StairResult, resolve_height};
pub use types::{CharacterSpec, Obstacle, ObstacleShape, Point3, Quat, RayHit, Transform, Vec3};
pub use walls::is_blocked;
