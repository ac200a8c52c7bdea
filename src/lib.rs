/*!
Locomotion, collision, and interaction core for a small explorable 3D scene.

The crate owns the simulation side of the scene: per-tick character
movement, multi-ray blocking checks with wall sliding, smoothed stair
climbing from downward ray sampling, and the single-active-interactable
bookkeeping around portals and signage. Rendering, audio, and UI stay in the
host; they feed key transitions in and react to the transforms and events
that come back out.

Entry points: build a [`World`], drive it with [`World::tick`] once per
frame, and install obstacle sets from [`collision`] when assets are ready.
*/

pub mod collision;
pub mod constants;
pub mod input;
pub mod movement;
pub mod proximity;
pub mod utils;
pub mod world;

pub use collision::{
    CharacterSpec, Obstacle, ObstacleSet, ObstacleShape, Point3, Quat, RayHit, SpatialQuery,
    StairResult, Transform, Vec3, is_blocked, resolve_height,
};
pub use input::{InputState, MoveKey, MovementIntent};
pub use movement::{Bounds, CharacterBody, TransformUpdate, step_character};
pub use proximity::{
    Activation, ProximityDispatcher, ProximityEvent, ProximityTarget, TargetId, TargetKind,
};
pub use world::{TickOutput, World};
