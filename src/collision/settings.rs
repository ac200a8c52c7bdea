/*!
Collision and stair-resolution tolerances.

These constants centralize the geometric parameters used by the horizontal
blocking checks and the downward stair sampling. Keeping them together makes
tuning easier and keeps tick behavior deterministic across platforms.

Notes
- Distances are in meters; the simulation runs one fixed step per frame.
- Scale factors multiply the character dimensions from `CharacterSpec`.
*/

/// Horizontal blocking radius as a fraction of the character size.
pub const COLLISION_RADIUS_SCALE: f32 = 0.6;

/// Probe-ray length as a fraction of the blocking radius.
/// Slightly longer than the radius so grazing contacts are still observed.
pub const COLLISION_RAY_RANGE_SCALE: f32 = 1.2;

/// Heights of the horizontal probe rays, as fractions of the character
/// height measured up from the base. Three bands cover feet, torso and head.
pub const COLLISION_RAY_HEIGHT_FRACTIONS: [f32; 3] = [0.2, 0.5, 0.8];

/// Extra reach, in meters, added to the character height when gathering
/// nearby obstacle volumes for the overlap gate.
pub const OVERLAP_CULL_MARGIN: f32 = 2.0;

/// Horizontal spread of the stair sample corners as a fraction of the
/// character size. Samples sit at the footprint center and the four corners.
pub const STAIR_SAMPLE_SPREAD: f32 = 0.3;

/// Lift applied to the stair sample origins above the probed position, as a
/// fraction of the character height. Keeps the downward rays from starting
/// inside the tread being climbed.
pub const STAIR_PROBE_LIFT: f32 = 0.1;

/// Downward probe length as a multiple of the character height.
pub const STAIR_PROBE_RANGE_SCALE: f32 = 5.0;

/// Height differences larger than this multiple of the character height are
/// not climbable and the sample is skipped.
pub const STAIR_REJECT_SCALE: f32 = 2.0;

/// Steeper height differences climb faster: the per-tick approach rate is
/// `max(climb_speed, |difference| * STAIR_RATE_SCALE)`.
pub const STAIR_RATE_SCALE: f32 = 0.3;

/// Practical small distance for comparisons (meters).
/// Use for dot-product guards, equality checks in world space, etc.
pub const DIST_EPS: f32 = 1.0e-6;
