/// Default horizontal travel per tick in meters.
///
/// The simulation advances one fixed step per rendered frame; speeds are
/// expressed per tick rather than per second.
pub const DEFAULT_MOVE_SPEED: f32 = 0.06;

/// Default horizontal footprint extent of the character in meters.
pub const DEFAULT_CHARACTER_SIZE: f32 = 0.5;

/// Default full vertical extent of the character in meters.
pub const DEFAULT_CHARACTER_HEIGHT: f32 = 1.7;

/// Default minimum vertical approach rate on climbable surfaces,
/// meters per tick.
pub const DEFAULT_CLIMB_SPEED: f32 = 0.15;

/// Default fraction of the remaining angular difference applied to the
/// facing angle each tick. Produces a damped turn with no overshoot.
pub const DEFAULT_TURN_FRACTION: f32 = 0.15;

/// Default interaction radius for proximity targets, in meters.
/// Distances are measured in the horizontal plane only.
pub const DEFAULT_PROXIMITY_RADIUS: f32 = 3.0;

/// Minimum squared planar intent magnitude to consider movement requested.
pub const MIN_INTENT_SQ: f32 = 1.0e-12;

/// Minimum angular difference worth turning through (radians).
pub const YAW_EPS: f32 = 1.0e-6;
