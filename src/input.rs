//! Held-key movement input.
//!
//! The external input layer forwards press/release transitions for the four
//! movement keys; this module folds them into a per-tick [`MovementIntent`].
//! Opposing keys cancel to the zero intent, and the intent carries direction
//! only; scaling to the per-tick speed happens in the locomotion step.

use crate::constants::MIN_INTENT_SQ;

/// The four movement keys the core understands.
///
/// Mapping from physical keys (WASD, arrows) is left to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKey {
    Forward,
    Backward,
    Left,
    Right,
}

/// Unit-less planar movement request for one tick.
///
/// Convention: +x is right, forward is -z. A zero vector means no movement
/// is requested this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MovementIntent {
    pub x: f32,
    pub z: f32,
}

impl MovementIntent {
    /// The zero intent: no movement requested.
    pub const IDLE: Self = Self { x: 0.0, z: 0.0 };

    #[inline]
    pub fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }

    /// True when no movement is requested.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.x * self.x + self.z * self.z <= MIN_INTENT_SQ
    }

    /// Unit direction of the intent, or `None` when idle.
    #[inline]
    pub fn direction(&self) -> Option<(f32, f32)> {
        let len_sq = self.x * self.x + self.z * self.z;
        if len_sq <= MIN_INTENT_SQ {
            return None;
        }
        let len = len_sq.sqrt();
        Some((self.x / len, self.z / len))
    }
}

/// Held state of the four movement keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press (`true`) or release (`false`) transition for `key`.
    pub fn set_key(&mut self, key: MoveKey, pressed: bool) {
        match key {
            MoveKey::Forward => self.forward = pressed,
            MoveKey::Backward => self.backward = pressed,
            MoveKey::Left => self.left = pressed,
            MoveKey::Right => self.right = pressed,
        }
    }

    /// Release every held key. Call on focus loss, when key-up events can
    /// no longer be trusted to arrive.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when any movement key is held.
    #[inline]
    pub fn any_held(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Fold the held keys into this tick's movement intent.
    pub fn intent(&self) -> MovementIntent {
        MovementIntent {
            x: (self.right as i32 - self.left as i32) as f32,
            z: (self.backward as i32 - self.forward as i32) as f32,
        }
    }
}
