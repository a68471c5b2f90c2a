//! Player state and per-frame input command.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// World up. Fixed; the camera never rolls.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Movement keys held this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveKeys(pub u8);

impl MoveKeys {
    pub const FORWARD: u8 = 1 << 0;
    pub const BACKWARD: u8 = 1 << 1;
    pub const LEFT: u8 = 1 << 2;
    pub const RIGHT: u8 = 1 << 3;

    #[inline]
    pub fn held(self, key: u8) -> bool {
        (self.0 & key) != 0
    }

    #[inline]
    pub fn press(&mut self, key: u8) {
        self.0 |= key;
    }

    #[inline]
    pub fn release(&mut self, key: u8) {
        self.0 &= !key;
    }

    #[inline]
    pub fn any(self) -> bool {
        self.0 != 0
    }
}

/// Input for a single frame: held keys plus raw mouse motion in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerCommand {
    pub keys: MoveKeys,

    /// Mouse delta this frame, `(x, y)` pixels. Positive y is downward.
    pub look_delta: Vec2,
}

impl PlayerCommand {
    pub fn with_keys(keys: u8) -> Self {
        Self {
            keys: MoveKeys(keys),
            look_delta: Vec2::ZERO,
        }
    }

    /// Same command with a mouse delta attached.
    pub fn looking(mut self, dx: f32, dy: f32) -> Self {
        self.look_delta = Vec2::new(dx, dy);
        self
    }
}

/// Unit view direction from yaw and pitch in degrees.
///
/// Yaw 0 looks along +X, yaw 90 along +Z; positive pitch looks up.
pub fn look_direction(yaw_degrees: f32, pitch_degrees: f32) -> Vec3 {
    let (sin_yaw, cos_yaw) = yaw_degrees.to_radians().sin_cos();
    let (sin_pitch, cos_pitch) = pitch_degrees.to_radians().sin_cos();
    Vec3::new(cos_yaw * cos_pitch, sin_pitch, sin_yaw * cos_pitch).normalize_or_zero()
}

/// Dynamic player state. Owned by the movement controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Eye position. Only X and Z are integrated; Y is eye height plus bob.
    pub position: Vec3,

    /// Planar velocity: `x` is world X, `y` is world Z.
    pub velocity: Vec2,

    /// Degrees, wrapped to `[-180, 180)`.
    pub yaw: f32,

    /// Degrees, clamped to the configured pitch limit.
    pub pitch: f32,

    /// View direction, rebuilt from `yaw`/`pitch` every frame.
    pub front: Vec3,

    /// Head-bob phase (radians). Zero whenever the player is idle.
    pub walk_phase: f32,
}

impl PlayerState {
    pub fn new(position: Vec3, yaw: f32) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            yaw,
            pitch: 0.0,
            front: look_direction(yaw, 0.0),
            walk_phase: 0.0,
        }
    }

    /// Planar speed.
    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Horizontal `(forward, right)` basis derived from the view direction.
    ///
    /// Both vectors have zero Y. They are zero if the view is degenerate,
    /// which the pitch clamp prevents in practice.
    pub fn planar_basis(&self) -> (Vec3, Vec3) {
        let right = self.front.cross(WORLD_UP).normalize_or_zero();
        let forward = WORLD_UP.cross(right).normalize_or_zero();
        (forward, right)
    }
}
