//! Renderer-facing camera pose.

use glam::{Mat4, Vec2, Vec3};
use maze_map::{world_to_map_space, world_to_tile, TilePos};
use serde::{Deserialize, Serialize};

use crate::state::WORLD_UP;

/// Camera pose produced once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    /// Eye position in world space.
    pub position: Vec3,

    /// Unit view direction.
    pub forward: Vec3,

    /// World up.
    pub up: Vec3,

    /// Degrees.
    pub yaw: f32,

    /// Degrees.
    pub pitch: f32,

    /// A direction key was held this frame.
    pub moving: bool,
}

impl CameraPose {
    pub fn new(position: Vec3, yaw: f32, pitch: f32, forward: Vec3, moving: bool) -> Self {
        Self {
            position,
            forward,
            up: WORLD_UP,
            yaw,
            pitch,
            moving,
        }
    }

    /// Right-handed look-at view matrix.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward, self.up)
    }

    /// Tile containing the eye.
    pub fn tile(&self) -> TilePos {
        TilePos::new(world_to_tile(self.position.x), world_to_tile(self.position.z))
    }

    /// Eye position in continuous minimap space (tile `i` spans `[i, i+1)`).
    pub fn map_position(&self) -> Vec2 {
        Vec2::new(
            world_to_map_space(self.position.x),
            world_to_map_space(self.position.z),
        )
    }

    /// Planar heading `(cos yaw, sin yaw)` for a top-down indicator.
    pub fn heading(&self) -> Vec2 {
        let (sin_yaw, cos_yaw) = self.yaw.to_radians().sin_cos();
        Vec2::new(cos_yaw, sin_yaw)
    }
}
