//! Player movement controller.
//!
//! Takes one [`PlayerCommand`] per frame together with the frame's elapsed
//! time, integrates the player against the tile grid and returns the camera
//! pose for rendering.

use glam::{Vec2, Vec3};
use maze_map::{tile_to_world, TileGrid, TilePos};

use crate::collision::sweep;
use crate::config::MovementConfig;
use crate::pose::CameraPose;
use crate::state::{look_direction, MoveKeys, PlayerCommand, PlayerState};

/// First-person movement controller.
///
/// # Example
///
/// ```ignore
/// let (grid, start) = maze_map::load("map.txt")?;
/// let mut controller = MovementController::spawn_at(MovementConfig::default(), start);
///
/// // Each frame:
/// let pose = controller.update(&command, &grid, delta_time);
/// ```
#[derive(Debug, Clone)]
pub struct MovementController {
    config: MovementConfig,
    state: PlayerState,
}

impl MovementController {
    /// Create a controller with the eye at `position`.
    pub fn new(config: MovementConfig, position: Vec3) -> Self {
        let state = PlayerState::new(position, config.initial_yaw);
        Self { config, state }
    }

    /// Create a controller standing in the centre of the `start` tile.
    pub fn spawn_at(config: MovementConfig, start: TilePos) -> Self {
        let position = Vec3::new(tile_to_world(start.x), config.eye_height, tile_to_world(start.y));
        log::debug!("spawning at tile ({}, {}) -> {position}", start.x, start.y);
        Self::new(config, position)
    }

    pub fn with_default_config(start: TilePos) -> Self {
        Self::spawn_at(MovementConfig::default(), start)
    }

    #[inline]
    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    #[inline]
    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    /// Direct access for teleports and tests.
    #[inline]
    pub fn state_mut(&mut self) -> &mut PlayerState {
        &mut self.state
    }

    /// Pose of the current state, as if no key were held.
    pub fn resting_pose(&self) -> CameraPose {
        self.pose(false)
    }

    /// Advance one frame.
    ///
    /// Order: velocity, collision sweep, head bob, then mouse look. Movement
    /// therefore uses the view direction of the previous frame.
    pub fn update(&mut self, command: &PlayerCommand, grid: &TileGrid, delta_time: f32) -> CameraPose {
        let delta_time = self.config.sanitize_delta_time(delta_time);

        let wish_direction = self.wish_direction(command.keys);
        let moving = wish_direction != Vec2::ZERO;

        self.update_velocity(wish_direction, moving, delta_time);
        self.move_with_collision(grid, delta_time);
        self.update_bob(moving, delta_time);
        self.update_view_angles(command.look_delta);

        self.pose(moving)
    }

    // ========================================================================
    // Velocity
    // ========================================================================

    /// Unit planar direction of the held keys, or zero.
    fn wish_direction(&self, keys: MoveKeys) -> Vec2 {
        let (forward, right) = self.state.planar_basis();

        let mut direction = Vec3::ZERO;
        if keys.held(MoveKeys::FORWARD) {
            direction += forward;
        }
        if keys.held(MoveKeys::BACKWARD) {
            direction -= forward;
        }
        if keys.held(MoveKeys::LEFT) {
            direction -= right;
        }
        if keys.held(MoveKeys::RIGHT) {
            direction += right;
        }

        Vec2::new(direction.x, direction.z).normalize_or_zero()
    }

    fn update_velocity(&mut self, wish_direction: Vec2, moving: bool, delta_time: f32) {
        let target = wish_direction * self.config.max_speed;

        // Fraction of the remaining gap closed this frame; stays below 1 for
        // any delta time.
        let blend = 1.0 - (-self.config.acceleration * delta_time).exp();
        self.state.velocity = self.state.velocity.lerp(target, blend);

        if !moving {
            let drop = self.config.damping * delta_time;
            let speed = self.state.velocity.length();
            if speed > drop {
                self.state.velocity -= self.state.velocity / speed * drop;
            } else {
                self.state.velocity = Vec2::ZERO;
            }
        }
    }

    // ========================================================================
    // Collision
    // ========================================================================

    fn move_with_collision(&mut self, grid: &TileGrid, delta_time: f32) {
        let displacement = self.state.velocity * delta_time;
        let result = sweep(
            grid,
            self.state.position,
            displacement,
            self.config.player_radius,
            self.config.sweep_order,
        );
        self.state.position = result.position;
    }

    // ========================================================================
    // Head bob
    // ========================================================================

    fn update_bob(&mut self, moving: bool, delta_time: f32) {
        let offset = if moving {
            self.state.walk_phase.sin() * self.config.bob_amplitude
        } else {
            0.0
        };

        self.state.walk_phase = if moving {
            (self.state.walk_phase + delta_time * self.config.bob_rate) % std::f32::consts::TAU
        } else {
            0.0
        };

        self.state.position.y = self.config.eye_height + offset;
    }

    // ========================================================================
    // View angles
    // ========================================================================

    fn update_view_angles(&mut self, look_delta: Vec2) {
        if look_delta.is_finite() {
            let sensitivity = self.config.mouse_sensitivity;
            let limit = self.config.pitch_limit;

            self.state.yaw += look_delta.x * sensitivity;
            self.state.pitch -= look_delta.y * sensitivity;
            self.state.pitch = self.state.pitch.clamp(-limit, limit);

            self.state.yaw = (self.state.yaw + 180.0).rem_euclid(360.0) - 180.0;
        }

        // Rebuilt from the angles every frame, never accumulated.
        self.state.front = look_direction(self.state.yaw, self.state.pitch);
    }

    fn pose(&self, moving: bool) -> CameraPose {
        CameraPose::new(
            self.state.position,
            self.state.yaw,
            self.state.pitch,
            self.state.front,
            moving,
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
