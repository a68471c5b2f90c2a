//! Movement configuration constants.
//!
//! All rates are per second and get scaled by the frame's elapsed time.
//! Distances are world units (one tile is two units).

use maze_map::TILE_SIZE;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A tuning value outside the range the controller can honour.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be {expected}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f32,
        expected: &'static str,
    },
}

impl ConfigError {
    fn check(ok: bool, field: &'static str, value: f32, expected: &'static str) -> Result<(), Self> {
        if ok {
            Ok(())
        } else {
            Err(Self::OutOfRange {
                field,
                value,
                expected,
            })
        }
    }

    pub fn finite(field: &'static str, value: f32) -> Result<(), Self> {
        Self::check(value.is_finite(), field, value, "finite")
    }

    pub fn non_negative(field: &'static str, value: f32) -> Result<(), Self> {
        Self::check(value.is_finite() && value >= 0.0, field, value, "finite and >= 0")
    }

    pub fn positive(field: &'static str, value: f32) -> Result<(), Self> {
        Self::check(value.is_finite() && value > 0.0, field, value, "finite and > 0")
    }

    /// Open interval `(min, max)`.
    pub fn between(
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
        expected: &'static str,
    ) -> Result<(), Self> {
        Self::check(value > min && value < max, field, value, expected)
    }
}

/// Order in which the two axes of the collision sweep are based.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepOrder {
    /// X and Z candidates are both tested from the position at the start of
    /// the frame.
    #[default]
    Independent,
    /// The Z candidate is tested from the position after the X step was
    /// accepted or rejected.
    Chained,
}

/// Configuration for first-person movement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    // ========================================================================
    // Speed
    // ========================================================================
    /// Target speed while a direction key is held (units/second).
    pub max_speed: f32,

    /// Rate at which velocity approaches its target (1/second).
    pub acceleration: f32,

    /// Extra linear speed loss with no input held (units/second²).
    pub damping: f32,

    // ========================================================================
    // View
    // ========================================================================
    /// Degrees of rotation per pixel of mouse motion.
    pub mouse_sensitivity: f32,

    /// Pitch is clamped to `[-pitch_limit, pitch_limit]` degrees.
    pub pitch_limit: f32,

    /// Yaw at spawn (degrees). -90 faces -Z.
    pub initial_yaw: f32,

    /// Eye height above the floor.
    pub eye_height: f32,

    // ========================================================================
    // Head bob
    // ========================================================================
    /// Peak vertical bob offset.
    pub bob_amplitude: f32,

    /// Bob phase advance (radians/second) while moving.
    pub bob_rate: f32,

    // ========================================================================
    // Collision
    // ========================================================================
    /// Half-width of the square collision footprint.
    pub player_radius: f32,

    /// See [`SweepOrder`].
    pub sweep_order: SweepOrder,

    /// Longest frame the controller will integrate in one step (seconds).
    pub max_delta_time: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            max_speed: 1.4,
            acceleration: 10.0,
            damping: 0.1,

            mouse_sensitivity: 0.2,
            pitch_limit: 89.0,
            initial_yaw: -90.0,
            eye_height: 1.7,

            bob_amplitude: 0.05,
            bob_rate: 12.5,

            player_radius: 0.3,
            sweep_order: SweepOrder::Independent,
            max_delta_time: 0.25,
        }
    }
}

impl MovementConfig {
    /// Reject values that would break containment, reverse the velocity
    /// blend or let the pitch reach the poles.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::non_negative("max_speed", self.max_speed)?;
        ConfigError::non_negative("acceleration", self.acceleration)?;
        ConfigError::non_negative("damping", self.damping)?;

        ConfigError::finite("mouse_sensitivity", self.mouse_sensitivity)?;
        ConfigError::between("pitch_limit", self.pitch_limit, 0.0, 90.0, "in (0, 90) degrees")?;
        ConfigError::finite("initial_yaw", self.initial_yaw)?;
        ConfigError::finite("eye_height", self.eye_height)?;

        ConfigError::non_negative("bob_amplitude", self.bob_amplitude)?;
        ConfigError::non_negative("bob_rate", self.bob_rate)?;

        ConfigError::between(
            "player_radius",
            self.player_radius,
            0.0,
            TILE_SIZE * 0.5,
            "in (0, half a tile)",
        )?;
        ConfigError::positive("max_delta_time", self.max_delta_time)?;
        Ok(())
    }

    /// Clamp a raw frame time into the range the integrator accepts.
    ///
    /// Negative or non-finite values become zero.
    pub fn sanitize_delta_time(&self, delta_time: f32) -> f32 {
        if delta_time.is_finite() && delta_time > 0.0 {
            delta_time.min(self.max_delta_time)
        } else {
            0.0
        }
    }
}
