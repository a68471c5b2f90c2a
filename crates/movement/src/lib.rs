//! First-person movement over a tile map.
//!
//! Converts per-frame key/mouse input into a smoothed planar trajectory,
//! resolves it against the walls of a [`maze_map::TileGrid`], and exposes a
//! camera pose for rendering.
//!
//! # Frame update
//!
//! ```text
//! keys ──► wish direction ──► velocity (exp. smoothing + idle damping)
//!                                   │
//!                                   ▼
//!                    axis-separated sweep vs. TileGrid
//!                                   │
//! mouse ──► yaw/pitch ──► forward   ▼
//!                  └──────────► CameraPose
//! ```
//!
//! The controller is single-threaded and has no failure path once the map
//! is loaded: every coordinate is either an in-bounds tile or out of bounds,
//! and out of bounds always blocks.

pub mod collision;
pub mod config;
pub mod controller;
pub mod pose;
pub mod state;

pub use collision::{footprint_blocked, sweep, SweepResult};
pub use config::{ConfigError, MovementConfig, SweepOrder};
pub use controller::MovementController;
pub use pose::CameraPose;
pub use state::{look_direction, MoveKeys, PlayerCommand, PlayerState, WORLD_UP};
