//! Maze game logic.
//!
//! Ties the map and the movement controller into a per-frame simulation:
//!
//! - Player input handling
//! - Item pickup and animation
//! - Minimap view data
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │                      Simulation                       │
//! │  ┌─────────┐    ┌──────────┐    ┌──────────────────┐  │
//! │  │ Input   │───►│ Movement │───►│ Item pickup      │  │
//! │  └─────────┘    └──────────┘    │ (mutates grid)   │  │
//! │                      │          └──────────────────┘  │
//! │                      ▼                                │
//! │                 CameraPose ───► MinimapView           │
//! └───────────────────────────────────────────────────────┘
//! ```

pub mod input;
pub mod items;
pub mod minimap;
pub mod simulation;

pub use input::{MovementInput, PlayerInput};
pub use items::{ItemConfig, ItemPlacement, ItemTracker};
pub use minimap::{MinimapCell, MinimapTile, MinimapView, MINIMAP_HALF_SIZE, MINIMAP_PADDING};
pub use simulation::{FrameReport, Simulation, SimulationConfig, SimulationError};

// Re-export movement types for convenience
pub use maze_movement::{CameraPose, ConfigError, MovementConfig, SweepOrder};
