//! Game simulation - the per-frame loop.
//!
//! Owns the map and everything that reads or writes it. Each tick runs
//! movement first, then item pickup against the post-movement eye position.

use std::path::Path;

use maze_map::{MapError, TileGrid, TilePos};
use maze_movement::{CameraPose, ConfigError, MovementConfig, MovementController};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::input::PlayerInput;
use crate::items::{ItemConfig, ItemPlacement, ItemTracker};
use crate::minimap::MinimapView;

/// Game simulation configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Movement physics configuration.
    pub movement: MovementConfig,

    /// Item pickup and animation.
    pub items: ItemConfig,
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.movement.validate()?;
        self.items.validate()
    }
}

/// Errors starting a simulation.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Map(#[from] MapError),

    #[error("invalid tuning: {0}")]
    Config(#[from] ConfigError),
}

/// What happened during one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub pose: CameraPose,

    /// Items collected this tick.
    pub collected: Vec<TilePos>,

    /// The player asked to quit; nothing else was simulated.
    pub exit_requested: bool,
}

/// The main game simulation.
#[derive(Debug)]
pub struct Simulation {
    /// Current frame/tick number.
    pub frame: u64,

    grid: TileGrid,
    start: TilePos,
    controller: MovementController,
    items: ItemTracker,
    elapsed: f32,
    pose: CameraPose,
}

impl Simulation {
    /// Create a simulation with the player standing on `start`.
    ///
    /// Fails if `config` is out of range.
    pub fn new(grid: TileGrid, start: TilePos, config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let controller = MovementController::spawn_at(config.movement, start);
        let items = ItemTracker::from_grid(&grid, config.items);
        let pose = controller.resting_pose();

        log::info!(
            "simulation ready: {}x{} map, {} items",
            grid.width(),
            grid.height(),
            items.remaining_count()
        );

        Ok(Self {
            frame: 0,
            grid,
            start,
            controller,
            items,
            elapsed: 0.0,
            pose,
        })
    }

    /// Load a map file and start a simulation on it.
    pub fn load(path: impl AsRef<Path>, config: SimulationConfig) -> Result<Self, SimulationError> {
        let (grid, start) = maze_map::load(path)?;
        Ok(Self::new(grid, start, config)?)
    }

    /// Advance the simulation by one frame of `delta_time` seconds.
    pub fn tick(&mut self, input: &PlayerInput, delta_time: f32) -> FrameReport {
        if input.exit {
            log::debug!("exit requested at frame {}", self.frame);
            return FrameReport {
                pose: self.pose,
                collected: Vec::new(),
                exit_requested: true,
            };
        }

        let delta_time = self.controller.config().sanitize_delta_time(delta_time);
        let command = input.to_command();

        self.pose = self.controller.update(&command, &self.grid, delta_time);
        self.elapsed += delta_time;

        let collected = self.items.update(&mut self.grid, self.pose.position, self.elapsed);
        if !collected.is_empty() && self.items.remaining_count() == 0 {
            log::info!("all items collected after {:.1}s", self.elapsed);
        }

        self.frame += 1;

        FrameReport {
            pose: self.pose,
            collected,
            exit_requested: false,
        }
    }

    #[inline]
    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    #[inline]
    pub fn start(&self) -> TilePos {
        self.start
    }

    /// Pose after the most recent tick.
    #[inline]
    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    /// Simulated seconds since the start.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn collected_count(&self) -> usize {
        self.items.collected_count()
    }

    pub fn remaining_items(&self) -> usize {
        self.items.remaining_count()
    }

    pub fn item_placements(&self) -> impl Iterator<Item = ItemPlacement> + '_ {
        self.items.placements(self.elapsed)
    }

    pub fn minimap(&self) -> MinimapView {
        MinimapView::new(&self.grid, &self.pose)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use maze_map::{parse, TileKind};

    const DT: f32 = 1.0 / 60.0;

    /// Single column; the default yaw faces -Z, straight at the item.
    const CORRIDOR: &str = "1x4\nT\n \n \n@\n";

    fn corridor() -> Simulation {
        let (grid, start) = parse(CORRIDOR).unwrap();
        Simulation::new(grid, start, SimulationConfig::default()).unwrap()
    }

    fn forward() -> PlayerInput {
        let mut input = PlayerInput::default();
        input.movement.forward = true;
        input
    }

    #[test]
    fn test_simulation_creation() {
        let sim = corridor();
        assert_eq!(sim.frame, 0);
        assert_eq!(sim.start(), TilePos::new(0, 3));
        assert_eq!(sim.pose().position, Vec3::new(0.0, 1.7, 6.0));
        assert_eq!(sim.remaining_items(), 1);
        assert_eq!(sim.collected_count(), 0);
    }

    #[test]
    fn test_tick_advances_frame() {
        let mut sim = corridor();
        sim.tick(&PlayerInput::default(), DT);
        sim.tick(&PlayerInput::default(), DT);
        assert_eq!(sim.frame, 2);
        assert!((sim.elapsed() - 2.0 * DT).abs() < 1e-6);
    }

    #[test]
    fn test_walk_to_item_collects_it() {
        // Still item, so the pickup moment does not depend on the bounce phase.
        let config = SimulationConfig {
            items: ItemConfig {
                bounce_amplitude: 0.0,
                ..ItemConfig::default()
            },
            ..SimulationConfig::default()
        };
        let (grid, start) = parse(CORRIDOR).unwrap();
        let mut sim = Simulation::new(grid, start, config).unwrap();
        let mut collected = Vec::new();

        for _ in 0..600 {
            let report = sim.tick(&forward(), DT);
            collected.extend(report.collected);
        }

        assert_eq!(collected, vec![TilePos::new(0, 0)]);
        assert_eq!(sim.collected_count(), 1);
        assert_eq!(sim.remaining_items(), 0);
        assert_eq!(sim.grid().count(TileKind::Item), 0);
        assert_eq!(sim.item_placements().count(), 0);

        // Stopped by the map edge, inside the first row.
        let z = sim.pose().position.z;
        assert!(z >= -1.0 + 0.3 - 1e-4, "z={z}");
    }

    #[test]
    fn test_exit_short_circuits() {
        let mut sim = corridor();
        sim.tick(&forward(), DT);
        let before = sim.pose();

        let mut input = forward();
        input.exit = true;
        let report = sim.tick(&input, DT);

        assert!(report.exit_requested);
        assert!(report.collected.is_empty());
        assert_eq!(report.pose, before);
        assert_eq!(sim.frame, 1);
    }

    #[test]
    fn test_minimap_follows_player() {
        let sim = corridor();
        let view = sim.minimap();
        assert_eq!(view.center, TilePos::new(0, 3));
        assert_eq!(view.tiles.len(), 4);
    }

    #[test]
    fn test_load_missing_file() {
        let result = Simulation::load("/nonexistent/maze.txt", SimulationConfig::default());
        assert!(matches!(result, Err(SimulationError::Map(MapError::Io { .. }))));
    }

    #[test]
    fn test_out_of_range_tuning_rejected() {
        let (grid, start) = parse("1x3\n \no\n@\n").unwrap();
        let config: SimulationConfig =
            serde_json::from_str(r#"{ "movement": { "player_radius": -0.3 } }"#).unwrap();

        let err = Simulation::new(grid.clone(), start, config).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { field: "player_radius", .. }));

        let config: SimulationConfig =
            serde_json::from_str(r#"{ "movement": { "acceleration": -10.0 } }"#).unwrap();
        let err = Simulation::new(grid.clone(), start, config).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { field: "acceleration", .. }));

        let config: SimulationConfig =
            serde_json::from_str(r#"{ "items": { "pickup_radius": -1.0 } }"#).unwrap();
        let err = Simulation::new(grid, start, config).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { field: "pickup_radius", .. }));
    }

    #[test]
    fn test_wall_holds_with_valid_tuning() {
        let (grid, start) = parse("1x3\n \no\n@\n").unwrap();
        let mut sim = Simulation::new(grid, start, SimulationConfig::default()).unwrap();

        for _ in 0..600 {
            sim.tick(&forward(), DT);
        }

        // Wall row 1 spans z in [1, 3); the footprint stops at its edge.
        let z = sim.pose().position.z;
        assert!(z - 0.3 >= 3.0 - 1e-4, "z={z}");
    }

    #[test]
    fn test_determinism() {
        let inputs: Vec<_> = (0..120)
            .map(|i| {
                let mut input = PlayerInput::default();
                input.movement.forward = i % 2 == 0;
                input.movement.right = i % 3 == 0;
                input.mouse_delta = ((i % 7) as f32 - 3.0, (i % 5) as f32 - 2.0);
                input
            })
            .collect();

        let run = || {
            let mut sim = corridor();
            for input in &inputs {
                sim.tick(input, DT);
            }
            sim.pose()
        };

        assert_eq!(run(), run());
    }
}
