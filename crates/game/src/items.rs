//! Collectible items.
//!
//! Items hover above their tile, bouncing and spinning. Walking close enough
//! to one collects it, which turns its grid cell into free floor.

use glam::Vec3;
use maze_map::{tile_to_world, TileGrid, TilePos};
use maze_movement::ConfigError;
use serde::{Deserialize, Serialize};

/// Item animation and pickup tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemConfig {
    /// Eye-to-item distance below which the item is collected.
    pub pickup_radius: f32,

    /// Resting height of the item centre above the floor.
    pub hover_height: f32,

    /// Peak vertical bounce offset.
    pub bounce_amplitude: f32,

    /// Bounce phase rate (radians/second).
    pub bounce_rate: f32,

    /// Spin rate (degrees/second).
    pub spin_rate: f32,
}

impl Default for ItemConfig {
    fn default() -> Self {
        Self {
            pickup_radius: 1.0,
            hover_height: 0.8,
            bounce_amplitude: 0.1,
            bounce_rate: 2.5,
            spin_rate: 100.0,
        }
    }
}

impl ItemConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::non_negative("pickup_radius", self.pickup_radius)?;
        ConfigError::finite("hover_height", self.hover_height)?;
        ConfigError::non_negative("bounce_amplitude", self.bounce_amplitude)?;
        ConfigError::finite("bounce_rate", self.bounce_rate)?;
        ConfigError::finite("spin_rate", self.spin_rate)?;
        Ok(())
    }
}

/// Where and how to draw one item this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemPlacement {
    pub tile: TilePos,
    pub center: Vec3,
    /// Rotation about the Y axis (degrees).
    pub spin: f32,
}

/// Tracks the items still on the map and how many were collected.
#[derive(Debug, Clone)]
pub struct ItemTracker {
    config: ItemConfig,
    remaining: Vec<TilePos>,
    collected: usize,
}

impl ItemTracker {
    /// Start tracking every item currently on the grid.
    pub fn from_grid(grid: &TileGrid, config: ItemConfig) -> Self {
        let remaining: Vec<TilePos> = grid.collectibles().collect();
        log::debug!("tracking {} collectible items", remaining.len());
        Self {
            config,
            remaining,
            collected: 0,
        }
    }

    #[inline]
    pub fn collected_count(&self) -> usize {
        self.collected
    }

    #[inline]
    pub fn remaining_count(&self) -> usize {
        self.remaining.len()
    }

    pub fn remaining(&self) -> &[TilePos] {
        &self.remaining
    }

    /// Animated centre of the item on `tile` at `time` seconds.
    pub fn center(&self, tile: TilePos, time: f32) -> Vec3 {
        let bounce = (time * self.config.bounce_rate).sin() * self.config.bounce_amplitude;
        Vec3::new(
            tile_to_world(tile.x),
            self.config.hover_height + bounce,
            tile_to_world(tile.y),
        )
    }

    /// Renderer-facing placements of all remaining items.
    pub fn placements(&self, time: f32) -> impl Iterator<Item = ItemPlacement> + '_ {
        let spin = (time * self.config.spin_rate).rem_euclid(360.0);
        self.remaining.iter().map(move |&tile| ItemPlacement {
            tile,
            center: self.center(tile, time),
            spin,
        })
    }

    /// Collect every item within pickup range of `eye`.
    ///
    /// Collected cells are downgraded on `grid`. Returns the tiles collected
    /// this call, in row-major order.
    pub fn update(&mut self, grid: &mut TileGrid, eye: Vec3, time: f32) -> Vec<TilePos> {
        let radius = self.config.pickup_radius;
        let (picked, kept): (Vec<TilePos>, Vec<TilePos>) = self
            .remaining
            .iter()
            .partition(|&&tile| (eye - self.center(tile, time)).length() < radius);

        for &tile in &picked {
            if !grid.collect_item(tile) {
                log::warn!("item at ({}, {}) was already gone from the map", tile.x, tile.y);
            }
            self.collected += 1;
            log::info!(
                "collected item at ({}, {}), total {}",
                tile.x,
                tile.y,
                self.collected
            );
        }

        self.remaining = kept;
        picked
    }
}
