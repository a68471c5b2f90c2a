//! Square-footprint collision against the tile grid.
//!
//! Movement is resolved one world axis at a time. A step along an axis is
//! either taken whole or rejected whole, so pushing diagonally into a wall
//! slides along it instead of stopping.

use glam::{Vec2, Vec3};
use maze_map::{world_to_tile, TileGrid};

use crate::config::SweepOrder;

/// Whether a square footprint of half-width `radius` centred on world
/// `(x, z)` overlaps any wall or out-of-bounds tile.
///
/// Every tile the footprint touches is checked; near tile corners that is up
/// to 2x2 tiles. A footprint edge lying exactly on a tile boundary counts as
/// touching the next tile.
pub fn footprint_blocked(grid: &TileGrid, x: f32, z: f32, radius: f32) -> bool {
    let (min_x, max_x) = (world_to_tile(x - radius), world_to_tile(x + radius));
    let (min_y, max_y) = (world_to_tile(z - radius), world_to_tile(z + radius));

    (min_x..=max_x).any(|tx| (min_y..=max_y).any(|ty| grid.is_blocked(tx, ty)))
}

/// Outcome of an axis-separated sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepResult {
    /// Resolved position. Y is carried through unchanged.
    pub position: Vec3,

    /// The X step was rejected.
    pub blocked_x: bool,

    /// The Z step was rejected.
    pub blocked_z: bool,
}

impl SweepResult {
    #[inline]
    pub fn blocked(&self) -> bool {
        self.blocked_x || self.blocked_z
    }
}

/// Move `position` by the planar `displacement` (`x` = world X, `y` = world
/// Z), testing each axis separately.
///
/// With [`SweepOrder::Independent`] both candidates are built from the
/// starting position; with [`SweepOrder::Chained`] the Z candidate starts
/// from wherever the X step left the player. A zero or non-finite component
/// is not tested and never counts as blocked.
pub fn sweep(
    grid: &TileGrid,
    position: Vec3,
    displacement: Vec2,
    radius: f32,
    order: SweepOrder,
) -> SweepResult {
    let mut resolved = position;
    let mut blocked_x = false;
    let mut blocked_z = false;

    if displacement.x != 0.0 && displacement.x.is_finite() {
        let candidate_x = position.x + displacement.x;
        if footprint_blocked(grid, candidate_x, position.z, radius) {
            blocked_x = true;
        } else {
            resolved.x = candidate_x;
        }
    }

    if displacement.y != 0.0 && displacement.y.is_finite() {
        let base_x = match order {
            SweepOrder::Independent => position.x,
            SweepOrder::Chained => resolved.x,
        };
        let candidate_z = position.z + displacement.y;
        if footprint_blocked(grid, base_x, candidate_z, radius) {
            blocked_z = true;
        } else {
            resolved.z = candidate_z;
        }
    }

    if blocked_x || blocked_z {
        log::trace!(
            "sweep from ({:.3}, {:.3}) blocked: x={blocked_x} z={blocked_z}",
            position.x,
            position.z
        );
    }

    SweepResult {
        position: resolved,
        blocked_x,
        blocked_z,
    }
}
