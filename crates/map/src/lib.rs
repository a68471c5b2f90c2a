//! Maze map model.
//!
//! Parses the line-oriented map format into a [`TileGrid`] where every cell
//! carries exactly one [`TileKind`], and answers the wall queries used by
//! movement collision.
//!
//! # Coordinates
//!
//! Tiles are [`TILE_SIZE`] world units square. Tile `(x, y)` is centred on
//! world `(x * TILE_SIZE, y * TILE_SIZE)` in the X/Z plane:
//!
//! ```text
//!   world X ──►  tile x
//!   world Z ──►  tile y (row)
//! ```

pub mod error;
pub mod grid;
pub mod parser;
pub mod tile;

pub use error::{FormatError, MapError};
pub use grid::{tile_to_world, world_to_map_space, world_to_tile, TileGrid, TILE_SIZE};
pub use parser::{load, parse};
pub use tile::{Tile, TileKind, TilePos, WallKind};
