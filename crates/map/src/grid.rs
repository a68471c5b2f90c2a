//! The tile grid and world/tile coordinate mapping.

use crate::tile::{Tile, TileKind, TilePos};

/// Edge length of one tile in world units.
pub const TILE_SIZE: f32 = 2.0;

/// Tile index containing world coordinate `w` along one axis.
///
/// Tile `i` is centred on `i * TILE_SIZE` and spans
/// `[i * TILE_SIZE - 1, i * TILE_SIZE + 1)`.
#[inline]
pub fn world_to_tile(w: f32) -> i32 {
    ((w + TILE_SIZE * 0.5) / TILE_SIZE).floor() as i32
}

/// World coordinate of the centre of tile index `i` along one axis.
#[inline]
pub fn tile_to_world(i: i32) -> f32 {
    i as f32 * TILE_SIZE
}

/// Continuous tile-space coordinate used by the minimap, where tile `i`
/// spans `[i, i + 1)`.
#[inline]
pub fn world_to_map_space(w: f32) -> f32 {
    w / TILE_SIZE + 0.5
}

/// Fixed-size, row-major grid of classified tiles.
///
/// World X maps to column `x`, world Z maps to row `y`. The shape never
/// changes after parsing; the only mutation is [`TileGrid::collect_item`].
#[derive(Debug, Clone, PartialEq)]
pub struct TileGrid {
    width: usize,
    height: usize,
    cells: Vec<Tile>,
}

impl TileGrid {
    /// Build a grid from row-major cells. `cells.len()` must equal
    /// `width * height`; the parser guarantees it.
    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<Tile>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// The tile at `pos`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, pos: TilePos) -> Option<Tile> {
        self.index(pos.x, pos.y).map(|i| self.cells[i])
    }

    #[inline]
    pub fn kind_at(&self, pos: TilePos) -> Option<TileKind> {
        self.get(pos).map(|tile| tile.kind)
    }

    /// Whether the in-bounds cell at `pos` is a wall. Out-of-bounds cells
    /// are not walls here; see [`TileGrid::is_blocked`].
    #[inline]
    pub fn is_wall(&self, pos: TilePos) -> bool {
        self.kind_at(pos).is_some_and(TileKind::is_wall)
    }

    /// Whether the player may not occupy the cell at `(x, y)`. Out of
    /// bounds always blocks.
    #[inline]
    pub fn is_blocked(&self, x: i32, y: i32) -> bool {
        match self.index(x, y) {
            Some(i) => self.cells[i].kind.is_wall(),
            None => true,
        }
    }

    /// Every cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (TilePos, Tile)> + '_ {
        let width = self.width;
        self.cells.iter().enumerate().map(move |(i, &tile)| {
            let pos = TilePos::new((i % width) as i32, (i / width) as i32);
            (pos, tile)
        })
    }

    /// Positions of all remaining item cells, row-major.
    ///
    /// The iterator reflects the grid at the time it is consumed; call again
    /// to restart.
    pub fn collectibles(&self) -> impl Iterator<Item = TilePos> + '_ {
        self.iter()
            .filter(|(_, tile)| tile.kind == TileKind::Item)
            .map(|(pos, _)| pos)
    }

    /// Number of cells of the given kind.
    pub fn count(&self, kind: TileKind) -> usize {
        self.cells.iter().filter(|tile| tile.kind == kind).count()
    }

    /// Downgrade an item cell to free floor.
    ///
    /// Returns `true` if the cell held an item. Any other cell is left
    /// untouched.
    pub fn collect_item(&mut self, pos: TilePos) -> bool {
        let Some(i) = self.index(pos.x, pos.y) else {
            return false;
        };
        if self.cells[i].kind != TileKind::Item {
            return false;
        }
        self.cells[i] = Tile::free();
        true
    }
}
