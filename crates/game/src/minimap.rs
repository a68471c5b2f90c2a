//! Top-down minimap view.
//!
//! Builds the data a renderer needs to draw a player-centred minimap: the
//! classified cells around the player and the heading marker. Drawing is
//! left to the caller.

use glam::{IVec2, Vec2};
use maze_map::{TileGrid, TileKind, TilePos, WallKind};
use maze_movement::CameraPose;

/// Tiles visible in each direction from the player tile.
pub const MINIMAP_HALF_SIZE: i32 = 7;

/// Extra tiles gathered around the visible window so a rotated minimap has
/// no empty corners.
pub const MINIMAP_PADDING: i32 = 2;

/// Minimap colour class of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MinimapCell {
    Wall,
    Door,
    Item,
    Floor,
}

impl MinimapCell {
    pub fn from_kind(kind: TileKind) -> Self {
        match kind {
            TileKind::Wall(WallKind::Door) => Self::Door,
            TileKind::Wall(_) => Self::Wall,
            TileKind::Item => Self::Item,
            TileKind::Floor | TileKind::Light | TileKind::Enemy | TileKind::Start => Self::Floor,
        }
    }
}

/// One in-bounds cell of the minimap window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimapTile {
    pub tile: TilePos,
    /// Tile offset from the player tile.
    pub offset: IVec2,
    pub class: MinimapCell,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MinimapView {
    /// Tile containing the player.
    pub center: TilePos,

    /// Player position within `center`, each axis in `[0, 1)`.
    pub fraction: Vec2,

    /// Planar heading `(cos yaw, sin yaw)`.
    pub heading: Vec2,

    /// Rotation to apply to the player marker (degrees).
    pub marker_rotation: f32,

    /// In-bounds cells of the padded window, row-major.
    pub tiles: Vec<MinimapTile>,
}

impl MinimapView {
    pub fn new(grid: &TileGrid, pose: &CameraPose) -> Self {
        let map_position = pose.map_position();
        let floor = map_position.floor();
        let center = TilePos::new(floor.x as i32, floor.y as i32);

        let reach = MINIMAP_HALF_SIZE + MINIMAP_PADDING;
        let mut tiles = Vec::new();
        for dy in -reach..=reach {
            for dx in -reach..=reach {
                let tile = TilePos::new(center.x + dx, center.y + dy);
                if let Some(kind) = grid.kind_at(tile) {
                    tiles.push(MinimapTile {
                        tile,
                        offset: IVec2::new(dx, dy),
                        class: MinimapCell::from_kind(kind),
                    });
                }
            }
        }

        Self {
            center,
            fraction: map_position - floor,
            heading: pose.heading(),
            marker_rotation: -pose.yaw - 90.0,
            tiles,
        }
    }

    /// Cells inside the unpadded visible window.
    pub fn visible(&self) -> impl Iterator<Item = &MinimapTile> {
        self.tiles.iter().filter(|t| {
            t.offset.x.abs() <= MINIMAP_HALF_SIZE && t.offset.y.abs() <= MINIMAP_HALF_SIZE
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use maze_map::parse;
    use maze_movement::look_direction;

    fn pose_at(position: Vec3, yaw: f32) -> CameraPose {
        CameraPose::new(position, yaw, 0.0, look_direction(yaw, 0.0), false)
    }

    #[test]
    fn test_cell_classes() {
        assert_eq!(MinimapCell::from_kind(TileKind::Wall(WallKind::Structure)), MinimapCell::Wall);
        assert_eq!(MinimapCell::from_kind(TileKind::Wall(WallKind::Fixture)), MinimapCell::Wall);
        assert_eq!(MinimapCell::from_kind(TileKind::Wall(WallKind::Door)), MinimapCell::Door);
        assert_eq!(MinimapCell::from_kind(TileKind::Item), MinimapCell::Item);
        assert_eq!(MinimapCell::from_kind(TileKind::Light), MinimapCell::Floor);
        assert_eq!(MinimapCell::from_kind(TileKind::Start), MinimapCell::Floor);
    }

    #[test]
    fn test_small_map_fully_visible() {
        let (grid, _) = parse("3x3\nooo\no@A\noTo\n").unwrap();
        let view = MinimapView::new(&grid, &pose_at(Vec3::new(2.0, 1.7, 2.0), -90.0));

        assert_eq!(view.center, TilePos::new(1, 1));
        assert!((view.fraction - Vec2::splat(0.5)).length() < 1e-6);
        assert_eq!(view.tiles.len(), 9);
        assert_eq!(view.visible().count(), 9);

        let door = view.tiles.iter().find(|t| t.class == MinimapCell::Door).unwrap();
        assert_eq!(door.tile, TilePos::new(2, 1));
        assert_eq!(door.offset, IVec2::new(1, 0));

        let item = view.tiles.iter().find(|t| t.class == MinimapCell::Item).unwrap();
        assert_eq!(item.offset, IVec2::new(0, 1));
    }

    #[test]
    fn test_window_is_clipped_to_reach() {
        let row = " ".repeat(40);
        let mut text = String::from("40x40\n");
        for y in 0..40 {
            if y == 20 {
                text.push_str(&format!("{}@{}\n", " ".repeat(20), " ".repeat(19)));
            } else {
                text.push_str(&row);
                text.push('\n');
            }
        }
        let (grid, start) = parse(&text).unwrap();
        let position = Vec3::new(start.x as f32 * 2.0, 1.7, start.y as f32 * 2.0);
        let view = MinimapView::new(&grid, &pose_at(position, 0.0));

        let side = (2 * (MINIMAP_HALF_SIZE + MINIMAP_PADDING) + 1) as usize;
        assert_eq!(view.tiles.len(), side * side);
        let visible = (2 * MINIMAP_HALF_SIZE + 1) as usize;
        assert_eq!(view.visible().count(), visible * visible);
    }

    #[test]
    fn test_heading_and_marker() {
        let (grid, _) = parse("1x1\n@\n").unwrap();
        let view = MinimapView::new(&grid, &pose_at(Vec3::new(0.0, 1.7, 0.0), -90.0));
        assert!(view.heading.x.abs() < 1e-6);
        assert!((view.heading.y + 1.0).abs() < 1e-6);
        assert_eq!(view.marker_rotation, 0.0);
    }
}
