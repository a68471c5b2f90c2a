//! Glyph classification.
//!
//! Every map glyph belongs to exactly one [`TileKind`]. The ranges below are
//! closed and pairwise disjoint; the parser rejects any glyph that matches
//! none of them.

use serde::{Deserialize, Serialize};

/// Glyph a collected item cell is downgraded to.
pub const FREE_GLYPH: char = ' ';

/// Glyph marking the player start cell.
pub const START_GLYPH: char = '@';

/// Integer tile coordinate. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TilePos {
    pub x: i32,
    pub y: i32,
}

impl TilePos {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for TilePos {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Sub-kind of a blocking cell. Collision treats all of them the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WallKind {
    /// Structural wall, `o..=z`.
    Structure,
    /// Door or secret passage, `A..=G`.
    Door,
    /// Fixed object, `H..=N`.
    Fixture,
}

/// Semantic category of a map cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    /// Blocking cell.
    Wall(WallKind),
    /// Empty floor or decorative non-blocking glyph.
    Floor,
    /// Light source, rendering only.
    Light,
    /// Collectible; becomes [`TileKind::Floor`] once picked up.
    Item,
    /// Reserved for enemies. Passable.
    Enemy,
    /// Player start cell. Passable.
    Start,
}

impl TileKind {
    /// Classify a glyph, or `None` if it is outside every known range.
    pub fn classify(glyph: char) -> Option<Self> {
        if let Some(wall) = wall_kind(glyph) {
            Some(Self::Wall(wall))
        } else if is_free_glyph(glyph) {
            Some(Self::Floor)
        } else if is_light_glyph(glyph) {
            Some(Self::Light)
        } else if is_item_glyph(glyph) {
            Some(Self::Item)
        } else if is_enemy_glyph(glyph) {
            Some(Self::Enemy)
        } else if is_start_glyph(glyph) {
            Some(Self::Start)
        } else {
            None
        }
    }

    /// Whether this kind blocks movement.
    #[inline]
    pub const fn is_wall(self) -> bool {
        matches!(self, Self::Wall(_))
    }
}

/// Wall sub-kind of a glyph, if it is a wall glyph.
pub const fn wall_kind(glyph: char) -> Option<WallKind> {
    match glyph {
        'o'..='z' => Some(WallKind::Structure),
        'A'..='G' => Some(WallKind::Door),
        'H'..='N' => Some(WallKind::Fixture),
        _ => None,
    }
}

#[inline]
pub const fn is_wall_glyph(glyph: char) -> bool {
    wall_kind(glyph).is_some()
}

/// Empty space, `a..=n` decorations and the `|` glyph.
#[inline]
pub const fn is_free_glyph(glyph: char) -> bool {
    matches!(glyph, ' ' | 'a'..='n' | '|')
}

#[inline]
pub const fn is_light_glyph(glyph: char) -> bool {
    matches!(glyph, '*' | '^' | '!')
}

#[inline]
pub const fn is_item_glyph(glyph: char) -> bool {
    matches!(glyph, 'T'..='Z')
}

#[inline]
pub const fn is_enemy_glyph(glyph: char) -> bool {
    matches!(glyph, 'O'..='R')
}

#[inline]
pub const fn is_start_glyph(glyph: char) -> bool {
    glyph == START_GLYPH
}

/// A single grid cell: the glyph as written in the map and its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub glyph: char,
    pub kind: TileKind,
}

impl Tile {
    /// Build a tile from a glyph, or `None` for an unknown glyph.
    pub fn from_glyph(glyph: char) -> Option<Self> {
        TileKind::classify(glyph).map(|kind| Self { glyph, kind })
    }

    /// The tile an item cell becomes after pickup.
    pub const fn free() -> Self {
        Self {
            glyph: FREE_GLYPH,
            kind: TileKind::Floor,
        }
    }
}
