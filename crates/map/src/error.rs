//! Map loading errors.

use std::path::PathBuf;

/// The map text does not describe a valid maze.
///
/// Line numbers are 1-based lines of the map text (the header is line 1).
/// Coordinates are tile coordinates `(x, y)`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("map is empty, expected a '<width>x<height>' header")]
    MissingHeader,

    #[error("line 1: malformed dimension header '{header}', expected '<width>x<height>'")]
    MalformedHeader { header: String },

    #[error("line 1: map dimensions must be positive, got {width}x{height}")]
    EmptyDimensions { width: usize, height: usize },

    #[error("line {line}: expected {expected} map rows, found only {found}")]
    MissingRows {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: row is {found} characters, shorter than expected width {width}")]
    ShortRow {
        line: usize,
        width: usize,
        found: usize,
    },

    #[error("line {line}: unknown character in map: '{glyph}' at ({x},{y})")]
    UnknownGlyph {
        line: usize,
        glyph: char,
        x: usize,
        y: usize,
    },

    #[error(
        "line {line}: map contains more than one start position '@' \
         (first at ({first_x},{first_y}), again at ({x},{y}))"
    )]
    DuplicateStart {
        line: usize,
        first_x: usize,
        first_y: usize,
        x: usize,
        y: usize,
    },

    #[error("map does not contain a start position '@'")]
    MissingStart,
}

/// Any failure while loading a map.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("failed to read map '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Format(#[from] FormatError),
}

pub type Result<T, E = MapError> = std::result::Result<T, E>;
