//! Text map format.
//!
//! ```text
//! <width>x<height>
//! <height rows, each at least width characters>
//! ```
//!
//! Characters past `width` on a row are ignored, as are lines after the last
//! row.

use std::path::Path;

use crate::error::{FormatError, MapError, Result};
use crate::grid::TileGrid;
use crate::tile::{Tile, TileKind, TilePos};

/// Parse a map description into its grid and unique start cell.
pub fn parse(text: &str) -> Result<(TileGrid, TilePos), FormatError> {
    let mut lines = text.lines();

    let header = lines.next().ok_or(FormatError::MissingHeader)?;
    let (width, height) = parse_header(header)?;

    // Grown row by row; the header alone is not trusted for sizing.
    let mut cells = Vec::new();
    let mut start: Option<(usize, usize)> = None;

    for y in 0..height {
        let line_number = y + 2;
        let row = lines.next().ok_or(FormatError::MissingRows {
            line: line_number,
            expected: height,
            found: y,
        })?;

        let before = cells.len();
        for (x, glyph) in row.chars().take(width).enumerate() {
            if glyph == crate::tile::START_GLYPH {
                if let Some((first_x, first_y)) = start {
                    return Err(FormatError::DuplicateStart {
                        line: line_number,
                        first_x,
                        first_y,
                        x,
                        y,
                    });
                }
                start = Some((x, y));
            }

            let tile = Tile::from_glyph(glyph).ok_or(FormatError::UnknownGlyph {
                line: line_number,
                glyph,
                x,
                y,
            })?;
            cells.push(tile);
        }

        if cells.len() - before < width {
            return Err(FormatError::ShortRow {
                line: line_number,
                width,
                found: row.chars().count(),
            });
        }
    }

    let (x, y) = start.ok_or(FormatError::MissingStart)?;
    let grid = TileGrid::from_cells(width, height, cells);

    log::debug!(
        "parsed {}x{} map: start=({x},{y}) walls={} items={}",
        width,
        height,
        grid.iter().filter(|(_, tile)| tile.kind.is_wall()).count(),
        grid.count(TileKind::Item),
    );

    Ok((grid, TilePos::new(x as i32, y as i32)))
}

fn parse_header(header: &str) -> Result<(usize, usize), FormatError> {
    let trimmed = header.trim_start_matches('\u{feff}').trim();
    let malformed = || FormatError::MalformedHeader {
        header: header.to_string(),
    };

    let (w, h) = trimmed.split_once('x').ok_or_else(malformed)?;
    let width: usize = w.trim().parse().map_err(|_| malformed())?;
    let height: usize = h.trim().parse().map_err(|_| malformed())?;

    if width == 0 || height == 0 {
        return Err(FormatError::EmptyDimensions { width, height });
    }
    Ok((width, height))
}

/// Read and parse a map file.
pub fn load(path: impl AsRef<Path>) -> Result<(TileGrid, TilePos)> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| MapError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed = parse(&text)?;
    log::info!("loaded map '{}'", path.display());
    Ok(parsed)
}
