//! Property tests for map parsing and glyph classification.

use maze_map::{parse, FormatError, TileKind, TilePos};
use proptest::prelude::*;

/// Every glyph in a documented range, except the start marker.
fn documented_glyphs() -> Vec<char> {
    let mut glyphs = vec![' ', '|', '*', '^', '!'];
    glyphs.extend('a'..='z');
    glyphs.extend('A'..='R');
    glyphs.extend('T'..='Z');
    glyphs
}

fn glyph() -> impl Strategy<Value = char> {
    prop::sample::select(documented_glyphs())
}

/// A `width x height` glyph matrix (no start marker) plus a cell index for
/// the start marker.
fn map_body() -> impl Strategy<Value = (usize, usize, Vec<char>, usize)> {
    (1usize..24, 1usize..24).prop_flat_map(|(w, h)| {
        (
            Just(w),
            Just(h),
            prop::collection::vec(glyph(), w * h),
            0..w * h,
        )
    })
}

fn render(width: usize, height: usize, cells: &[char]) -> String {
    let mut text = format!("{width}x{height}\n");
    for row in cells.chunks(width) {
        text.extend(row.iter());
        text.push('\n');
    }
    text
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_valid_map_parses((w, h, mut cells, start) in map_body()) {
        cells[start] = '@';
        let (grid, start_pos) = parse(&render(w, h, &cells)).unwrap();

        prop_assert_eq!(grid.width(), w);
        prop_assert_eq!(grid.height(), h);
        prop_assert_eq!(start_pos, TilePos::new((start % w) as i32, (start / w) as i32));
        prop_assert_eq!(grid.kind_at(start_pos), Some(TileKind::Start));
        prop_assert_eq!(grid.count(TileKind::Start), 1);
    }

    #[test]
    fn prop_collectibles_match_item_glyphs((w, h, mut cells, start) in map_body()) {
        cells[start] = '@';
        let (grid, _) = parse(&render(w, h, &cells)).unwrap();

        let expected: Vec<TilePos> = cells
            .iter()
            .enumerate()
            .filter(|(_, c)| ('T'..='Z').contains(*c))
            .map(|(i, _)| TilePos::new((i % w) as i32, (i / w) as i32))
            .collect();
        prop_assert_eq!(grid.collectibles().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn prop_documented_glyphs_have_one_kind(c in glyph()) {
        prop_assert!(TileKind::classify(c).is_some());
    }

    #[test]
    fn prop_unknown_glyph_rejected(
        (w, h, mut cells, start) in map_body(),
        bad in any::<char>().prop_filter("outside every range, not a line break", |c| {
            TileKind::classify(*c).is_none() && *c != '\n' && *c != '\r'
        }),
        slot in any::<prop::sample::Index>(),
    ) {
        cells[start] = '@';
        let bad_index = slot.index(w * h);
        prop_assume!(bad_index != start);
        cells[bad_index] = bad;

        let is_unknown_glyph = matches!(
            parse(&render(w, h, &cells)),
            Err(FormatError::UnknownGlyph { .. })
        );
        prop_assert!(is_unknown_glyph);
    }

    #[test]
    fn prop_zero_starts_rejected((w, h, cells, _) in map_body()) {
        prop_assert_eq!(parse(&render(w, h, &cells)).unwrap_err(), FormatError::MissingStart);
    }

    #[test]
    fn prop_two_starts_rejected((w, h, mut cells, start) in map_body(), other in any::<prop::sample::Index>()) {
        let second = other.index(w * h);
        prop_assume!(second != start);
        cells[start] = '@';
        cells[second] = '@';

        let is_duplicate = matches!(
            parse(&render(w, h, &cells)),
            Err(FormatError::DuplicateStart { .. })
        );
        prop_assert!(is_duplicate);
    }
}
