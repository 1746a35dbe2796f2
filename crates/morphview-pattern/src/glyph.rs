//! Bitmap glyphs
//!
//! A fixed 7x5 font covering the digits `0-9` and the letters `A-Z`.
//! Lowercase letters map to their uppercase glyph. Rendering places the
//! glyph centered in the target grid; anything that falls outside a small
//! grid is clipped.

use crate::PatternResult;
use morphview_core::BooleanGrid;

/// Glyph height in cells
pub const GLYPH_HEIGHT: usize = 7;

/// Glyph width in cells
pub const GLYPH_WIDTH: usize = 5;

const FONT: [(char, [&str; GLYPH_HEIGHT]); 36] = [
    ('0', [".xxx.", "x...x", "x...x", "x...x", "x...x", "x...x", ".xxx."]),
    ('1', [".xx..", "..x..", "..x..", "..x..", "..x..", "..x..", ".xx.."]),
    ('2', ["xxxxx", "....x", "....x", "xxxxx", "x....", "x....", "xxxxx"]),
    ('3', ["xxxxx", "....x", "....x", "xxxxx", "....x", "....x", "xxxxx"]),
    ('4', ["x...x", "x...x", "x...x", "xxxxx", "....x", "....x", "....x"]),
    ('5', ["xxxxx", "x....", "x....", "xxxxx", "....x", "....x", "xxxxx"]),
    ('6', ["xxxxx", "x....", "x....", "xxxxx", "x...x", "x...x", "xxxxx"]),
    ('7', ["xxxxx", "....x", "....x", "....x", "....x", "....x", "....x"]),
    ('8', ["xxxxx", "x...x", "x...x", "xxxxx", "x...x", "x...x", "xxxxx"]),
    ('9', ["xxxxx", "x...x", "x...x", "xxxxx", "....x", "....x", "xxxxx"]),
    ('A', [".xxx.", "x...x", "x...x", "xxxxx", "x...x", "x...x", "x...x"]),
    ('B', ["xxxx.", "x...x", "x...x", "xxxx.", "x...x", "x...x", "xxxx."]),
    ('C', [".xxxx", "x....", "x....", "x....", "x....", "x....", ".xxxx"]),
    ('D', ["xxxx.", "x...x", "x...x", "x...x", "x...x", "x...x", "xxxx."]),
    ('E', ["xxxxx", "x....", "x....", "xxxxx", "x....", "x....", "xxxxx"]),
    ('F', ["xxxxx", "x....", "x....", "xxxxx", "x....", "x....", "x...."]),
    ('G', [".xxxx", "x....", "x....", "x..xx", "x...x", "x...x", ".xxxx"]),
    ('H', ["x...x", "x...x", "x...x", "xxxxx", "x...x", "x...x", "x...x"]),
    ('I', ["xxxxx", "..x..", "..x..", "..x..", "..x..", "..x..", "xxxxx"]),
    ('J', ["xxxxx", "....x", "....x", "....x", "....x", "x...x", "xxxxx"]),
    ('K', ["xx...", "x.x..", "x..x.", "x...x", "x..x.", "x.x..", "xx..."]),
    ('L', ["x....", "x....", "x....", "x....", "x....", "x....", "xxxxx"]),
    ('M', ["x.x.x", "x.x.x", "x.x.x", "x...x", "x...x", "x...x", "x...x"]),
    ('N', ["x...x", "x...x", "xx..x", "x.x.x", "x.x.x", "x..xx", "x...x"]),
    ('O', [".xxx.", "x...x", "x...x", "x...x", "x...x", "x...x", ".xxx."]),
    ('P', ["xxxxx", "x...x", "x...x", "xxxxx", "x....", "x....", "x...."]),
    ('Q', [".xxx.", "x...x", "x...x", "x...x", "x...x", "x..xx", ".xxxx"]),
    ('R', ["xxxxx", "x...x", "x...x", "xxxxx", "xx...", "x.x..", "x...x"]),
    ('S', ["xxxxx", "x....", "x....", "xxxxx", "....x", "....x", "xxxxx"]),
    ('T', ["xxxxx", "..x..", "..x..", "..x..", "..x..", "..x..", "..x.."]),
    ('U', ["x...x", "x...x", "x...x", "x...x", "x...x", "x...x", ".xxx."]),
    ('V', ["x...x", "x...x", ".x.x.", "..x..", "..x..", ".x.x.", "..x.."]),
    ('W', ["x...x", "x...x", "x...x", "x.x.x", "x.x.x", "x.x.x", "x.x.x"]),
    ('X', ["x...x", "x...x", ".x.x.", "..x..", "..x..", ".x.x.", "x...x"]),
    ('Y', ["x...x", "x...x", ".x.x.", "..x..", "..x..", "..x..", "..x.."]),
    ('Z', ["xxxxx", "....x", "...x.", "..x..", "..x..", ".x...", "xxxxx"]),
];

/// Look up the bitmap for `ch`, or `None` if the font does not cover it.
pub fn glyph(ch: char) -> Option<BooleanGrid> {
    let ch = ch.to_ascii_uppercase();
    let (_, rows) = FONT.iter().find(|(c, _)| *c == ch)?;

    let mut grid = BooleanGrid::new(GLYPH_HEIGHT, GLYPH_WIDTH).ok()?;
    for (r, line) in rows.iter().enumerate() {
        for (c, cell) in line.bytes().enumerate() {
            if cell == b'x' {
                grid.set_unchecked(r, c, true);
            }
        }
    }
    Some(grid)
}

/// Render `ch` centered in a `rows x cols` grid.
///
/// Characters outside the font produce an all-clear grid. The glyph's top-left
/// corner lands at `((rows - 7) / 2, (cols - 5) / 2)`, or at 0 when the grid
/// is smaller than the glyph in that direction.
pub fn render_glyph(ch: char, rows: usize, cols: usize) -> PatternResult<BooleanGrid> {
    let mut grid = BooleanGrid::new(rows, cols)?;
    let Some(bitmap) = glyph(ch) else {
        return Ok(grid);
    };

    let top = rows.saturating_sub(GLYPH_HEIGHT) / 2;
    let left = cols.saturating_sub(GLYPH_WIDTH) / 2;
    for (r, c, set) in bitmap.cells() {
        if set && top + r < rows && left + c < cols {
            grid.set_unchecked(top + r, left + c, true);
        }
    }
    Ok(grid)
}

/// Render the first character of `text`; empty text gives an all-clear grid.
pub fn render_text(text: &str, rows: usize, cols: usize) -> PatternResult<BooleanGrid> {
    match text.trim().chars().next() {
        Some(ch) => render_glyph(ch, rows, cols),
        None => Ok(BooleanGrid::new(rows, cols)?),
    }
}
