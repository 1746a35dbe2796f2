//! Clipped rectangular windows
//!
//! A [`Window`] names the cells of a grid that a neighborhood covers after
//! clipping to the grid bounds. Windows never extend past the grid they were
//! computed for, so every cell they yield is a valid index.

use std::ops::Range;

/// Half-open range of rows and columns inside a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    rows: Range<usize>,
    cols: Range<usize>,
}

impl Window {
    /// Build the window of `size = (height, width)` cells whose `origin`
    /// cell is placed over `cell`, clipped to a grid of shape `bounds`.
    ///
    /// All pairs are `(row, col)` ordered.
    pub fn centered(
        cell: (usize, usize),
        size: (usize, usize),
        origin: (usize, usize),
        bounds: (usize, usize),
    ) -> Self {
        let top = cell.0 as isize - origin.0 as isize;
        let left = cell.1 as isize - origin.1 as isize;
        Self {
            rows: clip(top, size.0, bounds.0),
            cols: clip(left, size.1, bounds.1),
        }
    }

    /// Row range covered by the window
    pub fn rows(&self) -> Range<usize> {
        self.rows.clone()
    }

    /// Column range covered by the window
    pub fn cols(&self) -> Range<usize> {
        self.cols.clone()
    }

    /// Number of cells in the window
    pub fn len(&self) -> usize {
        self.rows.len() * self.cols.len()
    }

    /// True when clipping removed every cell
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the covered cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows
            .clone()
            .flat_map(move |r| self.cols.clone().map(move |c| (r, c)))
    }
}

fn clip(start: isize, len: usize, limit: usize) -> Range<usize> {
    let end = (start + len as isize).clamp(0, limit as isize) as usize;
    let start = start.clamp(0, limit as isize) as usize;
    start..end
}
