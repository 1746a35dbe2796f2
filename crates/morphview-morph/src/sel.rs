//! Structuring element for binary morphology
//!
//! A structuring element is a small boolean grid whose set cells define the
//! neighborhood probed around each cell under test. Its origin is the
//! center cell `(height / 2, width / 2)` (integer division), so even
//! dimensions lean toward the bottom-right of the probed cell.

use crate::{MorphError, MorphResult};
use morphview_core::{BooleanGrid, Window};

/// Structuring element
///
/// Wraps a [`BooleanGrid`] and adds origin semantics. Any shape of at least
/// 1x1 is accepted, including an element with no set cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuringElement {
    grid: BooleanGrid,
}

impl StructuringElement {
    /// Create a rectangular "brick" element with every cell set
    pub fn new(height: usize, width: usize) -> MorphResult<Self> {
        let grid = BooleanGrid::filled(height, width, true).map_err(shape_error)?;
        Ok(Self { grid })
    }

    /// Wrap an existing grid
    pub fn from_grid(grid: BooleanGrid) -> Self {
        Self { grid }
    }

    /// Create an element from nested rows.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::ShapeMismatch`] for empty or ragged rows.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> MorphResult<Self> {
        let grid = BooleanGrid::from_rows(rows).map_err(shape_error)?;
        Ok(Self { grid })
    }

    /// Parse the grid text form (`x` set, `.` clear, one line per row)
    ///
    /// # Example
    ///
    /// ```
    /// use morphview_morph::StructuringElement;
    ///
    /// let sel = StructuringElement::parse(".x.\nxxx\n.x.").unwrap();
    /// assert_eq!(sel.origin(), (1, 1));
    /// assert_eq!(sel.hit_count(), 5);
    /// ```
    pub fn parse(text: &str) -> MorphResult<Self> {
        let grid = BooleanGrid::parse(text).map_err(shape_error)?;
        Ok(Self { grid })
    }

    /// Single set cell; every operation with it is the identity
    pub fn identity() -> Self {
        Self {
            grid: BooleanGrid::single(true),
        }
    }

    /// Plus-sign element of `size x size` through the center row and column
    pub fn cross(size: usize) -> MorphResult<Self> {
        let mut grid = BooleanGrid::new(size, size).map_err(shape_error)?;
        let mid = size / 2;
        for i in 0..size {
            grid.set_unchecked(mid, i, true);
            grid.set_unchecked(i, mid, true);
        }
        Ok(Self { grid })
    }

    /// Height (rows)
    #[inline]
    pub fn height(&self) -> usize {
        self.grid.rows()
    }

    /// Width (columns)
    #[inline]
    pub fn width(&self) -> usize {
        self.grid.cols()
    }

    /// `(height, width)`
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        self.grid.shape()
    }

    /// Origin cell as `(row, col)`
    #[inline]
    pub fn origin(&self) -> (usize, usize) {
        (self.height() / 2, self.width() / 2)
    }

    /// Underlying grid
    pub fn grid(&self) -> &BooleanGrid {
        &self.grid
    }

    /// Consume the element and return its grid
    pub fn into_grid(self) -> BooleanGrid {
        self.grid
    }

    /// Get an element cell, `None` if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.grid.get(row, col)
    }

    /// Flip an element cell and return its new value
    pub fn toggle(&mut self, row: usize, col: usize) -> MorphResult<bool> {
        Ok(self.grid.toggle(row, col)?)
    }

    /// Count the set cells
    pub fn hit_count(&self) -> usize {
        self.grid.count_true()
    }

    /// Iterate over set positions relative to the origin, row-major
    pub fn offsets(&self) -> impl Iterator<Item = (isize, isize)> + '_ {
        let (cr, cc) = self.origin();
        let (cr, cc) = (cr as isize, cc as isize);

        self.grid.cells().filter_map(move |(r, c, set)| {
            if set {
                Some((r as isize - cr, c as isize - cc))
            } else {
                None
            }
        })
    }

    /// True if every set offset `(dr, dc)` has its mirror `(-dr, -dc)` set.
    pub fn is_symmetric(&self) -> bool {
        let (cr, cc) = self.origin();
        self.offsets().all(|(dr, dc)| {
            self.grid
                .probe(cr as isize - dr, cc as isize - dc)
                .unwrap_or(false)
        })
    }

    /// Window of the element's size centered on `(row, col)`, clipped to a
    /// grid of shape `bounds`.
    pub fn footprint_at(&self, row: usize, col: usize, bounds: (usize, usize)) -> Window {
        Window::centered((row, col), self.shape(), self.origin(), bounds)
    }

    /// True if the unclipped footprint at `(row, col)` fits inside `bounds`.
    pub fn fits_at(&self, row: usize, col: usize, bounds: (usize, usize)) -> bool {
        self.footprint_at(row, col, bounds).len() == self.height() * self.width()
    }
}

fn shape_error(err: morphview_core::Error) -> MorphError {
    match err {
        morphview_core::Error::ShapeMismatch(msg) => MorphError::ShapeMismatch(msg),
        other => MorphError::Core(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brick() {
        let sel = StructuringElement::new(3, 5).unwrap();
        assert_eq!(sel.shape(), (3, 5));
        assert_eq!(sel.origin(), (1, 2));
        assert_eq!(sel.hit_count(), 15);
        assert!(sel.is_symmetric());
    }

    #[test]
    fn test_zero_dimension() {
        assert!(matches!(
            StructuringElement::new(0, 3),
            Err(MorphError::ShapeMismatch(_))
        ));
        let rows: Vec<Vec<bool>> = vec![];
        assert!(matches!(
            StructuringElement::from_rows(&rows),
            Err(MorphError::ShapeMismatch(_))
        ));
        assert!(matches!(
            StructuringElement::parse(""),
            Err(MorphError::ShapeMismatch(_))
        ));
    }

    #[test]
    fn test_offsets_relative_to_origin() {
        let sel = StructuringElement::cross(3).unwrap();
        let offsets: Vec<_> = sel.offsets().collect();
        assert_eq!(offsets, vec![(-1, 0), (0, -1), (0, 0), (0, 1), (1, 0)]);
    }

    #[test]
    fn test_even_origin() {
        let sel = StructuringElement::new(2, 2).unwrap();
        assert_eq!(sel.origin(), (1, 1));
        let offsets: Vec<_> = sel.offsets().collect();
        assert_eq!(offsets, vec![(-1, -1), (-1, 0), (0, -1), (0, 0)]);
        assert!(!sel.is_symmetric());
    }

    #[test]
    fn test_identity() {
        let sel = StructuringElement::identity();
        assert_eq!(sel.shape(), (1, 1));
        assert_eq!(sel.offsets().collect::<Vec<_>>(), vec![(0, 0)]);
    }

    #[test]
    fn test_asymmetric_detected() {
        let sel = StructuringElement::parse("x..\n.x.\n...").unwrap();
        assert!(!sel.is_symmetric());
        let sel = StructuringElement::parse("x..\n.x.\n..x").unwrap();
        assert!(sel.is_symmetric());
    }

    #[test]
    fn test_toggle() {
        let mut sel = StructuringElement::new(3, 3).unwrap();
        assert!(!sel.toggle(0, 0).unwrap());
        assert_eq!(sel.hit_count(), 8);
        assert!(sel.toggle(3, 0).is_err());
    }

    #[test]
    fn test_footprint() {
        let sel = StructuringElement::new(3, 3).unwrap();
        assert!(sel.fits_at(1, 1, (3, 3)));
        assert!(!sel.fits_at(0, 1, (3, 3)));
        let w = sel.footprint_at(0, 0, (3, 3));
        assert_eq!(w.len(), 4);
    }
}
