//! BooleanGrid - fixed-shape boolean matrix
//!
//! The grid is the unit of data exchanged between every component: input
//! images, structuring elements, and operator results are all grids.
//!
//! # Layout
//!
//! - Cells are stored row-major in a single `Vec<bool>`
//! - `(0, 0)` is the top-left cell
//! - The shape is fixed at construction; both dimensions are at least 1
//!
//! # Text form
//!
//! [`BooleanGrid::parse`] and the [`Display`](std::fmt::Display) impl use one
//! line per row, `x` for a set cell and `.` for a clear one. Parsing also
//! accepts `1`/`0` and ignores blanks inside a line.

use crate::error::{Error, Result};
use std::fmt;

/// Rectangular matrix of booleans
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BooleanGrid {
    rows: usize,
    cols: usize,
    data: Vec<bool>,
}

impl BooleanGrid {
    /// Create a grid with every cell clear.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Self::filled(rows, cols, false)
    }

    /// Create a grid with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: bool) -> Result<Self> {
        check_dimensions(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        })
    }

    /// Create a 1x1 grid holding `value`
    pub fn single(value: bool) -> Self {
        Self {
            rows: 1,
            cols: 1,
            data: vec![value],
        }
    }

    /// Create a grid from nested rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if there are no rows, the first row is
    /// empty, or any row length differs from the first.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        check_dimensions(rows.len(), cols)?;

        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(Error::ShapeMismatch(format!(
                    "row {} has {} cells, expected {}",
                    i,
                    row.len(),
                    cols
                )));
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Parse the text form (see module docs). Blank lines are skipped.
    pub fn parse(text: &str) -> Result<Self> {
        let mut rows = Vec::new();
        for (line_no, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let mut row = Vec::with_capacity(line.len());
            for ch in line.chars() {
                match ch {
                    'x' | 'X' | '1' => row.push(true),
                    '.' | '0' => row.push(false),
                    c if c.is_whitespace() => {}
                    c => {
                        return Err(Error::InvalidPattern {
                            ch: c,
                            line: line_no + 1,
                        });
                    }
                }
            }
            rows.push(row);
        }
        Self::from_rows(&rows)
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// True if `other` has the same shape
    pub fn same_shape(&self, other: &BooleanGrid) -> bool {
        self.shape() == other.shape()
    }

    /// Get the cell at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Get a cell without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows` or `col >= cols`.
    #[inline]
    pub fn get_unchecked(&self, row: usize, col: usize) -> bool {
        assert!(col < self.cols, "column {} out of bounds", col);
        self.data[row * self.cols + col]
    }

    /// Read the cell at a signed position; out-of-range positions give `None`.
    #[inline]
    pub fn probe(&self, row: isize, col: isize) -> Option<bool> {
        if row < 0 || col < 0 {
            return None;
        }
        self.get(row as usize, col as usize)
    }

    /// Set the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the cell is outside the grid.
    pub fn set(&mut self, row: usize, col: usize, value: bool) -> Result<()> {
        let idx = self.index(row, col)?;
        self.data[idx] = value;
        Ok(())
    }

    /// Set a cell without bounds checking.
    #[inline]
    pub fn set_unchecked(&mut self, row: usize, col: usize, value: bool) {
        assert!(col < self.cols, "column {} out of bounds", col);
        self.data[row * self.cols + col] = value;
    }

    /// Flip the cell at `(row, col)` and return its new value.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool> {
        let idx = self.index(row, col)?;
        self.data[idx] = !self.data[idx];
        Ok(self.data[idx])
    }

    /// Number of set cells
    pub fn count_true(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }

    /// True if no cell is set
    pub fn is_clear(&self) -> bool {
        !self.data.iter().any(|&v| v)
    }

    /// True if every cell is set
    pub fn is_full(&self) -> bool {
        self.data.iter().all(|&v| v)
    }

    /// Grid with every cell inverted
    pub fn complement(&self) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&v| !v).collect(),
        }
    }

    /// Raw row-major cell data
    pub fn data(&self) -> &[bool] {
        &self.data
    }

    /// Cells of one row
    pub fn row(&self, row: usize) -> Option<&[bool]> {
        if row < self.rows {
            Some(&self.data[row * self.cols..(row + 1) * self.cols])
        } else {
            None
        }
    }

    /// Iterate over `(row, col, value)` in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        let cols = self.cols;
        self.data
            .iter()
            .enumerate()
            .map(move |(idx, &v)| (idx / cols, idx % cols, v))
    }

    /// Cells whose value differs in `other`, as `(row, col, other_value)`,
    /// in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if the shapes differ.
    pub fn differences<'a>(
        &'a self,
        other: &'a BooleanGrid,
    ) -> Result<impl Iterator<Item = (usize, usize, bool)> + 'a> {
        self.check_same_shape(other)?;
        Ok(self
            .cells()
            .zip(other.data.iter())
            .filter(|((_, _, a), b)| a != *b)
            .map(|((r, c, _), &b)| (r, c, b)))
    }

    /// Fail with [`Error::ShapeMismatch`] unless `other` has the same shape.
    pub fn check_same_shape(&self, other: &BooleanGrid) -> Result<()> {
        if self.same_shape(other) {
            Ok(())
        } else {
            Err(Error::ShapeMismatch(format!(
                "{}x{} vs {}x{}",
                self.rows, self.cols, other.rows, other.cols
            )))
        }
    }

    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row < self.rows && col < self.cols {
            Ok(row * self.cols + col)
        } else {
            Err(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }
}

impl fmt::Display for BooleanGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            if r > 0 {
                writeln!(f)?;
            }
            for c in 0..self.cols {
                let ch = if self.get_unchecked(r, c) { 'x' } else { '.' };
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}

fn check_dimensions(rows: usize, cols: usize) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(Error::ShapeMismatch(format!(
            "grid dimensions must be positive, got {}x{}",
            rows, cols
        )));
    }
    Ok(())
}
