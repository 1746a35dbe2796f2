//! Error types for morphview-core
//!
//! Every fallible grid operation returns [`Result`]. Variants carry enough
//! context to report the offending shape or index.

use thiserror::Error;

/// morphview-core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Grid shape is empty, ragged, or disagrees with an expected shape
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// Cell index outside the grid
    #[error("cell ({row}, {col}) out of bounds for {rows}x{cols} grid")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Unrecognized character in a textual grid
    #[error("invalid pattern character {ch:?} at line {line}")]
    InvalidPattern { ch: char, line: usize },
}

/// Result type for grid operations
pub type Result<T> = std::result::Result<T, Error>;
