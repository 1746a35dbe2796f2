//! morphview-core - Boolean grid model
//!
//! This crate provides the data structures shared by the rest of the
//! workspace:
//!
//! - [`BooleanGrid`] - Fixed-shape, row-major matrix of on/off cells
//! - [`Window`] - Clipped rectangular cell range inside a grid
//!
//! Grids use `(row, col)` indexing with the origin at the top-left cell.

pub mod error;
pub mod grid;
pub mod window;

pub use error::{Error, Result};
pub use grid::BooleanGrid;
pub use window::Window;
