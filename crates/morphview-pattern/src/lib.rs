//! morphview-pattern - Input grid generators
//!
//! Sources of input grids for the workbench:
//!
//! - [`glyph`]: 7x5 bitmap font for `0-9` and `A-Z`, centered in a grid
//! - [`random`]: independent per-cell random fill

mod error;
pub mod glyph;
pub mod random;

pub use error::{PatternError, PatternResult};
pub use glyph::{GLYPH_HEIGHT, GLYPH_WIDTH, glyph, render_glyph, render_text};
pub use random::{DEFAULT_DENSITY, random_grid};
