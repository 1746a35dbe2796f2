//! morphview - Animated binary morphology
//!
//! Computes erosion, dilation, opening, and closing of a small boolean grid
//! and animates the result onto a display, one structuring-element footprint
//! per tick.
//!
//! # Overview
//!
//! - [`BooleanGrid`]: the grid model
//! - [`morph`]: the operator engine and structuring elements
//! - [`pattern`]: glyph and random input generators
//! - [`anim`]: the convergence scheduler and request coordinator
//!
//! # Example
//!
//! ```
//! use morphview::morph::{OperationKind, StructuringElement, apply};
//! use morphview::BooleanGrid;
//!
//! let input = BooleanGrid::parse("...\n.x.\n...").unwrap();
//! let sel = StructuringElement::new(3, 3).unwrap();
//! let out = apply(&input, &sel, OperationKind::Dilation).unwrap();
//! assert_eq!(out.count_true(), 9);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use morphview_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use morphview_anim as anim;
pub use morphview_morph as morph;
pub use morphview_pattern as pattern;
