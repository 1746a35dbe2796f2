//! morphview-morph - Binary morphological operator engine
//!
//! This crate provides:
//!
//! - [`StructuringElement`] for defining the probed neighborhood
//! - [`OperationKind`] selecting one of the four operators
//! - Binary morphology: erosion, dilation, opening, closing
//!
//! Every operator is a pure function from an input grid and an element to a
//! new grid of the same shape.

pub mod binary;
mod error;
pub mod operation;
pub mod sel;

pub use error::{MorphError, MorphResult};
pub use operation::OperationKind;
pub use sel::StructuringElement;

pub use binary::{apply, apply_named, close, dilate, erode, open};
