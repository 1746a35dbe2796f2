//! Error types for morphview-morph

use thiserror::Error;

/// Errors that can occur during morphological operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MorphError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] morphview_core::Error),

    /// Structuring element or grid has an unusable shape
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// Operation name not recognized
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
}

/// Result type for morphological operations
pub type MorphResult<T> = Result<T, MorphError>;
