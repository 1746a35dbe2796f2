//! Error types for morphview-pattern

use thiserror::Error;

/// Errors that can occur while generating patterns
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PatternError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] morphview_core::Error),

    /// Fill probability outside `[0, 1]`
    #[error("invalid density: {0} (expected 0.0..=1.0)")]
    InvalidDensity(f64),
}

/// Result type for pattern generation
pub type PatternResult<T> = Result<T, PatternError>;
