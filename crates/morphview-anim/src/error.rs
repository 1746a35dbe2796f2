//! Error types for morphview-anim

use thiserror::Error;

/// Errors that can occur while scheduling or coordinating animations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnimError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] morphview_core::Error),

    /// Operator engine error
    #[error("morph error: {0}")]
    Morph(#[from] morphview_morph::MorphError),

    /// Pattern generation error
    #[error("pattern error: {0}")]
    Pattern(#[from] morphview_pattern::PatternError),

    /// Animation inputs disagree in shape
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),
}

/// Result type for animation operations
pub type AnimResult<T> = Result<T, AnimError>;
