//! Precondition errors raised before anything is drawn.

use thiserror::Error;

/// Paint precondition errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaintError {
    #[error("Camera scale must be positive and finite, got {0}")]
    InvalidScale(f64),
    #[error("Invalid view size: {width}x{height}")]
    InvalidViewSize { width: f64, height: f64 },
    #[error("Invalid rectangle dimensions: {width}x{height}")]
    InvalidRectangle { width: f64, height: f64 },
}

/// Result type for paint operations.
pub type PaintResult<T> = Result<T, PaintError>;
