//! World-space geometry types.

use crate::error::{PaintError, PaintResult};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A 2D coordinate, used for both world-space and view-space points.
pub type NumberVector = Point;

/// Axis-aligned rectangle in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Top-left corner
    pub location_left_top: NumberVector,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    /// Create a new rectangle from its top-left corner and size.
    pub fn new(location_left_top: NumberVector, width: f64, height: f64) -> Self {
        Self {
            location_left_top,
            width,
            height,
        }
    }

    /// Dimensions must be finite and non-negative.
    pub fn validate(&self) -> PaintResult<()> {
        let ok = |v: f64| v.is_finite() && v >= 0.0;
        if ok(self.width) && ok(self.height) {
            Ok(())
        } else {
            Err(PaintError::InvalidRectangle {
                width: self.width,
                height: self.height,
            })
        }
    }
}
