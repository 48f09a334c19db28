//! Camera module for world/view transforms.

use crate::error::{PaintError, PaintResult};
use crate::geometry::NumberVector;
use kurbo::{Affine, Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// View width used by `Camera::default`.
pub const DEFAULT_VIEW_WIDTH: f64 = 800.0;
/// View height used by `Camera::default`.
pub const DEFAULT_VIEW_HEIGHT: f64 = 600.0;

/// Camera maps world coordinates onto the visible viewport.
///
/// The world point at `location` is drawn at the center of the view, and
/// world lengths are multiplied by `current_scale` to get pixel lengths:
///
/// `view = (world - location) * current_scale + (view_width / 2, view_height / 2)`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    /// World-space point shown at the view center
    pub location: NumberVector,
    /// Viewport width in pixels
    pub view_width: f64,
    /// Viewport height in pixels
    pub view_height: f64,
    /// World-to-view scale factor, strictly positive
    pub current_scale: f64,
    /// Minimum allowed scale
    pub min_scale: f64,
    /// Maximum allowed scale
    pub max_scale: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            location: Point::ORIGIN,
            view_width: DEFAULT_VIEW_WIDTH,
            view_height: DEFAULT_VIEW_HEIGHT,
            current_scale: 1.0,
            min_scale: 0.05,
            max_scale: 20.0,
        }
    }
}

impl Camera {
    /// Create a camera for a viewport of the given pixel size.
    pub fn new(view_width: f64, view_height: f64) -> Self {
        Self {
            view_width,
            view_height,
            ..Self::default()
        }
    }

    /// Update the viewport size (e.g. on window resize).
    pub fn set_view_size(&mut self, view_width: f64, view_height: f64) {
        self.view_width = view_width;
        self.view_height = view_height;
    }

    /// Center of the viewport in view coordinates.
    pub fn view_center(&self) -> Vec2 {
        Vec2::new(self.view_width / 2.0, self.view_height / 2.0)
    }

    /// Get the affine transform for rendering.
    ///
    /// This transform converts world coordinates to view coordinates.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.view_center())
            * Affine::scale(self.current_scale)
            * Affine::translate(-self.location.to_vec2())
    }

    /// Get the inverse transform for input handling.
    ///
    /// This transform converts view coordinates to world coordinates.
    pub fn inverse_transform(&self) -> Affine {
        Affine::translate(self.location.to_vec2())
            * Affine::scale(1.0 / self.current_scale)
            * Affine::translate(-self.view_center())
    }

    /// Convert a world point to view (pixel) coordinates.
    pub fn location_world2view(&self, world: NumberVector) -> NumberVector {
        let offset = (world - self.location) * self.current_scale;
        Point::ORIGIN + self.view_center() + offset
    }

    /// Convert a view (pixel) point to world coordinates.
    pub fn location_view2world(&self, view: NumberVector) -> NumberVector {
        let offset = (view - self.view_center()).to_vec2() / self.current_scale;
        self.location + offset
    }

    /// Pan the camera by a drag delta in view coordinates.
    ///
    /// Content follows the drag, so the focus moves the opposite way.
    pub fn pan(&mut self, delta: Vec2) {
        self.location -= delta / self.current_scale;
    }

    /// Zoom the camera, keeping the given view point fixed.
    ///
    /// Non-finite or non-positive factors are ignored.
    pub fn zoom_at(&mut self, view_point: NumberVector, factor: f64) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        let new_scale = (self.current_scale * factor).clamp(self.min_scale, self.max_scale);
        if (new_scale - self.current_scale).abs() < f64::EPSILON {
            return;
        }

        let world_point = self.location_view2world(view_point);
        self.current_scale = new_scale;

        // Shift the focus so world_point lands back on view_point
        let drifted = self.location_world2view(world_point);
        self.location += (drifted - view_point) / self.current_scale;
    }

    /// Reset camera to the world origin at scale 1.
    pub fn reset(&mut self) {
        self.location = Point::ORIGIN;
        self.current_scale = 1.0;
    }

    /// Fit the camera to show the given world-space bounds.
    pub fn fit_to_bounds(&mut self, bounds: Rect, padding: f64) {
        if bounds.is_zero_area() {
            self.reset();
            return;
        }

        let usable_width = (self.view_width - padding * 2.0).max(1.0);
        let usable_height = (self.view_height - padding * 2.0).max(1.0);

        let scale_x = usable_width / bounds.width();
        let scale_y = usable_height / bounds.height();
        self.current_scale = scale_x.min(scale_y).clamp(self.min_scale, self.max_scale);
        self.location = bounds.center();
    }

    /// Check the camera can produce a usable transform.
    pub fn validate(&self) -> PaintResult<()> {
        if !self.current_scale.is_finite() || self.current_scale <= 0.0 {
            return Err(PaintError::InvalidScale(self.current_scale));
        }
        let size_ok = |v: f64| v.is_finite() && v >= 0.0;
        if !size_ok(self.view_width) || !size_ok(self.view_height) {
            return Err(PaintError::InvalidViewSize {
                width: self.view_width,
                height: self.view_height,
            });
        }
        Ok(())
    }
}
