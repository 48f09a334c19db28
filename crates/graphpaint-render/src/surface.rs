//! Drawing surface trait abstraction.

use kurbo::Point;
use peniko::Color;

/// Primitive drawing operations in view (pixel) coordinates.
///
/// Implementations can record commands, build a Vello scene, or forward to
/// any other 2D backend. Calls are composited in the order they are issued.
pub trait Surface {
    /// Stroke a straight segment.
    fn draw_line(&mut self, p0: Point, p1: Point, color: Color, width: f64);

    /// Draw text with its layout box anchored at `pos` (top-left).
    fn draw_text_top_left(&mut self, pos: Point, text: &str, size: f64, color: Color);

    /// Draw text with its layout box centered on `pos`.
    fn draw_text_centered(&mut self, pos: Point, text: &str, size: f64, color: Color);

    /// Fill and stroke an axis-aligned rectangle.
    fn draw_rect(
        &mut self,
        top_left: Point,
        width: f64,
        height: f64,
        fill_color: Color,
        stroke_color: Color,
        stroke_width: f64,
    );
}
