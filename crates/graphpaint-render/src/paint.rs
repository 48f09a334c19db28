//! Painters for the grid, screen overlays and world rectangles.
//!
//! Every painter is stateless: it reads the camera (and theme) on each call
//! and issues primitive draw calls on the surface. The `try_` variants
//! report precondition failures; the plain variants log them and skip the
//! frame so a bad camera never takes the editor down.

use crate::palette::{ALERT_COLOR, DETAILS_COLOR, GridPalette};
use crate::surface::Surface;
use graphpaint_core::{Camera, PaintResult, Rectangle, Settings, ThemeProvider};
use kurbo::Point;
use peniko::Color;

/// Grid spans `-GRID_HALF_EXTENT..GRID_HALF_EXTENT` world units on both axes.
pub const GRID_HALF_EXTENT: i32 = 1000;
/// World distance between grid lines.
pub const GRID_SPACING: usize = 100;
/// Grid stroke width in world units.
pub const GRID_LINE_WIDTH: f64 = 1.0;

pub const DETAILS_ORIGIN_X: f64 = 20.0;
pub const DETAILS_START_Y: f64 = 30.0;
pub const DETAILS_LINE_SPACING: f64 = 50.0;
pub const DETAILS_FONT_SIZE: f64 = 12.0;

pub const ALERT_FONT_SIZE: f64 = 24.0;

/// Rectangle outline width in pixels, independent of zoom.
pub const RECT_STROKE_WIDTH: f64 = 1.0;

/// World coordinates of the grid lines along one axis.
fn grid_coordinates() -> impl Iterator<Item = f64> {
    (-GRID_HALF_EXTENT..GRID_HALF_EXTENT)
        .step_by(GRID_SPACING)
        .map(f64::from)
}

/// Draw the reference grid, or fail before drawing anything.
pub fn try_paint_grid<S, T>(surface: &mut S, camera: &Camera, theme: &T) -> PaintResult<()>
where
    S: Surface + ?Sized,
    T: ThemeProvider + ?Sized,
{
    camera.validate()?;

    let palette = GridPalette::for_theme(theme.theme());
    let width = GRID_LINE_WIDTH * camera.current_scale;
    let extent = f64::from(GRID_HALF_EXTENT);

    for y in grid_coordinates() {
        surface.draw_line(
            camera.location_world2view(Point::new(-extent, y)),
            camera.location_world2view(Point::new(extent, y)),
            palette.color_at(y),
            width,
        );
    }
    for x in grid_coordinates() {
        surface.draw_line(
            camera.location_world2view(Point::new(x, -extent)),
            camera.location_world2view(Point::new(x, extent)),
            palette.color_at(x),
            width,
        );
    }
    Ok(())
}

/// Draw the reference grid; on failure log and skip it for this frame.
pub fn paint_grid<S, T>(surface: &mut S, camera: &Camera, theme: &T)
where
    S: Surface + ?Sized,
    T: ThemeProvider + ?Sized,
{
    if let Err(e) = try_paint_grid(surface, camera, theme) {
        log::error!("Skipping grid: {}", e);
    }
}

/// Draw caption lines stacked down the top-left corner of the view.
///
/// Screen-anchored. Slot 0 is reserved one line above the nominal start, so
/// line `i` lands at `DETAILS_START_Y + (i - 1) * DETAILS_LINE_SPACING`.
pub fn paint_details_data<S, L>(surface: &mut S, _camera: &Camera, lines: &[L])
where
    S: Surface + ?Sized,
    L: AsRef<str>,
{
    for (i, line) in lines.iter().enumerate() {
        let slot = i as f64 - 1.0;
        surface.draw_text_top_left(
            Point::new(DETAILS_ORIGIN_X, DETAILS_START_Y + slot * DETAILS_LINE_SPACING),
            line.as_ref(),
            DETAILS_FONT_SIZE,
            DETAILS_COLOR,
        );
    }
}

/// Draw a warning centered in the view.
pub fn paint_alert_message<S>(surface: &mut S, camera: &Camera, message: &str)
where
    S: Surface + ?Sized,
{
    surface.draw_text_centered(
        Point::ORIGIN + camera.view_center(),
        message,
        ALERT_FONT_SIZE,
        ALERT_COLOR,
    );
}

/// Draw a world-space rectangle, or fail before drawing.
pub fn try_paint_rect_in_world<S>(
    surface: &mut S,
    camera: &Camera,
    rect: &Rectangle,
    fill_color: Color,
    stroke_color: Color,
) -> PaintResult<()>
where
    S: Surface + ?Sized,
{
    camera.validate()?;
    rect.validate()?;

    surface.draw_rect(
        camera.location_world2view(rect.location_left_top),
        rect.width * camera.current_scale,
        rect.height * camera.current_scale,
        fill_color,
        stroke_color,
        RECT_STROKE_WIDTH,
    );
    Ok(())
}

/// Draw a world-space rectangle; on failure log and skip it.
pub fn paint_rect_in_world<S>(
    surface: &mut S,
    camera: &Camera,
    rect: &Rectangle,
    fill_color: Color,
    stroke_color: Color,
) where
    S: Surface + ?Sized,
{
    if let Err(e) = try_paint_rect_in_world(surface, camera, rect, fill_color, stroke_color) {
        log::error!("Skipping rectangle: {}", e);
    }
}

/// Paint the standard overlay layers for one frame: grid, details, alert.
pub fn paint_frame<S, L>(
    surface: &mut S,
    camera: &Camera,
    settings: &Settings,
    details: &[L],
    alert: Option<&str>,
) where
    S: Surface + ?Sized,
    L: AsRef<str>,
{
    if settings.show_grid {
        paint_grid(surface, camera, settings);
    }
    if settings.details_visible() {
        paint_details_data(surface, camera, details);
    }
    if let Some(message) = alert {
        paint_alert_message(surface, camera, message);
    }
}
