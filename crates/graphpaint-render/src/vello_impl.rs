//! Vello-based surface implementation.

use crate::surface::Surface;
use kurbo::{Affine, Line, Point, Rect, Stroke, Vec2};
use parley::layout::PositionedLayoutItem;
use parley::{FontContext, Layout, LayoutContext, StyleProperty};
use peniko::{Brush, Color, Fill};
use vello::Scene;

/// Where a text layout is pinned relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextAnchor {
    TopLeft,
    Center,
}

/// Surface that encodes draw calls into a Vello scene.
pub struct VelloSurface {
    /// The Vello scene being built.
    scene: Scene,
    /// Font context for text rendering (system fonts).
    font_cx: FontContext,
    /// Layout context for text rendering.
    layout_cx: LayoutContext<Brush>,
}

impl Default for VelloSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloSurface {
    /// Create a new Vello surface.
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            font_cx: FontContext::new(),
            layout_cx: LayoutContext::new(),
        }
    }

    /// Get the built scene for rendering.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take ownership of the scene (resets internal scene).
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }

    /// Clear the scene before painting a new frame.
    pub fn begin_frame(&mut self) {
        self.scene.reset();
    }

    fn layout_text(&mut self, text: &str, size: f64, brush: &Brush) -> Layout<Brush> {
        let mut builder = self.layout_cx.ranged_builder(&mut self.font_cx, text, 1.0, false);
        builder.push_default(StyleProperty::FontSize(size as f32));
        builder.push_default(StyleProperty::Brush(brush.clone()));
        let mut layout = builder.build(text);

        layout.break_all_lines(None);
        layout.align(None, parley::Alignment::Start, parley::AlignmentOptions::default());
        layout
    }

    fn draw_text(
        &mut self,
        anchor_point: Point,
        text: &str,
        size: f64,
        color: Color,
        anchor: TextAnchor,
    ) {
        if text.is_empty() {
            return;
        }

        let brush = Brush::Solid(color);
        let layout = self.layout_text(text, size, &brush);

        let origin = match anchor {
            TextAnchor::TopLeft => anchor_point,
            TextAnchor::Center => {
                anchor_point - Vec2::new(layout.width() as f64 / 2.0, layout.height() as f64 / 2.0)
            }
        };
        let text_transform = Affine::translate(origin.to_vec2());

        let mut glyph_count = 0;
        for line in layout.lines() {
            for item in line.items() {
                let PositionedLayoutItem::GlyphRun(glyph_run) = item else {
                    continue;
                };
                let mut x = glyph_run.offset();
                let y = glyph_run.baseline();
                let run = glyph_run.run();
                let font = run.font();
                let font_size = run.font_size();
                let synthesis = run.synthesis();
                let glyph_xform = synthesis
                    .skew()
                    .map(|angle| Affine::skew(angle.to_radians().tan() as f64, 0.0));

                let glyphs: Vec<vello::Glyph> = glyph_run
                    .glyphs()
                    .map(|glyph| {
                        let gx = x + glyph.x;
                        let gy = y - glyph.y;
                        x += glyph.advance;
                        glyph_count += 1;
                        vello::Glyph { id: glyph.id, x: gx, y: gy }
                    })
                    .collect();

                if !glyphs.is_empty() {
                    self.scene
                        .draw_glyphs(font)
                        .brush(&brush)
                        .hint(true)
                        .transform(text_transform)
                        .glyph_transform(glyph_xform)
                        .font_size(font_size)
                        .normalized_coords(run.normalized_coords())
                        .draw(Fill::NonZero, glyphs.into_iter());
                }
            }
        }

        if glyph_count == 0 {
            log::warn!("No glyphs shaped for {:?}, is a system font available?", text);
        }
    }
}

impl Surface for VelloSurface {
    fn draw_line(&mut self, p0: Point, p1: Point, color: Color, width: f64) {
        let stroke = Stroke::new(width);
        self.scene
            .stroke(&stroke, Affine::IDENTITY, color, None, &Line::new(p0, p1));
    }

    fn draw_text_top_left(&mut self, pos: Point, text: &str, size: f64, color: Color) {
        self.draw_text(pos, text, size, color, TextAnchor::TopLeft);
    }

    fn draw_text_centered(&mut self, pos: Point, text: &str, size: f64, color: Color) {
        self.draw_text(pos, text, size, color, TextAnchor::Center);
    }

    fn draw_rect(
        &mut self,
        top_left: Point,
        width: f64,
        height: f64,
        fill_color: Color,
        stroke_color: Color,
        stroke_width: f64,
    ) {
        let rect = Rect::from_origin_size(top_left, (width, height));
        self.scene
            .fill(Fill::NonZero, Affine::IDENTITY, fill_color, None, &rect);
        if stroke_width > 0.0 {
            let stroke = Stroke::new(stroke_width);
            self.scene
                .stroke(&stroke, Affine::IDENTITY, stroke_color, None, &rect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{paint_grid, paint_rect_in_world};
    use graphpaint_core::{Camera, Rectangle, Theme};

    #[test]
    fn test_surface_creation() {
        let surface = VelloSurface::new();
        assert!(surface.scene().encoding().is_empty());
    }

    #[test]
    fn test_grid_encodes_scene() {
        let mut surface = VelloSurface::new();
        let camera = Camera::new(800.0, 600.0);
        paint_grid(&mut surface, &camera, &Theme::Gray);
        assert!(!surface.scene().encoding().is_empty());

        surface.begin_frame();
        assert!(surface.scene().encoding().is_empty());
    }

    #[test]
    fn test_rect_encodes_scene() {
        let mut surface = VelloSurface::new();
        let camera = Camera::new(800.0, 600.0);
        let rect = Rectangle::new(Point::ORIGIN, 10.0, 20.0);
        paint_rect_in_world(
            &mut surface,
            &camera,
            &rect,
            Color::from_rgba8(40, 40, 40, 255),
            Color::from_rgba8(220, 220, 220, 255),
        );
        let scene = surface.take_scene();
        assert!(!scene.encoding().is_empty());
        assert!(surface.scene().encoding().is_empty());
    }
}
