//! In-memory surface that records draw calls.

use crate::surface::Surface;
use kurbo::Point;
use peniko::Color;

/// A single primitive draw call.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    Line {
        p0: Point,
        p1: Point,
        color: Color,
        width: f64,
    },
    TextTopLeft {
        pos: Point,
        text: String,
        size: f64,
        color: Color,
    },
    TextCentered {
        pos: Point,
        text: String,
        size: f64,
        color: Color,
    },
    Rect {
        top_left: Point,
        width: f64,
        height: f64,
        fill_color: Color,
        stroke_color: Color,
        stroke_width: f64,
    },
}

impl DrawCommand {
    /// Short name of the primitive.
    pub fn kind(&self) -> &'static str {
        match self {
            DrawCommand::Line { .. } => "line",
            DrawCommand::TextTopLeft { .. } => "text_top_left",
            DrawCommand::TextCentered { .. } => "text_centered",
            DrawCommand::Rect { .. } => "rect",
        }
    }
}

/// Surface that keeps every draw call, for testing and frame dumps.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Create a new empty recording surface.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Take ownership of the recorded commands (resets the surface).
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Surface for RecordingSurface {
    fn draw_line(&mut self, p0: Point, p1: Point, color: Color, width: f64) {
        self.commands.push(DrawCommand::Line { p0, p1, color, width });
    }

    fn draw_text_top_left(&mut self, pos: Point, text: &str, size: f64, color: Color) {
        self.commands.push(DrawCommand::TextTopLeft {
            pos,
            text: text.to_string(),
            size,
            color,
        });
    }

    fn draw_text_centered(&mut self, pos: Point, text: &str, size: f64, color: Color) {
        self.commands.push(DrawCommand::TextCentered {
            pos,
            text: text.to_string(),
            size,
            color,
        });
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
        self.commands.push(DrawCommand::Rect {
            top_left,
            width,
            height,
            fill_color,
            stroke_color,
            stroke_width,
        });
    }
}
