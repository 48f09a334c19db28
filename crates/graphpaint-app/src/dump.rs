//! JSON encoding of recorded draw calls.

use graphpaint_render::DrawCommand;
use kurbo::Point;
use peniko::Color;
use serde_json::{Value, json};

fn point(p: Point) -> Value {
    json!([p.x, p.y])
}

fn rgba(color: Color) -> Value {
    let c = color.to_rgba8();
    json!([c.r, c.g, c.b, c.a])
}

/// Encode one draw call as a JSON object tagged with its kind.
pub fn command_to_json(command: &DrawCommand) -> Value {
    match command {
        DrawCommand::Line { p0, p1, color, width } => json!({
            "kind": command.kind(),
            "p0": point(*p0),
            "p1": point(*p1),
            "color": rgba(*color),
            "width": width,
        }),
        DrawCommand::TextTopLeft { pos, text, size, color }
        | DrawCommand::TextCentered { pos, text, size, color } => json!({
            "kind": command.kind(),
            "pos": point(*pos),
            "text": text,
            "size": size,
            "color": rgba(*color),
        }),
        DrawCommand::Rect {
            top_left,
            width,
            height,
            fill_color,
            stroke_color,
            stroke_width,
        } => json!({
            "kind": command.kind(),
            "top_left": point(*top_left),
            "width": width,
            "height": height,
            "fill_color": rgba(*fill_color),
            "stroke_color": rgba(*stroke_color),
            "stroke_width": stroke_width,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_json() {
        let cmd = DrawCommand::Line {
            p0: Point::new(1.0, 2.0),
            p1: Point::new(3.0, 4.0),
            color: Color::from_rgba8(255, 255, 255, 50),
            width: 1.5,
        };
        let value = command_to_json(&cmd);
        assert_eq!(value["kind"], "line");
        assert_eq!(value["p1"], json!([3.0, 4.0]));
        assert_eq!(value["color"], json!([255, 255, 255, 50]));
        assert_eq!(value["width"], 1.5);
    }

    #[test]
    fn test_centered_text_json() {
        let cmd = DrawCommand::TextCentered {
            pos: Point::new(400.0, 300.0),
            text: "Careful".to_string(),
            size: 24.0,
            color: Color::from_rgba8(255, 255, 0, 255),
        };
        let value = command_to_json(&cmd);
        assert_eq!(value["kind"], "text_centered");
        assert_eq!(value["text"], "Careful");
        assert_eq!(value["pos"], json!([400.0, 300.0]));
    }
}
