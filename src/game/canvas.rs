//! Rendering boundary.
//!
//! The game never paints anything itself. Elements describe shapes and hand them
//! to a [`Canvas`]; the server forwards the recorded commands to the browser,
//! tests inspect them directly.

use serde::{Serialize, Deserialize};

use crate::game::types::{Bounds, Color, Position};

/// Identifier of a shape on the canvas, allocated when an element is created.
pub type ShapeId = u64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Shape {
    Line {
        from: Position,
        to: Position,
        color: Color,
        width: f64,
    },
    /// Axis-aligned square centered on `center`.
    Rect {
        center: Position,
        size: f64,
        fill: Option<Color>,
        outline: Option<Color>,
        width: f64,
    },
    Oval {
        center: Position,
        size: f64,
        fill: Color,
    },
    /// Named image anchored at its center, rotated by `heading` degrees.
    Sprite {
        center: Position,
        size: f64,
        name: String,
        heading: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub family: String,
    pub size: u32,
    pub bold: bool,
}

/// Text centered on `position`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub position: Position,
    pub content: String,
    pub color: Color,
    pub font: Font,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op")]
pub enum DrawCommand {
    /// Create the shape, or move/restyle it if the id already exists.
    Draw { id: ShapeId, shape: Shape },
    Remove { id: ShapeId },
    Text(Text),
}

pub trait Canvas {
    /// Current drawable size.
    fn bounds(&self) -> Bounds;
    fn draw(&mut self, id: ShapeId, shape: Shape);
    fn remove(&mut self, id: ShapeId);
    fn draw_text(&mut self, text: Text);
}

/// Canvas that buffers every command until it is drained.
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    bounds: Bounds,
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            commands: Vec::new(),
        }
    }

    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    #[cfg(test)]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain the buffered commands, leaving the canvas empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    #[cfg(test)]
    pub fn texts(&self) -> impl Iterator<Item = &Text> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text(text) => Some(text),
            _ => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn draw(&mut self, id: ShapeId, shape: Shape) {
        self.commands.push(DrawCommand::Draw { id, shape });
    }

    fn remove(&mut self, id: ShapeId) {
        self.commands.push(DrawCommand::Remove { id });
    }

    fn draw_text(&mut self, text: Text) {
        self.commands.push(DrawCommand::Text(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_commands_drains_buffer() {
        let mut canvas = RecordingCanvas::new(Bounds::new(100.0, 100.0));
        canvas.draw(1, Shape::Oval { center: Position::new(1.0, 2.0), size: 5.0, fill: Color::Blue });
        canvas.remove(1);

        let drained = canvas.take_commands();
        assert_eq!(drained.len(), 2);
        assert!(canvas.commands().is_empty());
    }

    #[test]
    fn test_draw_command_wire_format() {
        let command = DrawCommand::Draw {
            id: 7,
            shape: Shape::Rect {
                center: Position::new(10.0, 20.0),
                size: 20.0,
                fill: Some(Color::Red),
                outline: None,
                width: 1.0,
            },
        };
        let json = serde_json::to_value(&command).unwrap();
        assert_eq!(json["op"], "Draw");
        assert_eq!(json["id"], 7);
        assert_eq!(json["shape"]["kind"], "Rect");
        assert_eq!(json["shape"]["fill"], "red");
    }
}
