use crate::config::game::WAYPOINT_HALF_SPAN;
use crate::game::canvas::{Canvas, Shape, ShapeId};
use crate::game::element::{GameElement, IdAllocator};
use crate::game::types::{Color, Position};

/// Target the player walks toward. Set by a click, cleared on arrival.
#[derive(Debug, Default)]
pub struct Waypoint {
    pos: Position,
    active: bool,
    ids: Option<[ShapeId; 2]>,
    /// Whether the X is currently on the canvas.
    shown: bool,
}

impl Waypoint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn activate(&mut self, x: f64, y: f64) {
        self.active = true;
        self.pos = Position::new(x, y);
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl GameElement for Waypoint {
    fn create(&mut self, ids: &mut IdAllocator) {
        self.ids = Some([ids.next_id(), ids.next_id()]);
    }

    fn render(&mut self, canvas: &mut dyn Canvas) {
        let Some([first, second]) = self.ids else {
            return;
        };
        if !self.active {
            if self.shown {
                self.shown = false;
                canvas.remove(first);
                canvas.remove(second);
            }
            return;
        }
        self.shown = true;
        let Position { x, y } = self.pos;
        let span = WAYPOINT_HALF_SPAN;
        canvas.draw(first, Shape::Line {
            from: Position::new(x - span, y - span),
            to: Position::new(x + span, y + span),
            color: Color::Green,
            width: 2.0,
        });
        canvas.draw(second, Shape::Line {
            from: Position::new(x - span, y + span),
            to: Position::new(x + span, y - span),
            color: Color::Green,
            width: 2.0,
        });
    }

    fn delete(&mut self, canvas: &mut dyn Canvas) {
        self.shown = false;
        if let Some(ids) = self.ids.take() {
            for id in ids {
                canvas.remove(id);
            }
        }
    }

    fn position(&self) -> Position {
        self.pos
    }
}
