//! Player entity logic.
//!
//! The player has a single rule: walk toward the active waypoint at constant
//! speed, and win once inside home.

use crate::config::game::{PLAYER_SIZE, PLAYER_SPEED, PLAYER_START_X};
use crate::game::canvas::{Canvas, Shape, ShapeId};
use crate::game::element::{GameElement, IdAllocator, TickContext};
use crate::game::types::{Bounds, Outcome, Position};

#[derive(Debug, Clone)]
pub struct Player {
    pos: Position,
    speed: f64,
    /// Facing in degrees, 0 pointing right, growing clockwise on screen.
    heading: f64,
    id: Option<ShapeId>,
}

impl Player {
    pub fn new(pos: Position, speed: f64) -> Self {
        Self { pos, speed, heading: 0.0, id: None }
    }

    /// Player at its start point: left side of the screen, vertically centered.
    pub fn at_start(bounds: Bounds) -> Self {
        Self::new(Position::new(PLAYER_START_X, (bounds.height / 2.0).floor()), PLAYER_SPEED)
    }

    #[cfg(test)]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    #[cfg(test)]
    pub fn heading(&self) -> f64 {
        self.heading
    }
}

impl GameElement for Player {
    fn create(&mut self, ids: &mut IdAllocator) {
        self.id = Some(ids.next_id());
    }

    fn update(&mut self, ctx: &mut TickContext<'_>) {
        if ctx.is_terminal() {
            return;
        }
        if ctx.home.contains(self.pos) {
            ctx.terminate(Outcome::Won);
            return;
        }
        if !ctx.waypoint.is_active() {
            return;
        }

        let target = ctx.waypoint.position();
        let (dx, dy) = (target.x - self.pos.x, target.y - self.pos.y);
        let distance = dx.hypot(dy);
        if distance > 0.0 {
            self.heading = dy.atan2(dx).to_degrees();
            let step = self.speed.min(distance);
            self.pos.x += dx / distance * step;
            self.pos.y += dy / distance * step;
        }

        // Close enough: stepping again would only oscillate around the target.
        if self.pos.distance_to(target) < self.speed {
            ctx.waypoint.deactivate();
        }
    }

    fn render(&mut self, canvas: &mut dyn Canvas) {
        if let Some(id) = self.id {
            canvas.draw(id, Shape::Sprite {
                center: self.pos,
                size: PLAYER_SIZE,
                name: "turtle".to_string(),
                heading: self.heading,
            });
        }
    }

    fn delete(&mut self, canvas: &mut dyn Canvas) {
        if let Some(id) = self.id.take() {
            canvas.remove(id);
        }
    }

    fn position(&self) -> Position {
        self.pos
    }
}
