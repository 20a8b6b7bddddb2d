//! Shared lifecycle of every game element.

use log::info;
use rand::rngs::StdRng;

use crate::game::canvas::{Canvas, ShapeId};
use crate::game::entities::{Home, Waypoint};
use crate::game::types::{Bounds, Outcome, Position};

/// Hands out canvas shape ids for the whole session.
#[derive(Debug)]
pub struct IdAllocator {
    next: ShapeId,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next_id(&mut self) -> ShapeId {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// Everything an element may see or touch during its update.
///
/// Built fresh for each element of the update pass, so `player` always holds the
/// player position as it stands after the elements updated before it.
pub struct TickContext<'a> {
    pub bounds: Bounds,
    pub player: Position,
    pub home: &'a Home,
    pub waypoint: &'a mut Waypoint,
    pub rng: &'a mut StdRng,
    outcome: &'a mut Option<Outcome>,
}

impl<'a> TickContext<'a> {
    pub fn new(
        bounds: Bounds,
        player: Position,
        home: &'a Home,
        waypoint: &'a mut Waypoint,
        rng: &'a mut StdRng,
        outcome: &'a mut Option<Outcome>,
    ) -> Self {
        Self { bounds, player, home, waypoint, rng, outcome }
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Move the session into a terminal state. The first outcome sticks;
    /// returns false if the session had already ended.
    pub fn terminate(&mut self, outcome: Outcome) -> bool {
        if self.outcome.is_some() {
            return false;
        }
        info!("[Game] Session over: {:?}", outcome);
        *self.outcome = Some(outcome);
        true
    }
}

pub trait GameElement {
    /// Allocate the canvas shapes this element will draw.
    fn create(&mut self, ids: &mut IdAllocator);

    /// Advance one tick. Static elements keep the default no-op.
    fn update(&mut self, _ctx: &mut TickContext<'_>) {}

    fn render(&mut self, canvas: &mut dyn Canvas);

    /// Remove this element's shapes from the canvas.
    fn delete(&mut self, canvas: &mut dyn Canvas);

    fn position(&self) -> Position;
}
