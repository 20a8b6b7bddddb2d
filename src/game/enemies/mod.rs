//! Enemy entities.
//!
//! Every enemy shares the same body (position, hit-box size, appearance, speed)
//! and the same collision rule. What differs is the [`Behavior`]: a small state
//! machine that moves the body one step per tick.

pub mod chasing;
pub mod cross;
pub mod fencing;
pub mod patrol;
pub mod random_walk;

use std::fmt;

use rand::Rng;

use crate::game::canvas::{Canvas, Shape, ShapeId};
use crate::game::element::{GameElement, IdAllocator, TickContext};
use crate::game::types::{Color, Outcome, Position};

pub use chasing::Chasing;
pub use cross::Cross;
pub use fencing::Fencing;
pub use random_walk::RandomWalk;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    Patrol,
    RandomWalk,
    Chasing,
    Fencing,
    Cross,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    Oval(Color),
    Square(Color),
    Sprite(&'static str),
}

/// Data common to every enemy.
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyBody {
    pub pos: Position,
    pub size: f64,
    pub appearance: Appearance,
    pub speed: f64,
}

impl EnemyBody {
    pub fn new(pos: Position, size: f64, appearance: Appearance, speed: f64) -> Self {
        Self { pos, size, appearance, speed }
    }

    /// Strict hit-box test: touching the edge of the square is not a hit.
    pub fn hits(&self, point: Position) -> bool {
        let half = self.size / 2.0;
        self.pos.x - half < point.x
            && point.x < self.pos.x + half
            && self.pos.y - half < point.y
            && point.y < self.pos.y + half
    }

    fn shape(&self) -> Shape {
        match self.appearance {
            Appearance::Oval(fill) => Shape::Oval { center: self.pos, size: self.size, fill },
            Appearance::Square(fill) => Shape::Rect {
                center: self.pos,
                size: self.size,
                fill: Some(fill),
                outline: None,
                width: 1.0,
            },
            Appearance::Sprite(name) => Shape::Sprite {
                center: self.pos,
                size: self.size,
                name: name.to_string(),
                heading: 0.0,
            },
        }
    }
}

/// Movement rule of one enemy variant.
pub trait Behavior: fmt::Debug {
    fn kind(&self) -> EnemyKind;

    /// Move `body` by one tick according to the current state.
    fn step(&mut self, body: &mut EnemyBody, ctx: &mut TickContext<'_>);
}

#[derive(Debug)]
pub struct Enemy {
    body: EnemyBody,
    behavior: Box<dyn Behavior>,
    id: Option<ShapeId>,
}

impl Enemy {
    pub fn new(body: EnemyBody, behavior: Box<dyn Behavior>) -> Self {
        Self { body, behavior, id: None }
    }

    pub fn kind(&self) -> EnemyKind {
        self.behavior.kind()
    }

    #[cfg(test)]
    pub fn body(&self) -> &EnemyBody {
        &self.body
    }

    pub fn hits_player(&self, player: Position) -> bool {
        self.body.hits(player)
    }
}

impl GameElement for Enemy {
    fn create(&mut self, ids: &mut IdAllocator) {
        self.id = Some(ids.next_id());
    }

    fn update(&mut self, ctx: &mut TickContext<'_>) {
        if ctx.is_terminal() {
            return;
        }
        self.behavior.step(&mut self.body, ctx);
        if self.hits_player(ctx.player) {
            ctx.terminate(Outcome::Lost);
        }
    }

    fn render(&mut self, canvas: &mut dyn Canvas) {
        if let Some(id) = self.id {
            canvas.draw(id, self.body.shape());
        }
    }

    fn delete(&mut self, canvas: &mut dyn Canvas) {
        if let Some(id) = self.id.take() {
            canvas.remove(id);
        }
    }

    fn position(&self) -> Position {
        self.body.pos
    }
}

/// Move `current` toward `target` by at most `speed`, never past it.
pub(crate) fn approach(current: f64, target: f64, speed: f64) -> f64 {
    if target > current {
        current + speed.min(target - current)
    } else {
        current - speed.min(current - target)
    }
}

/// Uniform integer coordinate in `[low, high]`, as a float.
pub(crate) fn random_coord<R: Rng>(rng: &mut R, low: f64, high: f64) -> f64 {
    let (low, high) = (low as i64, high as i64);
    if high <= low {
        return low as f64;
    }
    rng.random_range(low..=high) as f64
}

/// Uniform integer speed in the inclusive `range`.
pub(crate) fn random_speed<R: Rng>(rng: &mut R, range: (i64, i64)) -> f64 {
    rng.random_range(range.0..=range.1) as f64
}
