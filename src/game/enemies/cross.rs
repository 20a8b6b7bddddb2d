//! Cross enemy: sweeps the screen diagonally, corner to corner.
//!
//! Going down it aims at the bottom-right corner from wherever it is; once within
//! [`CROSS_EDGE_MARGIN`] of the bottom edge it jumps to the bottom-left corner and
//! sweeps up toward the top-right corner, then jumps back to the top-left corner.

use rand::Rng;

use crate::config::game::{CROSS_EDGE_MARGIN, CROSS_SIZE, CROSS_SPEED, CROSS_SPRITE};
use crate::game::element::TickContext;
use crate::game::enemies::{random_speed, Appearance, Behavior, Enemy, EnemyBody, EnemyKind};
use crate::game::types::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossState {
    MoveDownRight,
    MoveUpRight,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cross {
    state: CrossState,
}

impl Cross {
    pub fn new() -> Self {
        Self { state: CrossState::MoveDownRight }
    }

    #[cfg(test)]
    pub fn state(&self) -> CrossState {
        self.state
    }

    pub fn spawn<R: Rng>(rng: &mut R) -> Enemy {
        let speed = random_speed(rng, CROSS_SPEED);
        let body = EnemyBody::new(Position::new(0.0, 0.0), CROSS_SIZE, Appearance::Sprite(CROSS_SPRITE), speed);
        Enemy::new(body, Box::new(Self::new()))
    }
}

/// Step `speed` along the unit vector `(dx, dy)`. A zero vector has no heading: stay put.
fn advance(body: &mut EnemyBody, dx: f64, dy: f64) {
    let length = dx.hypot(dy);
    if length == 0.0 {
        return;
    }
    body.pos.x += body.speed * dx / length;
    body.pos.y += body.speed * dy / length;
}

impl Behavior for Cross {
    fn kind(&self) -> EnemyKind {
        EnemyKind::Cross
    }

    fn step(&mut self, body: &mut EnemyBody, ctx: &mut TickContext<'_>) {
        let bounds = ctx.bounds;
        match self.state {
            CrossState::MoveDownRight => {
                if bounds.height - body.pos.y >= CROSS_EDGE_MARGIN {
                    advance(body, bounds.width - body.pos.x, bounds.height - body.pos.y);
                } else {
                    body.pos = Position::new(0.0, bounds.height);
                    self.state = CrossState::MoveUpRight;
                }
            }
            CrossState::MoveUpRight => {
                if body.pos.y >= CROSS_EDGE_MARGIN {
                    advance(body, bounds.width - body.pos.x, -body.pos.y);
                } else {
                    body.pos = Position::new(0.0, 0.0);
                    self.state = CrossState::MoveDownRight;
                }
            }
        }
    }
}
