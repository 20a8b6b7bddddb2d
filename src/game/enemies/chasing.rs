use rand::Rng;

use crate::config::game::{CHASING_SIZE, CHASING_SPEED};
use crate::game::element::TickContext;
use crate::game::enemies::{approach, random_coord, Appearance, Behavior, Enemy, EnemyBody, EnemyKind};
use crate::game::types::{Bounds, Color, Position};

/// Heads for wherever the player is this tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Chasing;

impl Chasing {
    pub fn new() -> Self {
        Self
    }

    /// Spawn somewhere in the right half of the screen.
    pub fn spawn<R: Rng>(bounds: Bounds, rng: &mut R) -> Enemy {
        let pos = Position::new(
            random_coord(rng, bounds.width / 2.0, bounds.width),
            random_coord(rng, 0.0, bounds.height),
        );
        let body = EnemyBody::new(pos, CHASING_SIZE, Appearance::Square(Color::Red), CHASING_SPEED);
        Enemy::new(body, Box::new(Self::new()))
    }
}

impl Behavior for Chasing {
    fn kind(&self) -> EnemyKind {
        EnemyKind::Chasing
    }

    fn step(&mut self, body: &mut EnemyBody, ctx: &mut TickContext<'_>) {
        let target = ctx.player;
        body.pos.x = approach(body.pos.x, target.x, body.speed);
        body.pos.y = approach(body.pos.y, target.y, body.speed);
    }
}
