use rand::Rng;

use crate::config::game::{RANDOM_WALK_SIZE, RANDOM_WALK_SPEED};
use crate::game::element::TickContext;
use crate::game::enemies::{approach, random_coord, random_speed, Appearance, Behavior, Enemy, EnemyBody, EnemyKind};
use crate::game::types::{Bounds, Color, Position};

/// Walks to a random destination, then picks another one.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomWalk {
    destination: Position,
}

impl RandomWalk {
    pub fn new(destination: Position) -> Self {
        Self { destination }
    }

    #[cfg(test)]
    pub fn destination(&self) -> Position {
        self.destination
    }

    pub fn spawn<R: Rng>(bounds: Bounds, rng: &mut R) -> Enemy {
        let destination = random_destination(bounds, rng);
        let speed = random_speed(rng, RANDOM_WALK_SPEED);
        let pos = random_destination(bounds, rng);
        let body = EnemyBody::new(pos, RANDOM_WALK_SIZE, Appearance::Oval(Color::Blue), speed);
        Enemy::new(body, Box::new(Self::new(destination)))
    }
}

fn random_destination<R: Rng>(bounds: Bounds, rng: &mut R) -> Position {
    Position::new(
        random_coord(rng, 0.0, bounds.width),
        random_coord(rng, 0.0, bounds.height),
    )
}

impl Behavior for RandomWalk {
    fn kind(&self) -> EnemyKind {
        EnemyKind::RandomWalk
    }

    fn step(&mut self, body: &mut EnemyBody, ctx: &mut TickContext<'_>) {
        // Exact comparison holds: coordinates are integral and steps never overshoot.
        if body.pos == self.destination {
            self.destination = random_destination(ctx.bounds, &mut *ctx.rng);
        }
        body.pos.x = approach(body.pos.x, self.destination.x, body.speed);
        body.pos.y = approach(body.pos.y, self.destination.y, body.speed);
    }
}
