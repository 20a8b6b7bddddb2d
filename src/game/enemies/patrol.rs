//! Patrol enemy: bounces between the screen edges on both axes, speeding up a
//! little on some bounces.

use rand::Rng;

use crate::config::game::{PATROL_BOUNCE_FACTORS, PATROL_SIZE, PATROL_SPEED};
use crate::game::element::TickContext;
use crate::game::enemies::{random_coord, random_speed, Appearance, Behavior, Enemy, EnemyBody, EnemyKind};
use crate::game::types::{Bounds, Color, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XState {
    MoveRight,
    MoveLeft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YState {
    MoveDown,
    MoveUp,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Patrol {
    x_state: XState,
    y_state: YState,
}

impl Patrol {
    pub fn new() -> Self {
        Self {
            x_state: XState::MoveRight,
            y_state: YState::MoveDown,
        }
    }

    pub fn with_states(x_state: XState, y_state: YState) -> Self {
        Self { x_state, y_state }
    }

    pub fn x_state(&self) -> XState {
        self.x_state
    }

    pub fn y_state(&self) -> YState {
        self.y_state
    }

    pub fn spawn<R: Rng>(bounds: Bounds, rng: &mut R) -> Enemy {
        let pos = Position::new(
            random_coord(rng, 0.0, bounds.width),
            random_coord(rng, 0.0, bounds.height),
        );
        let speed = random_speed(rng, PATROL_SPEED);
        let body = EnemyBody::new(pos, PATROL_SIZE, Appearance::Oval(Color::Purple), speed);
        Enemy::new(body, Box::new(Self::new()))
    }
}

fn bounce_factor<R: Rng>(rng: &mut R) -> f64 {
    PATROL_BOUNCE_FACTORS[rng.random_range(0..PATROL_BOUNCE_FACTORS.len())]
}

impl Behavior for Patrol {
    fn kind(&self) -> EnemyKind {
        EnemyKind::Patrol
    }

    fn step(&mut self, body: &mut EnemyBody, ctx: &mut TickContext<'_>) {
        match self.x_state {
            XState::MoveRight => body.pos.x += body.speed,
            XState::MoveLeft => body.pos.x -= body.speed,
        }
        if body.pos.x < 0.0 || body.pos.x > ctx.bounds.width {
            body.speed *= bounce_factor(&mut *ctx.rng);
            self.x_state = match self.x_state {
                XState::MoveRight => XState::MoveLeft,
                XState::MoveLeft => XState::MoveRight,
            };
        }

        match self.y_state {
            YState::MoveDown => body.pos.y += body.speed,
            YState::MoveUp => body.pos.y -= body.speed,
        }
        if body.pos.y < 0.0 || body.pos.y > ctx.bounds.height {
            body.speed *= bounce_factor(&mut *ctx.rng);
            self.y_state = match self.y_state {
                YState::MoveDown => YState::MoveUp,
                YState::MoveUp => YState::MoveDown,
            };
        }
    }
}
