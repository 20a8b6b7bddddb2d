//! Fencing enemy: guards home by walking clockwise around a square centered on it.

use rand::Rng;

use crate::config::game::{FENCING_REACH, FENCING_SIZE, FENCING_SPAWN_OFFSET, FENCING_SPEED};
use crate::game::element::{GameElement, TickContext};
use crate::game::enemies::{random_speed, Appearance, Behavior, Enemy, EnemyBody, EnemyKind};
use crate::game::types::{Color, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceState {
    MoveRight,
    MoveUp,
    MoveLeft,
    MoveDown,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Fencing {
    state: FenceState,
}

impl Fencing {
    pub fn new() -> Self {
        Self { state: FenceState::MoveRight }
    }

    #[cfg(test)]
    pub fn with_state(state: FenceState) -> Self {
        Self { state }
    }

    #[cfg(test)]
    pub fn state(&self) -> FenceState {
        self.state
    }

    /// Spawn near the bottom-right corner of the fence around `home`.
    pub fn spawn<R: Rng>(home: Position, rng: &mut R) -> Enemy {
        let (low, high) = FENCING_SPAWN_OFFSET;
        let pos = Position::new(
            home.x + rng.random_range(low..=high) as f64,
            home.y + rng.random_range(low..=high) as f64,
        );
        let speed = random_speed(rng, FENCING_SPEED);
        let body = EnemyBody::new(pos, FENCING_SIZE, Appearance::Square(Color::Green), speed);
        Enemy::new(body, Box::new(Self::new()))
    }
}

impl Behavior for Fencing {
    fn kind(&self) -> EnemyKind {
        EnemyKind::Fencing
    }

    /// Walk along the current side; the tick that finds the corner reached only turns.
    fn step(&mut self, body: &mut EnemyBody, ctx: &mut TickContext<'_>) {
        let home = ctx.home.position();
        let reach = FENCING_REACH;
        match self.state {
            FenceState::MoveRight => {
                if body.pos.x < home.x + reach {
                    body.pos.x += body.speed;
                } else {
                    self.state = FenceState::MoveUp;
                }
            }
            FenceState::MoveUp => {
                if body.pos.y > home.y - reach {
                    body.pos.y -= body.speed;
                } else {
                    self.state = FenceState::MoveLeft;
                }
            }
            FenceState::MoveLeft => {
                if body.pos.x > home.x - reach {
                    body.pos.x -= body.speed;
                } else {
                    self.state = FenceState::MoveDown;
                }
            }
            FenceState::MoveDown => {
                if body.pos.y < home.y + reach {
                    body.pos.y += body.speed;
                } else {
                    self.state = FenceState::MoveRight;
                }
            }
        }
    }
}
