//! Game loop.
//!
//! Ticks and spawn events share one [`TaskQueue`]. Each call to [`Game::pump`]
//! reads the clock once and runs everything due by then, in fire-time order, so
//! a spawn never lands in the middle of an update pass.

use std::time::Duration;

use log::{debug, info};
use rand::rngs::StdRng;

use crate::config::game::TICK_INTERVAL_MS;
use crate::config::session::SessionConfig;
use crate::game::canvas::Canvas;
use crate::game::generator::{EnemyGenerator, SpawnEvent};
use crate::game::scheduler::{Clock, TaskQueue};
use crate::game::state::World;
use crate::game::types::Outcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    Tick,
    Spawn(SpawnEvent),
}

/// What a single pump did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PumpReport {
    pub ticks: usize,
    pub spawned: usize,
}

pub struct Game<C: Clock> {
    clock: C,
    queue: TaskQueue<Task>,
    world: World,
    generator: EnemyGenerator,
    tick_interval: Duration,
}

impl<C: Clock> Game<C> {
    pub fn new(config: &SessionConfig, clock: C, rng: StdRng) -> Self {
        Self::with_world(World::new(config, rng), clock)
    }

    /// Start a session around a prepared world. The first tick is due immediately.
    pub fn with_world(world: World, clock: C) -> Self {
        let now = clock.now();
        let mut queue = TaskQueue::new();
        queue.schedule(now, Task::Tick);
        let generator = EnemyGenerator::new(world.level(), &mut queue, now);
        info!("[Game] Session started at level {}", world.level());
        Self {
            clock,
            queue,
            world,
            generator,
            tick_interval: Duration::from_millis(TICK_INTERVAL_MS),
        }
    }

    /// Run every task due at the current clock reading.
    pub fn pump(&mut self, canvas: &mut dyn Canvas) -> PumpReport {
        let now = self.clock.now();
        let mut report = PumpReport::default();

        while let Some((_, task)) = self.queue.pop_due(now) {
            match task {
                Task::Tick => {
                    self.world.tick(canvas);
                    report.ticks += 1;
                    if self.world.is_terminal() {
                        debug!("[Game] Tick loop halted after {} ticks", self.world.ticks());
                    } else {
                        self.queue.schedule(now + self.tick_interval, Task::Tick);
                    }
                }
                Task::Spawn(event) => {
                    report.spawned += self.generator.spawn(event, &mut self.world);
                    // No more ticks will draw late arrivals: show them once, frozen.
                    if self.world.is_terminal() {
                        self.world.render(canvas);
                    }
                }
            }
        }
        report
    }

    /// Pointer click: move the waypoint. Returns false once the session is over.
    pub fn click(&mut self, x: f64, y: f64) -> bool {
        self.world.click(x, y)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.world.outcome()
    }

    /// True once the session is over and no spawn event is pending.
    pub fn is_finished(&self) -> bool {
        self.world.is_terminal() && self.queue.is_empty()
    }

    pub fn tick_count(&self) -> u64 {
        self.world.ticks()
    }

    pub fn enemy_count(&self) -> usize {
        self.world.enemies().len()
    }

    #[cfg(test)]
    pub fn player_position(&self) -> crate::game::types::Position {
        use crate::game::element::GameElement;
        self.world.player().position()
    }

    #[cfg(test)]
    pub fn world(&self) -> &World {
        &self.world
    }

    #[cfg(test)]
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// End the session: remove every element from the canvas.
    pub fn end_session(&mut self, canvas: &mut dyn Canvas) {
        self.world.teardown(canvas);
    }
}
