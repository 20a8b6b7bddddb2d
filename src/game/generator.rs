//! Enemy generator.
//!
//! Created once per session. It schedules the spawn events up front and, when
//! each event fires, creates the enemies of that wave and registers them.
//! Wave sizes are deterministic functions of the level; only positions and
//! speeds are random.

use std::time::Duration;

use log::{debug, info};
use rand::rngs::StdRng;

use crate::config::game::{BASELINE_WAVE_DELAY_MS, REINFORCEMENT_DELAY_MS, REINFORCEMENT_WAVES};
use crate::game::enemies::{Chasing, Cross, Enemy, Fencing, RandomWalk};
use crate::game::game_loop::Task;
use crate::game::scheduler::TaskQueue;
use crate::game::types::{Bounds, Position};

/// What the generator needs from the session to place new enemies.
pub trait EnemyRegistry {
    fn bounds(&self) -> Bounds;
    fn home_position(&self) -> Position;
    fn rng(&mut self) -> &mut StdRng;
    /// Append an enemy to the active collection.
    fn add_enemy(&mut self, enemy: Enemy);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpawnEvent {
    /// The opening wave with every enemy category.
    Baseline,
    /// An extra batch of chasing enemies.
    Reinforcement,
}

/// Enemy counts of the baseline wave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveCounts {
    pub random_walk: usize,
    pub chasing: usize,
    pub fencing: usize,
    pub cross: usize,
}

impl WaveCounts {
    pub fn baseline(level: i32) -> Self {
        let level = i64::from(level);
        Self {
            random_walk: clamp_count(2 * level - 1),
            chasing: clamp_count(ceil_div(level, 3)),
            fencing: clamp_count(ceil_div(level, 2)),
            cross: clamp_count(3 * level - 2),
        }
    }

    #[cfg(test)]
    pub fn total(&self) -> usize {
        self.random_walk + self.chasing + self.fencing + self.cross
    }
}

/// Size of each chasing reinforcement wave: a quarter of the level, fed through
/// the same one-in-three rule as the baseline chasers, so `ceil(L / 12)`.
pub fn reinforcement_size(level: i32) -> usize {
    clamp_count(ceil_div(i64::from(level), 12))
}

fn ceil_div(value: i64, divisor: i64) -> i64 {
    value.div_euclid(divisor) + i64::from(value.rem_euclid(divisor) > 0)
}

/// Negative counts mean "spawn nothing".
fn clamp_count(count: i64) -> usize {
    usize::try_from(count.max(0)).unwrap_or(0)
}

#[derive(Debug, Clone)]
pub struct EnemyGenerator {
    level: i32,
}

impl EnemyGenerator {
    /// Create the generator and schedule its spawn events relative to `now`.
    pub fn new(level: i32, queue: &mut TaskQueue<Task>, now: Duration) -> Self {
        queue.schedule(
            now + Duration::from_millis(BASELINE_WAVE_DELAY_MS),
            Task::Spawn(SpawnEvent::Baseline),
        );
        for _ in 0..REINFORCEMENT_WAVES {
            queue.schedule(
                now + Duration::from_millis(REINFORCEMENT_DELAY_MS),
                Task::Spawn(SpawnEvent::Reinforcement),
            );
        }
        debug!(
            "[EnemyGenerator] Scheduled baseline wave (+{}ms) and {} reinforcements (+{}ms) for level {}",
            BASELINE_WAVE_DELAY_MS, REINFORCEMENT_WAVES, REINFORCEMENT_DELAY_MS, level
        );
        Self { level }
    }

    /// Handle a fired spawn event. Returns the number of enemies created.
    pub fn spawn(&self, event: SpawnEvent, registry: &mut dyn EnemyRegistry) -> usize {
        let spawned = match event {
            SpawnEvent::Baseline => self.create_enemies(registry),
            SpawnEvent::Reinforcement => create_chasing(reinforcement_size(self.level), registry),
        };
        info!("[EnemyGenerator] {:?} wave spawned {} enemies (level {})", event, spawned, self.level);
        spawned
    }

    /// Spawn the baseline wave.
    pub fn create_enemies(&self, registry: &mut dyn EnemyRegistry) -> usize {
        let counts = WaveCounts::baseline(self.level);
        create_random(counts.random_walk, registry)
            + create_chasing(counts.chasing, registry)
            + create_fencing(counts.fencing, registry)
            + create_cross(counts.cross, registry)
    }
}

fn create_random(count: usize, registry: &mut dyn EnemyRegistry) -> usize {
    for _ in 0..count {
        let bounds = registry.bounds();
        let enemy = RandomWalk::spawn(bounds, registry.rng());
        registry.add_enemy(enemy);
    }
    count
}

fn create_chasing(count: usize, registry: &mut dyn EnemyRegistry) -> usize {
    for _ in 0..count {
        let bounds = registry.bounds();
        let enemy = Chasing::spawn(bounds, registry.rng());
        registry.add_enemy(enemy);
    }
    count
}

fn create_fencing(count: usize, registry: &mut dyn EnemyRegistry) -> usize {
    for _ in 0..count {
        let home = registry.home_position();
        let enemy = Fencing::spawn(home, registry.rng());
        registry.add_enemy(enemy);
    }
    count
}

fn create_cross(count: usize, registry: &mut dyn EnemyRegistry) -> usize {
    for _ in 0..count {
        let enemy = Cross::spawn(registry.rng());
        registry.add_enemy(enemy);
    }
    count
}
