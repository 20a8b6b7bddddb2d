/// Game configuration constants.
///
/// This module defines the gameplay parameters: tick cadence, spawn schedule,
/// element geometry and enemy speed ranges.

/// Interval between two simulation ticks, in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 20;

/// Delay before the baseline enemy wave appears, in milliseconds.
pub const BASELINE_WAVE_DELAY_MS: u64 = 100;

/// Delay before the chasing reinforcements appear, in milliseconds.
pub const REINFORCEMENT_DELAY_MS: u64 = 10_000;

/// Number of chasing reinforcement sub-waves scheduled at session start.
pub const REINFORCEMENT_WAVES: usize = 3;

/// Default session parameters when the client does not provide them.
pub const DEFAULT_SCREEN_WIDTH: u32 = 800;
pub const DEFAULT_SCREEN_HEIGHT: u32 = 600;
pub const DEFAULT_LEVEL: i32 = 1;

/// Player speed in units per tick.
pub const PLAYER_SPEED: f64 = 5.0;
/// Horizontal start position of the player.
pub const PLAYER_START_X: f64 = 50.0;
/// Size of the turtle sprite.
pub const PLAYER_SIZE: f64 = 20.0;

/// Side of the home square.
pub const HOME_SIZE: f64 = 20.0;
/// Distance between home and the right edge of the screen.
pub const HOME_RIGHT_MARGIN: f64 = 100.0;

/// Half length of each waypoint cross line.
pub const WAYPOINT_HALF_SPAN: f64 = 10.0;

pub const PATROL_SIZE: f64 = 20.0;
pub const PATROL_SPEED: (i64, i64) = (1, 5);
/// Speed multiplier applied on a patrol bounce, picked with equal odds.
pub const PATROL_BOUNCE_FACTORS: [f64; 2] = [1.0, 1.1];

pub const RANDOM_WALK_SIZE: f64 = 15.0;
pub const RANDOM_WALK_SPEED: (i64, i64) = (1, 5);

pub const CHASING_SIZE: f64 = 20.0;
pub const CHASING_SPEED: f64 = 2.0;

pub const FENCING_SIZE: f64 = 10.0;
pub const FENCING_SPEED: (i64, i64) = (1, 3);
/// Half side of the square a fencing enemy walks around home.
pub const FENCING_REACH: f64 = 20.0;
/// Spawn offset range from home, on both axes.
pub const FENCING_SPAWN_OFFSET: (i64, i64) = (18, 22);

pub const CROSS_SIZE: f64 = 25.0;
pub const CROSS_SPEED: (i64, i64) = (10, 15);
/// Distance from the target edge at which a cross enemy restarts its sweep.
pub const CROSS_EDGE_MARGIN: f64 = 10.0;
pub const CROSS_SPRITE: &str = "gauss";

/// Banner font.
pub const BANNER_FONT_FAMILY: &str = "Arial";
pub const BANNER_FONT_SIZE: u32 = 36;
