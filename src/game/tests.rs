use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::session::SessionConfig;
use crate::game::canvas::{DrawCommand, RecordingCanvas};
use crate::game::element::GameElement;
use crate::game::enemies::{Appearance, Chasing, Enemy, EnemyBody, EnemyKind};
use crate::game::entities::{Home, Player};
use crate::game::game_loop::Game;
use crate::game::generator::EnemyRegistry;
use crate::game::scheduler::ManualClock;
use crate::game::state::World;
use crate::game::types::{Bounds, Color, Outcome, Position};

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;

fn bounds() -> Bounds {
    Bounds::new(WIDTH, HEIGHT)
}

fn canvas() -> RecordingCanvas {
    RecordingCanvas::new(bounds())
}

fn session(level: i32) -> (Game<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let config = SessionConfig::new(WIDTH as u32, HEIGHT as u32, level).unwrap();
    let game = Game::new(&config, clock.clone(), StdRng::seed_from_u64(11));
    (game, clock)
}

/// Session with no baseline enemies and hand-placed home and player.
fn staged_session(home: Position, player: Position) -> (Game<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let world = World::with_elements(
        0,
        bounds(),
        Home::new(home, 20.0),
        Player::new(player, 5.0),
        StdRng::seed_from_u64(11),
    );
    (Game::with_world(world, clock.clone()), clock)
}

fn red_chaser(x: f64, y: f64) -> Enemy {
    let body = EnemyBody::new(Position::new(x, y), 20.0, Appearance::Square(Color::Red), 2.0);
    Enemy::new(body, Box::new(Chasing::new()))
}

fn count_kind(game: &Game<ManualClock>, kind: EnemyKind) -> usize {
    game.world().enemies().iter().filter(|e| e.kind() == kind).count()
}

fn draw_count(commands: &[DrawCommand]) -> usize {
    commands.iter().filter(|c| matches!(c, DrawCommand::Draw { .. })).count()
}

fn remove_count(commands: &[DrawCommand]) -> usize {
    commands.iter().filter(|c| matches!(c, DrawCommand::Remove { .. })).count()
}

#[test]
fn test_first_tick_runs_immediately() {
    let (mut game, _clock) = session(1);
    let mut canvas = canvas();

    let report = game.pump(&mut canvas);

    assert_eq!(report.ticks, 1);
    assert_eq!(report.spawned, 0);
    assert_eq!(game.tick_count(), 1);
    // Home and player are drawn on the first render pass.
    assert_eq!(draw_count(canvas.commands()), 2);
}

#[test]
fn test_ticks_follow_the_interval() {
    let (mut game, clock) = session(1);
    let mut canvas = canvas();

    game.pump(&mut canvas);
    clock.advance(Duration::from_millis(10));
    assert_eq!(game.pump(&mut canvas).ticks, 0);
    clock.advance(Duration::from_millis(10));
    assert_eq!(game.pump(&mut canvas).ticks, 1);
    assert_eq!(game.tick_count(), 2);
}

#[test]
fn test_baseline_wave_arrives_after_100ms() {
    let (mut game, clock) = session(3);
    let mut canvas = canvas();

    game.pump(&mut canvas);
    clock.set(Duration::from_millis(99));
    game.pump(&mut canvas);
    assert_eq!(game.enemy_count(), 0);

    clock.set(Duration::from_millis(100));
    let report = game.pump(&mut canvas);

    assert_eq!(report.spawned, 15);
    assert_eq!(count_kind(&game, EnemyKind::RandomWalk), 5);
    assert_eq!(count_kind(&game, EnemyKind::Chasing), 1);
    assert_eq!(count_kind(&game, EnemyKind::Fencing), 2);
    assert_eq!(count_kind(&game, EnemyKind::Cross), 7);
}

#[test]
fn test_reinforcements_arrive_after_ten_seconds() {
    let (mut game, clock) = session(9);
    let mut canvas = canvas();

    game.pump(&mut canvas);
    clock.set(Duration::from_millis(100));
    game.pump(&mut canvas);
    let baseline = game.enemy_count();
    let chasers = count_kind(&game, EnemyKind::Chasing);

    clock.set(Duration::from_millis(9_999));
    game.pump(&mut canvas);
    assert_eq!(game.enemy_count(), baseline);

    clock.set(Duration::from_millis(10_000));
    let report = game.pump(&mut canvas);

    // Three waves of ceil(9 / 12) chasers each.
    assert_eq!(report.spawned, 3);
    assert_eq!(game.enemy_count(), baseline + 3);
    assert_eq!(count_kind(&game, EnemyKind::Chasing), chasers + 3);
}

#[test]
fn test_reaching_home_wins_and_draws_banner_once() {
    let (mut game, clock) = staged_session(Position::new(100.0, 300.0), Position::new(50.0, 300.0));
    let mut canvas = canvas();
    assert!(game.click(100.0, 300.0));

    for _ in 0..50 {
        game.pump(&mut canvas);
        clock.advance(Duration::from_millis(20));
        if game.outcome().is_some() {
            break;
        }
    }

    assert_eq!(game.outcome(), Some(Outcome::Won));
    // Eight steps of 5 reach the home edge at x = 90; the ninth tick notices.
    assert_eq!(game.tick_count(), 9);
    assert_eq!(game.player_position(), Position::new(90.0, 300.0));

    for _ in 0..10 {
        clock.advance(Duration::from_millis(20));
        game.pump(&mut canvas);
    }
    let banners: Vec<_> = canvas.texts().collect();
    assert_eq!(banners.len(), 1);
    assert_eq!(banners[0].content, "You Win");
    assert_eq!(banners[0].color, Color::Green);
    assert_eq!(banners[0].position, Position::new(400.0, 300.0));
    assert_eq!(game.tick_count(), 9);
}

#[test]
fn test_collision_loses_and_freezes_the_session() {
    let (mut game, clock) = staged_session(Position::new(700.0, 300.0), Position::new(50.0, 300.0));
    let mut canvas = canvas();
    game.world_mut().add_enemy(red_chaser(56.0, 300.0));
    game.world_mut().add_enemy(red_chaser(44.0, 300.0));

    let report = game.pump(&mut canvas);

    assert_eq!(report.ticks, 1);
    assert_eq!(game.outcome(), Some(Outcome::Lost));

    // The second chaser never ran its update: the pass stopped at the first hit.
    let second = game.world().enemies()[1].position();
    assert_eq!(second, Position::new(44.0, 300.0));

    assert!(!game.click(300.0, 300.0));
    assert!(!game.world().waypoint().is_active());

    for _ in 0..5 {
        clock.advance(Duration::from_millis(20));
        assert_eq!(game.pump(&mut canvas).ticks, 0);
    }
    let banners: Vec<_> = canvas.texts().collect();
    assert_eq!(banners.len(), 1);
    assert_eq!(banners[0].content, "You Lose");
    assert_eq!(banners[0].color, Color::Red);
    assert_eq!(game.tick_count(), 1);
}

#[test]
fn test_player_updates_first_so_win_beats_collision() {
    let home = Position::new(700.0, 300.0);
    let (mut game, _clock) = staged_session(home, home);
    let mut canvas = canvas();
    game.world_mut().add_enemy(red_chaser(702.0, 300.0));

    game.pump(&mut canvas);

    assert_eq!(game.outcome(), Some(Outcome::Won));
    assert_eq!(game.world().enemies()[0].position(), Position::new(702.0, 300.0));
}

#[test]
fn test_spawns_after_the_end_stay_inert() {
    let clock = ManualClock::new();
    let home = Position::new(700.0, 300.0);
    let world = World::with_elements(
        3,
        bounds(),
        Home::new(home, 20.0),
        Player::new(home, 5.0),
        StdRng::seed_from_u64(5),
    );
    let mut game = Game::with_world(world, clock.clone());
    let mut canvas = canvas();

    game.pump(&mut canvas);
    assert_eq!(game.outcome(), Some(Outcome::Won));
    canvas.take_commands();

    clock.set(Duration::from_millis(100));
    let report = game.pump(&mut canvas);

    assert_eq!(report.ticks, 0);
    assert_eq!(report.spawned, 15);
    // Rendered once so the late arrivals show up: home, player and 15 enemies.
    let commands = canvas.take_commands();
    assert_eq!(draw_count(&commands), 17);
    assert!(commands.iter().all(|c| !matches!(c, DrawCommand::Text(_))));

    let frozen: Vec<Position> = game.world().enemies().iter().map(|e| e.position()).collect();
    clock.set(Duration::from_millis(2_000));
    game.pump(&mut canvas);
    let later: Vec<Position> = game.world().enemies().iter().map(|e| e.position()).collect();
    assert_eq!(frozen, later);
    assert!(canvas.commands().is_empty());
    assert_eq!(game.outcome(), Some(Outcome::Won));
}

#[test]
fn test_session_finishes_once_all_spawns_fired() {
    let home = Position::new(700.0, 300.0);
    let (mut game, clock) = staged_session(home, home);
    let mut canvas = canvas();

    game.pump(&mut canvas);
    assert!(!game.is_finished());

    clock.set(Duration::from_secs(10));
    game.pump(&mut canvas);
    assert!(game.is_finished());
}

#[test]
fn test_waypoint_clears_on_arrival() {
    let (mut game, clock) = staged_session(Position::new(700.0, 300.0), Position::new(50.0, 300.0));
    let mut canvas = canvas();
    game.click(65.0, 300.0);

    for _ in 0..3 {
        game.pump(&mut canvas);
        clock.advance(Duration::from_millis(20));
    }

    assert_eq!(game.player_position(), Position::new(65.0, 300.0));
    assert!(!game.world().waypoint().is_active());
    assert_eq!(game.outcome(), None);

    // The X is taken down on the arrival tick and not again afterwards.
    assert_eq!(remove_count(&canvas.take_commands()), 2);
    for _ in 0..5 {
        game.pump(&mut canvas);
        clock.advance(Duration::from_millis(20));
    }
    assert_eq!(remove_count(canvas.commands()), 0);
}

#[test]
fn test_end_session_removes_every_shape() {
    let (mut game, clock) = session(1);
    let mut canvas = canvas();
    game.pump(&mut canvas);
    clock.set(Duration::from_millis(100));
    game.pump(&mut canvas);
    let enemies = game.enemy_count();
    canvas.take_commands();

    game.end_session(&mut canvas);

    let removed = remove_count(canvas.commands());
    // Two waypoint lines, home, player and every enemy.
    assert_eq!(removed, 4 + enemies);
}
