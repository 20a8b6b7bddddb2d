//! Session state: the fixed elements, the enemy collection and the terminal flag.

use log::{debug, info};
use rand::rngs::StdRng;

use crate::config::game::{BANNER_FONT_FAMILY, BANNER_FONT_SIZE};
use crate::config::session::SessionConfig;
use crate::game::canvas::{Canvas, Font, Text};
use crate::game::element::{GameElement, IdAllocator, TickContext};
use crate::game::enemies::Enemy;
use crate::game::entities::{Home, Player, Waypoint};
use crate::game::generator::EnemyRegistry;
use crate::game::types::{Bounds, Outcome, Position};

pub struct World {
    level: i32,
    bounds: Bounds,
    outcome: Option<Outcome>,
    waypoint: Waypoint,
    home: Home,
    player: Player,
    enemies: Vec<Enemy>,
    ids: IdAllocator,
    rng: StdRng,
    banner_drawn: bool,
    ticks: u64,
}

impl World {
    pub fn new(config: &SessionConfig, rng: StdRng) -> Self {
        let bounds = config.bounds();
        Self::with_elements(config.level, bounds, Home::for_bounds(bounds), Player::at_start(bounds), rng)
    }

    /// Build a world around explicit home and player placements.
    pub fn with_elements(level: i32, bounds: Bounds, mut home: Home, mut player: Player, rng: StdRng) -> Self {
        let mut ids = IdAllocator::new();
        let mut waypoint = Waypoint::new();
        waypoint.create(&mut ids);
        home.create(&mut ids);
        player.create(&mut ids);
        Self {
            level,
            bounds,
            outcome: None,
            waypoint,
            home,
            player,
            enemies: Vec::new(),
            ids,
            rng,
            banner_drawn: false,
            ticks: 0,
        }
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[cfg(test)]
    pub fn player(&self) -> &Player {
        &self.player
    }

    #[cfg(test)]
    pub fn waypoint(&self) -> &Waypoint {
        &self.waypoint
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    /// Pointer input. Ignored once the session is over.
    pub fn click(&mut self, x: f64, y: f64) -> bool {
        if self.is_terminal() {
            debug!("[Game] Ignoring click at ({}, {}): session is over", x, y);
            return false;
        }
        self.waypoint.activate(x, y);
        true
    }

    /// One full tick: update pass then render pass. No-op once terminal.
    pub fn tick(&mut self, canvas: &mut dyn Canvas) {
        if self.is_terminal() {
            return;
        }
        self.bounds = canvas.bounds();
        self.ticks += 1;
        self.update();
        self.render(canvas);
    }

    /// Update every element in registration order, stopping as soon as the
    /// session ends.
    fn update(&mut self) {
        let mut ctx = TickContext::new(
            self.bounds,
            self.player.position(),
            &self.home,
            &mut self.waypoint,
            &mut self.rng,
            &mut self.outcome,
        );
        self.player.update(&mut ctx);

        for enemy in self.enemies.iter_mut() {
            if ctx.is_terminal() {
                break;
            }
            ctx.player = self.player.position();
            enemy.update(&mut ctx);
        }
    }

    /// Draw every element, then the banner the first time a terminal state is seen.
    pub fn render(&mut self, canvas: &mut dyn Canvas) {
        self.waypoint.render(canvas);
        self.home.render(canvas);
        self.player.render(canvas);
        for enemy in self.enemies.iter_mut() {
            enemy.render(canvas);
        }

        if let Some(outcome) = self.outcome {
            if !self.banner_drawn {
                self.banner_drawn = true;
                let center = canvas.bounds().center();
                canvas.draw_text(banner(outcome, center));
            }
        }
    }

    /// Remove every element from the canvas.
    pub fn teardown(&mut self, canvas: &mut dyn Canvas) {
        for enemy in self.enemies.iter_mut() {
            enemy.delete(canvas);
        }
        self.player.delete(canvas);
        self.home.delete(canvas);
        self.waypoint.delete(canvas);
        info!("[Game] Tore down session after {} ticks ({} enemies)", self.ticks, self.enemies.len());
    }
}

impl EnemyRegistry for World {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn home_position(&self) -> Position {
        self.home.position()
    }

    fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    fn add_enemy(&mut self, mut enemy: Enemy) {
        enemy.create(&mut self.ids);
        debug!("[Game] Enemy {:?} joined at {:?}", enemy.kind(), enemy.position());
        self.enemies.push(enemy);
    }
}

fn banner(outcome: Outcome, center: Position) -> Text {
    Text {
        position: center,
        content: outcome.banner().to_string(),
        color: outcome.banner_color(),
        font: Font {
            family: BANNER_FONT_FAMILY.to_string(),
            size: BANNER_FONT_SIZE,
            bold: true,
        },
    }
}
