//! World simulation
//!
//! The world owns the ship, the asteroids and the bullets, and is the only
//! thing that mutates them. One [`World::update`] call is one frame:
//!
//! 1. apply held controls to the ship
//! 2. advance asteroids, then bullets
//! 3. prune dead asteroids and bullets
//! 4. bullets against asteroids: hits break the asteroid and kill both
//! 5. ship against asteroids: any hit kills the ship
//! 6. advance the ship
//!
//! Fragments from step 4 are collected aside and appended after the scan,
//! so they are never tested against bullets in the frame they appear. They
//! are tested against the ship in step 5.

use crate::components::{FlyingObject, ObjectKind, RenderItem};
use crate::config::GameConfig;
use crate::controls::Controls;
use crate::error::GameError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Where the game stands; derived from the world, never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Ship alive, asteroids left
    Playing,
    /// Ship alive, every asteroid destroyed
    Won,
    /// Ship destroyed
    Lost,
}

/// The simulation state
#[derive(Debug, Clone)]
pub struct World {
    config: GameConfig,
    ship: FlyingObject,
    asteroids: Vec<FlyingObject>,
    bullets: Vec<FlyingObject>,
    frame: u64,
    announced: Outcome,
}

impl World {
    /// Create a populated world with a seeded random generator
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(config, &mut StdRng::seed_from_u64(seed))
    }

    /// Create a populated world: the ship plus the initial large asteroids
    pub fn with_rng<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self, GameError> {
        let mut world = Self::empty(config)?;

        let keep_clear = world.ship.bounds();
        for index in 0..world.config.asteroids.initial_count {
            let rock = FlyingObject::launch_large(rng, &world.config, &keep_clear, index)?;
            world.asteroids.push(rock);
        }

        log::info!(
            "World created: {}x{} playfield, {} asteroid(s)",
            world.config.playfield.width,
            world.config.playfield.height,
            world.asteroids.len()
        );
        Ok(world)
    }

    /// Create a world holding only the ship
    pub fn empty(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let ship = FlyingObject::ship(&config);

        Ok(Self {
            config,
            ship,
            asteroids: Vec::new(),
            bullets: Vec::new(),
            frame: 0,
            announced: Outcome::Playing,
        })
    }

    /// Add an asteroid, e.g. from a scripted scenario
    pub fn add_asteroid(&mut self, asteroid: FlyingObject) {
        debug_assert!(matches!(asteroid.kind, ObjectKind::Asteroid(_)), "not an asteroid");
        self.asteroids.push(asteroid);
    }

    /// Add a bullet as-is; it is not fired
    pub fn add_bullet(&mut self, bullet: FlyingObject) {
        debug_assert!(matches!(bullet.kind, ObjectKind::Bullet(_)), "not a bullet");
        self.bullets.push(bullet);
    }

    /// Configuration the world was built with
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The ship
    pub const fn ship(&self) -> &FlyingObject {
        &self.ship
    }

    /// All asteroids, including any killed this frame
    pub fn asteroids(&self) -> &[FlyingObject] {
        &self.asteroids
    }

    /// All bullets, including any killed this frame
    pub fn bullets(&self) -> &[FlyingObject] {
        &self.bullets
    }

    /// Frames simulated so far
    pub const fn frame(&self) -> u64 {
        self.frame
    }

    /// Run one frame
    pub fn update(&mut self, controls: Controls) {
        self.apply_controls(controls);
        self.advance_objects();
        self.prune_dead();
        self.resolve_collisions();
        self.ship.advance(&self.config);

        self.frame += 1;
        self.announce_outcome();

        log::trace!(
            "Frame {}: {} asteroid(s), {} bullet(s)",
            self.frame,
            self.asteroids.len(),
            self.bullets.len()
        );
    }

    /// Apply this frame's held controls to the ship
    pub fn apply_controls(&mut self, controls: Controls) {
        let tuning = &self.config.ship;
        if controls.contains(Controls::TURN_LEFT) {
            self.ship.turn_left(tuning.turn_amount);
        }
        if controls.contains(Controls::TURN_RIGHT) {
            self.ship.turn_right(tuning.turn_amount);
        }
        if controls.contains(Controls::THRUST_FORWARD) {
            self.ship.thrust_forward(tuning.thrust_amount);
        }
        if controls.contains(Controls::THRUST_BACKWARD) {
            self.ship.thrust_backward(tuning.thrust_amount);
        }
    }

    /// Fire a bullet from the ship; refused once the ship is dead
    pub fn fire(&mut self) -> bool {
        if !self.ship.is_alive() {
            return false;
        }

        let mut bullet = FlyingObject::bullet(self.ship.angle, self.ship.center, &self.config);
        bullet.fire(self.config.bullet.speed);
        log::debug!(
            "Bullet fired from ({:.1}, {:.1}) at {:.1} degrees",
            self.ship.center.x,
            self.ship.center.y,
            self.ship.angle
        );
        self.bullets.push(bullet);
        true
    }

    /// Advance every asteroid, then every bullet
    pub fn advance_objects(&mut self) {
        for asteroid in &mut self.asteroids {
            asteroid.advance(&self.config);
        }
        for bullet in &mut self.bullets {
            bullet.advance(&self.config);
        }
    }

    /// Drop dead asteroids and bullets
    pub fn prune_dead(&mut self) {
        self.asteroids.retain(FlyingObject::is_alive);
        self.bullets.retain(FlyingObject::is_alive);
    }

    /// Bullets against asteroids, then the ship against asteroids
    pub fn resolve_collisions(&mut self) {
        let mut fragments = Vec::new();

        for bullet in &mut self.bullets {
            for asteroid in &mut self.asteroids {
                if bullet.collides_with(asteroid) {
                    asteroid.break_apart(&self.config, &mut fragments);
                    bullet.kill();
                }
            }
        }
        self.asteroids.append(&mut fragments);

        if let Some(rock) = self.asteroids.iter().find(|rock| self.ship.collides_with(rock)) {
            log::debug!("Ship hit by {:?} asteroid", rock.asteroid_size());
            self.ship.kill();
        }
    }

    /// Every live object with its sprite, asteroids first, then the ship, then bullets
    pub fn render_list(&self) -> Vec<RenderItem> {
        self.asteroids
            .iter()
            .chain(std::iter::once(&self.ship))
            .chain(&self.bullets)
            .filter_map(FlyingObject::render_item)
            .collect()
    }

    /// Current outcome
    pub fn outcome(&self) -> Outcome {
        if !self.ship.is_alive() {
            Outcome::Lost
        } else if self.asteroids.iter().any(FlyingObject::is_alive) {
            Outcome::Playing
        } else {
            Outcome::Won
        }
    }

    /// Ship alive and no asteroid left
    pub fn is_won(&self) -> bool {
        self.outcome() == Outcome::Won
    }

    /// Ship destroyed
    pub fn is_lost(&self) -> bool {
        self.outcome() == Outcome::Lost
    }

    fn announce_outcome(&mut self) {
        let outcome = self.outcome();
        if outcome == self.announced {
            return;
        }
        match outcome {
            Outcome::Won => log::info!("All asteroids destroyed at frame {}", self.frame),
            Outcome::Lost => log::info!("Ship destroyed at frame {}", self.frame),
            Outcome::Playing => {}
        }
        self.announced = outcome;
    }
}
