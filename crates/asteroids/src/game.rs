//! Asteroids application
//!
//! Glue between the engine's host events and the [`World`]: key events only
//! touch the held-key set (plus firing, which is edge-triggered), and the
//! world reads the held controls once per `update`.

use crate::components::RenderItem;
use crate::config::GameConfig;
use crate::controls::KeyBindings;
use crate::error::GameError;
use crate::world::{Outcome, World};
use rust_engine::input::InputManager;
use rust_engine::{AppError, AppEvent, Application};

/// Overlay shown once the ship is destroyed
pub const LOSS_MESSAGE: &str = "You hit an asteroid...Better luck next time!";

/// Overlay shown once every asteroid is destroyed
pub const WIN_MESSAGE: &str = "You Win!";

/// The game as an engine [`Application`]
#[derive(Debug, Clone)]
pub struct AsteroidsGame {
    world: World,
    input: InputManager,
    bindings: KeyBindings,
}

impl AsteroidsGame {
    /// Create a game with a seeded world
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        Ok(Self::from_world(World::new(config, seed)?))
    }

    /// Wrap an existing world
    pub fn from_world(world: World) -> Self {
        let bindings = KeyBindings::new(&world.config().controls);
        Self {
            world,
            input: InputManager::new(),
            bindings,
        }
    }

    /// The simulation
    pub const fn world(&self) -> &World {
        &self.world
    }

    /// Live objects to draw this frame
    pub fn render_list(&self) -> Vec<RenderItem> {
        self.world.render_list()
    }

    /// Ship alive and no asteroid left
    pub fn is_won(&self) -> bool {
        self.world.is_won()
    }

    /// Ship destroyed
    pub fn is_lost(&self) -> bool {
        self.world.is_lost()
    }

    /// Text for the win/loss overlay, if any
    pub fn overlay_text(&self) -> Option<&'static str> {
        match self.world.outcome() {
            Outcome::Playing => None,
            Outcome::Won => Some(WIN_MESSAGE),
            Outcome::Lost => Some(LOSS_MESSAGE),
        }
    }

    fn key_pressed(&mut self, key: rust_engine::input::KeyCode) {
        // Once lost, presses are dropped entirely
        if self.world.is_lost() {
            return;
        }

        let fresh = self.input.handle_key_input(key, true);
        if fresh && self.bindings.is_fire(key) {
            self.world.fire();
        }
    }
}

impl Application for AsteroidsGame {
    fn initialize(&mut self) -> Result<(), AppError> {
        log::info!(
            "Asteroids ready: {} asteroid(s) on the field",
            self.world.asteroids().len()
        );
        Ok(())
    }

    fn update(&mut self, _delta_time: f32) -> Result<(), AppError> {
        let controls = self.bindings.held_controls(&self.input);
        self.world.update(controls);
        Ok(())
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<(), AppError> {
        match event {
            AppEvent::KeyPressed(key) => self.key_pressed(key),
            AppEvent::KeyReleased(key) => {
                self.input.handle_key_input(key, false);
            }
            AppEvent::WindowCloseRequested => {}
        }
        Ok(())
    }

    fn is_finished(&self) -> bool {
        self.world.outcome() != Outcome::Playing
    }

    fn cleanup(&mut self) {
        log::info!(
            "Game over after {} frame(s): {:?}",
            self.world.frame(),
            self.world.outcome()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asteroid::AsteroidSize;
    use crate::components::FlyingObject;
    use rust_engine::foundation::math::Vec2;
    use rust_engine::input::KeyCode;

    fn quiet_game() -> AsteroidsGame {
        AsteroidsGame::from_world(World::empty(GameConfig::default()).unwrap())
    }

    fn press(game: &mut AsteroidsGame, key: KeyCode) {
        game.handle_event(AppEvent::KeyPressed(key)).unwrap();
    }

    fn release(game: &mut AsteroidsGame, key: KeyCode) {
        game.handle_event(AppEvent::KeyReleased(key)).unwrap();
    }

    #[test]
    fn test_fire_once_per_press() {
        let mut game = quiet_game();
        press(&mut game, KeyCode::Space);
        assert_eq!(game.world().bullets().len(), 1);

        // Holding the key does not fire again
        press(&mut game, KeyCode::Space);
        game.update(1.0 / 60.0).unwrap();
        game.update(1.0 / 60.0).unwrap();
        assert_eq!(game.world().bullets().len(), 1);

        release(&mut game, KeyCode::Space);
        press(&mut game, KeyCode::Space);
        assert_eq!(game.world().bullets().len(), 2);
    }

    #[test]
    fn test_held_turn_applies_every_frame() {
        let mut game = quiet_game();
        let start = game.world().ship().angle;

        press(&mut game, KeyCode::Left);
        for _ in 0..10 {
            game.update(1.0 / 60.0).unwrap();
        }
        release(&mut game, KeyCode::Left);
        game.update(1.0 / 60.0).unwrap();

        assert!((game.world().ship().angle - (start + 30.0)).abs() < 1e-4);
    }

    #[test]
    fn test_events_alone_do_not_move_the_ship() {
        let mut game = quiet_game();
        let before = game.world().ship().clone();
        press(&mut game, KeyCode::Up);
        press(&mut game, KeyCode::Right);
        assert_eq!(game.world().ship(), &before);
    }

    #[test]
    fn test_overlay_text() {
        let mut game = quiet_game();
        assert_eq!(game.overlay_text(), Some(WIN_MESSAGE));
        assert!(game.is_finished());

        let mut world = World::empty(GameConfig::default()).unwrap();
        let center = world.ship().center;
        world.add_asteroid(FlyingObject::asteroid(AsteroidSize::Large, center, Vec2::zeros(), world.config()));
        game = AsteroidsGame::from_world(world);
        assert_eq!(game.overlay_text(), None);

        game.update(1.0 / 60.0).unwrap();
        assert!(game.is_lost());
        assert_eq!(game.overlay_text(), Some(LOSS_MESSAGE));
    }

    #[test]
    fn test_presses_ignored_after_loss() {
        let mut world = World::empty(GameConfig::default()).unwrap();
        let center = world.ship().center;
        world.add_asteroid(FlyingObject::asteroid(AsteroidSize::Medium, center, Vec2::zeros(), world.config()));
        let mut game = AsteroidsGame::from_world(world);
        game.update(1.0 / 60.0).unwrap();
        assert!(game.is_lost());

        press(&mut game, KeyCode::Space);
        press(&mut game, KeyCode::W);
        assert!(game.world().bullets().is_empty());
        assert_eq!(game.input.held_count(), 0);
    }
}
