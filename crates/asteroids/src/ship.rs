//! Player ship controls
//!
//! Thrust is an instantaneous velocity change applied every frame the key is
//! held. There is no damping or speed cap, so the ship keeps drifting once
//! pushed. Controls do nothing once the ship is dead.

use crate::components::{FlyingObject, ObjectKind};
use crate::config::GameConfig;
use rust_engine::foundation::math::{utils, Vec2};

impl FlyingObject {
    /// Create the ship at the center of the playfield, at rest
    pub fn ship(config: &GameConfig) -> Self {
        let center = Vec2::new(config.playfield.width / 2.0, config.playfield.height / 2.0);
        Self::new(
            ObjectKind::Ship,
            center,
            Vec2::zeros(),
            config.ship.initial_angle,
            config.ship.radius,
        )
    }

    fn controllable(&self) -> bool {
        self.is_alive() && self.kind == ObjectKind::Ship
    }

    /// Rotate counter-clockwise by `degrees`
    pub fn turn_left(&mut self, degrees: f32) {
        if self.controllable() {
            self.angle += degrees;
        }
    }

    /// Rotate clockwise by `degrees`
    pub fn turn_right(&mut self, degrees: f32) {
        if self.controllable() {
            self.angle -= degrees;
        }
    }

    /// Push along the facing direction
    pub fn thrust_forward(&mut self, amount: f32) {
        if self.controllable() {
            self.velocity += utils::heading(self.angle) * amount;
        }
    }

    /// Push against the facing direction
    pub fn thrust_backward(&mut self, amount: f32) {
        if self.controllable() {
            self.velocity -= utils::heading(self.angle) * amount;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ship_facing(angle: f32) -> (FlyingObject, GameConfig) {
        let config = GameConfig::default();
        let mut ship = FlyingObject::ship(&config);
        ship.angle = angle;
        (ship, config)
    }

    #[test]
    fn test_ship_spawns_at_center() {
        let config = GameConfig::default();
        let ship = FlyingObject::ship(&config);
        assert_eq!(ship.center, Vec2::new(400.0, 300.0));
        assert_eq!(ship.velocity, Vec2::zeros());
        assert_eq!(ship.angle, 1.0);
        assert_eq!(ship.radius, 30.0);
    }

    #[test]
    fn test_turning_is_unbounded() {
        let (mut ship, config) = ship_facing(0.0);
        for _ in 0..200 {
            ship.turn_left(config.ship.turn_amount);
        }
        assert_relative_eq!(ship.angle, 600.0);

        ship.turn_right(config.ship.turn_amount);
        assert_relative_eq!(ship.angle, 597.0);
    }

    #[test]
    fn test_thrust_forward_then_drift() {
        let (mut ship, config) = ship_facing(0.0);
        ship.thrust_forward(config.ship.thrust_amount);
        ship.advance(&config);

        assert_relative_eq!(ship.center, Vec2::new(400.0, 300.25), epsilon = 1e-5);
        assert_relative_eq!(ship.velocity, Vec2::new(0.0, 0.25), epsilon = 1e-6);

        // No damping
        ship.advance(&config);
        assert_relative_eq!(ship.velocity, Vec2::new(0.0, 0.25), epsilon = 1e-6);
        assert_relative_eq!(ship.center, Vec2::new(400.0, 300.5), epsilon = 1e-5);
    }

    #[test]
    fn test_thrust_accumulates() {
        let (mut ship, config) = ship_facing(90.0);
        for _ in 0..4 {
            ship.thrust_forward(config.ship.thrust_amount);
        }
        assert_relative_eq!(ship.velocity, Vec2::new(-1.0, 0.0), epsilon = 1e-5);
    }

    #[test]
    fn test_thrust_backward_cancels_forward() {
        let (mut ship, config) = ship_facing(37.0);
        ship.thrust_forward(config.ship.thrust_amount);
        ship.thrust_backward(config.ship.thrust_amount);
        assert_relative_eq!(ship.velocity, Vec2::zeros(), epsilon = 1e-6);
    }

    #[test]
    fn test_dead_ship_ignores_controls() {
        let (mut ship, config) = ship_facing(0.0);
        ship.kill();
        ship.turn_left(config.ship.turn_amount);
        ship.turn_right(config.ship.turn_amount * 2.0);
        ship.thrust_forward(config.ship.thrust_amount);
        ship.thrust_backward(config.ship.thrust_amount);

        assert_eq!(ship.angle, 0.0);
        assert_eq!(ship.velocity, Vec2::zeros());
    }

    #[test]
    fn test_controls_only_steer_ships() {
        let config = GameConfig::default();
        let mut bullet = FlyingObject::bullet(0.0, Vec2::zeros(), &config);
        let angle = bullet.angle;
        bullet.turn_left(config.ship.turn_amount);
        bullet.thrust_forward(config.ship.thrust_amount);

        assert_eq!(bullet.angle, angle);
        assert_eq!(bullet.velocity, Vec2::zeros());
    }
}
