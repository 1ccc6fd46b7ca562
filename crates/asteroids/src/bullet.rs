//! Bullets

use crate::components::{FlyingObject, ObjectKind};
use crate::config::GameConfig;
use rust_engine::foundation::math::{utils, Vec2};

/// Offset between the ship's facing and the laser sprite's angle
const SPRITE_ANGLE_OFFSET: f32 = 90.0;

/// Bullet-specific state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulletState {
    /// Frames left to live
    pub life: u32,

    /// Whether the firing velocity has been applied
    pub fired: bool,
}

impl BulletState {
    /// Fresh, unfired bullet
    pub const fn new(life: u32) -> Self {
        Self { life, fired: false }
    }

    /// Count down one frame; returns true when the bullet just expired
    pub fn tick(&mut self) -> bool {
        self.life = self.life.saturating_sub(1);
        self.life == 0
    }
}

impl FlyingObject {
    /// Create an unfired bullet at the ship's position
    ///
    /// The stored angle is the ship's angle plus 90 degrees, which is how the
    /// laser sprite is oriented.
    pub fn bullet(ship_angle: f32, ship_center: Vec2, config: &GameConfig) -> Self {
        Self::new(
            ObjectKind::Bullet(BulletState::new(config.bullet.lifetime)),
            ship_center,
            Vec2::zeros(),
            ship_angle + SPRITE_ANGLE_OFFSET,
            config.bullet.radius,
        )
    }

    /// Launch the bullet along the ship's facing at `speed` units per frame
    ///
    /// One-shot: firing again, firing a dead bullet or firing a non-bullet is
    /// a no-op. Returns whether the velocity was applied.
    pub fn fire(&mut self, speed: f32) -> bool {
        if !self.is_alive() {
            return false;
        }
        let ObjectKind::Bullet(state) = &mut self.kind else {
            return false;
        };
        if state.fired {
            return false;
        }

        state.fired = true;
        self.velocity += utils::heading(self.angle - SPRITE_ANGLE_OFFSET) * speed;
        true
    }

    /// Frames left for a bullet, `None` for anything else
    pub const fn remaining_life(&self) -> Option<u32> {
        match self.kind {
            ObjectKind::Bullet(state) => Some(state.life),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fire_follows_ship_facing() {
        let config = GameConfig::default();
        let mut bullet = FlyingObject::bullet(0.0, Vec2::new(400.0, 300.0), &config);

        assert!(bullet.fire(config.bullet.speed));
        assert_relative_eq!(bullet.velocity, Vec2::new(0.0, 10.0), epsilon = 1e-5);
        assert_relative_eq!(bullet.angle, 90.0);

        let mut left = FlyingObject::bullet(90.0, Vec2::new(400.0, 300.0), &config);
        left.fire(config.bullet.speed);
        assert_relative_eq!(left.velocity, Vec2::new(-10.0, 0.0), epsilon = 1e-5);
    }

    #[test]
    fn test_fire_is_one_shot() {
        let config = GameConfig::default();
        let mut bullet = FlyingObject::bullet(30.0, Vec2::zeros(), &config);

        assert!(bullet.fire(config.bullet.speed));
        let velocity = bullet.velocity;
        assert!(!bullet.fire(config.bullet.speed));
        assert_eq!(bullet.velocity, velocity);
    }

    #[test]
    fn test_dead_bullet_does_not_fire() {
        let config = GameConfig::default();
        let mut bullet = FlyingObject::bullet(0.0, Vec2::zeros(), &config);
        bullet.kill();

        assert!(!bullet.fire(config.bullet.speed));
        assert_eq!(bullet.velocity, Vec2::zeros());
    }

    #[test]
    fn test_lifetime_counts_down_to_death() {
        let config = GameConfig::default();
        let mut bullet = FlyingObject::bullet(0.0, Vec2::new(400.0, 300.0), &config);
        bullet.fire(config.bullet.speed);

        for expected in (1..config.bullet.lifetime).rev() {
            bullet.advance(&config);
            assert_eq!(bullet.remaining_life(), Some(expected));
            assert!(bullet.is_alive());
        }

        bullet.advance(&config);
        assert_eq!(bullet.remaining_life(), Some(0));
        assert!(!bullet.is_alive());

        // Dead bullets are not advanced any further
        bullet.advance(&config);
        assert_eq!(bullet.remaining_life(), Some(0));
    }

    #[test]
    fn test_tick() {
        let mut state = BulletState::new(2);
        assert!(!state.tick());
        assert!(state.tick());
        assert!(state.tick());
        assert_eq!(state.life, 0);
    }
}
