//! Flying objects
//!
//! The ship, bullets and asteroids share one record, [`FlyingObject`], and a
//! variant tag, [`ObjectKind`]. Per-variant behavior is a `match` on the tag;
//! the variant-specific operations live in `ship.rs`, `bullet.rs` and
//! `asteroid.rs`.

use crate::asteroid::AsteroidSize;
use crate::bullet::BulletState;
use crate::config::{GameConfig, PlayfieldConfig};
use rust_engine::foundation::math::{utils, Vec2};
use rust_engine::physics::BoundingCircle;

/// What a flying object is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    /// The player ship
    Ship,

    /// A bullet and its remaining life
    Bullet(BulletState),

    /// An asteroid of the given size
    Asteroid(AsteroidSize),
}

/// Sprite identifier handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    /// Player ship
    Ship,
    /// Bullet
    Laser,
    /// Large asteroid
    LargeRock,
    /// Medium asteroid
    MediumRock,
    /// Small asteroid
    SmallRock,
}

/// One drawable, alive object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderItem {
    /// What to draw
    pub sprite: Sprite,

    /// Center position
    pub position: Vec2,

    /// Facing angle in degrees, unnormalized
    pub angle: f32,
}

/// Shared state of everything that moves on the playfield
#[derive(Debug, Clone, PartialEq)]
pub struct FlyingObject {
    /// Center position
    pub center: Vec2,

    /// Displacement per frame
    pub velocity: Vec2,

    /// Facing angle in degrees, never normalized
    pub angle: f32,

    /// Collision radius
    pub radius: f32,

    /// Variant tag and variant state
    pub kind: ObjectKind,

    alive: bool,
}

impl FlyingObject {
    /// Create a live object
    ///
    /// Geometry must be finite and the radius non-negative.
    pub fn new(kind: ObjectKind, center: Vec2, velocity: Vec2, angle: f32, radius: f32) -> Self {
        debug_assert!(utils::is_finite(&center), "non-finite center {center:?}");
        debug_assert!(utils::is_finite(&velocity), "non-finite velocity {velocity:?}");
        debug_assert!(angle.is_finite(), "non-finite angle {angle}");
        debug_assert!(radius.is_finite() && radius >= 0.0, "invalid radius {radius}");

        Self {
            center,
            velocity,
            angle,
            radius,
            kind,
            alive: true,
        }
    }

    /// Whether the object still takes part in the simulation
    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    /// Mark the object dead; it is pruned on the next frame
    pub fn kill(&mut self) {
        self.alive = false;
    }

    /// Collision bounds
    pub const fn bounds(&self) -> BoundingCircle {
        BoundingCircle::new(self.center, self.radius)
    }

    /// Box-proxy hit test; dead objects never collide
    pub fn collides_with(&self, other: &Self) -> bool {
        self.alive && other.alive && self.bounds().overlaps_box_proxy(&other.bounds())
    }

    /// Move one frame: wrap, integrate, then apply the variant's own step
    pub fn advance(&mut self, config: &GameConfig) {
        if !self.alive {
            return;
        }

        self.wrap(&config.playfield);
        self.center += self.velocity;

        match &mut self.kind {
            ObjectKind::Ship => {}
            ObjectKind::Asteroid(size) => {
                self.angle += size.spin(config);
            }
            ObjectKind::Bullet(state) => {
                if state.tick() {
                    self.alive = false;
                }
            }
        }
    }

    /// Toroidal wrap, each axis independently
    pub fn wrap(&mut self, playfield: &PlayfieldConfig) {
        self.center.x = wrap_axis(self.center.x, playfield.width);
        self.center.y = wrap_axis(self.center.y, playfield.height);
    }

    /// Sprite for this object's variant
    pub const fn sprite(&self) -> Sprite {
        match self.kind {
            ObjectKind::Ship => Sprite::Ship,
            ObjectKind::Bullet(_) => Sprite::Laser,
            ObjectKind::Asteroid(AsteroidSize::Large) => Sprite::LargeRock,
            ObjectKind::Asteroid(AsteroidSize::Medium) => Sprite::MediumRock,
            ObjectKind::Asteroid(AsteroidSize::Small) => Sprite::SmallRock,
        }
    }

    /// Render description, `None` once dead
    pub fn render_item(&self) -> Option<RenderItem> {
        self.alive.then(|| RenderItem {
            sprite: self.sprite(),
            position: self.center,
            angle: self.angle,
        })
    }
}

/// Bring one coordinate back into `[0, extent)` after a single-frame move.
///
/// Only one extent is added or removed; speeds are assumed small relative
/// to the playfield.
pub fn wrap_axis(value: f32, extent: f32) -> f32 {
    if value >= extent {
        value - extent
    } else if value < 0.0 {
        value + extent
    } else {
        value
    }
}
