//! Asteroid sizes and fragmentation
//!
//! A hit asteroid dies and, unless it is small, leaves fragments of the next
//! sizes down at its center:
//!
//! | parent | fragments                  |
//! |--------|----------------------------|
//! | Large  | 2 Medium + 1 Small         |
//! | Medium | 2 Small                    |
//! | Small  | none                       |

use crate::components::{FlyingObject, ObjectKind};
use crate::config::{GameConfig, RockConfig};
use crate::error::GameError;
use rand::Rng;
use rust_engine::foundation::math::{utils, Vec2};
use rust_engine::physics::BoundingCircle;

/// Asteroid size categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AsteroidSize {
    /// Large asteroid (splits into medium and small)
    Large,

    /// Medium asteroid (splits into small)
    Medium,

    /// Small asteroid (destroyed completely)
    Small,
}

/// Horizontal speed of a fragment
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Drift {
    /// Parent's horizontal speed plus this offset
    Relative(f32),

    /// This speed, whatever the parent was doing
    Fixed(f32),
}

/// One child produced when an asteroid breaks
///
/// The vertical speed is always the parent's plus `dy_offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fragment {
    /// Size of the child
    pub size: AsteroidSize,

    /// Horizontal speed rule
    pub dx: Drift,

    /// Added to the parent's vertical speed
    pub dy_offset: f32,
}

impl Fragment {
    /// Velocity of this fragment for a parent moving at `parent`
    pub fn velocity(&self, parent: Vec2) -> Vec2 {
        let dx = match self.dx {
            Drift::Relative(offset) => parent.x + offset,
            Drift::Fixed(speed) => speed,
        };
        Vec2::new(dx, parent.y + self.dy_offset)
    }
}

// Large-rock children keep only the parent's vertical motion: mediums drift
// right at launch speed, the small one has no horizontal speed.
const LARGE_FRAGMENTS: [Fragment; 3] = [
    Fragment { size: AsteroidSize::Medium, dx: Drift::Fixed(1.5), dy_offset: 2.0 },
    Fragment { size: AsteroidSize::Medium, dx: Drift::Fixed(1.5), dy_offset: -2.0 },
    Fragment { size: AsteroidSize::Small, dx: Drift::Fixed(0.0), dy_offset: 5.0 },
];

const MEDIUM_FRAGMENTS: [Fragment; 2] = [
    Fragment { size: AsteroidSize::Small, dx: Drift::Relative(1.5), dy_offset: 1.5 },
    Fragment { size: AsteroidSize::Small, dx: Drift::Relative(-1.5), dy_offset: -1.5 },
];

impl AsteroidSize {
    /// Tuning for this size
    pub const fn rock(self, config: &GameConfig) -> &RockConfig {
        match self {
            Self::Large => &config.asteroids.large,
            Self::Medium => &config.asteroids.medium,
            Self::Small => &config.asteroids.small,
        }
    }

    /// Collision radius
    pub const fn radius(self, config: &GameConfig) -> f32 {
        self.rock(config).radius
    }

    /// Degrees of spin per frame
    pub const fn spin(self, config: &GameConfig) -> f32 {
        self.rock(config).spin
    }

    /// Get the next smaller size when split
    pub const fn split_into(self) -> Option<Self> {
        match self {
            Self::Large => Some(Self::Medium),
            Self::Medium => Some(Self::Small),
            Self::Small => None,
        }
    }

    /// Children left behind when an asteroid of this size breaks
    pub const fn fragments(self) -> &'static [Fragment] {
        match self {
            Self::Large => &LARGE_FRAGMENTS,
            Self::Medium => &MEDIUM_FRAGMENTS,
            Self::Small => &[],
        }
    }
}

impl FlyingObject {
    /// Create an asteroid
    pub fn asteroid(size: AsteroidSize, center: Vec2, velocity: Vec2, config: &GameConfig) -> Self {
        Self::new(ObjectKind::Asteroid(size), center, velocity, 0.0, size.radius(config))
    }

    /// Create a large asteroid at a random spot, moving in a random direction
    ///
    /// Spots whose box proxy (grown by `spawn.safe_margin`) overlaps `keep_clear`
    /// are rejected and redrawn.
    pub fn launch_large<R: Rng + ?Sized>(
        rng: &mut R,
        config: &GameConfig,
        keep_clear: &BoundingCircle,
        index: u32,
    ) -> Result<Self, GameError> {
        let [x_min, x_max] = config.spawn_x_range();
        let [y_min, y_max] = config.spawn_y_range();
        let [d_min, d_max] = config.spawn.direction_range;
        let attempts = config.spawn.max_attempts;

        for attempt in 1..=attempts {
            let center = Vec2::new(rng.gen_range(x_min..=x_max), rng.gen_range(y_min..=y_max));
            let direction = rng.gen_range(d_min..=d_max);
            let velocity = utils::direction(direction as f32) * config.asteroids.launch_speed;

            let mut rock = Self::asteroid(AsteroidSize::Large, center, velocity, config);
            rock.wrap(&config.playfield);

            let clearance = BoundingCircle::new(rock.center, rock.radius + config.spawn.safe_margin);
            if !clearance.overlaps_box_proxy(keep_clear) {
                log::trace!("Placed asteroid {index} at {:?} after {attempt} attempt(s)", rock.center);
                return Ok(rock);
            }
        }

        Err(GameError::SpawnExhausted { index, attempts })
    }

    /// Size of this object if it is an asteroid
    pub const fn asteroid_size(&self) -> Option<AsteroidSize> {
        match self.kind {
            ObjectKind::Asteroid(size) => Some(size),
            _ => None,
        }
    }

    /// Break a live asteroid apart
    ///
    /// Pushes the fragments onto `out`, marks this asteroid dead and returns
    /// how many fragments were produced. Dead asteroids and non-asteroids are
    /// left alone and produce nothing, so a second call is a no-op.
    pub fn break_apart(&mut self, config: &GameConfig, out: &mut Vec<Self>) -> usize {
        let Some(size) = self.asteroid_size() else {
            return 0;
        };
        if !self.is_alive() {
            return 0;
        }

        let fragments = size.fragments();
        out.extend(fragments.iter().map(|fragment| {
            Self::asteroid(fragment.size, self.center, fragment.velocity(self.velocity), config)
        }));
        self.kill();

        log::debug!(
            "{:?} asteroid broke at ({:.1}, {:.1}) into {} fragment(s)",
            size,
            self.center.x,
            self.center.y,
            fragments.len()
        );
        fragments.len()
    }
}
