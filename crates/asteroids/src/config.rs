//! Game configuration
//!
//! Every tuning value the simulation reads lives here and is handed to the
//! [`World`](crate::world::World) at construction. Two worlds with different
//! configs never interfere. Files may be TOML or RON, and any section or
//! field left out falls back to its default.

use rust_engine::config::{Config, ConfigError};
use rust_engine::input::KeyCode;
use serde::{Deserialize, Serialize};

/// Game configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Playfield extent used by screen wrap
    pub playfield: PlayfieldConfig,

    /// Player ship tuning
    pub ship: ShipConfig,

    /// Bullet tuning
    pub bullet: BulletConfig,

    /// Asteroid sizes and spin
    pub asteroids: AsteroidConfig,

    /// Where initial large asteroids may appear
    pub spawn: SpawnConfig,

    /// Key bindings
    pub controls: ControlsConfig,
}

/// Playfield extent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayfieldConfig {
    /// Width in world units
    pub width: f32,

    /// Height in world units
    pub height: f32,
}

/// Ship configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipConfig {
    /// Collision radius
    pub radius: f32,

    /// Degrees turned per frame while a turn key is held
    pub turn_amount: f32,

    /// Velocity added per frame while a thrust key is held
    pub thrust_amount: f32,

    /// Facing angle at spawn, in degrees
    pub initial_angle: f32,
}

/// Bullet configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletConfig {
    /// Collision radius
    pub radius: f32,

    /// Speed in units per frame
    pub speed: f32,

    /// Lifetime in frames
    pub lifetime: u32,
}

/// Asteroid configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsteroidConfig {
    /// Large asteroids created with the world
    pub initial_count: u32,

    /// Speed of the initial large asteroids, units per frame
    pub launch_speed: f32,

    /// Large rock
    pub large: RockConfig,

    /// Medium rock
    pub medium: RockConfig,

    /// Small rock
    pub small: RockConfig,
}

/// Per-size rock tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RockConfig {
    /// Collision radius
    pub radius: f32,

    /// Degrees added to the facing angle each frame
    pub spin: f32,
}

/// Initial asteroid placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Horizontal range, `None` for the whole playfield width
    pub x_range: Option<[f32; 2]>,

    /// Vertical range, `None` for the whole playfield height
    pub y_range: Option<[f32; 2]>,

    /// Inclusive range of integer launch directions, in degrees
    pub direction_range: [i32; 2],

    /// Extra clearance around the ship that spawns must respect
    pub safe_margin: f32,

    /// Placement attempts per asteroid before giving up
    pub max_attempts: u32,
}

/// Controls configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Turn left keys
    pub turn_left: Vec<KeyCode>,

    /// Turn right keys
    pub turn_right: Vec<KeyCode>,

    /// Forward thrust keys
    pub thrust_forward: Vec<KeyCode>,

    /// Reverse thrust keys
    pub thrust_backward: Vec<KeyCode>,

    /// Fire keys
    pub fire: Vec<KeyCode>,
}

impl Default for PlayfieldConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            radius: 30.0,
            turn_amount: 3.0,
            thrust_amount: 0.25,
            initial_angle: 1.0,
        }
    }
}

impl Default for BulletConfig {
    fn default() -> Self {
        Self {
            radius: 30.0,
            speed: 10.0,
            lifetime: 60,
        }
    }
}

impl Default for AsteroidConfig {
    fn default() -> Self {
        Self {
            initial_count: 5,
            launch_speed: 1.5,
            large: RockConfig { radius: 15.0, spin: 1.0 },
            medium: RockConfig { radius: 5.0, spin: -2.0 },
            small: RockConfig { radius: 2.0, spin: 1.0 },
        }
    }
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            x_range: None,
            y_range: None,
            direction_range: [0, 359],
            safe_margin: 50.0,
            max_attempts: 64,
        }
    }
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            turn_left: vec![KeyCode::Left, KeyCode::A],
            turn_right: vec![KeyCode::Right, KeyCode::D],
            thrust_forward: vec![KeyCode::Up, KeyCode::W],
            thrust_backward: vec![KeyCode::Down, KeyCode::S],
            fire: vec![KeyCode::Space],
        }
    }
}

impl Config for GameConfig {}

impl GameConfig {
    /// Check every value the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let PlayfieldConfig { width, height } = self.playfield;
        positive("playfield.width", width)?;
        positive("playfield.height", height)?;

        non_negative("ship.radius", self.ship.radius)?;
        finite("ship.turn_amount", self.ship.turn_amount)?;
        finite("ship.thrust_amount", self.ship.thrust_amount)?;
        finite("ship.initial_angle", self.ship.initial_angle)?;

        non_negative("bullet.radius", self.bullet.radius)?;
        finite("bullet.speed", self.bullet.speed)?;
        if self.bullet.lifetime == 0 {
            return Err(invalid("bullet.lifetime must be at least one frame"));
        }

        finite("asteroids.launch_speed", self.asteroids.launch_speed)?;
        for (name, rock) in [
            ("large", &self.asteroids.large),
            ("medium", &self.asteroids.medium),
            ("small", &self.asteroids.small),
        ] {
            non_negative(&format!("asteroids.{name}.radius"), rock.radius)?;
            finite(&format!("asteroids.{name}.spin"), rock.spin)?;
        }

        let [x_min, x_max] = self.spawn_x_range();
        let [y_min, y_max] = self.spawn_y_range();
        ordered("spawn.x_range", x_min, x_max)?;
        ordered("spawn.y_range", y_min, y_max)?;
        if x_min < 0.0 || x_max > width || y_min < 0.0 || y_max > height {
            return Err(invalid("spawn ranges must lie inside the playfield"));
        }
        let [d_min, d_max] = self.spawn.direction_range;
        if d_min > d_max {
            return Err(invalid(format!("spawn.direction_range is inverted: [{d_min}, {d_max}]")));
        }
        non_negative("spawn.safe_margin", self.spawn.safe_margin)?;
        if self.asteroids.initial_count > 0 && self.spawn.max_attempts == 0 {
            return Err(invalid("spawn.max_attempts must be at least 1"));
        }

        Ok(())
    }

    /// Horizontal spawn range with the playfield default applied
    pub fn spawn_x_range(&self) -> [f32; 2] {
        self.spawn.x_range.unwrap_or([0.0, self.playfield.width])
    }

    /// Vertical spawn range with the playfield default applied
    pub fn spawn_y_range(&self) -> [f32; 2] {
        self.spawn.y_range.unwrap_or([0.0, self.playfield.height])
    }
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::Invalid(message.into())
}

fn finite(name: &str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(format!("{name} must be finite, got {value}")))
    }
}

fn non_negative(name: &str, value: f32) -> Result<(), ConfigError> {
    finite(name, value)?;
    if value < 0.0 {
        return Err(invalid(format!("{name} must not be negative, got {value}")));
    }
    Ok(())
}

fn positive(name: &str, value: f32) -> Result<(), ConfigError> {
    finite(name, value)?;
    if value <= 0.0 {
        return Err(invalid(format!("{name} must be positive, got {value}")));
    }
    Ok(())
}

fn ordered(name: &str, min: f32, max: f32) -> Result<(), ConfigError> {
    finite(name, min)?;
    finite(name, max)?;
    if min > max {
        return Err(invalid(format!("{name} is inverted: [{min}, {max}]")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_defaults_match_classic_tuning() {
        let config = GameConfig::default();
        assert_eq!(config.playfield.width, 800.0);
        assert_eq!(config.playfield.height, 600.0);
        assert_eq!(config.bullet.lifetime, 60);
        assert_eq!(config.bullet.speed, 10.0);
        assert_eq!(config.ship.turn_amount, 3.0);
        assert_eq!(config.ship.thrust_amount, 0.25);
        assert_eq!(config.asteroids.initial_count, 5);
        assert_eq!(config.asteroids.large.radius, 15.0);
        assert_eq!(config.asteroids.medium.spin, -2.0);
        assert_eq!(config.asteroids.small.spin, config.asteroids.large.spin);
    }

    #[test]
    fn test_spawn_ranges_default_to_playfield() {
        let mut config = GameConfig::default();
        config.playfield.width = 1024.0;
        assert_eq!(config.spawn_x_range(), [0.0, 1024.0]);
        assert_eq!(config.spawn_y_range(), [0.0, 600.0]);
    }

    #[test]
    fn test_rejects_negative_radius() {
        let mut config = GameConfig::default();
        config.asteroids.medium.radius = -1.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_nan_and_zero_extent() {
        let mut config = GameConfig::default();
        config.playfield.width = f32::NAN;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.playfield.height = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_lifetime() {
        let mut config = GameConfig::default();
        config.bullet.lifetime = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_spawn_ranges() {
        let mut config = GameConfig::default();
        config.spawn.x_range = Some([50.0, 1.0]);
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.spawn.y_range = Some([0.0, 900.0]);
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.spawn.direction_range = [50, 1];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_classic_narrow_spawn_is_valid() {
        let mut config = GameConfig::default();
        config.spawn.x_range = Some([1.0, 50.0]);
        config.spawn.y_range = Some([1.0, 150.0]);
        config.spawn.direction_range = [1, 50];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bundled_config_file_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/classic.toml");
        let config = GameConfig::load_from_file(path).unwrap();
        config.validate().unwrap();

        assert_eq!(config.spawn.x_range, Some([1.0, 50.0]));
        assert_eq!(config.spawn.direction_range, [1, 50]);
        // Sections missing from the file keep their defaults
        assert_eq!(config.controls, ControlsConfig::default());
    }
}
