//! Math utilities and types
//!
//! Provides the 2D vector type used for positions and velocities, plus
//! the angle helpers shared by everything that steers by a facing angle.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::{constants, Vec2};

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }

    /// Unit facing vector for an angle in degrees.
    ///
    /// Angle 0 points along +Y and positive angles turn counter-clockwise,
    /// so the result is `(-sin(angle), cos(angle))`. The angle does not need
    /// to be normalized.
    pub fn heading(angle_degrees: f32) -> Vec2 {
        let radians = deg_to_rad(angle_degrees);
        Vec2::new(-radians.sin(), radians.cos())
    }

    /// Direction vector for a compass-style angle in degrees: `(cos, sin)`.
    pub fn direction(angle_degrees: f32) -> Vec2 {
        let radians = deg_to_rad(angle_degrees);
        Vec2::new(radians.cos(), radians.sin())
    }

    /// Whether both components are finite
    pub fn is_finite(v: &Vec2) -> bool {
        v.x.is_finite() && v.y.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::utils::*;
    use super::Vec2;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_deg_rad_conversion() {
        assert_relative_eq!(deg_to_rad(180.0), std::f32::consts::PI, epsilon = EPSILON);
        assert_relative_eq!(rad_to_deg(std::f32::consts::FRAC_PI_2), 90.0, epsilon = 1e-4);
    }

    #[test]
    fn test_heading_zero_points_up() {
        let h = heading(0.0);
        assert_relative_eq!(h, Vec2::new(0.0, 1.0), epsilon = EPSILON);
    }

    #[test]
    fn test_heading_quarter_turn_points_left() {
        let h = heading(90.0);
        assert_relative_eq!(h, Vec2::new(-1.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn test_heading_unnormalized_angle() {
        assert_relative_eq!(heading(450.0), heading(90.0), epsilon = 1e-5);
        assert_relative_eq!(heading(-270.0), heading(90.0), epsilon = 1e-5);
    }

    #[test]
    fn test_direction() {
        assert_relative_eq!(direction(0.0), Vec2::new(1.0, 0.0), epsilon = EPSILON);
        assert_relative_eq!(direction(90.0), Vec2::new(0.0, 1.0), epsilon = EPSILON);
    }

    #[test]
    fn test_is_finite() {
        assert!(is_finite(&Vec2::new(1.0, -2.0)));
        assert!(!is_finite(&Vec2::new(f32::NAN, 0.0)));
        assert!(!is_finite(&Vec2::new(0.0, f32::INFINITY)));
    }
}
