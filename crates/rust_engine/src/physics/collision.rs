//! Circle collision primitives

use crate::foundation::math::Vec2;

/// A bounding circle for collision detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingCircle {
    /// The center position of the circle in world space
    pub center: Vec2,
    /// The radius of the circle
    pub radius: f32,
}

impl BoundingCircle {
    /// Creates a new bounding circle with the given center and radius
    pub const fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Box-proxy overlap test
    ///
    /// Treats each circle as its axis-aligned bounding square and reports an
    /// overlap when both center distances are strictly below the radius sum.
    /// Accepts some diagonal near-misses that [`Self::intersects`] rejects.
    pub fn overlaps_box_proxy(&self, other: &Self) -> bool {
        let reach = self.radius + other.radius;
        let delta = self.center - other.center;
        delta.x.abs() < reach && delta.y.abs() < reach
    }

    /// Exact circle-circle intersection test
    pub fn intersects(&self, other: &Self) -> bool {
        let distance_squared = (self.center - other.center).magnitude_squared();
        let radius_sum = self.radius + other.radius;
        distance_squared < radius_sum * radius_sum
    }
}
