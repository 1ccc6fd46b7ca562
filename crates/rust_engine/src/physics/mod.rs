//! Physics module for collision detection
//!
//! Provides 2D bounding circles and the overlap tests used between them.

pub mod collision;

pub use collision::BoundingCircle;
