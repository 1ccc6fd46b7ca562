//! # Asteroids
//!
//! Frame-stepped simulation of the classic arcade game: a ship at the center
//! of a wrap-around playfield, large asteroids drifting in from the edges, and
//! bullets that break asteroids into smaller ones until nothing is left.
//!
//! The [`World`] is the whole simulation and can be driven directly with
//! [`Controls`] each frame. [`AsteroidsGame`] wraps it as a
//! [`rust_engine::Application`] so the engine loop can feed it key events.
//!
//! ```rust,no_run
//! use asteroids::{Controls, GameConfig, World};
//!
//! let mut world = World::new(GameConfig::default(), 7)?;
//! while !world.is_won() && !world.is_lost() {
//!     world.update(Controls::TURN_LEFT);
//!     world.fire();
//! }
//! # Ok::<(), asteroids::GameError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod asteroid;
pub mod bullet;
pub mod components;
pub mod config;
pub mod controls;
pub mod error;
pub mod game;
pub mod ship;
pub mod world;

pub use asteroid::AsteroidSize;
pub use components::{FlyingObject, ObjectKind, RenderItem, Sprite};
pub use config::GameConfig;
pub use controls::{Controls, KeyBindings};
pub use error::GameError;
pub use game::AsteroidsGame;
pub use world::{Outcome, World};

#[cfg(test)]
mod tests;
