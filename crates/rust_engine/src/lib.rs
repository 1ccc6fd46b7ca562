//! # Rust Engine
//!
//! A small, headless game engine layer for fixed-step 2D games.
//!
//! ## Features
//!
//! - **Fixed-step loop**: one `update` per frame, host events drained first
//! - **Input state**: held-key tracking with edge detection for one-shot actions
//! - **Config files**: TOML and RON loading through a single trait
//! - **2D collision**: bounding circles with a cheap box-proxy overlap test
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rust_engine::prelude::*;
//!
//! struct MyApp;
//!
//! impl Application for MyApp {
//!     fn update(&mut self, _delta_time: f32) -> Result<(), AppError> {
//!         // Update game logic
//!         Ok(())
//!     }
//!
//!     fn handle_event(&mut self, _event: AppEvent) -> Result<(), AppError> {
//!         Ok(())
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = EngineConfig::default();
//!     let mut app = MyApp;
//!     Engine::run(&config, &mut app, |_frame| Vec::new())?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod input;
pub mod physics;

mod application;
mod engine;

pub use application::{AppError, AppEvent, Application};
pub use engine::{Engine, EngineConfig, EngineError, EngineReport};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        AppError, AppEvent, Application,
        Engine, EngineConfig, EngineError, EngineReport,
        config::{Config, ConfigError},
        foundation::math::Vec2,
        input::{InputManager, KeyCode},
        physics::BoundingCircle,
    };
}
