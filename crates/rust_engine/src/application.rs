//! Application trait and lifecycle management

use crate::config::ConfigError;
use crate::input::KeyCode;
use thiserror::Error;

/// Application lifecycle trait
///
/// Implement this trait to drive a game from the engine loop.
pub trait Application {
    /// Initialize the application
    ///
    /// Called once before the first frame.
    fn initialize(&mut self) -> Result<(), AppError> {
        Ok(())
    }

    /// Update the application
    ///
    /// Called exactly once per frame, after that frame's events.
    ///
    /// # Arguments
    /// * `delta_time` - Time since last frame in seconds
    fn update(&mut self, delta_time: f32) -> Result<(), AppError>;

    /// Handle application events
    ///
    /// Called for each host event before the frame's update.
    fn handle_event(&mut self, event: AppEvent) -> Result<(), AppError>;

    /// Whether the application reached a terminal state and the loop may stop
    fn is_finished(&self) -> bool {
        false
    }

    /// Cleanup the application
    ///
    /// Called when the loop ends, whatever the reason.
    fn cleanup(&mut self) {}
}

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Custom application error
    #[error("Application error: {0}")]
    Custom(String),
}

/// Application events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Window close requested
    WindowCloseRequested,

    /// Key was pressed
    KeyPressed(KeyCode),

    /// Key was released
    KeyReleased(KeyCode),
}
