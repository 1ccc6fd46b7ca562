//! Game errors

use rust_engine::config::ConfigError;
use thiserror::Error;

/// Errors raised while setting up a game
///
/// The running simulation itself cannot fail; everything here happens at
/// construction time.
#[derive(Error, Debug)]
pub enum GameError {
    /// The configuration could not be loaded or failed validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// No spawn point clear of the ship was found
    #[error("No clear spawn point for asteroid {index} after {attempts} attempts")]
    SpawnExhausted {
        /// Which initial asteroid could not be placed
        index: u32,
        /// Attempts made
        attempts: u32,
    },
}
