//! Core engine implementation
//!
//! The engine is a headless fixed-step driver. Every frame advances the
//! application by exactly one step of `frame_time`; wall-clock time is never
//! consulted, so a run is fully reproducible from its event script.

use crate::application::{AppEvent, Application};
use thiserror::Error;

/// Main engine struct
///
/// The engine coordinates the frame loop between a host event source and an
/// [`Application`].
pub struct Engine {
    /// Engine configuration
    config: EngineConfig,

    /// Frames completed so far
    frame: u64,

    /// Whether the engine should continue running
    running: bool,
}

/// Summary of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineReport {
    /// Number of update calls made
    pub frames: u64,

    /// Whether the application reported a terminal state
    pub finished: bool,

    /// Whether the host asked the window to close
    pub close_requested: bool,
}

impl Engine {
    /// Create a new engine instance
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        if !(config.frame_time.is_finite() && config.frame_time > 0.0) {
            return Err(EngineError::InitializationFailed(format!(
                "frame_time must be positive, got {}",
                config.frame_time
            )));
        }

        log::info!("Initializing engine (frame_time = {:.4}s)", config.frame_time);

        Ok(Self {
            config,
            frame: 0,
            running: true,
        })
    }

    /// Run the engine main loop with the given application
    ///
    /// `events` is polled once per frame with the frame index and returns the
    /// host events delivered before that frame's update.
    pub fn run<T, F>(config: &EngineConfig, app: &mut T, events: F) -> Result<EngineReport, EngineError>
    where
        T: Application,
        F: FnMut(u64) -> Vec<AppEvent>,
    {
        let mut engine = Self::new(config.clone())?;

        app.initialize()
            .map_err(|e| EngineError::ApplicationError(format!("App initialization: {e}")))?;

        log::info!("Starting main loop...");
        let result = engine.main_loop(app, events);

        // Cleanup
        app.cleanup();

        let report = result?;
        log::info!("Engine shutdown complete after {} frames", report.frames);
        Ok(report)
    }

    fn main_loop<T, F>(&mut self, app: &mut T, mut events: F) -> Result<EngineReport, EngineError>
    where
        T: Application,
        F: FnMut(u64) -> Vec<AppEvent>,
    {
        let mut close_requested = false;

        while self.running {
            if self.config.max_frames.is_some_and(|max| self.frame >= max) {
                break;
            }

            for event in events(self.frame) {
                if event == AppEvent::WindowCloseRequested {
                    log::info!("Engine shutdown requested");
                    close_requested = true;
                    self.running = false;
                    break;
                }
                app.handle_event(event)
                    .map_err(|e| EngineError::ApplicationError(format!("App event: {e}")))?;
            }
            if !self.running {
                break;
            }

            app.update(self.config.frame_time)
                .map_err(|e| EngineError::ApplicationError(format!("App update: {e}")))?;
            self.frame += 1;

            if app.is_finished() {
                log::debug!("Application finished at frame {}", self.frame);
                self.running = false;
            }
        }

        Ok(EngineReport {
            frames: self.frame,
            finished: app.is_finished(),
            close_requested,
        })
    }
}

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Seconds reported to the application per frame
    pub frame_time: f32,

    /// Stop after this many frames (`None` runs until finished or closed)
    pub max_frames: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            frame_time: 1.0 / 60.0,
            max_frames: None,
        }
    }
}

/// Engine errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Engine initialization failed
    #[error("Engine initialization failed: {0}")]
    InitializationFailed(String),

    /// Application error
    #[error("Application error: {0}")]
    ApplicationError(String),
}
