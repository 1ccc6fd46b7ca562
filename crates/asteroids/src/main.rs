//! Headless Asteroids runner
//!
//! Drives the game through the engine loop with a scripted pilot: hold turn
//! left the whole time and tap fire at a fixed interval. Useful for soak
//! runs and for checking config files.

use asteroids::{AsteroidsGame, GameConfig};
use clap::Parser;
use rust_engine::config::Config;
use rust_engine::foundation::logging::{self, LevelFilter};
use rust_engine::input::KeyCode;
use rust_engine::{AppEvent, Engine, EngineConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "asteroids", version, about = "Run a headless Asteroids simulation")]
struct Args {
    /// Game config file (.toml or .ron); built-in defaults when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stop after this many frames if the game has not ended
    #[arg(short, long, default_value_t = 3600)]
    frames: u64,

    /// Seed for asteroid placement
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Frames between shots; the key is released on the frame after each press
    #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(u64).range(2..))]
    fire_interval: u64,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

/// Host events for one frame of the scripted pilot
fn pilot(frame: u64, fire_interval: u64) -> Vec<AppEvent> {
    let mut events = Vec::new();
    if frame == 0 {
        events.push(AppEvent::KeyPressed(KeyCode::Left));
    }
    match frame % fire_interval {
        0 => events.push(AppEvent::KeyPressed(KeyCode::Space)),
        1 => events.push(AppEvent::KeyReleased(KeyCode::Space)),
        _ => {}
    }
    events
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logging::init(args.log_level);

    log::info!("Starting Asteroids (seed {})", args.seed);

    let config = GameConfig::load_or_default(args.config.as_deref())?;
    let mut game = AsteroidsGame::new(config, args.seed)?;

    let engine_config = EngineConfig {
        max_frames: Some(args.frames),
        ..EngineConfig::default()
    };
    let fire_interval = args.fire_interval;
    let report = Engine::run(&engine_config, &mut game, |frame| pilot(frame, fire_interval))?;

    match game.overlay_text() {
        Some(text) => log::info!("{text}"),
        None => log::info!("Stopped after {} frame(s) with the game still running", report.frames),
    }
    log::info!(
        "{} asteroid(s) left, {} bullet(s) in flight",
        game.world().asteroids().len(),
        game.world().bullets().len()
    );

    Ok(())
}
