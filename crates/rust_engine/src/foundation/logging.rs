//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn, LevelFilter};

/// Initialize the logging system
///
/// `default_level` applies when `RUST_LOG` is not set; `RUST_LOG` always wins.
/// Calling this more than once is harmless, later calls are ignored.
pub fn init(default_level: LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(default_level);
    builder.parse_default_env();
    let _ = builder.try_init();
}
