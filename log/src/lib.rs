use std::env;
use std::str::FromStr;
use std::sync::Mutex;

use slog::Drain;
use slog::Fuse;
use slog::Level;
use slog_async::Async;
use slog_json::Json;

pub use slog::{crit, debug, error, info, o, trace, warn, Discard, Logger};

/// The environment variable holding the minimum level to emit.
pub const LEVEL_VARIABLE: &str = "BACKEND_LOG_LEVEL";

pub fn initialize_logger() -> slog::Logger {
    let level = env::var(LEVEL_VARIABLE)
        .ok()
        .and_then(|l| Level::from_str(&l).ok())
        .unwrap_or(Level::Info);

    let drain = Mutex::new(Json::default(std::io::stderr())).map(Fuse);
    let drain = Async::new(drain).build().fuse();
    let drain = drain.filter_level(level).fuse();

    Logger::root(
        drain,
        o!("version" => info::VERSION, "revision" => info::REVISION, "build_timestamp" => info::BUILD_TIMESTAMP),
    )
}

/// A logger that drops everything, for tests and helpers.
pub fn discard() -> slog::Logger {
    Logger::root(Discard, o!())
}
