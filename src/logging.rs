#![cfg(feature = "std")]

use log::{LevelFilter, Log, Metadata, Record};
use std::env;

struct StdoutLogger;

impl Log for StdoutLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StdoutLogger = StdoutLogger;

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "BATTLEFIELD_LOG";

/// Initialize logging with a level taken from `BATTLEFIELD_LOG`.
/// Defaults to `info` if the variable is not set or invalid.
pub fn init_logging() {
    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
