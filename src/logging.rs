#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

struct SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: SimpleLogger = SimpleLogger;

/// Level named by `CONNECTFOUR_LOG`, or `info` if unset or invalid.
fn level_from_env() -> LevelFilter {
    env::var("CONNECTFOUR_LOG")
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger. Calling it again is harmless.
pub fn init_logging() {
    let level = level_from_env();
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
