// Stderr logger for the command-line tool: one `[LEVEL] target: message`
// line per record, level taken from RUST_LOG (default info).

use std::io::Write;

use log::{LevelFilter, Log, Metadata, Record};

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut err = std::io::stderr().lock();
        let _ = writeln!(
            err,
            "[{:>5}] {}: {}",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Parse a `RUST_LOG`-style value.
///
/// Only bare level words count; `target=level` directives are skipped, and
/// when several bare words are given the last one wins.
pub fn parse_level(value: &str) -> Option<LevelFilter> {
    value
        .split(',')
        .map(str::trim)
        .filter(|d| !d.contains('='))
        .filter_map(|d| d.parse::<LevelFilter>().ok())
        .next_back()
}

/// Install the logger. Safe to call more than once; later calls only reset the level.
pub fn init() {
    let _ = log::set_logger(&LOGGER);
    let level = std::env::var("RUST_LOG")
        .ok()
        .as_deref()
        .and_then(parse_level)
        .unwrap_or(LevelFilter::Info);
    log::set_max_level(level);
}
