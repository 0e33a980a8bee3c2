// src/logging.rs
use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

use log::LevelFilter;

static START: OnceLock<Instant> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// Install the stderr logger. Lines look like `[00:00:01.250][INFO] msg`,
/// timed from the first call. The level is fixed by the caller; the
/// environment is not consulted. Calling twice is harmless.
pub fn init(level: LevelFilter) {
    start();
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            let elapsed = fmt_elapsed(start().elapsed().as_millis());
            writeln!(buf, "[{elapsed}][{}] {}", record.level(), record.args())
        })
        .try_init();
}
