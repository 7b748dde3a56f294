//! Console Logging
//!
//! `console_log` is installed once per page. Later calls only move the max
//! level, so whichever init ran last decides what gets printed.

use log::LevelFilter;

pub fn install(level: LevelFilter) {
    #[cfg(target_arch = "wasm32")]
    if let Some(level) = level.to_level() {
        // Err means a logger is already installed; the level below still applies
        let _ = console_log::init_with_level(level);
    }
    log::set_max_level(level);
}
