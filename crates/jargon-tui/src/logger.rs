//! File-based logging using simplelog
//!
//! Log file location depends on build type:
//! - Debug builds: current working directory (for development convenience)
//! - Release builds: cache directory (~/.cache/jargon/ on Linux)
//!
//! Logging goes to a file because stderr would corrupt the alternate
//! screen while the TUI is running.

use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

const LOG_FILE: &str = "jargon.log";

/// Get the log file path based on build type
fn log_file_path() -> PathBuf {
    if cfg!(debug_assertions) {
        // Debug build: log in current directory for convenience
        PathBuf::from(LOG_FILE)
    } else {
        // Release build: log in cache directory
        jargon_config::paths::cache_dir()
            .map(|dir| dir.join(LOG_FILE))
            .unwrap_or_else(|_| PathBuf::from(LOG_FILE))
    }
}

/// Initialize file-based logging
pub fn init() {
    let level = std::env::var("RUST_LOG")
        .map(|v| match v.to_lowercase().as_str() {
            "error" => LevelFilter::Error,
            "warn" => LevelFilter::Warn,
            "info" => LevelFilter::Info,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            _ => LevelFilter::Info,
        })
        .unwrap_or(LevelFilter::Info);

    let file = File::create(log_file_path()).expect("Failed to create log file");

    WriteLogger::init(level, Config::default(), file).expect("Failed to initialize logger");
}
