// File: ./src/logging.rs
//! Logger setup for both binaries.
//!
//! The server logs to stderr. The TUI draws on the terminal, so it writes to a
//! file instead.
use anyhow::{Context, Result};
use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode, WriteLogger};
use std::fs::OpenOptions;
use std::path::Path;

fn log_config() -> simplelog::Config {
    ConfigBuilder::new()
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .add_filter_allow_str("schedview")
        .build()
}

/// Installs a stderr logger. A logger that is already installed stays.
pub fn init_terminal(level: LevelFilter) {
    if TermLogger::init(level, log_config(), TerminalMode::Stderr, ColorChoice::Auto).is_err() {
        log::debug!("Logger already initialized");
    }
}

/// Appends to `path`, creating it if needed.
pub fn init_file(level: LevelFilter, path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    if WriteLogger::init(level, log_config(), file).is_err() {
        log::debug!("Logger already initialized");
    }
    Ok(())
}
