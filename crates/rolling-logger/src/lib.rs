//! Rolling Logger
//!
//! `log` backend that writes each record to the browser console (stderr off
//! wasm) and keeps the most recent lines in a circular buffer so the UI can
//! show them.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Lines kept when no capacity is given
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

#[derive(Debug)]
pub enum LoggerError {
    AlreadyInitialized,
}

impl std::fmt::Display for LoggerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoggerError::AlreadyInitialized => write!(f, "a logger is already installed"),
        }
    }
}

impl std::error::Error for LoggerError {}

/// Logger with a bounded history of formatted lines
pub struct RollingLogger {
    level: LevelFilter,
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
}

impl RollingLogger {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            level: LevelFilter::Info,
            capacity,
            lines: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Buffered lines, oldest first
    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }

    fn push(&self, line: String) {
        let mut lines = match self.lines.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        };
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(
            &chrono::Local::now().format("%H:%M:%S%.3f").to_string(),
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        write_to_console(record.level(), &line);
        self.push(line);
    }

    fn flush(&self) {}
}

/// `[HH:MM:SS.mmm] LEVEL target: message`
fn format_line(time: &str, level: Level, target: &str, message: &str) -> String {
    format!("[{}] {:<5} {}: {}", time, level, target, message)
}

#[cfg(target_arch = "wasm32")]
fn write_to_console(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        _ => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_to_console(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the global logger. `capacity` lines are kept for `recent_lines`.
pub fn init_logger(capacity: usize) -> Result<(), LoggerError> {
    init_with_level(capacity, LevelFilter::Info)
}

pub fn init_with_level(capacity: usize, level: LevelFilter) -> Result<(), LoggerError> {
    if LOGGER.get().is_some() {
        return Err(LoggerError::AlreadyInitialized);
    }
    let logger = LOGGER.get_or_init(|| RollingLogger::new(capacity).with_level(level));
    log::set_logger(logger).map_err(|_| LoggerError::AlreadyInitialized)?;
    log::set_max_level(level);
    Ok(())
}

/// Most recent buffered lines, oldest first. Empty before `init_logger`.
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(|l| l.lines()).unwrap_or_default()
}
