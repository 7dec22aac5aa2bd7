//! Rolling Logger
//!
//! A `log` backend that writes to the browser console (stderr off-wasm) and
//! keeps the most recent lines in a fixed-size ring buffer.

use std::collections::VecDeque;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

pub struct RollingLogger {
    capacity: usize,
    level: LevelFilter,
    lines: Mutex<VecDeque<String>>,
}

impl RollingLogger {
    pub fn new(capacity: usize, level: LevelFilter) -> Self {
        Self {
            capacity,
            level,
            lines: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Recent lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Recent lines as one newline-separated block
    pub fn dump(&self) -> String {
        self.recent().join("\n")
    }

    fn remember(&self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if let Ok(mut lines) = self.lines.lock() {
            while lines.len() >= self.capacity {
                lines.pop_front();
            }
            lines.push_back(line);
        }
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
            &chrono::Utc::now().format("%H:%M:%S%.3f").to_string(),
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        emit(record.level(), &line);
        self.remember(line);
    }

    fn flush(&self) {}
}

pub fn format_line(timestamp: &str, level: Level, target: &str, message: &str) -> String {
    format!("{} {:<5} {}: {}", timestamp, level, target, message)
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;
    let line = JsValue::from_str(line);
    match level {
        Level::Error => console::error_1(&line),
        Level::Warn => console::warn_1(&line),
        Level::Info => console::info_1(&line),
        Level::Debug | Level::Trace => console::debug_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install a global logger; returns it so callers can read the history
pub fn init(capacity: usize, level: LevelFilter) -> Result<&'static RollingLogger, SetLoggerError> {
    let logger: &'static RollingLogger = Box::leak(Box::new(RollingLogger::new(capacity, level)));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(logger)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        let line = format_line("12:00:00.000", Level::Info, "folio_ui::app", "ready");
        assert_eq!(line, "12:00:00.000 INFO  folio_ui::app: ready");
    }

    #[test]
    fn test_ring_buffer_keeps_latest() {
        let logger = RollingLogger::new(2, LevelFilter::Info);
        for i in 0..3 {
            logger.log(
                &Record::builder()
                    .args(format_args!("line {}", i))
                    .level(Level::Info)
                    .target("test")
                    .build(),
            );
        }
        let recent = logger.recent();
        assert_eq!(recent.len(), 2);
        assert!(recent[0].ends_with("test: line 1"));
        assert!(recent[1].ends_with("test: line 2"));
    }

    #[test]
    fn test_dump_joins_history() {
        let logger = RollingLogger::new(3, LevelFilter::Debug);
        assert_eq!(logger.dump(), "");
        for msg in ["first", "second"] {
            logger.log(
                &Record::builder()
                    .args(format_args!("{}", msg))
                    .level(Level::Warn)
                    .target("page")
                    .build(),
            );
        }
        let dump = logger.dump();
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("WARN  page: first"));
        assert!(lines[1].ends_with("WARN  page: second"));
    }

    #[test]
    fn test_level_filter() {
        let logger = RollingLogger::new(4, LevelFilter::Warn);
        logger.log(
            &Record::builder()
                .args(format_args!("noise"))
                .level(Level::Debug)
                .target("test")
                .build(),
        );
        assert!(logger.recent().is_empty());
    }
}
