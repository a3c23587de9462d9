//! Logger that keeps every line in memory

use std::sync::{Mutex, PoisonError};

use super::traits::Logger;

/// Log levels, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// Records log lines for later inspection
///
/// Handy for hosts that surface diagnostics after the fact, and for tests.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    lines: Mutex<Vec<(LogLevel, String)>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded lines, oldest first
    pub fn lines(&self) -> Vec<(LogLevel, String)> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Recorded messages at exactly `level`
    pub fn messages_at(&self, level: LogLevel) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    /// Check whether any recorded line contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|(_, m)| m.contains(needle))
    }

    fn record(&self, level: LogLevel, message: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((level, message.to_string()));
    }
}

impl Logger for RecordingLogger {
    fn debug(&self, message: &str) {
        self.record(LogLevel::Debug, message);
    }

    fn info(&self, message: &str) {
        self.record(LogLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.record(LogLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.record(LogLevel::Error, message);
    }
}
