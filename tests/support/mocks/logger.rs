use std::error::Error;
use std::sync::Mutex;
use user_api::application::ports::logging::Logger;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
}

/// Logger that keeps every entry in memory for assertions.
#[derive(Default)]
pub struct RecordingLogger {
    entries: Mutex<Vec<LogEntry>>,
}

impl RecordingLogger {
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.entries().into_iter().map(|e| e.message).collect()
    }

    pub fn errors(&self) -> Vec<LogEntry> {
        self.entries()
            .into_iter()
            .filter(|e| e.level == LogLevel::Error)
            .collect()
    }

    fn push(&self, level: LogLevel, message: String) {
        self.entries.lock().unwrap().push(LogEntry { level, message });
    }
}

impl Logger for RecordingLogger {
    fn log(&self, message: &str) {
        self.push(LogLevel::Info, message.to_string());
    }

    fn error(&self, message: &str, _error: &(dyn Error + 'static)) {
        self.push(LogLevel::Error, message.to_string());
    }
}
