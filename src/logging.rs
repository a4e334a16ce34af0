// src/logging.rs
// Timestamped line logging for the lotto generator.

use chrono::Local;

#[derive(Debug, Clone, Copy)]
pub enum LogLevel {
    Info,
    Warning,
    Error,
}

impl LogLevel {
    fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }
}

/// Print a timestamped log line. Errors go to stderr, everything else to
/// stdout, so headless output stays pipeable.
pub fn log(level: LogLevel, message: &str) {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    match level {
        LogLevel::Error => eprintln!("{} - {} - {}", timestamp, level.as_str(), message),
        _ => println!("{} - {} - {}", timestamp, level.as_str(), message),
    }
}

pub fn log_info(message: &str) {
    log(LogLevel::Info, message);
}

pub fn log_warning(message: &str) {
    log(LogLevel::Warning, message);
}

pub fn log_error(message: &str) {
    log(LogLevel::Error, message);
}
