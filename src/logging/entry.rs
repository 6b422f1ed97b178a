//! Log levels and rendered log lines

use std::fmt;

use chrono::{Local, NaiveDateTime};

/// Timestamp pattern for persisted lines (`yyyyMMdd'T'HHmmss`, local time)
pub const TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%S";

/// Log level of a facility call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Get the display name for this level
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    /// Whether entries at this level go to the file and the recent history
    pub fn is_persisted(&self) -> bool {
        !matches!(self, LogLevel::Trace)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source of wall-clock time for line timestamps
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time, no offset recorded
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A single log call, ready to be rendered
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Time the call was made
    pub timestamp: NaiveDateTime,
    /// Level the call was made at
    pub level: LogLevel,
    /// Level tag written into the line (differs from `level` for legacy DEBUG lines)
    pub tag: LogLevel,
    /// Formatted message body
    pub message: String,
}

impl LogEntry {
    /// Create a new log entry tagged with its own level
    pub fn new(timestamp: NaiveDateTime, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            timestamp,
            level,
            tag: level,
            message: message.into(),
        }
    }

    /// Override the tag written into the rendered line
    pub fn with_tag(mut self, tag: LogLevel) -> Self {
        self.tag = tag;
        self
    }

    /// Render as `[<timestamp>] [<TAG>] <message>`
    pub fn render(&self) -> String {
        format!(
            "[{}] [{}] {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.tag,
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_render_info() {
        let entry = LogEntry::new(at(3, 4, 5), LogLevel::Info, format!("x={}", 5));
        assert_eq!(entry.render(), "[20240102T030405] [INFO] x=5");
    }

    #[test]
    fn test_render_with_tag() {
        let entry =
            LogEntry::new(at(23, 59, 59), LogLevel::Debug, "probe").with_tag(LogLevel::Info);
        assert_eq!(entry.level, LogLevel::Debug);
        assert_eq!(entry.render(), "[20240102T235959] [INFO] probe");
    }

    #[test]
    fn test_trace_is_not_persisted() {
        assert!(!LogLevel::Trace.is_persisted());
        assert!(LogLevel::Debug.is_persisted());
        assert!(LogLevel::Info.is_persisted());
        assert!(LogLevel::Warn.is_persisted());
        assert!(LogLevel::Error.is_persisted());
    }

    #[test]
    fn test_local_clock_has_no_subsecond_in_render() {
        let entry = LogEntry::new(LocalClock.now(), LogLevel::Warn, "tick");
        let line = entry.render();
        // "[" + 15 char stamp + "]"
        assert_eq!(&line[16..], "] [WARN] tick");
    }
}
