//! The TestRail integration logger
//!
//! Each call is fanned out to three sinks: the structured logger, the log file
//! (best effort) and the in-memory recent history (always). File problems are
//! reported once on the bootstrap channel and never reach the caller.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::{BaseDirProvider, LogConfig};
use crate::error::LogError;

use super::buffer::RecentMessages;
use super::entry::{Clock, LocalClock, LogEntry, LogLevel};
use super::file_writer::append_line;
use super::sink::{StructuredLogger, TracingLogger};

/// Marker prepended to trace messages on the debug channel
pub const TRACE_PREFIX: &str = "TRACE: ";

/// Logger writing to the structured logger, a log file and a recent history
pub struct LogFacility {
    path: PathBuf,
    logger: Arc<dyn StructuredLogger>,
    bootstrap: Arc<dyn StructuredLogger>,
    clock: Arc<dyn Clock>,
    tracing: AtomicBool,
    recent: RecentMessages,
    debug_tag: LogLevel,
}

impl LogFacility {
    /// Create a logger named `name` with the default configuration
    ///
    /// Fails only if the base directory cannot be resolved. The log file and
    /// its directories are not created here.
    pub fn new(name: &str, paths: &dyn BaseDirProvider) -> Result<Self, LogError> {
        Self::builder(name).build(paths)
    }

    /// Create a logger named after type `T`
    pub fn for_type<T: ?Sized>(paths: &dyn BaseDirProvider) -> Result<Self, LogError> {
        Self::new(std::any::type_name::<T>(), paths)
    }

    /// Start building a logger with non-default parts
    pub fn builder(name: &str) -> LogFacilityBuilder {
        LogFacilityBuilder::new(name)
    }

    /// Path of the log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn error(&self, args: fmt::Arguments<'_>) {
        let message = fmt::format(args);
        self.logger.error(&message);
        self.persist(LogLevel::Error, message);
    }

    pub fn warn(&self, args: fmt::Arguments<'_>) {
        let message = fmt::format(args);
        self.logger.warn(&message);
        self.persist(LogLevel::Warn, message);
    }

    pub fn info(&self, args: fmt::Arguments<'_>) {
        let message = fmt::format(args);
        self.logger.info(&message);
        self.persist(LogLevel::Info, message);
    }

    /// Log at debug level, only when the structured logger has debug enabled
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        if !self.logger.is_debug_enabled() {
            return;
        }
        let message = fmt::format(args);
        self.logger.debug(&message);
        self.persist(LogLevel::Debug, message);
    }

    /// Send a `TRACE:` message to the debug channel
    ///
    /// Requires trace mode and debug enabled. Never written to the file or the
    /// recent history.
    pub fn trace(&self, args: fmt::Arguments<'_>) {
        if self.is_tracing() && self.logger.is_debug_enabled() {
            self.logger.debug(&format!("{}{}", TRACE_PREFIX, args));
        }
    }

    pub fn set_trace(&self, trace: bool) {
        self.tracing.store(trace, Ordering::Relaxed);
    }

    pub fn start_trace(&self) {
        self.set_trace(true);
    }

    pub fn end_trace(&self) {
        self.set_trace(false);
    }

    pub fn is_tracing(&self) -> bool {
        self.tracing.load(Ordering::Relaxed)
    }

    /// Copy of the recent history, oldest first
    pub fn recent_messages(&self) -> Vec<String> {
        self.recent.snapshot()
    }

    /// Number of lines currently in the recent history
    pub fn recent_len(&self) -> usize {
        self.recent.len()
    }

    fn persist(&self, level: LogLevel, message: String) {
        if !level.is_persisted() {
            return;
        }
        let tag = if level == LogLevel::Debug {
            self.debug_tag
        } else {
            level
        };
        let line = LogEntry::new(self.clock.now(), level, message)
            .with_tag(tag)
            .render();

        if let Err(e) = append_line(&self.path, &line) {
            // Debug lines are not worth a warning
            if level != LogLevel::Debug {
                self.bootstrap.warn(&format!(
                    "TRIntegration failed to log message ({}): {}",
                    e, line
                ));
            }
        }

        // The file may be unwritable; history is kept regardless
        self.recent.push(line);
    }
}

impl fmt::Debug for LogFacility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogFacility")
            .field("path", &self.path)
            .field("tracing", &self.is_tracing())
            .field("recent", &self.recent.len())
            .finish_non_exhaustive()
    }
}

/// Builder for [`LogFacility`] with injectable loggers, clock and config
pub struct LogFacilityBuilder {
    name: String,
    config: LogConfig,
    logger: Option<Arc<dyn StructuredLogger>>,
    bootstrap: Option<Arc<dyn StructuredLogger>>,
    clock: Option<Arc<dyn Clock>>,
}

impl LogFacilityBuilder {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            config: LogConfig::default(),
            logger: None,
            bootstrap: None,
            clock: None,
        }
    }

    pub fn config(mut self, config: LogConfig) -> Self {
        self.config = config;
        self
    }

    /// Structured logger for this facility (default: [`TracingLogger`] with the facility name)
    pub fn logger(mut self, logger: Arc<dyn StructuredLogger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Channel for the facility's own problems (default: [`TracingLogger::bootstrap`])
    pub fn bootstrap(mut self, bootstrap: Arc<dyn StructuredLogger>) -> Self {
        self.bootstrap = Some(bootstrap);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Resolve the log path and build the facility
    pub fn build(self, paths: &dyn BaseDirProvider) -> Result<LogFacility, LogError> {
        let base_dir = paths.system_dir()?;
        let path = self.config.log_file_path(&base_dir);

        let logger = self
            .logger
            .unwrap_or_else(|| Arc::new(TracingLogger::new(self.name.as_str())));
        let bootstrap = self
            .bootstrap
            .unwrap_or_else(|| Arc::new(TracingLogger::bootstrap()));
        let clock = self.clock.unwrap_or_else(|| Arc::new(LocalClock));

        bootstrap.info(&format!("Initialising logger at {}", path.display()));

        Ok(LogFacility {
            path,
            logger,
            bootstrap,
            clock,
            tracing: AtomicBool::new(false),
            recent: RecentMessages::new(self.config.recent_capacity),
            debug_tag: if self.config.legacy_debug_tag {
                LogLevel::Info
            } else {
                LogLevel::Debug
            },
        })
    }
}

/// Log at error level: `tr_error!(log, "failed: {}", err)`
#[macro_export]
macro_rules! tr_error {
    ($log:expr, $($arg:tt)+) => {
        $log.error(::std::format_args!($($arg)+))
    };
}

/// Log at warn level
#[macro_export]
macro_rules! tr_warn {
    ($log:expr, $($arg:tt)+) => {
        $log.warn(::std::format_args!($($arg)+))
    };
}

/// Log at info level
#[macro_export]
macro_rules! tr_info {
    ($log:expr, $($arg:tt)+) => {
        $log.info(::std::format_args!($($arg)+))
    };
}

/// Log at debug level (no-op unless debug is enabled)
#[macro_export]
macro_rules! tr_debug {
    ($log:expr, $($arg:tt)+) => {
        $log.debug(::std::format_args!($($arg)+))
    };
}

/// Log on the trace channel (no-op unless tracing and debug are enabled)
#[macro_export]
macro_rules! tr_trace {
    ($log:expr, $($arg:tt)+) => {
        $log.trace(::std::format_args!($($arg)+))
    };
}
