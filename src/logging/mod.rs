//! Logging facility for the TestRail integration
//!
//! Fans each call out to a structured logger, an append-only log file and an
//! in-memory history of recent lines that survives file system failures.

mod buffer;
mod entry;
mod facility;
mod file_writer;
mod registry;
mod sink;
mod subscriber;

pub use buffer::{RecentMessages, RECENT_CAPACITY};
pub use entry::{Clock, LocalClock, LogEntry, LogLevel, TIMESTAMP_FORMAT};
pub use facility::{LogFacility, LogFacilityBuilder, TRACE_PREFIX};
pub use file_writer::append_line;
pub use registry::LogRegistry;
pub use sink::{StructuredLogger, TracingLogger, BOOTSTRAP_LOGGER};
pub use subscriber::{env_filter, init_tracing, DEFAULT_FILTER};
