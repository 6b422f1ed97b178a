//! TestRail integration logger
//!
//! A small logging facility that writes every call to a structured logger, a
//! timestamped log file and a bounded in-memory history of recent messages.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{BaseDirProvider, HomeDirProvider, LogConfig, ServerPaths};
pub use error::LogError;
pub use logging::{LogFacility, LogRegistry, StructuredLogger};
