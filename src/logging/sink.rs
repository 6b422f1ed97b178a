//! Structured logger capability
//!
//! The facility forwards every call to a host-provided leveled logger. The
//! default implementation emits `log` records targeted at the logger name,
//! which a `tracing` subscriber picks up through the `tracing-log` bridge.

/// Name of the bootstrap channel used for failures of the facility itself
pub const BOOTSTRAP_LOGGER: &str = "server";

/// Leveled logger the facility forwards message bodies to
pub trait StructuredLogger: Send + Sync {
    fn error(&self, message: &str);
    fn warn(&self, message: &str);
    fn info(&self, message: &str);
    fn debug(&self, message: &str);

    /// Whether the debug channel is currently enabled
    fn is_debug_enabled(&self) -> bool;
}

/// Emits records whose target is the logger name
///
/// Filters such as `RUST_LOG=info,publisher=debug` therefore apply per logger.
#[derive(Debug, Clone)]
pub struct TracingLogger {
    name: String,
}

impl TracingLogger {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Logger for reporting problems with the facility itself
    pub fn bootstrap() -> Self {
        Self::new(BOOTSTRAP_LOGGER)
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl StructuredLogger for TracingLogger {
    fn error(&self, message: &str) {
        log::error!(target: self.name.as_str(), "{}", message);
    }

    fn warn(&self, message: &str) {
        log::warn!(target: self.name.as_str(), "{}", message);
    }

    fn info(&self, message: &str) {
        log::info!(target: self.name.as_str(), "{}", message);
    }

    fn debug(&self, message: &str) {
        log::debug!(target: self.name.as_str(), "{}", message);
    }

    fn is_debug_enabled(&self) -> bool {
        log::log_enabled!(target: self.name.as_str(), log::Level::Debug)
    }
}
