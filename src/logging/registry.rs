//! One logger per subsystem name
//!
//! Built once at startup and passed to whoever needs a logger. Facilities
//! share the base directory and configuration of the registry.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::config::{BaseDirProvider, LogConfig};
use crate::error::LogError;

use super::facility::LogFacility;
use super::sink::{StructuredLogger, TracingLogger};

type LoggerFactory = Box<dyn Fn(&str) -> Arc<dyn StructuredLogger> + Send + Sync>;

fn tracing_logger(name: &str) -> Arc<dyn StructuredLogger> {
    Arc::new(TracingLogger::new(name))
}

/// Registry of named log facilities
pub struct LogRegistry {
    paths: Arc<dyn BaseDirProvider>,
    config: LogConfig,
    make_logger: LoggerFactory,
    bootstrap: Arc<dyn StructuredLogger>,
    facilities: Mutex<HashMap<String, Arc<LogFacility>>>,
}

impl LogRegistry {
    /// Create a registry whose facilities log through `tracing`
    pub fn new(paths: Arc<dyn BaseDirProvider>, config: LogConfig) -> Self {
        Self {
            paths,
            config,
            make_logger: Box::new(tracing_logger),
            bootstrap: Arc::new(TracingLogger::bootstrap()),
            facilities: Mutex::new(HashMap::new()),
        }
    }

    /// Use `factory` to create the structured logger for each new name
    pub fn with_logger_factory<F>(mut self, factory: F) -> Self
    where
        F: Fn(&str) -> Arc<dyn StructuredLogger> + Send + Sync + 'static,
    {
        self.make_logger = Box::new(factory);
        self
    }

    /// Use `bootstrap` for the facilities' own problems
    pub fn with_bootstrap(mut self, bootstrap: Arc<dyn StructuredLogger>) -> Self {
        self.bootstrap = bootstrap;
        self
    }

    /// Get the facility for `name`, creating it on first use
    ///
    /// The facility is built without holding the registry lock; if two callers
    /// race on a new name, the first one stored wins.
    pub fn get(&self, name: &str) -> Result<Arc<LogFacility>, LogError> {
        if let Some(facility) = self.lock().get(name) {
            return Ok(Arc::clone(facility));
        }

        let facility = LogFacility::builder(name)
            .config(self.config.clone())
            .logger((self.make_logger)(name))
            .bootstrap(Arc::clone(&self.bootstrap))
            .build(self.paths.as_ref())?;

        let mut facilities = self.lock();
        let facility = facilities
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(facility));
        Ok(Arc::clone(facility))
    }

    /// Get the facility named after type `T`
    pub fn for_type<T: ?Sized>(&self) -> Result<Arc<LogFacility>, LogError> {
        self.get(std::any::type_name::<T>())
    }

    /// Number of facilities created so far
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Arc<LogFacility>>> {
        self.facilities.lock().unwrap_or_else(|e| e.into_inner())
    }
}
