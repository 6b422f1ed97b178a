//! Error types for logger construction

use thiserror::Error;

/// Errors raised while constructing a [`LogFacility`](crate::logging::LogFacility)
///
/// Logging calls themselves never fail; only resolving where the log file
/// lives can.
#[derive(Debug, Error)]
pub enum LogError {
    /// The base directory provider could not be queried
    #[error("failed to resolve base directory: {0}")]
    BaseDir(String),
}
