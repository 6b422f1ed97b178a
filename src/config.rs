//! Configuration for the TestRail integration logger
//!
//! Covers where the log file lives (derived from a host-supplied base directory)
//! and the tunables of the recent-message history.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::LogError;

/// Directory under the base directory that holds per-plugin data
pub const PLUGIN_DATA_DIR: &str = "pluginData";

/// Logger configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    /// Number of rendered lines kept in memory (default: 200)
    #[serde(default = "default_recent_capacity")]
    pub recent_capacity: usize,

    /// Plugin directory name under `pluginData` (default: "TRIntegration")
    #[serde(default = "default_plugin_dir")]
    pub plugin_dir: String,

    /// Log file name inside the plugin directory (default: "TRIntegration.log")
    #[serde(default = "default_file_name")]
    pub file_name: String,

    /// Tag DEBUG lines as `[INFO]` in the file and history, as older releases did
    #[serde(default)]
    pub legacy_debug_tag: bool,
}

fn default_recent_capacity() -> usize {
    200
}

fn default_plugin_dir() -> String {
    "TRIntegration".to_string()
}

fn default_file_name() -> String {
    "TRIntegration.log".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            recent_capacity: default_recent_capacity(),
            plugin_dir: default_plugin_dir(),
            file_name: default_file_name(),
            legacy_debug_tag: false,
        }
    }
}

impl LogConfig {
    /// Load configuration from file, or return default if not found
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path).context("Failed to read log config")?;
            toml::from_str(&content).context("Failed to parse log config")
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize log config")?;
        std::fs::write(path, content).context("Failed to write log config")?;
        Ok(())
    }

    /// Resolve the log file path below `base_dir`
    ///
    /// `<base_dir>/pluginData/<plugin_dir>/<file_name>`
    pub fn log_file_path(&self, base_dir: &Path) -> PathBuf {
        base_dir
            .join(PLUGIN_DATA_DIR)
            .join(&self.plugin_dir)
            .join(&self.file_name)
    }
}

/// Source of the host's base (system) directory
pub trait BaseDirProvider: Send + Sync {
    /// Return the base directory, or fail if it cannot be determined
    fn system_dir(&self) -> Result<PathBuf, LogError>;
}

impl BaseDirProvider for PathBuf {
    fn system_dir(&self) -> Result<PathBuf, LogError> {
        Ok(self.clone())
    }
}

/// Paths handed to us by the host server
#[derive(Debug, Clone, Default)]
pub struct ServerPaths {
    system_dir: Option<PathBuf>,
}

impl ServerPaths {
    /// Create paths with a known system directory
    pub fn new(system_dir: impl Into<PathBuf>) -> Self {
        Self {
            system_dir: Some(system_dir.into()),
        }
    }

    /// Paths for a host that has not configured a system directory yet
    pub fn unconfigured() -> Self {
        Self::default()
    }
}

impl BaseDirProvider for ServerPaths {
    fn system_dir(&self) -> Result<PathBuf, LogError> {
        self.system_dir
            .clone()
            .ok_or_else(|| LogError::BaseDir("server system directory is not configured".into()))
    }
}

/// Base directory under the user's home (~/.trintegration)
#[derive(Debug, Clone, Copy, Default)]
pub struct HomeDirProvider;

impl BaseDirProvider for HomeDirProvider {
    fn system_dir(&self) -> Result<PathBuf, LogError> {
        dirs::home_dir()
            .map(|h| h.join(".trintegration"))
            .ok_or_else(|| LogError::BaseDir("could not determine home directory".into()))
    }
}
