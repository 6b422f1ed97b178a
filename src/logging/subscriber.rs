//! Host-side `tracing` setup
//!
//! The default structured logger emits `log` records; a host without its own
//! subscriber can install this one, which also bridges those records into
//! `tracing`.

use anyhow::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "info";

/// Build the env filter, preferring `RUST_LOG` over `default_filter`
///
/// Logger names are targets, so `info,publisher=debug` turns on debug for
/// the `publisher` logger only.
pub fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Install a global fmt subscriber and the `log` bridge
///
/// Fails if a global subscriber or `log` logger is already set.
pub fn init_tracing(default_filter: &str) -> Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry()
        .with(env_filter(default_filter))
        .with(fmt_layer)
        .try_init()?;

    tracing::debug!("tracing subscriber installed");
    Ok(())
}
