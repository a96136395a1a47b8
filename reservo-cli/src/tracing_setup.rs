//! Tracing setup for the reservo binary
//!
//! Usage:
//!   reservo --debug serve                  # Debug logging to console
//!   RUST_LOG=reservo_server=debug reservo  # Fine-grained log control
//!
//! Environment variables:
//!   RUST_LOG                               # Log filter (default: info)

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Filter used when RUST_LOG is unset
const DEFAULT_FILTER: &str = "info,tower_http=info,sqlx=warn";

/// Filter used with --debug when RUST_LOG is unset
const DEBUG_FILTER: &str = "debug,sqlx=info";

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Enable debug logging (ignored if RUST_LOG is set)
    pub debug: bool,
}

impl TracingConfig {
    fn filter(&self) -> EnvFilter {
        let fallback = if self.debug { DEBUG_FILTER } else { DEFAULT_FILTER };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
    }
}

/// Install the global console subscriber.
///
/// Fails if a subscriber is already installed.
pub fn init(config: &TracingConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(config.filter())
        .with_target(config.debug) // Show targets in debug mode
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
