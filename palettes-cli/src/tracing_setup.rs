//! Tracing setup for the palettes CLI
//!
//! Usage:
//!   palettes --debug serve                        # Debug logging to console
//!   RUST_LOG=palettes_server=debug palettes serve # Fine-grained log control

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Default to debug level when RUST_LOG is not set
    pub debug: bool,
}

/// Initialize console tracing.
///
/// RUST_LOG always wins; otherwise the level is `info`, or `debug` with
/// `--debug`.
pub fn init(config: &TracingConfig) -> Result<()> {
    let default_level = if config.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
