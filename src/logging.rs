//! Logging setup for Lanai.
//!
//! Lanai components log through `tracing`; this module installs the global
//! subscriber that renders those events. Applications embedding Lanai with
//! their own subscriber should simply not call [`init_logging`].

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;
use crate::error::{LanaiError, LanaiResult};

/// Builds the event filter: `RUST_LOG` wins, otherwise the configured level.
pub fn build_filter(config: &LogConfig) -> LanaiResult<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level)
            .map_err(|e| LanaiError::Custom(format!("Invalid log filter '{}': {e}", config.level))),
    }
}

/// Initialize the logging system.
///
/// # Returns
///
/// * `Ok(())` if the subscriber was installed
/// * `Err(LanaiError::Custom)` if the filter is invalid or a global subscriber
///   is already set
pub fn init_logging(config: &LogConfig) -> LanaiResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(config)?)
        .with_file(config.source_location)
        .with_line_number(config.source_location)
        .with_thread_names(true);

    let installed = if config.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };

    installed
        .map_err(|e| LanaiError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}
