//! Lanai
//!
//! In-memory associative containers keyed by byte sequences. The centrepiece
//! is [`LanaiTrie`](data_structures::LanaiTrie), a compacting prefix tree with
//! point lookup, insertion with duplicate detection, prefix enumeration,
//! update, and removal that prunes every node left without purpose.
//!
//! # Architecture
//!
//! - `data_structures` holds the containers; they depend on nothing else in
//!   the crate and never log errors, they return them.
//! - `config` loads layered settings (defaults, file, environment).
//! - `logging` installs a `tracing` subscriber for applications that want one;
//!   [`init`] never does.
//! - `error` aggregates component errors into [`error::LanaiError`].

pub mod config;
pub mod data_structures;
pub mod error;
pub mod logging;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Lanai.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Loads the default configuration (a missing file falls back to built-in
/// defaults plus `LANAI__*` environment overrides) and stores it as the
/// global configuration. Installing a subscriber is left to the caller, see
/// [`logging::init_logging`].
pub fn init() -> error::LanaiResult<&'static config::LanaiConfig> {
    let loaded = config::load_default_config()?;
    config::init_global_config(loaded);

    config::get_global_config()
        .ok_or_else(|| error::LanaiError::Custom("Global configuration unavailable".to_string()))
}
