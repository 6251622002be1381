//! Tracing subscriber setup for applications embedding the codec.
//!
//! The codec only emits `tracing` events; installing a subscriber is left to
//! the host. Events never carry payload bytes or key material.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::config::CodecConfig;

/// Initialise a JSON tracing subscriber at `log_level`.
///
/// For hosts that have no subscriber of their own: call it once at startup,
/// before the first codec call, usually with [`CodecConfig::log_level`].
/// Hosts that already install a subscriber skip this and still receive the
/// codec's `debug` rejection events. `RUST_LOG`, when set, overrides
/// `log_level`.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been set.
pub fn init(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise codec tracing subscriber: {e}"))
}

/// Initialise the subscriber at the level loaded into `cfg`.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been set.
pub fn init_from_config(cfg: &CodecConfig) -> Result<()> {
    init(&cfg.log_level)
}
