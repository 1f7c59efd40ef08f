//! Command implementations

pub mod check;
pub mod compare;
pub mod latest;
pub mod manifest;
pub mod version;

use anyhow::{Context, Result};
use tagwatch_core::{ConfigLoader, RuntimeConfig};

/// Load the layered runtime configuration
pub(crate) fn load_config() -> Result<RuntimeConfig> {
    ConfigLoader::new()
        .and_then(|loader| loader.load_runtime_config())
        .context("Failed to load runtime configuration")
}
