//! Layered runtime configuration loader
//!
//! Loads configuration from several sources, lowest precedence first:
//! 1. Embedded defaults (built into binary)
//! 2. User runtime config (~/.tagwatch/runtime.yaml)
//! 3. Environment variables (TAGWATCH_* prefix)
//! 4. CLI flags (handled by caller)

use crate::error::{Error, Result};
use crate::types::RuntimeConfig;
use crate::utils::app_dir;
use camino::{Utf8Path, Utf8PathBuf};
use rust_embed::RustEmbed;
use serde::de::DeserializeOwned;
use serde_yaml_ng::Value;
use std::env;
use std::fs;
use tracing::debug;

/// File name of the user runtime config inside the config directory
pub const RUNTIME_CONFIG_FILE: &str = "runtime.yaml";

/// Embedded configuration files
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../../embedded/config/"]
#[prefix = ""]
struct EmbeddedConfigs;

/// Runtime configuration loader
pub struct ConfigLoader {
    /// Base directory for configuration files
    config_dir: Utf8PathBuf,
}

impl ConfigLoader {
    /// Create a loader rooted at the standard config directory (~/.tagwatch)
    pub fn new() -> Result<Self> {
        let dir = app_dir()?;
        let config_dir = Utf8PathBuf::from_path_buf(dir)
            .map_err(|p| Error::invalid_config(format!("Non UTF-8 config path: {:?}", p)))?;
        Ok(Self { config_dir })
    }

    /// Create a loader with a custom config directory
    pub fn with_dir(config_dir: Utf8PathBuf) -> Self {
        Self { config_dir }
    }

    /// Get the config directory path
    pub fn config_dir(&self) -> &Utf8Path {
        &self.config_dir
    }

    /// Load runtime configuration with layered precedence
    pub fn load_runtime_config(&self) -> Result<RuntimeConfig> {
        let mut config = Self::load_embedded_config::<RuntimeConfig>("runtime-defaults.yaml")?;

        let runtime_config_path = self.config_dir.join(RUNTIME_CONFIG_FILE);
        if runtime_config_path.exists() {
            debug!("Loading runtime config from {}", runtime_config_path);
            let overlay = self.load_yaml_file::<Value>(&runtime_config_path)?;
            config = Self::merge_runtime_config(config, overlay).map_err(|e| {
                Error::invalid_config(format!("Failed to apply {}: {}", runtime_config_path, e))
            })?;
        }

        let config = Self::apply_env_overrides(config)?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Load an embedded configuration file
    fn load_embedded_config<T: DeserializeOwned>(filename: &str) -> Result<T> {
        let embedded_file = EmbeddedConfigs::get(filename).ok_or_else(|| {
            Error::config_not_found(format!("Embedded config not found: {}", filename))
        })?;

        let content = std::str::from_utf8(&embedded_file.data).map_err(|_| {
            Error::invalid_config(format!("Invalid UTF-8 in embedded config: {}", filename))
        })?;

        serde_yaml_ng::from_str(content).map_err(|e| {
            Error::invalid_config(format!(
                "Failed to parse embedded config {}: {}",
                filename, e
            ))
        })
    }

    /// Load a YAML file and parse it
    fn load_yaml_file<T: DeserializeOwned>(&self, path: &Utf8Path) -> Result<T> {
        let content = fs::read_to_string(path)?;
        serde_yaml_ng::from_str(&content)
            .map_err(|e| Error::invalid_config(format!("Failed to parse {}: {}", path, e)))
    }

    /// Merge a user config document over a base config, key by key
    ///
    /// Only keys present in the overlay replace base values.
    fn merge_runtime_config(base: RuntimeConfig, overlay: Value) -> Result<RuntimeConfig> {
        let mut merged = serde_yaml_ng::to_value(base)?;
        merge_yaml(&mut merged, overlay);
        serde_yaml_ng::from_value(merged).map_err(|e| Error::invalid_config(e.to_string()))
    }

    /// Reject values that would make every request fail
    fn validate(config: &RuntimeConfig) -> Result<()> {
        if config.network.http_timeout_secs == 0 {
            return Err(Error::invalid_config(
                "http-timeout-secs must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Apply environment variable overrides to runtime config
    fn apply_env_overrides(mut config: RuntimeConfig) -> Result<RuntimeConfig> {
        if let Ok(val) = env::var("TAGWATCH_HTTP_TIMEOUT_SECS") {
            config.network.http_timeout_secs = val.parse().map_err(|_| {
                Error::invalid_config("TAGWATCH_HTTP_TIMEOUT_SECS must be a valid number")
            })?;
        }

        if let Ok(val) = env::var("TAGWATCH_USER_AGENT") {
            config.network.user_agent = val;
        }

        if let Ok(val) = env::var("TAGWATCH_GITHUB_API_URL") {
            config.github.api_url = val;
        }

        if let Ok(val) = env::var("TAGWATCH_GITHUB_REPO_OWNER") {
            config.github.repo_owner = val;
        }

        if let Ok(val) = env::var("TAGWATCH_GITHUB_REPO_NAME") {
            config.github.repo_name = val;
        }

        if let Ok(val) = env::var("TAGWATCH_PROGRESS_TICK_MS") {
            config.display.progress_tick_ms = val.parse().map_err(|_| {
                Error::invalid_config("TAGWATCH_PROGRESS_TICK_MS must be a valid number")
            })?;
        }

        Ok(config)
    }
}

/// Recursively overlay YAML mappings; non-mapping values replace the base
fn merge_yaml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (_, Value::Null) => {}
        (Value::Mapping(base), Value::Mapping(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(existing) => merge_yaml(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}
