//! Type definitions shared across tagwatch crates

pub mod runtime_config;

pub use runtime_config::{DisplayConfig, GitHubConfig, NetworkConfig, RuntimeConfig};
