//! Runtime configuration types for operational parameters
//!
//! These types control how the release endpoint is reached and how progress
//! is displayed. Every field has a default so partial YAML files are valid.

use serde::{Deserialize, Serialize};

/// Complete runtime configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RuntimeConfig {
    /// Network and HTTP configuration
    #[serde(default)]
    pub network: NetworkConfig,

    /// GitHub repository settings
    #[serde(default)]
    pub github: GitHubConfig,

    /// Display and output settings
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Network and HTTP configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NetworkConfig {
    /// HTTP timeout in seconds
    #[serde(default = "default_http_timeout")]
    pub http_timeout_secs: u64,

    /// User agent string for HTTP requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            http_timeout_secs: default_http_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_http_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!(
        "tagwatch/{} ({}; {})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

/// GitHub repository settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GitHubConfig {
    /// Repository owner
    #[serde(default = "default_repo_owner")]
    pub repo_owner: String,

    /// Repository name
    #[serde(default = "default_repo_name")]
    pub repo_name: String,

    /// Base URL for GitHub API
    #[serde(default = "default_github_api_url")]
    pub api_url: String,
}

impl GitHubConfig {
    /// API path of the latest release endpoint
    pub fn latest_release_path(&self) -> String {
        format!("/repos/{}/{}/releases/latest", self.repo_owner, self.repo_name)
    }
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            repo_owner: default_repo_owner(),
            repo_name: default_repo_name(),
            api_url: default_github_api_url(),
        }
    }
}

fn default_repo_owner() -> String {
    "tagwatch".to_string()
}

fn default_repo_name() -> String {
    "tagwatch".to_string()
}

fn default_github_api_url() -> String {
    "https://api.github.com".to_string()
}

/// Display and output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DisplayConfig {
    /// Interval between progress bar ticks in milliseconds
    #[serde(default = "default_progress_tick_ms")]
    pub progress_tick_ms: u64,

    /// Render progress bars while waiting on the network
    #[serde(default = "default_show_progress")]
    pub show_progress: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            progress_tick_ms: default_progress_tick_ms(),
            show_progress: default_show_progress(),
        }
    }
}

fn default_progress_tick_ms() -> u64 {
    1000
}

fn default_show_progress() -> bool {
    true
}
