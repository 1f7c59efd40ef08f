//! GitHub releases fetching
//!
//! A release check is one GET against the configured API base plus the
//! latest-release path, followed by reading `tag_name` out of the payload.

use bytes::Bytes;
use futures_util::StreamExt;
use reqwest::header::CONTENT_LENGTH;
use serde::Deserialize;
use std::time::Duration;
use tagwatch_core::{ConfigLoader, RuntimeConfig};
use tracing::debug;
use url::Url;

use crate::error::{Result, UpdateError};
use crate::progress::ProgressDisplay;

/// Release information
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    /// Release tag (e.g., "v0.3.0")
    pub tag_name: String,

    /// Release name
    #[serde(default)]
    pub name: Option<String>,

    /// Release body (changelog)
    #[serde(default)]
    pub body: Option<String>,

    /// Web page of the release
    #[serde(default)]
    pub html_url: Option<String>,

    /// Whether this is a prerelease
    #[serde(default)]
    pub prerelease: bool,

    /// Whether this is a draft
    #[serde(default)]
    pub draft: bool,

    /// Release assets
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,

    /// Published date
    #[serde(default)]
    pub published_at: Option<String>,
}

/// Release asset
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseAsset {
    /// Asset name
    pub name: String,

    /// Download URL
    pub browser_download_url: String,

    /// Asset size in bytes
    #[serde(default)]
    pub size: u64,
}

/// Extract `tag_name` from a release payload
pub fn parse_github_tag(data: &[u8]) -> Result<String> {
    parse_release(data).map(|release| release.tag_name)
}

fn parse_release(data: &[u8]) -> Result<Release> {
    serde_json::from_slice::<Release>(data).map_err(UpdateError::invalid_payload)
}

/// Join a base URL and a path into a validated http(s) URL
fn build_url(base_url: &str, path: &str) -> Result<Url> {
    let raw = format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    );

    let url = Url::parse(&raw).map_err(|e| UpdateError::invalid_url(&raw, e))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(UpdateError::invalid_url(
            raw.clone(),
            format!("unsupported scheme '{}'", other),
        )),
    }
}

/// HTTP client for the releases endpoint
pub struct ReleaseClient {
    client: reqwest::Client,

    /// Base URL of the API host
    api_url: String,

    /// Path of the latest release endpoint
    release_path: String,
}

impl ReleaseClient {
    /// Create a client from the user's runtime configuration
    pub fn new() -> Result<Self> {
        let config = ConfigLoader::new()?.load_runtime_config()?;
        Self::from_config(&config)
    }

    /// Create a client from an already loaded configuration
    pub fn from_config(config: &RuntimeConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(&config.network.user_agent)
            .timeout(Duration::from_secs(config.network.http_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_url: config.github.api_url.clone(),
            release_path: config.github.latest_release_path(),
        })
    }

    /// Point the client at a different API host
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// API base URL in use
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Path of the latest release endpoint
    pub fn release_path(&self) -> &str {
        &self.release_path
    }

    /// GET `base_url` + `path` and return the body of a 2xx response
    pub async fn get_request(&self, base_url: &str, path: &str) -> Result<Bytes> {
        let url = build_url(base_url, path)?;
        debug!("GET {}", url);

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(UpdateError::HttpStatus {
                url: url.to_string(),
                status,
            });
        }

        Ok(response.bytes().await?)
    }

    /// Fetch the release at `release_path` on the configured API host
    pub async fn get_latest_release(&self, release_path: &str) -> Result<Release> {
        let data = self.get_request(&self.api_url, release_path).await?;
        parse_release(&data)
    }

    /// Fetch the tag of the release at `release_path`
    pub async fn get_latest_version(&self, release_path: &str) -> Result<String> {
        let data = self.get_request(&self.api_url, release_path).await?;
        let tag = parse_github_tag(&data)?;
        debug!("Latest published tag: {}", tag);
        Ok(tag)
    }

    /// Fetch the tag of this tool's own latest release
    pub async fn latest_tag(&self) -> Result<String> {
        self.get_latest_version(&self.release_path).await
    }

    /// Stream a release asset into memory, advancing `progress` per chunk
    pub async fn download(&self, url: &str, progress: &ProgressDisplay) -> Result<Bytes> {
        let url = Url::parse(url).map_err(|e| UpdateError::invalid_url(url, e))?;
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(UpdateError::HttpStatus {
                url: url.to_string(),
                status,
            });
        }

        let total = response
            .headers()
            .get(CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());
        if let Some(total) = total {
            progress.set_length(total);
        }

        // Content-Length only sizes the bar; the buffer grows with what arrives
        let mut buffer = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            buffer.extend_from_slice(&chunk);
            progress.inc(chunk.len() as u64);
        }

        progress.finish();
        Ok(Bytes::from(buffer))
    }
}
