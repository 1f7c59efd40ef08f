//! Upgrade notices against the running binary's version
//!
//! A check that cannot reach the releases endpoint is not an error: the
//! notice is skipped and the status says why. Malformed version strings are
//! errors on either side.

use owo_colors::OwoColorize;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::releases::ReleaseClient;
use crate::version::ReleaseTag;

/// Outcome of a version check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateStatus {
    /// A newer release is published
    Available {
        current: ReleaseTag,
        latest: ReleaseTag,
        /// Web page of the newer release, when the payload carries one
        release_url: Option<String>,
    },

    /// The running version is the latest or newer
    UpToDate {
        current: ReleaseTag,
        latest: ReleaseTag,
    },

    /// The releases endpoint could not be queried
    Unreachable { current: ReleaseTag, reason: String },
}

impl UpdateStatus {
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available { .. })
    }

    /// The running version that was checked
    pub fn current(&self) -> ReleaseTag {
        match self {
            Self::Available { current, .. }
            | Self::UpToDate { current, .. }
            | Self::Unreachable { current, .. } => *current,
        }
    }

    /// Notice text shown when an upgrade is available
    pub fn notice(&self, app_name: &str) -> Option<String> {
        match self {
            Self::Available {
                current,
                latest,
                release_url,
            } => {
                let mut notice = format!(
                    "A new version of {} is available: {} (current {})",
                    app_name.bold(),
                    latest.to_string().green(),
                    current.to_string().dimmed(),
                );
                if let Some(url) = release_url {
                    notice.push_str(&format!("\nDownload it from: {}", url.cyan()));
                }
                Some(notice)
            }
            _ => None,
        }
    }
}

/// Checks the latest published tag against the running version
pub struct UpdateNotifier {
    client: ReleaseClient,

    /// Running version in tag form
    current_version: String,

    /// Application name used in the notice
    app_name: String,

    /// Print the notice to stdout when an upgrade is found
    print_notice: bool,
}

impl UpdateNotifier {
    /// Create a notifier for the running binary
    pub fn new(client: ReleaseClient) -> Self {
        Self {
            client,
            current_version: crate::current_tag(),
            app_name: "tagwatch".to_string(),
            print_notice: true,
        }
    }

    /// Check against a different running version
    pub fn with_current_version(mut self, version: impl Into<String>) -> Self {
        self.current_version = version.into();
        self
    }

    /// Name shown in the notice
    pub fn with_app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = name.into();
        self
    }

    /// Suppress printing; the status is still returned
    pub fn silent(mut self) -> Self {
        self.print_notice = false;
        self
    }

    pub fn current_version(&self) -> &str {
        &self.current_version
    }

    /// Compare the latest release with the running version
    ///
    /// Prints a notice when a newer release exists.
    pub async fn detect_new_version(&self) -> Result<UpdateStatus> {
        let current = ReleaseTag::parse(&self.current_version)?;

        let release_path = self.client.release_path().to_string();
        let release = match self.client.get_latest_release(&release_path).await {
            Ok(release) => release,
            Err(e) => {
                warn!("Could not check for a newer release: {}", e);
                return Ok(UpdateStatus::Unreachable {
                    current,
                    reason: e.to_string(),
                });
            }
        };

        let latest = ReleaseTag::parse(&release.tag_name)?;

        let status = if latest > current {
            info!("Update available: {} -> {}", current, latest);
            UpdateStatus::Available {
                current,
                latest,
                release_url: release.html_url,
            }
        } else {
            debug!("Already on latest version: {}", current);
            UpdateStatus::UpToDate { current, latest }
        };

        if self.print_notice {
            if let Some(notice) = status.notice(&self.app_name) {
                println!("\n{}\n", notice);
            }
        }

        Ok(status)
    }
}
