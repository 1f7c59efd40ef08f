//! Release version checking for the tagwatch CLI
//!
//! Provides:
//! - Strict `vMAJOR.MINOR.PATCH` tag parsing and comparison
//! - Fetching the latest release tag from the GitHub releases API
//! - Writing release manifests to disk
//! - Progress display while a related download proceeds
//! - Upgrade notices against the running binary's version

pub mod error;
pub mod manifest;
pub mod notifier;
pub mod progress;
pub mod releases;
pub mod version;

pub use error::{Result, UpdateError};
pub use manifest::{setup_config_dir, write_into_file};
pub use notifier::{UpdateNotifier, UpdateStatus};
pub use progress::{progress_bar_for_status, ProgressDisplay};
pub use releases::{parse_github_tag, Release, ReleaseAsset, ReleaseClient};
pub use version::{is_version_greater_than, ReleaseTag};

/// Current CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Running version in tag form (`vX.Y.Z`)
pub fn current_tag() -> String {
    format!("v{}", VERSION)
}
