//! Error types for tagwatch-update

use thiserror::Error;

/// Result type alias using tagwatch-update's error type
pub type Result<T> = std::result::Result<T, UpdateError>;

/// Errors raised while checking for a newer release
#[derive(Error, Debug)]
pub enum UpdateError {
    /// Base URL and path do not form a usable http(s) URL
    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Server answered with a non-2xx status
    #[error("Request to {url} failed with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Transport-level failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Release payload could not be read
    #[error("Invalid release payload: {message}")]
    InvalidPayload { message: String },

    /// Version string is not of the form vMAJOR.MINOR.PATCH
    #[error("Invalid version {version:?}: {reason}")]
    InvalidVersion { version: String, reason: String },

    /// Filesystem failure with the path involved
    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] tagwatch_core::Error),
}

impl UpdateError {
    /// Create an invalid URL error
    pub fn invalid_url(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an invalid payload error
    pub fn invalid_payload(message: impl ToString) -> Self {
        Self::InvalidPayload {
            message: message.to_string(),
        }
    }

    /// Create an invalid version error
    pub fn invalid_version(version: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidVersion {
            version: version.into(),
            reason: reason.into(),
        }
    }

    /// Create an IO error carrying the path
    pub fn io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}
