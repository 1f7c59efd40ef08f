//! Shared utility functions for tagwatch crates

use crate::error::{Error, Result};
use std::path::PathBuf;

/// Name of the per-user working directory under the home directory
pub const APP_DIR_NAME: &str = ".tagwatch";

/// Get the user's home directory
///
/// `HOME` wins over `dirs::home_dir()`, which reads the password database and
/// ignores overrides set by wrappers and test harnesses.
pub fn get_home_dir() -> Result<PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        if !home.is_empty() {
            return Ok(PathBuf::from(home));
        }
    }

    dirs::home_dir().ok_or(Error::NoHomeDir)
}

/// Get the tagwatch working directory (`~/.tagwatch`) without creating it
pub fn app_dir() -> Result<PathBuf> {
    Ok(get_home_dir()?.join(APP_DIR_NAME))
}
