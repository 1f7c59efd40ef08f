//! Release manifest files
//!
//! Manifests live under `~/.tagwatch/manifests` and are written owner-only.

use std::fs::{self, OpenOptions};
use std::io::Write;
#[cfg(unix)]
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
use std::path::{Path, PathBuf};
use tagwatch_core::utils::APP_DIR_NAME;
use tracing::debug;

use crate::error::{Result, UpdateError};

/// Subdirectory of the working directory holding manifests
pub const MANIFEST_DIR: &str = "manifests";

/// Default manifest file name
pub const MANIFEST_FILE: &str = "version.json";

/// Write `data` to `path`, creating or truncating it
///
/// The parent directory must already exist.
pub fn write_into_file(data: &[u8], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(0o600);

    let mut file = options.open(path).map_err(|e| UpdateError::io(path, e))?;
    file.write_all(data).map_err(|e| UpdateError::io(path, e))?;

    // mode() only applies on creation
    #[cfg(unix)]
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
        .map_err(|e| UpdateError::io(path, e))?;

    debug!("Wrote {} bytes to {}", data.len(), path.display());
    Ok(())
}

/// Create `<home>/.tagwatch` and its manifest directory, returning the base
pub fn setup_config_dir(home: impl AsRef<Path>) -> Result<PathBuf> {
    let base = home.as_ref().join(APP_DIR_NAME);
    let manifests = base.join(MANIFEST_DIR);
    fs::create_dir_all(&manifests).map_err(|e| UpdateError::io(&manifests, e))?;
    Ok(base)
}

/// Default manifest location under the user's home directory
pub fn default_manifest_path() -> Result<PathBuf> {
    let home = tagwatch_core::get_home_dir()?;
    Ok(home.join(APP_DIR_NAME).join(MANIFEST_DIR).join(MANIFEST_FILE))
}
