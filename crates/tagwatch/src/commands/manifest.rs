//! Manifest command
//!
//! Fetches the latest release payload (or one named asset) and writes it to
//! a manifest file, rendering progress while the request is in flight.

use anyhow::{anyhow, Context, Result};
use camino::Utf8PathBuf;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tagwatch_core::{get_home_dir, RuntimeConfig};
use tagwatch_update::manifest::{setup_config_dir, write_into_file, MANIFEST_DIR, MANIFEST_FILE};
use tagwatch_update::{progress_bar_for_status, ProgressDisplay, ReleaseClient};
use tokio::sync::mpsc;
use tracing::debug;

use crate::cli::ManifestArgs;
use crate::output;

pub async fn run(args: ManifestArgs, quiet: bool) -> Result<()> {
    let config = super::load_config()?;
    let client = ReleaseClient::from_config(&config).context("Failed to create HTTP client")?;
    let show_progress = config.display.show_progress && !quiet;

    let home = get_home_dir()?;
    let target = resolve_output(args.output, &home)?;

    let data = match &args.asset {
        Some(name) => fetch_asset(&client, name, show_progress).await?,
        None => fetch_payload(&client, &config, show_progress).await?,
    };

    write_into_file(&data, &target)
        .with_context(|| format!("Failed to write manifest to {}", target.display()))?;

    if !quiet {
        output::success(&format!("Manifest written to {}", target.display()));
        output::kv("Size", &format!("{} bytes", data.len()));
    }

    Ok(())
}

/// Pick the manifest path, creating the default location when needed
fn resolve_output(requested: Option<Utf8PathBuf>, home: &Path) -> Result<PathBuf> {
    match requested {
        Some(path) => Ok(path.into_std_path_buf()),
        None => {
            let base = setup_config_dir(home)?;
            Ok(base.join(MANIFEST_DIR).join(MANIFEST_FILE))
        }
    }
}

/// Number of ticks that cover the HTTP timeout
fn progress_steps(config: &RuntimeConfig) -> (u64, Duration) {
    let tick_ms = config.display.progress_tick_ms.max(1);
    let timeout_ms = config.network.http_timeout_secs.saturating_mul(1000);
    let steps = (timeout_ms / tick_ms).max(1);
    (steps, Duration::from_millis(tick_ms))
}

/// Fetch the latest release payload while a status bar ticks
async fn fetch_payload(
    client: &ReleaseClient,
    config: &RuntimeConfig,
    show_progress: bool,
) -> Result<Vec<u8>> {
    let (tx, rx) = mpsc::channel(1);
    let progress = if show_progress {
        let (steps, tick) = progress_steps(config);
        Some(tokio::spawn(progress_bar_for_status(
            steps,
            rx,
            "Fetching release payload",
            tick,
        )))
    } else {
        drop(rx);
        None
    };

    let result = client
        .get_request(client.api_url(), client.release_path())
        .await;

    let received = result.as_ref().map(|data| data.len() as u64).unwrap_or(0);
    // The receiver is gone when progress is hidden
    let _ = tx.send(received).await;
    if let Some(handle) = progress {
        let ticks = handle.await?;
        debug!("Payload fetch took {} progress ticks", ticks);
    }

    Ok(result?.to_vec())
}

/// Download a named asset of the latest release
async fn fetch_asset(client: &ReleaseClient, name: &str, show_progress: bool) -> Result<Vec<u8>> {
    let release = client.get_latest_release(client.release_path()).await?;

    let asset = release
        .assets
        .iter()
        .find(|a| a.name == name)
        .ok_or_else(|| {
            let available: Vec<&str> = release.assets.iter().map(|a| a.name.as_str()).collect();
            anyhow!(
                "Release {} has no asset named {} (available: {})",
                release.tag_name,
                name,
                available.join(", ")
            )
        })?;

    let progress = ProgressDisplay::bytes_or_hidden(show_progress, &format!("Downloading {}", name));
    let data = client.download(&asset.browser_download_url, &progress).await?;
    Ok(data.to_vec())
}
