//! Latest command

use anyhow::{Context, Result};
use tagwatch_update::ReleaseClient;

use crate::cli::LatestArgs;

pub async fn run(args: LatestArgs) -> Result<()> {
    let config = super::load_config()?;
    let client = ReleaseClient::from_config(&config).context("Failed to create HTTP client")?;

    let path = args
        .path
        .unwrap_or_else(|| client.release_path().to_string());
    let tag = client
        .get_latest_version(&path)
        .await
        .with_context(|| format!("Failed to fetch latest release from {}{}", client.api_url(), path))?;

    println!("{}", tag);
    Ok(())
}
