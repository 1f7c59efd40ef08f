//! Check command

use anyhow::{Context, Result};
use tagwatch_update::{ReleaseClient, UpdateNotifier, UpdateStatus};

use crate::cli::CheckArgs;
use crate::output;

pub async fn run(args: CheckArgs, quiet: bool) -> Result<()> {
    let config = super::load_config()?;
    let mut client = ReleaseClient::from_config(&config).context("Failed to create HTTP client")?;
    if let Some(api_url) = args.api_url {
        client = client.with_api_url(api_url);
    }

    let mut notifier = UpdateNotifier::new(client);
    if let Some(current) = args.current {
        notifier = notifier.with_current_version(current);
    }
    if quiet {
        notifier = notifier.silent();
    }

    let spinner = output::spinner_unless(quiet, "Checking for updates...");
    let status = notifier.detect_new_version().await;
    spinner.finish_and_clear();

    match status? {
        // The notifier prints the upgrade notice itself
        UpdateStatus::Available { .. } => {}
        UpdateStatus::UpToDate { current, latest } => {
            if !quiet {
                output::success(&format!("Already on the latest version ({})", current));
                output::kv("Latest published", &latest.to_string());
            }
        }
        UpdateStatus::Unreachable { current, reason } => {
            output::warning(&format!("Could not check for updates: {}", reason));
            if !quiet {
                output::kv("Running", &current.to_string());
            }
        }
    }

    Ok(())
}
