//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

/// tagwatch - check for newer releases of this tool
#[derive(Parser, Debug)]
#[command(name = "tagwatch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show version information
    Version(VersionArgs),

    /// Check whether a newer release is published
    Check(CheckArgs),

    /// Print the latest published release tag
    Latest(LatestArgs),

    /// Report whether one tag is greater than another
    Compare(CompareArgs),

    /// Fetch the latest release payload or one of its assets into a file
    Manifest(ManifestArgs),
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Compare against this version instead of the running one
    #[arg(long, value_name = "TAG")]
    pub current: Option<String>,

    /// Query a different API host
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,
}

#[derive(Args, Debug)]
pub struct LatestArgs {
    /// Release endpoint path (default: this tool's latest release)
    #[arg(long, value_name = "PATH")]
    pub path: Option<String>,
}

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Tag expected to be newer, e.g. v1.2.0
    pub first: String,

    /// Tag to compare against, e.g. v1.1.9
    pub second: String,
}

#[derive(Args, Debug)]
pub struct ManifestArgs {
    /// Output file (default: ~/.tagwatch/manifests/version.json)
    #[arg(short, long)]
    pub output: Option<Utf8PathBuf>,

    /// Download this release asset instead of the release payload
    #[arg(long, value_name = "NAME")]
    pub asset: Option<String>,
}
