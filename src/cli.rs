//! CLI argument parsing module for depradar

use crate::config::Config;
use crate::domain::TierFilter;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

/// Default manifest path for `analyze` and `snapshot save`
pub const DEFAULT_MANIFEST: &str = "package.json";

/// Parse the `--filter` value: all, high, medium or low
fn parse_filter(s: &str) -> Result<TierFilter, String> {
    s.parse()
}

/// Parse a positive integer (concurrency, timeouts)
fn parse_positive(s: &str) -> Result<usize, String> {
    let n: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid number: {}", s))?;
    if n == 0 {
        return Err("must be at least 1".to_string());
    }
    Ok(n)
}

/// Dependency upgrade risk radar for package.json manifests
#[derive(Parser, Debug, Clone)]
#[command(
    name = "depradar",
    version,
    about = "Classify npm dependency upgrades by risk"
)]
pub struct CliArgs {
    /// Config file (default: ./depradar.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Snapshot store file (overrides config)
    #[arg(long, global = true)]
    pub snapshot_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyze the dependencies of a manifest
    Analyze(AnalyzeArgs),
    /// Print the built-in sample manifest
    Sample,
    /// Manage saved manifest snapshots
    Snapshot {
        #[command(subcommand)]
        action: SnapshotCommand,
    },
}

/// Options for `analyze`
#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Manifest path, or `-` to read stdin
    #[arg(default_value = DEFAULT_MANIFEST)]
    pub manifest: PathBuf,

    /// Analyze a saved snapshot instead of a file
    #[arg(long)]
    pub snapshot: Option<String>,

    /// Show only one risk tier (all, high, medium, low)
    #[arg(long, default_value = "all", value_parser = parse_filter)]
    pub filter: TierFilter,

    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable quiet mode - summary line only
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Number of packages analyzed at once
    #[arg(long, value_parser = parse_positive)]
    pub concurrency: Option<usize>,

    /// Request timeout in seconds
    #[arg(long, value_parser = parse_positive)]
    pub timeout: Option<usize>,

    /// npm registry base URL
    #[arg(long)]
    pub registry_url: Option<String>,

    /// GitHub API base URL
    #[arg(long)]
    pub github_api_url: Option<String>,

    /// GitHub token for higher rate limits (default: config, then $GITHUB_TOKEN)
    #[arg(long)]
    pub github_token: Option<String>,
}

impl AnalyzeArgs {
    /// Overlay command-line values on a loaded config
    pub fn apply_to(&self, mut config: Config) -> Config {
        if let Some(concurrency) = self.concurrency {
            config.concurrency = concurrency;
        }
        if let Some(timeout) = self.timeout {
            config.timeout = Duration::from_secs(timeout as u64);
        }
        if let Some(ref url) = self.registry_url {
            config.registry_url = url.clone();
        }
        if let Some(ref url) = self.github_api_url {
            config.github_api_url = url.clone();
        }
        if let Some(ref token) = self.github_token {
            if !token.is_empty() {
                config.github_token = Some(token.clone());
            }
        }
        config
    }

    /// Progress is only drawn for interactive text output
    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.json
    }
}

/// `snapshot` subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum SnapshotCommand {
    /// Save a manifest under a name
    Save {
        /// Snapshot name
        name: String,
        /// Manifest path, or `-` to read stdin
        #[arg(default_value = DEFAULT_MANIFEST)]
        manifest: PathBuf,
    },
    /// List saved snapshots, newest first
    List,
    /// Print the manifest text of a snapshot
    Show {
        /// Snapshot name
        name: String,
    },
    /// Delete a snapshot
    Delete {
        /// Snapshot name
        name: String,
    },
}
