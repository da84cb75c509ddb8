//! depradar - dependency upgrade risk radar CLI tool
//!
//! Reads a package.json, looks up every dependency on the npm registry,
//! scans recent GitHub release notes for risky keywords and prints each
//! dependency with a high/medium/low upgrade risk.

use clap::Parser;
use depradar::cli::{AnalyzeArgs, CliArgs, Command, SnapshotCommand};
use depradar::config::Config;
use depradar::domain::ResultSet;
use depradar::error::AppError;
use depradar::manifest::{read_manifest_text, SAMPLE_MANIFEST};
use depradar::orchestrator::Orchestrator;
use depradar::output::{create_formatter, OutputConfig};
use depradar::snapshot::SnapshotStore;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    // Run the main logic and handle errors
    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr; RUST_LOG takes precedence over `--verbose`
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let mut config = Config::load(args.config.as_deref())?;
    if let Some(ref path) = args.snapshot_file {
        config.snapshot_file = path.clone();
    }
    debug!(snapshot_file = %config.snapshot_file.display(), "configuration loaded");

    let store = SnapshotStore::new(config.snapshot_file.clone());

    match args.command {
        Command::Analyze(ref analyze) => {
            let results = analyze_command(analyze, config, &store).await?;

            let color = !analyze.no_color && io::stdout().is_terminal();
            let output_config =
                OutputConfig::from_cli(analyze.json, args.verbose, analyze.quiet, color);
            let formatter = create_formatter(output_config);

            let mut stdout = io::stdout().lock();
            formatter.format(&results, analyze.filter, &mut stdout)?;
            stdout.flush()?;
        }
        Command::Sample => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", SAMPLE_MANIFEST)?;
            stdout.flush()?;
        }
        Command::Snapshot { action } => {
            let mut stdout = io::stdout().lock();
            snapshot_command(action, &store, &mut stdout)?;
            stdout.flush()?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Resolve the manifest text and run the batch
async fn analyze_command(
    args: &AnalyzeArgs,
    config: Config,
    store: &SnapshotStore,
) -> Result<ResultSet, AppError> {
    let config = args.apply_to(config);
    config.validate()?;

    let manifest_text = match args.snapshot {
        Some(ref name) => store.get(name)?.content,
        None => read_manifest_text(&args.manifest)?,
    };

    let orchestrator = Orchestrator::from_config(&config)?.with_progress(args.show_progress());
    Ok(orchestrator.analyze(&manifest_text).await?)
}

fn snapshot_command(
    action: SnapshotCommand,
    store: &SnapshotStore,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match action {
        SnapshotCommand::Save { name, manifest } => {
            let content = read_manifest_text(&manifest)?;
            let snapshot = store.save(&name, &content)?;
            writeln!(out, "Saved snapshot '{}'", snapshot.name)?;
        }
        SnapshotCommand::List => {
            let snapshots = store.list()?;
            if snapshots.is_empty() {
                writeln!(out, "No snapshots saved.")?;
            }
            for snapshot in snapshots {
                writeln!(
                    out,
                    "{}  {}",
                    snapshot.created_at.format("%Y-%m-%d %H:%M:%S UTC"),
                    snapshot.name
                )?;
            }
        }
        SnapshotCommand::Show { name } => {
            let snapshot = store.get(&name)?;
            writeln!(out, "{}", snapshot.content.trim_end())?;
        }
        SnapshotCommand::Delete { name } => {
            let snapshot = store.delete(&name)?;
            writeln!(out, "Deleted snapshot '{}'", snapshot.name)?;
        }
    }
    Ok(())
}
