//! Text output formatter for human-readable display
//!
//! This module provides:
//! - An aligned result table with colored risk pills and deltas
//! - Filter indication when only one tier is shown
//! - Summary counts over the whole result set

use crate::domain::{DependencyResult, ResultSet, RiskTier, SummaryCounts, TierFilter, VersionDelta};
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Width of the delta column ("up-to-date")
const DELTA_WIDTH: usize = 10;

/// Width of the risk column ("MEDIUM")
const RISK_WIDTH: usize = 6;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            color: true,
        }
    }

    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    /// Risk pill, padded before coloring so columns stay aligned
    fn risk_pill(&self, risk: RiskTier) -> String {
        let label = format!("{:<width$}", risk.label().to_uppercase(), width = RISK_WIDTH);
        if !self.color {
            return label;
        }
        match risk {
            RiskTier::High => label.red().bold().to_string(),
            RiskTier::Medium => label.yellow().to_string(),
            RiskTier::Low => label.green().to_string(),
        }
    }

    fn delta_label(&self, delta: VersionDelta) -> String {
        let label = format!("{:<width$}", delta.label(), width = DELTA_WIDTH);
        if !self.color {
            return label;
        }
        match delta {
            VersionDelta::Major => label.red().to_string(),
            VersionDelta::Minor => label.yellow().to_string(),
            VersionDelta::Patch => label.green().to_string(),
            VersionDelta::UpToDate | VersionDelta::Unknown => label.dimmed().to_string(),
        }
    }

    fn write_row(
        &self,
        result: &DependencyResult,
        widths: &ColumnWidths,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let latest = result.latest.as_deref().unwrap_or("unknown");
        let clues = if self.color && result.is_degraded() {
            result.clue_summary.red().to_string()
        } else {
            result.clue_summary.clone()
        };

        writeln!(
            writer,
            "  {:<nw$}  {:<cw$}  {:<lw$}  {}  {}  {}",
            result.name,
            result.current_spec,
            latest,
            self.delta_label(result.delta),
            self.risk_pill(result.risk),
            clues,
            nw = widths.name,
            cw = widths.current,
            lw = widths.latest,
        )?;

        if self.verbosity == Verbosity::Verbose {
            if let Some(url) = result.package_url() {
                writeln!(writer, "      {}", self.dim(&url))?;
            }
            if let Some(ref homepage) = result.homepage {
                writeln!(writer, "      {}", self.dim(homepage))?;
            }
        }
        Ok(())
    }

    fn dim(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    fn write_summary(
        &self,
        counts: &SummaryCounts,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let (high, medium, low) = if self.color {
            (
                format!("high: {}", counts.high).red().bold().to_string(),
                format!("medium: {}", counts.medium).yellow().to_string(),
                format!("low: {}", counts.low).green().to_string(),
            )
        } else {
            (
                format!("high: {}", counts.high),
                format!("medium: {}", counts.medium),
                format!("low: {}", counts.low),
            )
        };

        writeln!(writer, "{}  {}  {}", high, medium, low)
    }
}

/// Column widths computed from the rows being displayed
struct ColumnWidths {
    name: usize,
    current: usize,
    latest: usize,
}

impl ColumnWidths {
    fn measure(rows: &[&DependencyResult]) -> Self {
        let mut widths = Self {
            name: "Package".len(),
            current: "Current".len(),
            latest: "Latest".len(),
        };
        for row in rows {
            widths.name = widths.name.max(row.name.chars().count());
            widths.current = widths.current.max(row.current_spec.chars().count());
            let latest = row.latest.as_deref().unwrap_or("unknown");
            widths.latest = widths.latest.max(latest.chars().count());
        }
        widths
    }
}

impl OutputFormatter for TextFormatter {
    fn format(
        &self,
        results: &ResultSet,
        filter: TierFilter,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let counts = results.summary_counts();

        if self.verbosity == Verbosity::Quiet {
            return self.write_summary(&counts, writer);
        }

        let rows = results.filter(filter);
        if let TierFilter::Tier(tier) = filter {
            writeln!(
                writer,
                "Showing {} risk: {} of {} packages",
                tier,
                rows.len(),
                results.len()
            )?;
        }

        if rows.is_empty() {
            writeln!(writer, "  No packages match this filter.")?;
        } else {
            let widths = ColumnWidths::measure(&rows);
            let header = format!(
                "  {:<nw$}  {:<cw$}  {:<lw$}  {:<dw$}  {:<rw$}  {}",
                "Package",
                "Current",
                "Latest",
                "Delta",
                "Risk",
                "Clues",
                nw = widths.name,
                cw = widths.current,
                lw = widths.latest,
                dw = DELTA_WIDTH,
                rw = RISK_WIDTH,
            );
            if self.color {
                writeln!(writer, "{}", header.bold())?;
            } else {
                writeln!(writer, "{}", header)?;
            }

            for row in &rows {
                self.write_row(row, &widths, writer)?;
            }
        }

        writeln!(writer)?;
        self.write_summary(&counts, writer)
    }
}
