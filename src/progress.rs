//! Progress display for an analysis run
//!
//! Provides read-only feedback ("Processed N/M packages") on stderr using
//! indicatif. Progress never influences results.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for the analysis batch
pub struct Progress {
    /// Whether progress display is enabled (disabled in quiet/json mode)
    enabled: bool,
    /// Current progress bar
    bar: Option<ProgressBar>,
}

impl Progress {
    /// Create a new progress reporter
    pub fn new(enabled: bool) -> Self {
        Self { enabled, bar: None }
    }

    /// Create a disabled progress reporter
    pub fn disabled() -> Self {
        Self::new(false)
    }

    /// Start a progress bar for `total` packages
    pub fn start(&mut self, total: u64) {
        if !self.enabled {
            return;
        }

        let bar = ProgressBar::new(total);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.cyan} {msg} [{bar:30.cyan/blue}] {pos}/{len}")
            .map(|s| s.progress_chars("█▓▒░"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        bar.set_style(style);
        bar.set_message(format!("Analyzing {} packages...", total));
        bar.enable_steady_tick(Duration::from_millis(100));
        self.bar = Some(bar);
    }

    /// Record one finished package
    pub fn package_done(&self, name: &str) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
            let done = bar.position();
            let total = bar.length().unwrap_or(done);
            bar.set_message(format!("Processed {}/{} packages ({})", done, total, name));
        }
    }

    /// Number of packages recorded so far
    #[cfg(test)]
    fn completed(&self) -> u64 {
        self.bar.as_ref().map(|b| b.position()).unwrap_or(0)
    }

    /// Finish and clear the current progress bar
    pub fn finish_and_clear(&mut self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
        self.bar = None;
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_disabled() {
        let mut progress = Progress::disabled();
        progress.start(10);
        progress.package_done("react");
        assert_eq!(progress.completed(), 0);
        progress.finish_and_clear();
    }

    #[test]
    fn test_progress_enabled_counts_packages() {
        let mut progress = Progress::new(true);
        progress.start(3);
        progress.package_done("react");
        progress.package_done("axios");
        assert_eq!(progress.completed(), 2);
        progress.finish_and_clear();
        assert_eq!(progress.completed(), 0);
    }
}
