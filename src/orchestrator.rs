//! Batch orchestrator for an analysis run
//!
//! This module provides:
//! - Workflow coordination: read manifest → analyze each dependency → sort
//! - Bounded concurrent fan-out over dependencies
//! - Progress reporting
//!
//! Input errors surface before any network activity. Once the batch has
//! started, no error escapes: failed dependencies become degraded records.

use crate::config::Config;
use crate::domain::ResultSet;
use crate::error::{ManifestError, RegistryError};
use crate::manifest::Manifest;
use crate::pipeline::PackageAnalyzer;
use crate::progress::Progress;
use crate::registry::{GitHubReleases, HttpClient, NpmRegistry};
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::info;

/// Orchestrator for an analysis run
pub struct Orchestrator {
    analyzer: PackageAnalyzer,
    concurrency: usize,
    show_progress: bool,
}

impl Orchestrator {
    /// Create an orchestrator over an existing analyzer
    pub fn new(analyzer: PackageAnalyzer) -> Self {
        Self {
            analyzer,
            concurrency: 1,
            show_progress: false,
        }
    }

    /// Build the npm + GitHub clients described by `config`
    pub fn from_config(config: &Config) -> Result<Self, RegistryError> {
        let client = HttpClient::with_timeout(config.timeout)?;
        let registry = NpmRegistry::with_base_url(client.clone(), &config.registry_url);
        let releases = GitHubReleases::with_base_url(client, &config.github_api_url)
            .with_token(config.github_token.clone());

        let analyzer = PackageAnalyzer::new(Arc::new(registry), Arc::new(releases))
            .with_release_limit(config.release_limit);

        Ok(Self::new(analyzer).with_concurrency(config.concurrency))
    }

    /// Set how many dependencies are analyzed at once (minimum 1)
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Enable or disable the progress bar
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Analyze raw manifest text.
    ///
    /// Fails only on input errors (malformed JSON, nothing to analyze).
    pub async fn analyze(&self, manifest_text: &str) -> Result<ResultSet, ManifestError> {
        let manifest = Manifest::parse(manifest_text)?;
        Ok(self.analyze_manifest(&manifest).await)
    }

    /// Analyze every dependency of a parsed manifest
    pub async fn analyze_manifest(&self, manifest: &Manifest) -> ResultSet {
        let total = manifest.len();
        info!(packages = total, concurrency = self.concurrency, "starting analysis");

        let mut progress = Progress::new(self.show_progress);
        progress.start(total as u64);

        let results = stream::iter(manifest.iter())
            .map(|(name, spec)| {
                let progress = &progress;
                async move {
                    let result = self.analyzer.analyze_one(name, spec).await;
                    progress.package_done(name);
                    result
                }
            })
            .buffered(self.concurrency)
            .collect::<Vec<_>>()
            .await;

        progress.finish_and_clear();

        let set = ResultSet::from_results(results);
        info!(
            packages = set.len(),
            degraded = set.degraded_count(),
            "analysis finished"
        );
        set
    }
}
