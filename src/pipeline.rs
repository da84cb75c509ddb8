//! Per-dependency analysis pipeline
//!
//! For one dependency: fetch registry metadata → compute delta → fetch
//! release notes → score → assemble a [`DependencyResult`]. Every failure is
//! absorbed into the returned record so that one bad dependency never aborts
//! a batch.

use crate::domain::{
    risk, DependencyResult, ReleaseEvidence, RepositoryRef, VersionDelta,
};
use crate::registry::{PackageRegistryClient, ReleaseNotesClient};
use std::sync::Arc;
use tracing::{debug, warn};

/// Default number of releases inspected per repository
pub const DEFAULT_RELEASE_LIMIT: usize = 5;

/// Analyzes single dependencies against a registry and a release source
#[derive(Clone)]
pub struct PackageAnalyzer {
    registry: Arc<dyn PackageRegistryClient>,
    releases: Arc<dyn ReleaseNotesClient>,
    release_limit: usize,
}

impl PackageAnalyzer {
    /// Create an analyzer over the given collaborators
    pub fn new(
        registry: Arc<dyn PackageRegistryClient>,
        releases: Arc<dyn ReleaseNotesClient>,
    ) -> Self {
        Self {
            registry,
            releases,
            release_limit: DEFAULT_RELEASE_LIMIT,
        }
    }

    /// Set how many recent releases are inspected
    pub fn with_release_limit(mut self, release_limit: usize) -> Self {
        self.release_limit = release_limit;
        self
    }

    /// Analyze one dependency. Never fails: errors become degraded records.
    pub async fn analyze_one(&self, name: &str, current_spec: &str) -> DependencyResult {
        let meta = match self.registry.fetch_meta(name).await {
            Ok(meta) => meta,
            Err(e) => {
                warn!(
                    package = name,
                    registry = self.registry.registry_name(),
                    error = %e,
                    "registry lookup failed"
                );
                return DependencyResult::degraded(name, current_spec, e.to_string());
            }
        };

        let delta = VersionDelta::classify(current_spec, meta.latest.as_deref());
        let repo = RepositoryRef::locate(meta.repository.as_ref());
        let evidence = self.gather_evidence(name, repo.as_ref()).await;
        let risk = risk::score(delta, &evidence.text);

        debug!(
            package = name,
            latest = meta.latest.as_deref().unwrap_or("-"),
            %delta,
            %risk,
            "analyzed"
        );

        DependencyResult {
            name: name.to_string(),
            current_spec: current_spec.to_string(),
            latest: meta.latest,
            delta,
            risk,
            clue_summary: evidence.summary(),
            homepage: meta.homepage,
        }
    }

    async fn gather_evidence(&self, name: &str, repo: Option<&RepositoryRef>) -> ReleaseEvidence {
        let Some(repo) = repo else {
            return ReleaseEvidence::no_repository();
        };

        match self.releases.fetch_recent(repo, self.release_limit).await {
            Ok(entries) => ReleaseEvidence::from_releases(&entries),
            Err(e) => {
                warn!(package = name, repo = %repo, error = %e, "release notes unavailable");
                ReleaseEvidence::fetch_failed()
            }
        }
    }
}
