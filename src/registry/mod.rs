//! Clients for the two external data sources of an analysis run
//!
//! This module provides:
//! - HTTP client shared foundation
//! - npm registry client (latest version, repository, homepage)
//! - GitHub releases client (recent release notes)

mod client;
mod github;
mod npm;

pub use client::HttpClient;
pub use github::{GitHubReleases, DEFAULT_GITHUB_API_URL};
pub use npm::{NpmRegistry, DEFAULT_REGISTRY_URL};

use crate::domain::{ReleaseEntry, RepositoryField, RepositoryRef};
use crate::error::RegistryError;
use async_trait::async_trait;

/// Metadata about a package as reported by the registry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageMeta {
    /// Version tagged `latest`, if any
    pub latest: Option<String>,
    /// Raw repository field, if it had a recognizable shape
    pub repository: Option<RepositoryField>,
    /// Homepage, falling back to the issue tracker URL
    pub homepage: Option<String>,
}

/// Source of package metadata
#[async_trait]
pub trait PackageRegistryClient: Send + Sync {
    /// Get the registry name
    fn registry_name(&self) -> &'static str;

    /// Fetch metadata for a package by exact name.
    ///
    /// Non-2xx responses and transport failures are errors, never `Ok` with
    /// empty metadata.
    async fn fetch_meta(&self, package: &str) -> Result<PackageMeta, RegistryError>;
}

/// Source of release notes for a repository
#[async_trait]
pub trait ReleaseNotesClient: Send + Sync {
    /// Fetch up to `limit` most recent releases, newest first
    async fn fetch_recent(
        &self,
        repo: &RepositoryRef,
        limit: usize,
    ) -> Result<Vec<ReleaseEntry>, RegistryError>;
}
