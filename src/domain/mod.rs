//! Core domain models for depradar
//!
//! This module contains the pure, network-free parts of the risk pipeline:
//! - Loose version parsing and version-gap classification
//! - Repository reference resolution from registry metadata
//! - Release evidence and keyword-based risk scoring
//! - Per-dependency records and the sorted result set

mod delta;
mod release;
mod repository;
mod result;
mod result_set;
pub mod risk;
mod version_spec;

pub use delta::VersionDelta;
pub use release::{
    ReleaseEntry, ReleaseEvidence, FETCH_FAILED_CLUE, MAX_RELEASE_TEXT_CHARS, NO_KEYWORDS_CLUE,
    NO_REPOSITORY_CLUE,
};
pub use repository::{RepositoryField, RepositoryRef};
pub use result::{DependencyResult, DEGRADED_RISK, ERROR_LATEST};
pub use result_set::{ResultSet, SummaryCounts};
pub use risk::{RiskTier, TierFilter, RISK_KEYWORDS};
pub use version_spec::VersionSpec;
