//! Per-dependency analysis record

use super::{RiskTier, VersionDelta};
use serde::{Deserialize, Serialize};

/// `latest` value used for records whose registry lookup failed
pub const ERROR_LATEST: &str = "error";

/// Tier assigned when the registry lookup failed
pub const DEGRADED_RISK: RiskTier = RiskTier::Medium;

/// npm website base URL for package pages
const NPM_PACKAGE_PAGE: &str = "https://www.npmjs.com/package";

/// Outcome of analyzing one dependency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyResult {
    /// Package name
    pub name: String,
    /// Declared version range from the manifest
    pub current_spec: String,
    /// Latest published version; `"error"` when the registry lookup failed
    pub latest: Option<String>,
    /// Gap between declared and latest version
    pub delta: VersionDelta,
    /// Heuristic upgrade risk
    pub risk: RiskTier,
    /// Up to three clues joined with `"; "`, or the failure message
    pub clue_summary: String,
    /// Package homepage reported by the registry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
}

impl DependencyResult {
    /// Record for a dependency whose registry lookup failed.
    ///
    /// The tier is fixed to [`DEGRADED_RISK`] and not derived from any score.
    pub fn degraded(
        name: impl Into<String>,
        current_spec: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            current_spec: current_spec.into(),
            latest: Some(ERROR_LATEST.to_string()),
            delta: VersionDelta::Unknown,
            risk: DEGRADED_RISK,
            clue_summary: message.into(),
            homepage: None,
        }
    }

    /// Whether this record came from a failed registry lookup
    pub fn is_degraded(&self) -> bool {
        self.latest.as_deref() == Some(ERROR_LATEST)
    }

    /// npm page for the package, when a real latest version is known
    pub fn package_url(&self) -> Option<String> {
        match self.latest {
            Some(_) if !self.is_degraded() => Some(format!("{}/{}", NPM_PACKAGE_PAGE, self.name)),
            _ => None,
        }
    }
}
