//! Heuristic upgrade-risk scoring
//!
//! A score is the sum of:
//! - 2 points for a major delta, 1 for a minor delta
//! - 1 point for each risk keyword appearing anywhere in the release text
//!
//! Keywords are matched as case-insensitive substrings, so `deprecated`
//! also matches `undeprecated`. Points map to tiers: `>= 4` high,
//! `2..4` medium, below 2 low.

use super::VersionDelta;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Keywords that hint at a risky upgrade, in the order clues are reported
pub const RISK_KEYWORDS: [&str; 5] = ["breaking", "migration", "deprecated", "security", "removed"];

/// Minimum points for the high tier
const HIGH_THRESHOLD: u32 = 4;

/// Minimum points for the medium tier
const MEDIUM_THRESHOLD: u32 = 2;

/// Three-level upgrade-risk classification.
///
/// Ordering follows display priority: `High < Medium < Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    High,
    Medium,
    Low,
}

impl RiskTier {
    /// Sort rank: high = 0, medium = 1, low = 2
    pub fn rank(&self) -> u8 {
        match self {
            RiskTier::High => 0,
            RiskTier::Medium => 1,
            RiskTier::Low => 2,
        }
    }

    /// Map accumulated points to a tier
    pub fn from_points(points: u32) -> Self {
        if points >= HIGH_THRESHOLD {
            RiskTier::High
        } else if points >= MEDIUM_THRESHOLD {
            RiskTier::Medium
        } else {
            RiskTier::Low
        }
    }

    /// Get the plain label
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::High => "high",
            RiskTier::Medium => "medium",
            RiskTier::Low => "low",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RiskTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(RiskTier::High),
            "medium" | "med" => Ok(RiskTier::Medium),
            "low" => Ok(RiskTier::Low),
            other => Err(format!(
                "invalid risk tier '{}': expected 'high', 'medium' or 'low'",
                other
            )),
        }
    }
}

/// Tier selection for displaying a result set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TierFilter {
    /// Every record
    #[default]
    All,
    /// Only records with the given tier
    Tier(RiskTier),
}

impl TierFilter {
    /// Whether a record with the given tier passes this filter
    pub fn matches(&self, tier: RiskTier) -> bool {
        match self {
            TierFilter::All => true,
            TierFilter::Tier(t) => *t == tier,
        }
    }
}

impl fmt::Display for TierFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TierFilter::All => f.write_str("all"),
            TierFilter::Tier(t) => t.fmt(f),
        }
    }
}

impl FromStr for TierFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(TierFilter::All);
        }
        s.parse::<RiskTier>()
            .map(TierFilter::Tier)
            .map_err(|_| format!("invalid filter '{}': expected 'all', 'high', 'medium' or 'low'", s))
    }
}

/// Keywords from [`RISK_KEYWORDS`] found in `text`, in keyword order
pub fn matched_keywords(text: &str) -> Vec<&'static str> {
    let lower = text.to_lowercase();
    RISK_KEYWORDS
        .iter()
        .copied()
        .filter(|keyword| lower.contains(keyword))
        .collect()
}

/// Total risk points for a delta and release text
pub fn risk_points(delta: VersionDelta, release_text: &str) -> u32 {
    delta.risk_points() + matched_keywords(release_text).len() as u32
}

/// Score a dependency upgrade
pub fn score(delta: VersionDelta, release_text: &str) -> RiskTier {
    RiskTier::from_points(risk_points(delta, release_text))
}
