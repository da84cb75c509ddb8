//! Loose version parsing for declared ranges and registry versions
//!
//! Accepts the shapes found in package.json files:
//! - plain versions: `1.2.3`, `1.2`, `4`
//! - range operators and prefixes: `^1.2.3`, `~1.2.3`, `>=1.0.0`, `v2.0.0`
//! - pre-release/build tags: `2.0.0-beta.1` (tag is discarded)

use serde::{Deserialize, Serialize};
use std::fmt;

/// A version reduced to its numeric `major.minor.patch` core
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionSpec {
    /// Major component
    pub major: u64,
    /// Minor component (0 when absent)
    pub minor: u64,
    /// Patch component (0 when absent)
    pub patch: u64,
    /// The cleaned string the components were read from
    pub raw: String,
}

impl VersionSpec {
    /// Parse a loosely formatted version string.
    ///
    /// Leading non-digit characters are stripped, everything from the first
    /// `-` on is dropped, and the remainder is split on `.`. Returns `None`
    /// when the input is empty or any retained segment is not a number.
    /// Segments beyond the third are ignored.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }

        let stripped = raw.trim_start_matches(|c: char| !c.is_ascii_digit());
        let clean = stripped.split('-').next().unwrap_or_default();

        let mut parts = Vec::new();
        for segment in clean.split('.') {
            parts.push(parse_segment(segment)?);
        }

        Some(Self {
            major: parts.first().copied().unwrap_or(0),
            minor: parts.get(1).copied().unwrap_or(0),
            patch: parts.get(2).copied().unwrap_or(0),
            raw: clean.to_string(),
        })
    }

    /// Returns the `(major, minor, patch)` triple
    pub fn triple(&self) -> (u64, u64, u64) {
        (self.major, self.minor, self.patch)
    }
}

/// Parse one dot-separated segment; surrounding whitespace is tolerated
fn parse_segment(segment: &str) -> Option<u64> {
    let segment = segment.trim();
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

impl fmt::Display for VersionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
