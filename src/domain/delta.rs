//! Classification of the gap between a declared and a latest version

use super::VersionSpec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Magnitude of the gap between the declared version and the latest release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VersionDelta {
    /// Latest has a greater major component
    Major,
    /// Latest has a greater minor component
    Minor,
    /// Latest has a greater patch component
    Patch,
    /// Latest is not greater in any component
    UpToDate,
    /// One of the two versions could not be parsed
    Unknown,
}

impl VersionDelta {
    /// Classify the gap between `current` and `latest`.
    ///
    /// Components are checked major, then minor, then patch; the first one
    /// where latest is greater decides. A latest that is behind current is
    /// reported as `UpToDate`.
    pub fn classify(current: &str, latest: Option<&str>) -> Self {
        let current = VersionSpec::parse(current);
        let latest = latest.and_then(VersionSpec::parse);

        let (Some(c), Some(l)) = (current, latest) else {
            return VersionDelta::Unknown;
        };

        if l.major > c.major {
            VersionDelta::Major
        } else if l.minor > c.minor {
            VersionDelta::Minor
        } else if l.patch > c.patch {
            VersionDelta::Patch
        } else {
            VersionDelta::UpToDate
        }
    }

    /// Points this delta contributes to the risk score
    pub fn risk_points(&self) -> u32 {
        match self {
            VersionDelta::Major => 2,
            VersionDelta::Minor => 1,
            VersionDelta::Patch | VersionDelta::UpToDate | VersionDelta::Unknown => 0,
        }
    }

    /// Get the plain label
    pub fn label(&self) -> &'static str {
        match self {
            VersionDelta::Major => "major",
            VersionDelta::Minor => "minor",
            VersionDelta::Patch => "patch",
            VersionDelta::UpToDate => "up-to-date",
            VersionDelta::Unknown => "unknown",
        }
    }
}

impl fmt::Display for VersionDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_major() {
        assert_eq!(VersionDelta::classify("1.2.3", Some("2.0.0")), VersionDelta::Major);
    }

    #[test]
    fn test_classify_minor() {
        assert_eq!(VersionDelta::classify("1.2.3", Some("1.3.0")), VersionDelta::Minor);
    }

    #[test]
    fn test_classify_patch() {
        assert_eq!(VersionDelta::classify("1.2.3", Some("1.2.4")), VersionDelta::Patch);
    }

    #[test]
    fn test_classify_up_to_date() {
        assert_eq!(
            VersionDelta::classify("1.2.3", Some("1.2.3")),
            VersionDelta::UpToDate
        );
    }

    #[test]
    fn test_classify_behind_is_up_to_date() {
        assert_eq!(
            VersionDelta::classify("3.0.0", Some("2.0.0")),
            VersionDelta::UpToDate
        );
    }

    #[test]
    fn test_classify_checks_fields_independently() {
        // minor of latest is greater even though its major is lower
        assert_eq!(VersionDelta::classify("2.0.0", Some("1.5.0")), VersionDelta::Minor);
    }

    #[test]
    fn test_classify_missing_latest_is_unknown() {
        assert_eq!(VersionDelta::classify("1.2.3", None), VersionDelta::Unknown);
    }

    #[test]
    fn test_classify_unparseable_is_unknown() {
        assert_eq!(
            VersionDelta::classify("not-a-version", Some("1.0.0")),
            VersionDelta::Unknown
        );
        assert_eq!(
            VersionDelta::classify("1.0.0", Some("next")),
            VersionDelta::Unknown
        );
    }

    #[test]
    fn test_classify_with_range_prefix() {
        assert_eq!(
            VersionDelta::classify("^18.2.0", Some("19.1.0")),
            VersionDelta::Major
        );
        assert_eq!(
            VersionDelta::classify("~4.18.0", Some("4.18.2")),
            VersionDelta::Patch
        );
    }

    #[test]
    fn test_risk_points() {
        assert_eq!(VersionDelta::Major.risk_points(), 2);
        assert_eq!(VersionDelta::Minor.risk_points(), 1);
        assert_eq!(VersionDelta::Patch.risk_points(), 0);
        assert_eq!(VersionDelta::UpToDate.risk_points(), 0);
        assert_eq!(VersionDelta::Unknown.risk_points(), 0);
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&VersionDelta::UpToDate).unwrap();
        assert_eq!(json, "\"up-to-date\"");
        assert_eq!(VersionDelta::UpToDate.to_string(), "up-to-date");
    }
}
