//! package.json reader
//!
//! Handles:
//! - dependencies
//! - devDependencies (entries override same-named dependencies)

use crate::error::ManifestError;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// Flat name → declared range mapping read from a manifest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    dependencies: IndexMap<String, String>,
}

/// Fields of package.json the reader cares about
#[derive(Debug, Deserialize)]
struct PackageJson {
    #[serde(default)]
    dependencies: Option<IndexMap<String, Value>>,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: Option<IndexMap<String, Value>>,
}

impl Manifest {
    /// Parse manifest text and merge its dependency tables.
    ///
    /// Fails on malformed JSON, on a non-object document, and when the
    /// merged mapping is empty.
    pub fn parse(content: &str) -> Result<Self, ManifestError> {
        let json: Value =
            serde_json::from_str(content).map_err(|e| ManifestError::invalid_json(e.to_string()))?;
        if !json.is_object() {
            return Err(ManifestError::NotAnObject);
        }

        let package: PackageJson =
            serde_json::from_value(json).map_err(|e| ManifestError::invalid_json(e.to_string()))?;

        let mut dependencies = IndexMap::new();
        for table in [package.dependencies, package.dev_dependencies]
            .into_iter()
            .flatten()
        {
            merge_table(table, &mut dependencies);
        }

        if dependencies.is_empty() {
            return Err(ManifestError::NoDependencies);
        }

        Ok(Self { dependencies })
    }

    /// Number of dependencies
    pub fn len(&self) -> usize {
        self.dependencies.len()
    }

    /// Returns true if there is nothing to analyze
    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }

    /// Declared range for a package
    pub fn get(&self, name: &str) -> Option<&str> {
        self.dependencies.get(name).map(String::as_str)
    }

    /// Iterate over `(name, declared range)` in manifest order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.dependencies
            .iter()
            .map(|(name, spec)| (name.as_str(), spec.as_str()))
    }
}

fn merge_table(table: IndexMap<String, Value>, output: &mut IndexMap<String, String>) {
    for (name, value) in table {
        let spec = match value {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            other => {
                warn!(package = %name, value = %other, "skipping non-string version range");
                continue;
            }
        };
        output.insert(name, spec);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_merges_both_tables() {
        let content = r#"{
            "name": "app",
            "dependencies": {"react": "^18.2.0", "axios": "^1.6.0"},
            "devDependencies": {"vite": "^5.0.0"}
        }"#;
        let manifest = Manifest::parse(content).unwrap();
        assert_eq!(manifest.len(), 3);
        let names: Vec<&str> = manifest.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["react", "axios", "vite"]);
    }

    #[test]
    fn test_dev_dependencies_override_dependencies() {
        let content = r#"{
            "dependencies": {"typescript": "^4.0.0", "lodash": "^4.17.21"},
            "devDependencies": {"typescript": "~5.3.0"}
        }"#;
        let manifest = Manifest::parse(content).unwrap();
        assert_eq!(manifest.len(), 2);
        assert_eq!(manifest.get("typescript"), Some("~5.3.0"));
        let names: Vec<&str> = manifest.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["typescript", "lodash"]);
    }

    #[test]
    fn test_only_dev_dependencies() {
        let manifest = Manifest::parse(r#"{"devDependencies": {"eslint": "^8.50.0"}}"#).unwrap();
        assert_eq!(manifest.get("eslint"), Some("^8.50.0"));
    }

    #[test]
    fn test_malformed_json_is_fatal() {
        let err = Manifest::parse("{ not json").unwrap_err();
        assert!(matches!(err, ManifestError::InvalidJson { .. }));
    }

    #[test]
    fn test_non_object_is_fatal() {
        let err = Manifest::parse("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, ManifestError::NotAnObject));
    }

    #[test]
    fn test_empty_mapping_is_fatal() {
        let err = Manifest::parse(r#"{"name": "app"}"#).unwrap_err();
        assert!(matches!(err, ManifestError::NoDependencies));

        let err = Manifest::parse(r#"{"dependencies": {}, "devDependencies": {}}"#).unwrap_err();
        assert!(matches!(err, ManifestError::NoDependencies));
    }

    #[test]
    fn test_null_tables_are_ignored() {
        let content = r#"{"dependencies": null, "devDependencies": {"vite": "5.0.0"}}"#;
        let manifest = Manifest::parse(content).unwrap();
        assert_eq!(manifest.len(), 1);
    }

    #[test]
    fn test_non_string_ranges() {
        let content = r#"{"dependencies": {"a": 1, "b": {"version": "1.0.0"}, "c": "2.0.0"}}"#;
        let manifest = Manifest::parse(content).unwrap();
        assert_eq!(manifest.get("a"), Some("1"));
        assert_eq!(manifest.get("b"), None);
        assert_eq!(manifest.get("c"), Some("2.0.0"));
    }
}
