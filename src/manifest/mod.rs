//! Manifest reading
//!
//! This module provides functionality to:
//! - Read manifest text from a file or stdin
//! - Merge dependencies and devDependencies into one mapping
//! - Provide a built-in sample manifest

mod package_json;

pub use package_json::Manifest;

use crate::error::ManifestError;
use std::io::Read;
use std::path::Path;

/// Sample manifest printed by `depradar sample`
pub const SAMPLE_MANIFEST: &str = r#"{
  "dependencies": {
    "react": "^18.2.0",
    "axios": "^1.6.0",
    "express": "^4.18.0"
  },
  "devDependencies": {
    "vite": "^5.0.0",
    "eslint": "^8.50.0"
  }
}"#;

/// Read raw manifest text; `-` reads from stdin
pub fn read_manifest_text(path: &Path) -> Result<String, ManifestError> {
    if path.as_os_str() == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| ManifestError::read_error(path, e))?;
        return Ok(content);
    }

    std::fs::read_to_string(path).map_err(|e| ManifestError::read_error(path, e))
}
