//! Named manifest snapshots stored on disk
//!
//! Snapshots live in a single JSON array, newest first, capped at
//! [`MAX_SNAPSHOTS`]. A missing store file reads as an empty list.

use crate::error::SnapshotError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Maximum number of snapshots kept
pub const MAX_SNAPSHOTS: usize = 20;

/// A saved copy of raw manifest text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// User-chosen label
    pub name: String,
    /// Manifest text exactly as it was saved
    pub content: String,
    /// When the snapshot was saved
    pub created_at: DateTime<Utc>,
}

/// File-backed snapshot store
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Open a store at `path`; the file is created on first save
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the store file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All snapshots, newest first
    pub fn list(&self) -> Result<Vec<Snapshot>, SnapshotError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(SnapshotError::io(&self.path, e)),
        };
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content).map_err(|e| SnapshotError::Corrupt {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    /// Save manifest text under `name`.
    ///
    /// The name is trimmed; empty names and blank content are rejected.
    /// The newest snapshot goes first and the list is cut to
    /// [`MAX_SNAPSHOTS`].
    pub fn save(&self, name: &str, content: &str) -> Result<Snapshot, SnapshotError> {
        self.save_at(name, content, Utc::now())
    }

    fn save_at(
        &self,
        name: &str,
        content: &str,
        created_at: DateTime<Utc>,
    ) -> Result<Snapshot, SnapshotError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SnapshotError::EmptyName);
        }
        if content.trim().is_empty() {
            return Err(SnapshotError::EmptyContent);
        }

        let snapshot = Snapshot {
            name: name.to_string(),
            content: content.to_string(),
            created_at,
        };

        let mut snapshots = self.list()?;
        snapshots.insert(0, snapshot.clone());
        snapshots.truncate(MAX_SNAPSHOTS);
        self.write(&snapshots)?;

        debug!(name, path = %self.path.display(), "snapshot saved");
        Ok(snapshot)
    }

    /// Newest snapshot with the given name
    pub fn get(&self, name: &str) -> Result<Snapshot, SnapshotError> {
        self.list()?
            .into_iter()
            .find(|s| s.name == name)
            .ok_or_else(|| SnapshotError::NotFound {
                name: name.to_string(),
            })
    }

    /// Remove the newest snapshot with the given name
    pub fn delete(&self, name: &str) -> Result<Snapshot, SnapshotError> {
        let mut snapshots = self.list()?;
        let index = snapshots
            .iter()
            .position(|s| s.name == name)
            .ok_or_else(|| SnapshotError::NotFound {
                name: name.to_string(),
            })?;

        let removed = snapshots.remove(index);
        self.write(&snapshots)?;
        debug!(name, "snapshot deleted");
        Ok(removed)
    }

    fn write(&self, snapshots: &[Snapshot]) -> Result<(), SnapshotError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| SnapshotError::io(parent, e))?;
        }

        let json = serde_json::to_string_pretty(snapshots).map_err(|e| SnapshotError::Corrupt {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&self.path, json).map_err(|e| SnapshotError::io(&self.path, e))
    }
}
