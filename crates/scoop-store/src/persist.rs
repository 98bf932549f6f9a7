//! # Snapshot File
//!
//! File-backed durability for the snapshot document.
//!
//! ## Write Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Atomic Write-Through                                │
//! │                                                                         │
//! │  save(snapshot)                                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  serialize to pretty JSON                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  write sibling temp file  (sales-tracker.json.tmp)                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  rename over target       (sales-tracker.json)                          │
//! │                                                                         │
//! │  rename(2) is atomic on the same filesystem: a crash mid-save leaves   │
//! │  either the old document or the new one, never a torn file             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::snapshot::StoreSnapshot;

/// Handle to the snapshot document's location on disk.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    /// Creates a handle for the given path. Nothing is touched until
    /// `load` or `save` runs.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SnapshotFile { path: path.into() }
    }

    /// The document path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the snapshot document.
    ///
    /// ## Returns
    /// * `Ok(StoreSnapshot)` - Parsed document, or the default (empty
    ///   catalog, light theme) when no file exists yet
    /// * `Err(StoreError::Corrupt)` - File exists but does not parse
    /// * `Err(StoreError::Io)` - File exists but cannot be read
    pub fn load(&self) -> StoreResult<StoreSnapshot> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No snapshot file, starting empty");
            return Ok(StoreSnapshot::default());
        }

        let raw = fs::read_to_string(&self.path)?;
        let snapshot = serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;

        debug!(path = %self.path.display(), "Snapshot loaded");
        Ok(snapshot)
    }

    /// Writes the snapshot document through to disk.
    ///
    /// Parent directories are created on demand; the write goes to a
    /// sibling temp file first and is renamed into place.
    pub fn save(&self, snapshot: &StoreSnapshot) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(snapshot)?;

        let tmp = self.tmp_path();
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        debug!(
            path = %self.path.display(),
            products = snapshot.products.len(),
            "Snapshot saved"
        );
        Ok(())
    }

    /// Sibling temp path used by the atomic write.
    fn tmp_path(&self) -> PathBuf {
        let mut os = self.path.as_os_str().to_os_string();
        os.push(".tmp");
        PathBuf::from(os)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use scoop_core::{Money, Product, Theme};

    fn snapshot_with_one_product() -> StoreSnapshot {
        let mut snapshot = StoreSnapshot::default();
        snapshot.products.push(Product::new(
            "a",
            "Es Krim Coklat",
            Money::from_rupiah(3000),
            Money::from_rupiah(5000),
            4,
        ));
        snapshot.theme = Theme::Dark;
        snapshot
    }

    #[test]
    fn test_load_missing_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let file = SnapshotFile::new(dir.path().join("sales-tracker.json"));

        let snapshot = file.load().unwrap();
        assert!(snapshot.products.is_empty());
        assert_eq!(snapshot.theme, Theme::Light);
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let file = SnapshotFile::new(dir.path().join("sales-tracker.json"));

        let snapshot = snapshot_with_one_product();
        file.save(&snapshot).unwrap();

        let restored = file.load().unwrap();
        assert_eq!(restored, snapshot);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let file = SnapshotFile::new(dir.path().join("nested/data/sales-tracker.json"));

        file.save(&StoreSnapshot::default()).unwrap();
        assert!(file.path().exists());
    }

    #[test]
    fn test_save_leaves_no_temp_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let file = SnapshotFile::new(dir.path().join("sales-tracker.json"));

        file.save(&snapshot_with_one_product()).unwrap();
        assert!(!dir.path().join("sales-tracker.json.tmp").exists());
    }

    #[test]
    fn test_corrupt_file_is_an_error_not_a_reset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sales-tracker.json");
        fs::write(&path, "{not json").unwrap();

        let file = SnapshotFile::new(&path);
        let err = file.load().unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }
}
