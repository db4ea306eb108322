//! JSON file store
//!
//! Persists the snapshot inside a small envelope carrying a format version
//! and a SHA-256 checksum, so a hand-edited or truncated file is reported
//! instead of silently loaded.

use crate::models::snapshot::EventSnapshot;
use crate::store::{Store, StoreError};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

/// Current envelope format version
pub const SNAPSHOT_FORMAT_VERSION: u32 = 1;

/// On-disk envelope around a snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedSnapshot {
    pub version: u32,

    /// SHA-256 of the canonical snapshot JSON
    pub checksum: String,

    pub snapshot: EventSnapshot,
}

/// Compute a deterministic SHA-256 hash of a snapshot
///
/// Uses canonical JSON serialization with sorted keys so the hash does not
/// depend on map iteration order.
pub fn compute_snapshot_checksum(snapshot: &EventSnapshot) -> Result<String, StoreError> {
    use serde_json::Value;
    use std::collections::BTreeMap;

    fn canonicalize(value: Value) -> Value {
        match value {
            Value::Object(map) => {
                let sorted: BTreeMap<String, Value> =
                    map.into_iter().map(|(k, v)| (k, canonicalize(v))).collect();
                Value::Object(sorted.into_iter().collect())
            }
            Value::Array(arr) => Value::Array(arr.into_iter().map(canonicalize).collect()),
            other => other,
        }
    }

    let canonical = canonicalize(serde_json::to_value(snapshot)?);
    let json = serde_json::to_string(&canonical)?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}

/// Store backed by a single JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Store for JsonFileStore {
    fn load(&self) -> Result<Option<EventSnapshot>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)?;
        let persisted: PersistedSnapshot = serde_json::from_str(&contents)?;

        if persisted.version != SNAPSHOT_FORMAT_VERSION {
            return Err(StoreError::UnsupportedVersion {
                found: persisted.version,
                expected: SNAPSHOT_FORMAT_VERSION,
            });
        }

        let actual = compute_snapshot_checksum(&persisted.snapshot)?;
        if actual != persisted.checksum {
            tracing::warn!(path = %self.path.display(), "Rejecting snapshot with bad checksum");
            return Err(StoreError::ChecksumMismatch {
                expected: persisted.checksum,
                actual,
            });
        }

        persisted.snapshot.validate()?;

        tracing::info!(
            path = %self.path.display(),
            expenses = persisted.snapshot.expenses.len(),
            attendees = persisted.snapshot.attendees.len(),
            "Snapshot loaded"
        );
        Ok(Some(persisted.snapshot))
    }

    fn save(&mut self, snapshot: &EventSnapshot) -> Result<(), StoreError> {
        snapshot.validate()?;

        let persisted = PersistedSnapshot {
            version: SNAPSHOT_FORMAT_VERSION,
            checksum: compute_snapshot_checksum(snapshot)?,
            snapshot: snapshot.clone(),
        };
        let json = serde_json::to_string_pretty(&persisted)?;

        // Write beside the target, then rename over it
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;

        tracing::info!(path = %self.path.display(), checksum = %persisted.checksum, "Snapshot saved");
        Ok(())
    }
}
