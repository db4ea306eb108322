//! Store - persistence boundary for event snapshots
//!
//! The engine never touches storage. Hosts inject a [`Store`] into whatever
//! owns the current snapshot and call it after every accepted change.
//!
//! - **file**: JSON file store with a checksummed envelope
//! - **share**: compact share tokens for URL fragments
//!
//! # Critical Invariants
//!
//! - A snapshot that fails validation is never returned from `load`
//! - A failed load leaves the caller's in-memory state untouched

pub mod file;
pub mod share;

use crate::models::snapshot::{EventSnapshot, SnapshotError};
use thiserror::Error;

pub use file::{compute_snapshot_checksum, JsonFileStore, PersistedSnapshot, SNAPSHOT_FORMAT_VERSION};
pub use share::{AccessMode, ShareLink};

/// Errors that can occur while persisting or restoring snapshots
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Share token is not valid base64: {0}")]
    InvalidToken(#[from] base64::DecodeError),

    #[error("Malformed share link: {0}")]
    MalformedLink(String),

    #[error("Unsupported snapshot format version {found}, expected {expected}")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("Checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(#[from] SnapshotError),
}

/// Durable home for the current snapshot
pub trait Store {
    /// Restore the last saved snapshot, `Ok(None)` when nothing was saved
    fn load(&self) -> Result<Option<EventSnapshot>, StoreError>;

    /// Persist a snapshot, replacing whatever was saved before
    fn save(&mut self, snapshot: &EventSnapshot) -> Result<(), StoreError>;
}

/// In-process store, mainly for tests and previews
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    snapshot: Option<EventSnapshot>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn load(&self) -> Result<Option<EventSnapshot>, StoreError> {
        Ok(self.snapshot.clone())
    }

    fn save(&mut self, snapshot: &EventSnapshot) -> Result<(), StoreError> {
        snapshot.validate()?;
        self.snapshot = Some(snapshot.clone());
        Ok(())
    }
}
