//! # Blob Store
//!
//! A single-slot key-value store: each named slot holds one opaque blob
//! of bytes, read and written whole.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Blob Store                                      │
//! │                                                                         │
//! │  ReminderStore ──► BlobStore trait ──┬──► FileStore                    │
//! │                                      │    <data dir>/ovro_reminders.json│
//! │                                      │                                  │
//! │                                      └──► MemoryStore (tests)           │
//! │                                           HashMap<String, Vec<u8>>      │
//! │                                                                         │
//! │  Read policy:  absent slot → None, never an error                      │
//! │  Write policy: whole-slot overwrite via temp file + rename             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Slot names are restricted to `[A-Za-z0-9_-]` by construction (callers
//! use compile-time constants), so they map directly to file names.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::{debug, warn};

use crate::error::{DataError, DataResult};

// =============================================================================
// Trait
// =============================================================================

/// Whole-slot blob storage.
///
/// Implementations must make `put` atomic at slot granularity: a crash
/// mid-write leaves either the old blob or the new one, never a torn mix.
pub trait BlobStore: Send + Sync {
    /// Reads the blob in `slot`, or `None` if the slot has never been
    /// written. Unreadable slots are reported as `None` rather than an
    /// error; the caller decides whether that matters.
    fn get(&self, slot: &str) -> Option<Vec<u8>>;

    /// Overwrites `slot` with `bytes`.
    fn put(&self, slot: &str, bytes: &[u8]) -> DataResult<()>;
}

// =============================================================================
// File Store
// =============================================================================

/// File-backed blob store: one file per slot under the app data directory.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Creates a file store rooted at `root`, creating the directory if
    /// needed.
    pub fn new(root: impl Into<PathBuf>) -> DataResult<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root).map_err(|source| DataError::WriteFailed {
            slot: root.display().to_string(),
            source,
        })?;
        debug!(root = %root.display(), "Blob store initialized");
        Ok(FileStore { root })
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.root.join(format!("{}.json", slot))
    }
}

impl BlobStore for FileStore {
    fn get(&self, slot: &str) -> Option<Vec<u8>> {
        let path = self.slot_path(slot);
        match std::fs::read(&path) {
            Ok(bytes) => Some(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!(slot, error = %e, "Blob slot unreadable, treating as absent");
                None
            }
        }
    }

    fn put(&self, slot: &str, bytes: &[u8]) -> DataResult<()> {
        let path = self.slot_path(slot);
        let tmp = self.root.join(format!("{}.json.tmp", slot));

        // Write-then-rename keeps the previous blob intact on a crash
        std::fs::write(&tmp, bytes).map_err(|source| DataError::WriteFailed {
            slot: slot.to_string(),
            source,
        })?;
        std::fs::rename(&tmp, &path).map_err(|source| DataError::WriteFailed {
            slot: slot.to_string(),
            source,
        })?;

        debug!(slot, bytes = bytes.len(), "Blob slot written");
        Ok(())
    }
}

// =============================================================================
// Memory Store
// =============================================================================

/// In-memory blob store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl BlobStore for MemoryStore {
    fn get(&self, slot: &str) -> Option<Vec<u8>> {
        match self.slots.lock() {
            Ok(slots) => slots.get(slot).cloned(),
            Err(poisoned) => poisoned.into_inner().get(slot).cloned(),
        }
    }

    fn put(&self, slot: &str, bytes: &[u8]) -> DataResult<()> {
        let mut slots = match self.slots.lock() {
            Ok(slots) => slots,
            Err(poisoned) => poisoned.into_inner(),
        };
        slots.insert(slot.to_string(), bytes.to_vec());
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.get("missing").is_none());

        store.put("slot", b"hello").unwrap();
        assert_eq!(store.get("slot").unwrap(), b"hello");

        store.put("slot", b"replaced").unwrap();
        assert_eq!(store.get("slot").unwrap(), b"replaced");
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();

        assert!(store.get("ovro_reminders").is_none());

        store.put("ovro_reminders", b"[]").unwrap();
        assert_eq!(store.get("ovro_reminders").unwrap(), b"[]");

        // A second store over the same directory sees the same data
        let reopened = FileStore::new(dir.path()).unwrap();
        assert_eq!(reopened.get("ovro_reminders").unwrap(), b"[]");
    }

    #[test]
    fn test_file_store_overwrite_is_whole_slot() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();

        store.put("slot", b"a long first payload").unwrap();
        store.put("slot", b"short").unwrap();
        assert_eq!(store.get("slot").unwrap(), b"short");
    }
}
