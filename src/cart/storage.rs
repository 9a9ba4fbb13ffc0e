//! Cart Persistence Adapter
//!
//! The cart survives application restarts through a durable key-value slot
//! holding the JSON-serialized cart state. The adapter stays dumb:
//! string slots in, string slots out. Serialization policy belongs
//! to [`CartStore`](super::state::CartStore).

use crate::error::CartError;
use dashmap::DashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// A durable key-value slot for serialized cart state.
///
/// Write-after-mutation is synchronous and not debounced; implementations
/// are expected to be cheap in-process operations.
pub trait CartStorage: Send + Sync {
    /// Reads the slot, `None` when it was never written (or was removed).
    fn load(&self, key: &str) -> Result<Option<String>, CartError>;

    /// Overwrites the slot.
    fn save(&self, key: &str, value: &str) -> Result<(), CartError>;

    /// Deletes the slot; no-op when absent.
    fn remove(&self, key: &str) -> Result<(), CartError>;
}

// =============================================================================
// In-memory storage
// =============================================================================

/// In-memory storage for slots, keyed by slot name.
/// DashMap allows concurrent access without external Mutexes.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: DashMap<String, String>,
}

impl MemoryStorage {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, CartError> {
        Ok(self.slots.get(key).map(|v| v.value().clone()))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), CartError> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CartError> {
        self.slots.remove(key);
        Ok(())
    }
}

// =============================================================================
// File-backed storage
// =============================================================================

/// File-backed storage: one `<key>.json` file per slot under a directory
/// chosen by the host application.
#[derive(Debug)]
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    /// Creates the storage directory if needed and returns the adapter.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, CartError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl CartStorage for JsonFileStorage {
    fn load(&self, key: &str) -> Result<Option<String>, CartError> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), CartError> {
        fs::write(self.slot_path(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CartError> {
        match fs::remove_file(self.slot_path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_round_trips_slots() {
        let storage = MemoryStorage::new();
        assert!(storage.load("cart").unwrap().is_none());

        storage.save("cart", r#"{"cartItems":[]}"#).unwrap();
        assert_eq!(
            storage.load("cart").unwrap().as_deref(),
            Some(r#"{"cartItems":[]}"#)
        );

        storage.remove("cart").unwrap();
        assert!(storage.load("cart").unwrap().is_none());
    }

    #[test]
    fn file_storage_round_trips_slots() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path()).unwrap();

        assert!(storage.load("cart").unwrap().is_none());
        storage.save("cart", "{}").unwrap();
        assert_eq!(storage.load("cart").unwrap().as_deref(), Some("{}"));

        storage.remove("cart").unwrap();
        assert!(storage.load("cart").unwrap().is_none());
        // Removing an absent slot stays a no-op.
        storage.remove("cart").unwrap();
    }
}
