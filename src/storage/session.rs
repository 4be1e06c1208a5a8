//! Persistence slot for the logged-in session
//!
//! The slot holds one raw JSON document. Parsing and recovery from a corrupt
//! document belong to the session store, so slots only move text around.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::error::{FinbuddyError, FinbuddyResult};

use super::file_io::{read_text, remove_if_exists, write_atomic};

/// Key-value slot holding the serialized session
pub trait SessionSlot: Send + Sync {
    /// Raw stored value, `None` if nothing is stored
    fn load(&self) -> FinbuddyResult<Option<String>>;

    fn store(&self, value: &str) -> FinbuddyResult<()>;

    /// Remove the stored value; clearing an empty slot succeeds
    fn clear(&self) -> FinbuddyResult<()>;
}

/// Session slot backed by a JSON file
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl SessionSlot for FileSlot {
    fn load(&self) -> FinbuddyResult<Option<String>> {
        read_text(&self.path)
    }

    fn store(&self, value: &str) -> FinbuddyResult<()> {
        write_atomic(&self.path, value.as_bytes())
    }

    fn clear(&self) -> FinbuddyResult<()> {
        remove_if_exists(&self.path)
    }
}

/// In-memory session slot; clones share the same value
#[derive(Clone, Default)]
pub struct MemorySlot {
    value: Arc<Mutex<Option<String>>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot pre-filled with `value`
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Arc::new(Mutex::new(Some(value.into()))),
        }
    }

    fn lock(&self) -> FinbuddyResult<std::sync::MutexGuard<'_, Option<String>>> {
        self.value
            .lock()
            .map_err(|e| FinbuddyError::Storage(format!("Failed to acquire session lock: {}", e)))
    }
}

impl SessionSlot for MemorySlot {
    fn load(&self) -> FinbuddyResult<Option<String>> {
        Ok(self.lock()?.clone())
    }

    fn store(&self, value: &str) -> FinbuddyResult<()> {
        *self.lock()? = Some(value.to_string());
        Ok(())
    }

    fn clear(&self) -> FinbuddyResult<()> {
        *self.lock()? = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_slot_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let slot = FileSlot::new(temp_dir.path().join("session.json"));

        assert!(slot.load().unwrap().is_none());

        slot.store(r#"{"id":"1"}"#).unwrap();
        assert_eq!(slot.load().unwrap().as_deref(), Some(r#"{"id":"1"}"#));

        slot.clear().unwrap();
        assert!(slot.load().unwrap().is_none());
        assert!(!slot.path().exists());
    }

    #[test]
    fn test_file_slot_clear_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let slot = FileSlot::new(temp_dir.path().join("session.json"));
        slot.clear().unwrap();
        slot.clear().unwrap();
    }

    #[test]
    fn test_memory_slot_clones_share_value() {
        let slot = MemorySlot::new();
        let observer = slot.clone();

        slot.store("value").unwrap();
        assert_eq!(observer.load().unwrap().as_deref(), Some("value"));

        observer.clear().unwrap();
        assert!(slot.load().unwrap().is_none());
    }
}
