//! Keyed slot storage for projects, autosaves, and sequences.
//!
//! Everything the session persists lives in a small set of named slots.
//! `FileSlotStore` maps each slot to a JSON file in the user data
//! directory; `MemorySlotStore` backs tests and headless runs.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use rigstage_core::{Result, RigstageError};
use rigstage_timeline::{ProjectDoc, SaveHistory, SequenceLibrary};
use tracing::{debug, warn};

/// Slot holding the save history.
pub const SLOT_PROJECTS: &str = "projects";
/// Slot holding the most recent autosave.
pub const SLOT_AUTOSAVE: &str = "autosave";
/// Slot holding the sequence library.
pub const SLOT_SEQUENCES: &str = "sequences";

/// A keyed blob store. Slots hold one JSON document each.
pub trait SlotStore: Send {
    /// Read a slot. `Ok(None)` means the slot has never been written.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Write a slot, replacing any previous contents.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove a slot.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Slot store backed by files under the user data directory.
pub struct FileSlotStore {
    dir: PathBuf,
}

impl FileSlotStore {
    /// Store under `<data_dir>/rigstage`.
    pub fn default_location() -> Result<Self> {
        let base = dirs::data_dir().ok_or_else(|| {
            RigstageError::Persistence("no user data directory available".to_string())
        })?;
        Self::at(base.join("rigstage"))
    }

    pub fn at(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SlotStore for FileSlotStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key);
        match std::fs::read_to_string(&path) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.slot_path(key);
        std::fs::write(&path, value)?;
        debug!(slot = key, path = %path.display(), "slot written");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.slot_path(key);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory slot store for tests and headless sessions.
#[derive(Debug, Default)]
pub struct MemorySlotStore {
    slots: HashMap<String, String>,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStore for MemorySlotStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.slots.remove(key);
        Ok(())
    }
}

/// Typed access to the session's slots.
pub struct ProjectStorage {
    store: Box<dyn SlotStore>,
}

impl ProjectStorage {
    pub fn new(store: Box<dyn SlotStore>) -> Self {
        Self { store }
    }

    pub fn load_history(&self) -> SaveHistory {
        self.read_slot(SLOT_PROJECTS).unwrap_or_default()
    }

    pub fn store_history(&mut self, history: &SaveHistory) -> Result<()> {
        self.write_slot(SLOT_PROJECTS, history)
    }

    pub fn load_autosave(&self) -> Option<ProjectDoc> {
        self.read_slot(SLOT_AUTOSAVE)
    }

    pub fn store_autosave(&mut self, doc: &ProjectDoc) -> Result<()> {
        self.write_slot(SLOT_AUTOSAVE, doc)
    }

    pub fn load_sequences(&self) -> SequenceLibrary {
        self.read_slot(SLOT_SEQUENCES).unwrap_or_default()
    }

    pub fn store_sequences(&mut self, sequences: &SequenceLibrary) -> Result<()> {
        self.write_slot(SLOT_SEQUENCES, sequences)
    }

    /// A corrupt or missing slot reads as absent; losing a stale autosave
    /// is better than refusing to start.
    fn read_slot<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.read(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(slot = key, error = %e, "slot read failed");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(slot = key, error = %e, "slot contents unreadable");
                None
            }
        }
    }

    fn write_slot<T: serde::Serialize>(&mut self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| RigstageError::Persistence(e.to_string()))?;
        self.store.write(key, &json)
    }
}
