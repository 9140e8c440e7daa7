//! The loaded-animation catalog the clip store resolves against.
//!
//! Built once from the renderer's loaded-animations metadata and handed to
//! the store at construction time, so everything that needs a name or
//! duration lookup has it before any scheduling starts.

use rigstage_core::Time;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Metadata for one loaded animation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationInfo {
    /// Index in the loaded animation list
    pub index: usize,
    /// Animation name
    pub name: String,
    /// Source duration
    pub duration: Time,
}

/// Index/name/duration lookups over the loaded animations.
#[derive(Debug, Clone, Default)]
pub struct AnimationLibrary {
    entries: Vec<AnimationInfo>,
    by_name: HashMap<String, usize>,
}

impl AnimationLibrary {
    /// Build a library from loaded-animation metadata. Entry order is the
    /// index order; on duplicate names the first entry wins.
    pub fn from_entries(entries: Vec<AnimationInfo>) -> Self {
        let mut by_name = HashMap::new();
        for (pos, entry) in entries.iter().enumerate() {
            by_name.entry(entry.name.clone()).or_insert(pos);
        }
        Self { entries, by_name }
    }

    /// Look up an animation by name.
    pub fn by_name(&self, name: &str) -> Option<&AnimationInfo> {
        self.by_name.get(name).map(|&pos| &self.entries[pos])
    }

    /// Look up an animation by index.
    pub fn get(&self, index: usize) -> Option<&AnimationInfo> {
        self.entries.iter().find(|e| e.index == index)
    }

    /// Source duration of a named animation.
    pub fn duration_of(&self, name: &str) -> Option<Time> {
        self.by_name(name).map(|e| e.duration)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[AnimationInfo] {
        &self.entries
    }
}
