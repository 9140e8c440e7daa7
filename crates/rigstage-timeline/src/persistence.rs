//! Project snapshots, the save history, and the sequence library.
//!
//! The document format is the interchange surface: seconds are stored as
//! floats and field names are camelCase. Trim state is intentionally not
//! part of the format; a loaded clip is untrimmed at its saved duration.

use rigstage_core::{Result, RigstageError, Time};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::clip::{AnimationRef, Clip, TrackId};
use crate::store::ClipStore;

/// Only documents carrying this version string are accepted.
pub const DOC_VERSION: &str = "1.0";

/// Save history keeps the most recent projects, evicting the oldest.
pub const HISTORY_CAP: usize = 10;

/// One clip as it appears on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClipDoc {
    pub animation: String,
    pub track: TrackId,
    #[serde(rename = "startTime")]
    pub start_time: f64,
    pub duration: f64,
}

/// A complete saved project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectDoc {
    pub version: String,
    /// Milliseconds since the unix epoch
    pub timestamp: u64,
    pub name: String,
    pub clips: Vec<ClipDoc>,
    pub duration: f64,
}

impl ProjectDoc {
    /// Captures the store's clips sorted into canonical order.
    pub fn snapshot(store: &mut ClipStore, name: &str, timestamp: u64) -> Self {
        store.sort_by_track_then_start();
        let clips = store
            .clips()
            .iter()
            .map(|c| ClipDoc {
                animation: c.anim.name().to_string(),
                track: c.track,
                start_time: c.start_time.to_seconds_f64(),
                duration: c.duration.to_seconds_f64(),
            })
            .collect();
        Self {
            version: DOC_VERSION.to_string(),
            timestamp,
            name: name.to_string(),
            clips,
            duration: store.duration().to_seconds_f64(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| RigstageError::Persistence(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let doc: ProjectDoc = serde_json::from_str(json)
            .map_err(|e| RigstageError::Persistence(e.to_string()))?;
        if doc.version != DOC_VERSION {
            return Err(RigstageError::Persistence(format!(
                "unsupported project version {:?}",
                doc.version
            )));
        }
        Ok(doc)
    }

    /// Replaces the store's contents with this document's clips. The store
    /// is left empty if any clip names an animation the library lacks.
    ///
    /// Saved durations are taken at face value so a clip trimmed before
    /// saving comes back at its trimmed length, now untrimmed.
    pub fn load_into(&self, store: &mut ClipStore) -> Result<()> {
        store.clear();
        for doc in &self.clips {
            if store.library().duration_of(&doc.animation).is_none() {
                warn!(animation = %doc.animation, "project references unknown animation");
                store.clear();
                return Err(RigstageError::UnknownAnimation(doc.animation.clone()));
            }
            let clip = Clip::new(
                AnimationRef::Named(doc.animation.clone()),
                doc.track,
                Time::from_seconds_f64(doc.start_time),
                Time::from_seconds_f64(doc.duration),
            );
            store.insert(clip);
        }
        debug!(name = %self.name, clips = self.clips.len(), "project loaded");
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}

/// Rolling list of saved projects, newest last.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaveHistory {
    entries: Vec<ProjectDoc>,
}

impl SaveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a save, evicting the oldest entry past the cap.
    pub fn push(&mut self, doc: ProjectDoc) {
        self.entries.push(doc);
        while self.entries.len() > HISTORY_CAP {
            self.entries.remove(0);
        }
    }

    pub fn latest(&self) -> Option<&ProjectDoc> {
        self.entries.last()
    }

    pub fn entries(&self) -> &[ProjectDoc] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Background-save snapshot. Empty timelines are not worth a save slot.
pub fn autosave_snapshot(store: &mut ClipStore, timestamp: u64) -> Option<ProjectDoc> {
    if store.clip_count() == 0 {
        return None;
    }
    Some(ProjectDoc::snapshot(store, "Auto-save", timestamp))
}

/// A named clip arrangement kept independently of project saves.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SequenceDoc {
    pub name: String,
    pub clips: Vec<ClipDoc>,
    pub duration: f64,
    #[serde(rename = "createdAt")]
    pub created_at: u64,
}

impl SequenceDoc {
    pub fn from_store(store: &mut ClipStore, name: &str, created_at: u64) -> Self {
        let doc = ProjectDoc::snapshot(store, name, created_at);
        Self {
            name: name.to_string(),
            clips: doc.clips,
            duration: doc.duration,
            created_at,
        }
    }
}

/// User-curated collection of sequences.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SequenceLibrary {
    sequences: Vec<SequenceDoc>,
}

impl SequenceLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, seq: SequenceDoc) {
        self.sequences.push(seq);
    }

    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.sequences.len();
        self.sequences.retain(|s| s.name != name);
        self.sequences.len() != before
    }

    pub fn get(&self, name: &str) -> Option<&SequenceDoc> {
        self.sequences.iter().find(|s| s.name == name)
    }

    pub fn sequences(&self) -> &[SequenceDoc] {
        &self.sequences
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }
}
