//! Rigstage Timeline - Timeline data model
//!
//! Implements the clip arrangement for character animation:
//! - Clips placed on fixed tracks, backed by an animation library
//! - Non-destructive trimming and splitting
//! - Clipboard copy/paste/duplicate
//! - Project snapshots, save history, and the sequence library
//! - Time-to-pixel mapping for the timeline view

pub mod clip;
pub mod clipboard;
pub mod library;
pub mod persistence;
pub mod store;
pub mod trim;
pub mod view;

#[cfg(test)]
mod testutil;

pub use clip::{AnimationRef, Clip, TrackId};
pub use clipboard::{ClipSnapshot, ClipboardEngine};
pub use library::{AnimationInfo, AnimationLibrary};
pub use persistence::{
    autosave_snapshot, ClipDoc, ProjectDoc, SaveHistory, SequenceDoc, SequenceLibrary, DOC_VERSION,
    HISTORY_CAP,
};
pub use store::{ClipStore, ExportedClip};
pub use trim::{TrimEdge, MIN_TRIM_GAP};
pub use view::{RulerTick, TimelineViewTransform, ViewBindings};
