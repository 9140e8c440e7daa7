//! The clip store: ownership of the clip set and its derived state.

use rigstage_core::{Result, RigstageError, Time};
use smallvec::SmallVec;
use uuid::Uuid;

use crate::clip::{AnimationRef, Clip, TrackId};
use crate::library::AnimationLibrary;
use crate::trim::TrimEdge;

/// One entry of an exported animation sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedClip {
    pub name: String,
    pub start_time: Time,
    pub duration: Time,
}

/// Owns the clips of the editing session, in arrival order.
///
/// The timeline duration is derived state, recomputed after every structural
/// mutation rather than stored independently. Selection is held as a clip id
/// so a removed clip can never leave a dangling selection.
#[derive(Debug, Clone)]
pub struct ClipStore {
    library: AnimationLibrary,
    clips: Vec<Clip>,
    duration: Time,
    selected: Option<Uuid>,
}

impl ClipStore {
    /// Create an empty store over the loaded animation library.
    pub fn new(library: AnimationLibrary) -> Self {
        Self {
            library,
            clips: Vec::new(),
            duration: Time::ZERO,
            selected: None,
        }
    }

    pub fn library(&self) -> &AnimationLibrary {
        &self.library
    }

    // ── Adding clips ────────────────────────────────────────────

    /// Add a clip by animation name. With no explicit start it lands at the
    /// end of the last clip on that track in insertion order.
    pub fn add_clip(
        &mut self,
        name: &str,
        track: TrackId,
        start_time: Option<Time>,
    ) -> Result<Uuid> {
        let duration = self
            .library
            .duration_of(name)
            .ok_or_else(|| RigstageError::UnknownAnimation(name.to_string()))?;
        let start = start_time.unwrap_or_else(|| self.default_start(track));
        let clip = Clip::new(AnimationRef::Named(name.to_string()), track, start, duration);
        Ok(self.insert(clip))
    }

    /// Add a clip by direct animation index.
    pub fn add_clip_by_index(
        &mut self,
        index: usize,
        track: TrackId,
        start_time: Option<Time>,
    ) -> Result<Uuid> {
        let info = self
            .library
            .get(index)
            .ok_or_else(|| RigstageError::UnknownAnimation(format!("#{index}")))?;
        let anim = AnimationRef::Indexed {
            index,
            name: info.name.clone(),
        };
        let duration = info.duration;
        let start = start_time.unwrap_or_else(|| self.default_start(track));
        let clip = Clip::new(anim, track, start, duration);
        Ok(self.insert(clip))
    }

    /// Insert a fully-formed clip (used by split and paste).
    pub fn insert(&mut self, clip: Clip) -> Uuid {
        let id = clip.id;
        self.clips.push(clip);
        self.recompute_duration();
        id
    }

    /// Default placement: end of the last clip on the track, 0 when empty.
    pub fn default_start(&self, track: TrackId) -> Time {
        self.clips_on_track(track)
            .last()
            .map(|c| c.end_time())
            .unwrap_or(Time::ZERO)
    }

    // ── Removing clips ──────────────────────────────────────────

    /// Remove a clip by identity. No-op when the clip is not present.
    pub fn remove_clip(&mut self, id: Uuid) {
        let before = self.clips.len();
        self.clips.retain(|c| c.id != id);
        if self.clips.len() == before {
            return;
        }
        if self.selected == Some(id) {
            self.selected = None;
        }
        self.recompute_duration();
    }

    /// Empty the clip set and drop the selection.
    pub fn clear(&mut self) {
        self.clips.clear();
        self.selected = None;
        self.recompute_duration();
    }

    // ── Moving and resizing ─────────────────────────────────────

    /// Set a clip's timeline start (drag). Clamped to zero. Safe to call
    /// repeatedly mid-drag; ordering is restored at the commit step.
    pub fn move_clip(&mut self, id: Uuid, new_start: Time) -> bool {
        let Some(clip) = self.get_mut(id) else {
            return false;
        };
        clip.start_time = new_start.max(Time::ZERO);
        self.recompute_duration();
        true
    }

    /// Set a clip's on-timeline length (right-handle resize). Implemented as
    /// an end-edge trim so the trim window invariant holds.
    pub fn resize_clip(&mut self, id: Uuid, new_duration: Time) -> bool {
        let Some(clip) = self.get_mut(id) else {
            return false;
        };
        let changed = clip.trim(TrimEdge::End, clip.trim_start + new_duration);
        if changed {
            self.recompute_duration();
        }
        changed
    }

    // ── Derived state ───────────────────────────────────────────

    /// Recompute the timeline duration: `max(0, max(start + duration))`.
    pub fn recompute_duration(&mut self) {
        self.duration = self
            .clips
            .iter()
            .map(Clip::end_time)
            .fold(Time::ZERO, Time::max);
    }

    pub fn duration(&self) -> Time {
        self.duration
    }

    /// Stable sort by track (lexical lane order), then start ascending.
    /// Run before export/serialization and at drag commit.
    pub fn sort_by_track_then_start(&mut self) {
        self.clips
            .sort_by(|a, b| a.track.cmp(&b.track).then(a.start_time.cmp(&b.start_time)));
    }

    // ── Selection ───────────────────────────────────────────────

    pub fn select(&mut self, id: Option<Uuid>) {
        self.selected = id.filter(|id| self.clips.iter().any(|c| c.id == *id));
    }

    pub fn selected_id(&self) -> Option<Uuid> {
        self.selected
    }

    pub fn selected(&self) -> Option<&Clip> {
        self.selected.and_then(|id| self.get(id))
    }

    // ── Lookup ──────────────────────────────────────────────────

    pub fn clips(&self) -> &[Clip] {
        &self.clips
    }

    pub fn clip_count(&self) -> usize {
        self.clips.len()
    }

    pub fn get(&self, id: Uuid) -> Option<&Clip> {
        self.clips.iter().find(|c| c.id == id)
    }

    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut Clip> {
        self.clips.iter_mut().find(|c| c.id == id)
    }

    /// Clips on one lane, in insertion order.
    pub fn clips_on_track(&self, track: TrackId) -> SmallVec<[&Clip; 8]> {
        self.clips.iter().filter(|c| c.track == track).collect()
    }

    /// The clip whose span contains `time`, first match in current iteration
    /// order. With overlapping clips this makes the earliest-inserted match
    /// authoritative; playback depends on that staying deterministic.
    pub fn active_clip_at(&self, time: Time) -> Option<&Clip> {
        self.clips.iter().find(|c| c.span().contains(time))
    }

    // ── Export ──────────────────────────────────────────────────

    /// Sorted `(name, start, duration)` tuples for the export stub and the
    /// sequence library.
    pub fn export_sequence(&mut self) -> Vec<ExportedClip> {
        self.sort_by_track_then_start();
        self.clips
            .iter()
            .map(|c| ExportedClip {
                name: c.anim.name().to_string(),
                start_time: c.start_time,
                duration: c.duration,
            })
            .collect()
    }
}
