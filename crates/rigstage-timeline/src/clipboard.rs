//! Single-slot clip clipboard: copy, paste, duplicate.

use rigstage_core::Time;
use uuid::Uuid;

use crate::clip::{AnimationRef, Clip, TrackId};
use crate::store::ClipStore;

/// Everything a paste needs to reproduce a clip, trim window included.
/// Timeline position is deliberately absent; paste picks its own target.
#[derive(Debug, Clone)]
pub struct ClipSnapshot {
    pub anim: AnimationRef,
    pub duration: Time,
    pub original_duration: Time,
    pub trim_start: Time,
    pub trim_end: Time,
}

/// Holds at most one copied clip. Copying overwrites the previous content.
#[derive(Debug, Clone, Default)]
pub struct ClipboardEngine {
    slot: Option<ClipSnapshot>,
}

impl ClipboardEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    /// Snapshot a clip's attributes into the slot.
    pub fn copy(&mut self, clip: &Clip) {
        self.slot = Some(ClipSnapshot {
            anim: clip.anim.clone(),
            duration: clip.duration,
            original_duration: clip.original_duration,
            trim_start: clip.trim_start,
            trim_end: clip.trim_end,
        });
    }

    /// Materialize the slot as a new clip and select it.
    ///
    /// Lands after the selected clip on that clip's track, or at the
    /// playhead on the default track when nothing is selected. No-op with an
    /// empty clipboard. Returns the new clip's id.
    pub fn paste(&self, store: &mut ClipStore, playhead: Time) -> Option<Uuid> {
        let snap = self.slot.as_ref()?;
        let (track, start) = match store.selected() {
            Some(sel) => (sel.track, sel.end_time()),
            None => (TrackId::DEFAULT, playhead),
        };

        let clip = Clip {
            id: Uuid::new_v4(),
            anim: snap.anim.clone(),
            track,
            start_time: start,
            duration: snap.duration,
            original_duration: snap.original_duration,
            trim_start: snap.trim_start,
            trim_end: snap.trim_end,
        };
        let id = store.insert(clip);
        store.select(Some(id));
        Some(id)
    }

    /// Copy a clip and immediately paste it.
    pub fn duplicate(&mut self, store: &mut ClipStore, id: Uuid, playhead: Time) -> Option<Uuid> {
        let clip = store.get(id)?.clone();
        self.copy(&clip);
        self.paste(store, playhead)
    }
}
