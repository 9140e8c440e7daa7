//! Trim operations: edge trims, trim-aware local time, and splitting.
//!
//! Trimming restricts playback to `[trim_start, trim_end]` of the source
//! animation. It never moves the clip on the timeline; only the slice of
//! source played (and therefore the on-timeline duration) changes.

use rigstage_core::Time;
use uuid::Uuid;

use crate::clip::Clip;
use crate::store::ClipStore;

/// Minimum playable slice a trim may leave behind. Keeps clips selectable
/// and draggable instead of degenerating to zero width.
pub const MIN_TRIM_GAP: Time = Time::from_raw(1, 10);

/// Which edge of the trim window an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrimEdge {
    Start,
    End,
}

impl Clip {
    /// Move one trim edge to a new offset into the source animation.
    ///
    /// The offset is clamped into the source range; a trim that would leave
    /// less than [`MIN_TRIM_GAP`] of playable slice is rejected as a no-op.
    /// Returns whether the trim was applied. Safe to call repeatedly with
    /// updated offsets during a handle drag.
    pub fn trim(&mut self, edge: TrimEdge, new_offset: Time) -> bool {
        match edge {
            TrimEdge::Start => {
                let offset = new_offset.clamp(Time::ZERO, self.original_duration);
                if offset + MIN_TRIM_GAP >= self.trim_end {
                    return false;
                }
                self.trim_start = offset;
            }
            TrimEdge::End => {
                let offset = new_offset.min(self.original_duration);
                if offset <= self.trim_start + MIN_TRIM_GAP {
                    return false;
                }
                self.trim_end = offset;
            }
        }
        self.duration = self.trim_end - self.trim_start;
        true
    }

    /// The time to seek into the source animation when the playhead sits at
    /// `timeline_time`. Trimmed clips start playback mid-animation.
    pub fn local_animation_time(&self, timeline_time: Time) -> Time {
        self.trim_start + (timeline_time - self.start_time)
    }

    /// Whether any part of the source is cut off.
    pub fn has_active_trim(&self) -> bool {
        self.trim_start > Time::ZERO || self.trim_end < self.original_duration
    }
}

impl ClipStore {
    /// Split a clip at an absolute timeline time.
    ///
    /// No-op unless `at` falls strictly inside the clip's span. The original
    /// clip keeps the left slice; a new clip on the same track starts at
    /// `at` with the remainder of the trim window. The two cover exactly the
    /// original span, meeting at `at`. Returns the new clip's id.
    pub fn split_clip(&mut self, id: Uuid, at: Time) -> Option<Uuid> {
        let clip = self.get(id)?;
        if at <= clip.start_time || at >= clip.end_time() {
            return None;
        }

        let left_len = at - clip.start_time;
        let right = Clip {
            id: Uuid::new_v4(),
            anim: clip.anim.clone(),
            track: clip.track,
            start_time: at,
            duration: clip.trim_end - (clip.trim_start + left_len),
            original_duration: clip.original_duration,
            trim_start: clip.trim_start + left_len,
            trim_end: clip.trim_end,
        };

        let clip = self.get_mut(id)?;
        clip.trim_end = clip.trim_start + left_len;
        clip.duration = left_len;

        Some(self.insert(right))
    }
}
