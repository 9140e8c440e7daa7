//! Clip types for the timeline.

use rigstage_core::{RigstageError, Time, TimeSpan};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// One of the fixed set of parallel timeline lanes.
///
/// The variant order matches the lexical order of the string forms, which is
/// what the track-then-start sort relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackId {
    Track1,
    Track2,
    Track3,
}

impl TrackId {
    /// All tracks, in lane order.
    pub const ALL: [TrackId; 3] = [TrackId::Track1, TrackId::Track2, TrackId::Track3];

    /// The lane new clips land on when no track is given.
    pub const DEFAULT: TrackId = TrackId::Track1;

    pub fn as_str(self) -> &'static str {
        match self {
            TrackId::Track1 => "track1",
            TrackId::Track2 => "track2",
            TrackId::Track3 => "track3",
        }
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrackId {
    type Err = RigstageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "track1" => Ok(TrackId::Track1),
            "track2" => Ok(TrackId::Track2),
            "track3" => Ok(TrackId::Track3),
            other => Err(RigstageError::UnknownTrack(other.to_string())),
        }
    }
}

/// How a clip refers to its source animation.
///
/// A clip resolves either through the library's name table or by a direct
/// animation index, never both. Index-based clips still carry the display
/// name because the persisted document format only keeps the name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationRef {
    /// Symbolic name, mapped through the animation library.
    Named(String),
    /// Direct index into the loaded animation list.
    Indexed { index: usize, name: String },
}

impl AnimationRef {
    /// Display/persistence name of the referenced animation.
    pub fn name(&self) -> &str {
        match self {
            AnimationRef::Named(name) => name,
            AnimationRef::Indexed { name, .. } => name,
        }
    }

    /// Direct index, when this reference resolves by index.
    pub fn index(&self) -> Option<usize> {
        match self {
            AnimationRef::Named(_) => None,
            AnimationRef::Indexed { index, .. } => Some(*index),
        }
    }
}

/// A scheduled placement of one animation on one track.
///
/// `duration == trim_end - trim_start` holds at all times, and the trim
/// window stays inside `[0, original_duration]`. All mutation goes through
/// the trim/store operations, which preserve both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clip {
    /// Unique clip ID, stable for the clip's lifetime
    pub id: Uuid,
    /// Source animation reference
    pub anim: AnimationRef,
    /// Lane this clip occupies
    pub track: TrackId,
    /// Timeline-absolute start, seconds
    pub start_time: Time,
    /// Playable length on the timeline
    pub duration: Time,
    /// Untrimmed length of the source animation, immutable after creation
    pub original_duration: Time,
    /// Offset into the source where playback begins
    pub trim_start: Time,
    /// Offset into the source where playback ends
    pub trim_end: Time,
}

impl Clip {
    /// Create an untrimmed clip covering the full source animation.
    pub fn new(anim: AnimationRef, track: TrackId, start_time: Time, source_duration: Time) -> Self {
        Self {
            id: Uuid::new_v4(),
            anim,
            track,
            start_time,
            duration: source_duration,
            original_duration: source_duration,
            trim_start: Time::ZERO,
            trim_end: source_duration,
        }
    }

    /// Timeline span this clip occupies.
    pub fn span(&self) -> TimeSpan {
        TimeSpan::new(self.start_time, self.duration)
    }

    /// Timeline-absolute end.
    pub fn end_time(&self) -> Time {
        self.start_time + self.duration
    }
}
