//! Rigstage Playback - Playhead scheduling and renderer dispatch
//!
//! The scheduler advances the playhead on a fixed tick, resolves the
//! active clip, and forwards change/pause/stop requests across the
//! `AnimationRenderer` seam.

pub mod animator;
pub mod scheduler;

pub use animator::{AnimationRenderer, NullRenderer};
pub use scheduler::{PlaybackScheduler, PlaybackState};
