//! Drives the playhead and decides which clip the renderer should show.
//!
//! Clip resolution is first match in store order, so overlapping clips
//! resolve deterministically. A renderer trigger fires only when the
//! resolved clip's identity changes; advancing inside a clip never
//! re-triggers it.

use rigstage_core::{TickRate, Time};
use rigstage_timeline::ClipStore;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::animator::AnimationRenderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    Playing,
    Paused,
}

/// Owns the playhead. Clip data stays in the store; the scheduler only
/// reads it.
#[derive(Debug)]
pub struct PlaybackScheduler {
    state: PlaybackState,
    current_time: Time,
    looping: bool,
    last_played: Option<Uuid>,
    tick_rate: TickRate,
    idle_animation: String,
}

impl PlaybackScheduler {
    pub fn new(idle_animation: impl Into<String>) -> Self {
        Self {
            state: PlaybackState::Stopped,
            current_time: Time::ZERO,
            looping: true,
            last_played: None,
            tick_rate: TickRate::HZ_60,
            idle_animation: idle_animation.into(),
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn current_time(&self) -> Time {
        self.current_time
    }

    pub fn looping(&self) -> bool {
        self.looping
    }

    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    pub fn tick_rate(&self) -> TickRate {
        self.tick_rate
    }

    pub fn set_tick_rate(&mut self, rate: TickRate) {
        self.tick_rate = rate;
    }

    /// Starts playback from the current playhead. No-op on an empty
    /// timeline.
    pub fn play(&mut self, store: &ClipStore) {
        if store.clip_count() == 0 {
            debug!("play requested on empty timeline");
            return;
        }
        self.state = PlaybackState::Playing;
    }

    pub fn pause(&mut self, renderer: &mut dyn AnimationRenderer) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
            renderer.pause_animation();
        }
    }

    pub fn resume(&mut self, renderer: &mut dyn AnimationRenderer) {
        if self.state == PlaybackState::Paused {
            self.state = PlaybackState::Playing;
            renderer.resume_animation();
        }
    }

    /// Stops playback and rewinds to zero.
    pub fn stop(&mut self, renderer: &mut dyn AnimationRenderer) {
        self.reset();
        renderer.stop_animation();
    }

    /// Rewinds without touching the renderer. Used when the timeline is
    /// cleared and there is nothing left to stop.
    pub fn reset(&mut self) {
        self.state = PlaybackState::Stopped;
        self.current_time = Time::ZERO;
        self.last_played = None;
    }

    /// Advances the playhead one step and dispatches any clip change to
    /// the renderer. Returns whether playback is still running.
    pub fn tick(&mut self, store: &ClipStore, renderer: &mut dyn AnimationRenderer) -> bool {
        if self.state != PlaybackState::Playing {
            return false;
        }
        let duration = store.duration();
        if duration.is_zero() {
            self.stop(renderer);
            return false;
        }

        self.current_time = self.current_time + self.tick_rate.step();
        if self.current_time >= duration {
            if self.looping {
                // Overshoot carries into the next pass so loop timing
                // stays exact.
                self.current_time = self.current_time - duration;
            } else {
                self.stop(renderer);
                return false;
            }
        }

        match store.active_clip_at(self.current_time) {
            Some(clip) => {
                if self.last_played != Some(clip.id) {
                    let offset = clip.local_animation_time(self.current_time);
                    let ok = match clip.anim.index() {
                        Some(index) => {
                            renderer.change_animation_by_index(index, false, Some(offset))
                        }
                        None => renderer.change_animation(clip.anim.name(), Some(offset)),
                    };
                    if !ok {
                        warn!(animation = %clip.anim.name(), "renderer refused clip trigger");
                    }
                    self.last_played = Some(clip.id);
                }
            }
            None => {
                if self.last_played.is_some() {
                    renderer.change_animation(&self.idle_animation, None);
                    self.last_played = None;
                }
            }
        }
        true
    }

    /// Moves the playhead, clamped to the timeline. The trigger marker is
    /// cleared so the next tick re-resolves whatever is under the playhead.
    pub fn seek_to(&mut self, t: Time, store: &ClipStore) {
        self.current_time = t.clamp(Time::ZERO, store.duration());
        self.last_played = None;
    }

    pub fn seek_by(&mut self, delta: Time, store: &ClipStore) {
        self.seek_to(self.current_time + delta, store);
    }

    /// One tick step; what the frame-step shortcuts move by.
    pub fn frame_step(&self) -> Time {
        self.tick_rate.step()
    }
}
