//! Time↔pixel mapping under zoom, and the ruler tick table.
//!
//! The core never dereferences rendering handles; `ViewBindings` is a
//! presentation-owned side table keyed by clip id.

use rigstage_core::Time;
use std::collections::HashMap;
use uuid::Uuid;

use crate::clip::Clip;
use crate::store::ClipStore;

/// Horizontal scale at zoom 1.0.
pub const PIXELS_PER_SECOND: f64 = 100.0;

/// Zoom bounds and step factor.
pub const MIN_ZOOM: f64 = 0.5;
pub const MAX_ZOOM: f64 = 3.0;
pub const ZOOM_FACTOR: f64 = 1.2;

/// One ruler marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RulerTick {
    /// Timeline time of the marker
    pub time: Time,
    /// Horizontal position in pixels
    pub x: f64,
    /// Whole-second ticks are taller and labelled
    pub major: bool,
}

/// Maps timeline time to screen pixels under the current zoom.
#[derive(Debug, Clone)]
pub struct TimelineViewTransform {
    zoom: f64,
    pixels_per_second: f64,
}

impl TimelineViewTransform {
    pub fn new() -> Self {
        Self {
            zoom: 1.0,
            pixels_per_second: PIXELS_PER_SECOND,
        }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Multiply zoom by the step factor, clamped. Callers re-lay-out clip
    /// rects and ruler ticks after the change.
    pub fn zoom_in(&mut self) -> f64 {
        self.zoom = (self.zoom * ZOOM_FACTOR).min(MAX_ZOOM);
        self.zoom
    }

    pub fn zoom_out(&mut self) -> f64 {
        self.zoom = (self.zoom / ZOOM_FACTOR).max(MIN_ZOOM);
        self.zoom
    }

    pub fn time_to_pixels(&self, t: Time) -> f64 {
        t.to_seconds_f64() * self.pixels_per_second * self.zoom
    }

    pub fn pixels_to_time(&self, x: f64) -> Time {
        Time::from_seconds_f64(x / (self.pixels_per_second * self.zoom))
    }

    /// Left edge and width of a clip's screen rect.
    pub fn clip_rect(&self, clip: &Clip) -> (f64, f64) {
        (
            self.time_to_pixels(clip.start_time),
            self.time_to_pixels(clip.duration),
        )
    }

    pub fn playhead_x(&self, current_time: Time) -> f64 {
        self.time_to_pixels(current_time)
    }

    /// Tick spacing for the current zoom. A threshold table, not a
    /// continuous function: fine ticks only when zoomed in enough to read
    /// them.
    pub fn ruler_step(&self) -> Time {
        if self.zoom > 2.0 {
            Time::new(1, 10)
        } else if self.zoom > 1.0 {
            Time::new(1, 2)
        } else {
            Time::from_secs(1)
        }
    }

    /// Markers from zero through just past `duration`.
    pub fn ruler_ticks(&self, duration: Time) -> Vec<RulerTick> {
        let step = self.ruler_step();
        let mut ticks = Vec::new();
        let mut i = 0i64;
        loop {
            let t = step * i;
            if t > duration + step {
                break;
            }
            ticks.push(RulerTick {
                time: t,
                x: self.time_to_pixels(t),
                major: t.is_whole_second(),
            });
            i += 1;
        }
        ticks
    }
}

impl Default for TimelineViewTransform {
    fn default() -> Self {
        Self::new()
    }
}

/// Presentation-layer side table from clip id to an opaque view handle.
/// The data model never looks inside; correctness never depends on it.
#[derive(Debug, Clone, Default)]
pub struct ViewBindings<H> {
    handles: HashMap<Uuid, H>,
}

impl<H> ViewBindings<H> {
    pub fn new() -> Self {
        Self {
            handles: HashMap::new(),
        }
    }

    pub fn bind(&mut self, id: Uuid, handle: H) {
        self.handles.insert(id, handle);
    }

    pub fn unbind(&mut self, id: Uuid) -> Option<H> {
        self.handles.remove(&id)
    }

    pub fn get(&self, id: Uuid) -> Option<&H> {
        self.handles.get(&id)
    }

    /// Drop handles for clips no longer in the store.
    pub fn prune(&mut self, store: &ClipStore) {
        self.handles.retain(|id, _| store.get(*id).is_some());
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}
