//! The seam between the scheduler and whatever renders the character.

use rigstage_core::Time;

/// Receives animation change requests from the scheduler.
///
/// Implementations report whether the request took effect. The scheduler
/// logs refused triggers but keeps its own bookkeeping either way, so a
/// refusal never causes a re-trigger on the next tick.
pub trait AnimationRenderer {
    /// Start playing the named animation, optionally from an offset into
    /// the source animation.
    fn change_animation(&mut self, name: &str, offset: Option<Time>) -> bool;

    /// Start playing an animation by library index. `force_restart`
    /// restarts the animation even when it is already the active one.
    fn change_animation_by_index(
        &mut self,
        index: usize,
        force_restart: bool,
        offset: Option<Time>,
    ) -> bool;

    fn pause_animation(&mut self) -> bool;

    fn resume_animation(&mut self) -> bool;

    fn stop_animation(&mut self) -> bool;
}

/// Renderer that accepts everything and does nothing. Used headless and
/// as a stand-in before a real renderer connects.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl AnimationRenderer for NullRenderer {
    fn change_animation(&mut self, _name: &str, _offset: Option<Time>) -> bool {
        true
    }

    fn change_animation_by_index(
        &mut self,
        _index: usize,
        _force_restart: bool,
        _offset: Option<Time>,
    ) -> bool {
        true
    }

    fn pause_animation(&mut self) -> bool {
        true
    }

    fn resume_animation(&mut self) -> bool {
        true
    }

    fn stop_animation(&mut self) -> bool {
        true
    }
}
