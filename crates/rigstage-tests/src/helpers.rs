//! Shared fixtures for the integration tests.

use rigstage_core::Time;
use rigstage_playback::{AnimationRenderer, NullRenderer};
use rigstage_session::{MemorySlotStore, ProjectStorage, Session};
use rigstage_timeline::{AnimationInfo, AnimationLibrary, ClipStore};

pub fn library() -> AnimationLibrary {
    AnimationLibrary::from_entries(vec![
        AnimationInfo {
            index: 0,
            name: "idle".to_string(),
            duration: Time::from_secs(5),
        },
        AnimationInfo {
            index: 1,
            name: "dance".to_string(),
            duration: Time::from_secs(4),
        },
        AnimationInfo {
            index: 2,
            name: "walk".to_string(),
            duration: Time::new(133, 100),
        },
        AnimationInfo {
            index: 3,
            name: "jump".to_string(),
            duration: Time::from_secs(1),
        },
    ])
}

pub fn store() -> ClipStore {
    ClipStore::new(library())
}

pub fn session() -> Session {
    Session::new(
        library(),
        Box::new(NullRenderer),
        ProjectStorage::new(Box::new(MemorySlotStore::new())),
    )
}

/// Renderer that records every call, newest last.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub events: Vec<String>,
}

impl AnimationRenderer for RecordingRenderer {
    fn change_animation(&mut self, name: &str, _offset: Option<Time>) -> bool {
        self.events.push(format!("change:{name}"));
        true
    }

    fn change_animation_by_index(
        &mut self,
        index: usize,
        _force_restart: bool,
        _offset: Option<Time>,
    ) -> bool {
        self.events.push(format!("change-index:{index}"));
        true
    }

    fn pause_animation(&mut self) -> bool {
        self.events.push("pause".to_string());
        true
    }

    fn resume_animation(&mut self) -> bool {
        self.events.push("resume".to_string());
        true
    }

    fn stop_animation(&mut self) -> bool {
        self.events.push("stop".to_string());
        true
    }
}
