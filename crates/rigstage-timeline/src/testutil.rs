//! Shared fixtures for this crate's unit tests.

use rigstage_core::Time;

use crate::library::{AnimationInfo, AnimationLibrary};

/// A small library mirroring the model's real animation set.
pub(crate) fn test_library() -> AnimationLibrary {
    AnimationLibrary::from_entries(vec![
        AnimationInfo {
            index: 0,
            name: "idle".into(),
            duration: Time::from_secs(5),
        },
        AnimationInfo {
            index: 1,
            name: "dance".into(),
            duration: Time::from_secs(4),
        },
        AnimationInfo {
            index: 2,
            name: "walk".into(),
            duration: Time::new(133, 100),
        },
        AnimationInfo {
            index: 3,
            name: "jump".into(),
            duration: Time::from_secs(1),
        },
    ])
}
