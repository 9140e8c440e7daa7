//! Cross-crate tests for the scheduler against a live clip store.

use rigstage_core::{TickRate, Time};
use rigstage_playback::{PlaybackScheduler, PlaybackState};
use rigstage_timeline::{TrackId, TrimEdge};

use crate::helpers::{store, RecordingRenderer};

fn scheduler_at(tps: u32) -> PlaybackScheduler {
    let mut s = PlaybackScheduler::new("idle");
    s.set_tick_rate(TickRate::new(tps));
    s
}

#[test]
fn overlapping_clips_resolve_to_first_inserted() {
    let mut store = store();
    store
        .add_clip("walk", TrackId::Track2, Some(Time::ZERO))
        .unwrap();
    store
        .add_clip("dance", TrackId::Track1, Some(Time::ZERO))
        .unwrap();

    let mut scheduler = scheduler_at(10);
    let mut renderer = RecordingRenderer::default();
    scheduler.play(&store);
    scheduler.tick(&store, &mut renderer);

    // walk wins: it was inserted first, track number notwithstanding
    assert_eq!(renderer.events, vec!["change:walk".to_string()]);
}

#[test]
fn loop_wraps_exactly_with_overshoot() {
    let mut store = store();
    store.add_clip("dance", TrackId::Track1, None).unwrap();

    let mut scheduler = scheduler_at(5);
    let mut renderer = RecordingRenderer::default();
    scheduler.play(&store);
    scheduler.seek_to(Time::new(39, 10), &store);
    scheduler.tick(&store, &mut renderer);

    // 3.9 + 0.2 overshoots the 4.0 end by exactly 0.1
    assert_eq!(scheduler.current_time(), Time::new(1, 10));
    assert!(scheduler.is_playing());
}

#[test]
fn idle_plays_when_active_clip_is_deleted_mid_playback() {
    let mut store = store();
    let dance = store.add_clip("dance", TrackId::Track1, None).unwrap();
    store
        .add_clip("jump", TrackId::Track2, Some(Time::from_secs(3)))
        .unwrap();

    let mut scheduler = scheduler_at(10);
    let mut renderer = RecordingRenderer::default();
    scheduler.play(&store);
    scheduler.tick(&store, &mut renderer);
    assert_eq!(renderer.events.last().unwrap(), "change:dance");

    store.remove_clip(dance);
    scheduler.tick(&store, &mut renderer);
    assert_eq!(renderer.events.last().unwrap(), "change:idle");
}

#[test]
fn playhead_inside_trimmed_clip_maps_to_source_time() {
    let mut store = store();
    let id = store.add_clip("dance", TrackId::Track1, None).unwrap();
    store
        .get_mut(id)
        .unwrap()
        .trim(TrimEdge::Start, Time::from_secs(2));
    store.recompute_duration();

    let clip = store.get(id).unwrap();
    // Playhead 1.5 into a clip starting at source offset 2.0
    assert_eq!(
        clip.local_animation_time(Time::new(3, 2)),
        Time::new(7, 2)
    );
}

#[test]
fn stop_rewinds_and_notifies_renderer() {
    let mut store = store();
    store.add_clip("walk", TrackId::Track1, None).unwrap();

    let mut scheduler = scheduler_at(10);
    let mut renderer = RecordingRenderer::default();
    scheduler.play(&store);
    scheduler.tick(&store, &mut renderer);

    scheduler.stop(&mut renderer);
    assert_eq!(scheduler.state(), PlaybackState::Stopped);
    assert_eq!(scheduler.current_time(), Time::ZERO);
    assert_eq!(renderer.events.last().unwrap(), "stop");

    // Next play resolves the clip under the playhead again
    scheduler.play(&store);
    scheduler.tick(&store, &mut renderer);
    assert_eq!(renderer.events.last().unwrap(), "change:walk");
}

#[test]
fn playback_over_a_full_arrangement_changes_in_order() {
    // Scenario: dance for 4.0, then walk for 1.33.
    let mut store = store();
    store.add_clip("dance", TrackId::Track1, None).unwrap();
    store.add_clip("walk", TrackId::Track1, None).unwrap();
    assert_eq!(store.duration(), Time::new(533, 100));

    let mut scheduler = scheduler_at(10);
    scheduler.set_looping(false);
    let mut renderer = RecordingRenderer::default();
    scheduler.play(&store);
    while scheduler.tick(&store, &mut renderer) {}

    let changes: Vec<&String> = renderer
        .events
        .iter()
        .filter(|e| e.starts_with("change:"))
        .collect();
    assert_eq!(changes, vec!["change:dance", "change:walk"]);
    assert_eq!(scheduler.state(), PlaybackState::Stopped);
}
