//! Cross-crate tests for clip arrangement, trimming, and the clipboard.

use rigstage_core::Time;
use rigstage_timeline::{ClipboardEngine, TrackId, TrimEdge, MIN_TRIM_GAP};

use crate::helpers::store;

// ── Arrangement ────────────────────────────────────────────────

#[test]
fn clips_append_end_to_end_per_track() {
    let mut store = store();
    store.add_clip("dance", TrackId::Track1, None).unwrap();
    store.add_clip("walk", TrackId::Track1, None).unwrap();

    let clips = store.clips();
    assert_eq!(clips[0].start_time, Time::ZERO);
    assert_eq!(clips[1].start_time, Time::from_secs(4));
    assert_eq!(store.duration(), Time::new(533, 100));
}

#[test]
fn tracks_place_independently() {
    let mut store = store();
    store.add_clip("dance", TrackId::Track1, None).unwrap();
    store.add_clip("walk", TrackId::Track2, None).unwrap();

    // track2 was empty, so walk starts at zero despite dance on track1
    assert_eq!(store.clips()[1].start_time, Time::ZERO);
    assert_eq!(store.duration(), Time::from_secs(4));
}

#[test]
fn moving_a_clip_extends_the_timeline() {
    let mut store = store();
    let id = store.add_clip("jump", TrackId::Track1, None).unwrap();
    store.move_clip(id, Time::from_secs(9));
    assert_eq!(store.duration(), Time::from_secs(10));

    store.move_clip(id, Time::from_secs(-3));
    assert_eq!(store.get(id).unwrap().start_time, Time::ZERO);
}

#[test]
fn removal_recomputes_duration_and_clears_selection() {
    let mut store = store();
    let dance = store.add_clip("dance", TrackId::Track1, None).unwrap();
    let walk = store.add_clip("walk", TrackId::Track1, None).unwrap();
    store.select(Some(walk));

    store.remove_clip(walk);
    assert_eq!(store.duration(), Time::from_secs(4));
    assert!(store.selected_id().is_none());

    store.remove_clip(dance);
    assert_eq!(store.duration(), Time::ZERO);
}

// ── Trimming ───────────────────────────────────────────────────

#[test]
fn trim_window_always_equals_duration() {
    let mut store = store();
    let id = store.add_clip("dance", TrackId::Track1, None).unwrap();

    let clip = store.get_mut(id).unwrap();
    assert!(clip.trim(TrimEdge::Start, Time::new(1, 2)));
    assert!(clip.trim(TrimEdge::End, Time::from_secs(3)));
    assert_eq!(clip.duration, clip.trim_end - clip.trim_start);
    assert_eq!(clip.duration, Time::new(5, 2));
}

#[test]
fn trim_end_shrinks_the_timeline() {
    // Scenario: dance 4.0 then walk 1.33; trimming dance to 3.0 pulls the
    // timeline in only where dance was the extent.
    let mut store = store();
    let dance = store.add_clip("dance", TrackId::Track1, None).unwrap();
    store.add_clip("walk", TrackId::Track2, None).unwrap();
    assert_eq!(store.duration(), Time::from_secs(4));

    assert!(store.resize_clip(dance, Time::from_secs(3)));
    assert_eq!(store.get(dance).unwrap().duration, Time::from_secs(3));
    assert_eq!(store.duration(), Time::from_secs(3));
}

#[test]
fn appending_after_a_trim_packs_against_the_trimmed_end() {
    // Scenario: dance trimmed from 4.0 to 3.0, then walk appended.
    let mut store = store();
    let dance = store.add_clip("dance", TrackId::Track1, None).unwrap();
    assert!(store.resize_clip(dance, Time::from_secs(3)));

    let walk = store.add_clip("walk", TrackId::Track1, None).unwrap();
    assert_eq!(store.get(walk).unwrap().start_time, Time::from_secs(3));
    assert_eq!(store.duration(), Time::new(433, 100));
}

#[test]
fn trim_edges_cannot_cross_the_gap() {
    let mut store = store();
    let id = store.add_clip("jump", TrackId::Track1, None).unwrap();
    let clip = store.get_mut(id).unwrap();

    // 1.0s clip: start may move up to 0.9 exclusive
    assert!(!clip.trim(TrimEdge::Start, Time::from_secs(1) - MIN_TRIM_GAP));
    assert!(!clip.trim(TrimEdge::End, MIN_TRIM_GAP));
    assert!(clip.trim(TrimEdge::Start, Time::new(1, 2)));
    assert_eq!(clip.duration, Time::new(1, 2));
}

#[test]
fn trim_clamps_to_source_bounds() {
    let mut store = store();
    let id = store.add_clip("dance", TrackId::Track1, None).unwrap();
    let clip = store.get_mut(id).unwrap();

    assert!(clip.trim(TrimEdge::End, Time::from_secs(99)));
    assert_eq!(clip.trim_end, Time::from_secs(4));
    assert!(clip.trim(TrimEdge::Start, Time::from_secs(-5)));
    assert_eq!(clip.trim_start, Time::ZERO);
}

#[test]
fn split_halves_cover_the_original_span() {
    let mut store = store();
    let left = store.add_clip("dance", TrackId::Track1, None).unwrap();
    let right = store.split_clip(left, Time::new(3, 2)).unwrap();

    let (l, r) = (store.get(left).unwrap(), store.get(right).unwrap());
    assert_eq!(l.start_time, Time::ZERO);
    assert_eq!(l.duration, Time::new(3, 2));
    assert_eq!(r.start_time, Time::new(3, 2));
    assert_eq!(r.duration, Time::new(5, 2));
    assert_eq!(l.end_time(), r.start_time);
    assert_eq!(store.duration(), Time::from_secs(4));

    // Source time is continuous across the cut
    assert_eq!(l.trim_end, r.trim_start);
}

#[test]
fn split_rejects_cut_points_outside_the_clip() {
    let mut store = store();
    let id = store.add_clip("dance", TrackId::Track1, None).unwrap();
    assert!(store.split_clip(id, Time::ZERO).is_none());
    assert!(store.split_clip(id, Time::from_secs(4)).is_none());
    assert_eq!(store.clip_count(), 1);
}

// ── Clipboard ──────────────────────────────────────────────────

#[test]
fn paste_reproduces_trim_with_fresh_identity() {
    let mut store = store();
    let mut clipboard = ClipboardEngine::new();

    let id = store.add_clip("dance", TrackId::Track1, None).unwrap();
    store
        .get_mut(id)
        .unwrap()
        .trim(TrimEdge::Start, Time::from_secs(1));
    store.recompute_duration();
    store.select(Some(id));

    clipboard.copy(store.get(id).unwrap());
    let pasted = clipboard.paste(&mut store, Time::ZERO).unwrap();

    let (orig, copy) = (store.get(id).unwrap(), store.get(pasted).unwrap());
    assert_ne!(orig.id, copy.id);
    assert_eq!(copy.trim_start, Time::from_secs(1));
    assert_eq!(copy.duration, Time::from_secs(3));
    // Selected source: the paste lands after it on the same track
    assert_eq!(copy.track, TrackId::Track1);
    assert_eq!(copy.start_time, orig.end_time());
    assert_eq!(store.selected_id(), Some(pasted));
}

#[test]
fn paste_without_selection_lands_at_playhead_on_default_track() {
    let mut store = store();
    let mut clipboard = ClipboardEngine::new();

    let id = store.add_clip("walk", TrackId::Track3, None).unwrap();
    clipboard.copy(store.get(id).unwrap());
    store.select(None);

    let pasted = clipboard.paste(&mut store, Time::from_secs(2)).unwrap();
    let copy = store.get(pasted).unwrap();
    assert_eq!(copy.track, TrackId::DEFAULT);
    assert_eq!(copy.start_time, Time::from_secs(2));
}

#[test]
fn paste_from_empty_clipboard_is_a_no_op() {
    let mut store = store();
    let mut clipboard = ClipboardEngine::new();
    assert!(clipboard.paste(&mut store, Time::ZERO).is_none());
    assert_eq!(store.clip_count(), 0);
}
