//! Cross-crate tests for saving, loading, and session persistence.

use rigstage_core::Time;
use rigstage_session::await_system;
use rigstage_timeline::{ProjectDoc, SaveHistory, TrackId, TrimEdge, HISTORY_CAP};

use crate::helpers::{session, store};

#[test]
fn save_document_matches_wire_format() {
    let mut store = store();
    store.add_clip("dance", TrackId::Track1, None).unwrap();
    store.add_clip("walk", TrackId::Track1, None).unwrap();

    let doc = ProjectDoc::snapshot(&mut store, "combo", 1_700_000_000_000);
    let json = doc.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["version"], "1.0");
    assert_eq!(value["name"], "combo");
    assert_eq!(value["duration"], 5.33);
    assert_eq!(value["clips"][0]["animation"], "dance");
    assert_eq!(value["clips"][0]["track"], "track1");
    assert_eq!(value["clips"][1]["startTime"], 4.0);
    assert_eq!(value["clips"][1]["duration"], 1.33);
}

#[test]
fn round_trip_flattens_trim_into_duration() {
    let mut store = store();
    let id = store.add_clip("dance", TrackId::Track1, None).unwrap();
    store
        .get_mut(id)
        .unwrap()
        .trim(TrimEdge::End, Time::from_secs(3));
    store.recompute_duration();

    let doc = ProjectDoc::snapshot(&mut store, "trimmed", 0);
    let json = doc.to_json().unwrap();
    let mut fresh = crate::helpers::store();
    ProjectDoc::from_json(&json)
        .unwrap()
        .load_into(&mut fresh)
        .unwrap();

    let loaded = &fresh.clips()[0];
    assert_eq!(loaded.duration, Time::from_secs(3));
    assert!(!loaded.has_active_trim());
    // The untrimmed dance source was 4.0s; that provenance is gone.
    assert_eq!(loaded.original_duration, Time::from_secs(3));
}

#[test]
fn history_holds_the_last_ten_saves() {
    let mut store = store();
    store.add_clip("jump", TrackId::Track1, None).unwrap();

    let mut history = SaveHistory::new();
    for i in 0..(HISTORY_CAP as u64 + 5) {
        history.push(ProjectDoc::snapshot(&mut store, &format!("save {i}"), i));
    }
    assert_eq!(history.len(), HISTORY_CAP);
    assert_eq!(history.entries()[0].name, "save 5");
    assert_eq!(history.latest().unwrap().name, "save 14");
}

#[test]
fn newer_document_versions_are_refused() {
    let json = r#"{"version":"3.1","timestamp":0,"name":"future","clips":[],"duration":0.0}"#;
    assert!(ProjectDoc::from_json(json).is_err());
}

#[test]
fn session_save_load_cycle_preserves_arrangement() {
    let mut session = session();
    session
        .store_mut()
        .add_clip("dance", TrackId::Track1, None)
        .unwrap();
    session
        .store_mut()
        .add_clip("walk", TrackId::Track1, None)
        .unwrap();
    session.save_project("combo").unwrap();

    session.clear_timeline();
    assert_eq!(session.store().clip_count(), 0);

    assert!(session.load_latest().unwrap());
    assert_eq!(session.store().clip_count(), 2);
    assert_eq!(session.store().duration(), Time::new(533, 100));
    assert_eq!(session.scheduler().current_time(), Time::ZERO);
}

#[test]
fn autosave_round_trip_through_session() {
    let mut session = session();
    assert!(!session.autosave().unwrap(), "empty timeline must not save");

    session
        .store_mut()
        .add_clip("walk", TrackId::Track2, None)
        .unwrap();
    assert!(session.autosave().unwrap());

    session.clear_timeline();
    assert!(session.restore_autosave().unwrap());
    assert_eq!(session.store().clip_count(), 1);
    assert_eq!(session.store().clips()[0].anim.name(), "walk");
}

#[tokio::test(start_paused = true)]
async fn startup_gives_up_on_a_missing_system() {
    assert!(await_system(|| false).await.is_err());
}
