//! Rigstage - headless session runner
//!
//! Opens a session over a stub animation library, restores the latest
//! save if one exists, and keeps autosave running until interrupted.
//! Rendering frontends embed `Session` directly; this binary exists for
//! smoke-testing a deployment.

use std::sync::Arc;

use anyhow::Result;
use parking_lot::Mutex;
use rigstage_core::Time;
use rigstage_playback::NullRenderer;
use rigstage_session::{
    init_tracing, AutosaveTask, FileSlotStore, PlaybackDriver, ProjectStorage, Session,
    AUTOSAVE_INTERVAL,
};
use rigstage_timeline::{AnimationInfo, AnimationLibrary};
use tracing::info;

fn stub_library() -> AnimationLibrary {
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
    ])
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    info!("rigstage starting");

    let storage = ProjectStorage::new(Box::new(FileSlotStore::default_location()?));
    let session = Arc::new(Mutex::new(Session::new(
        stub_library(),
        Box::new(NullRenderer),
        storage,
    )));

    if session.lock().load_latest()? {
        info!("restored latest save");
    }

    let mut autosave = AutosaveTask::new();
    {
        let session = session.clone();
        autosave.start(AUTOSAVE_INTERVAL, move || {
            if let Err(e) = session.lock().autosave() {
                tracing::warn!(error = %e, "autosave failed");
            }
        });
    }

    let mut driver = PlaybackDriver::new();
    {
        let session = session.clone();
        let rate = session.lock().scheduler().tick_rate().ticks_per_second;
        session.lock().play_pause();
        driver.start(rate, move || session.lock().tick_if_playing());
    }

    tokio::signal::ctrl_c().await?;
    session.lock().autosave()?;
    info!("rigstage stopped");
    Ok(())
}
