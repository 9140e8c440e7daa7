//! The editor session: one timeline, one playhead, one renderer.
//!
//! Commands dispatch by registry ID so keyboard handling, menus, and
//! tests all drive the same entry point.

use std::time::Duration;

use rigstage_core::{Result, RigstageError, Time};
use rigstage_playback::{AnimationRenderer, PlaybackScheduler, PlaybackState};
use rigstage_timeline::{
    autosave_snapshot, AnimationLibrary, ClipStore, ClipboardEngine, ProjectDoc, SaveHistory,
    SequenceDoc, SequenceLibrary, TimelineViewTransform,
};
use tracing::{info, warn};

use crate::commands::{CommandContext, CommandRegistry};
use crate::storage::ProjectStorage;

/// Animation shown when the playhead is outside every clip.
pub const IDLE_ANIMATION: &str = "idle";

/// How often a pending system is probed on startup.
pub const PROBE_INTERVAL: Duration = Duration::from_millis(100);
/// Probes before startup gives up.
pub const MAX_PROBES: u32 = 50;

/// Install the global tracing subscriber. `RIGSTAGE_LOG` overrides the
/// default filter.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_env("RIGSTAGE_LOG")
        .unwrap_or_else(|_| EnvFilter::new("rigstage=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Milliseconds since the unix epoch; save timestamps use this.
pub fn now_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Polls `probe` until it reports ready. Gives up after `MAX_PROBES`
/// attempts, roughly five seconds at the default interval.
pub async fn await_system<F>(mut probe: F) -> Result<()>
where
    F: FnMut() -> bool,
{
    for _ in 0..MAX_PROBES {
        if probe() {
            return Ok(());
        }
        tokio::time::sleep(PROBE_INTERVAL).await;
    }
    Err(RigstageError::SystemUnavailable(
        "animation system did not come up".to_string(),
    ))
}

/// Everything one open editor owns.
pub struct Session {
    store: ClipStore,
    scheduler: PlaybackScheduler,
    view: TimelineViewTransform,
    clipboard: ClipboardEngine,
    history: SaveHistory,
    sequences: SequenceLibrary,
    storage: ProjectStorage,
    renderer: Box<dyn AnimationRenderer + Send>,
    commands: CommandRegistry,
}

impl Session {
    /// Opens a session over an animation library and renderer. Save
    /// history and the sequence library come out of storage.
    pub fn new(
        library: AnimationLibrary,
        renderer: Box<dyn AnimationRenderer + Send>,
        storage: ProjectStorage,
    ) -> Self {
        let history = storage.load_history();
        let sequences = storage.load_sequences();
        info!(
            animations = library.len(),
            saved_projects = history.len(),
            "session opened"
        );
        Self {
            store: ClipStore::new(library),
            scheduler: PlaybackScheduler::new(IDLE_ANIMATION),
            view: TimelineViewTransform::new(),
            clipboard: ClipboardEngine::new(),
            history,
            sequences,
            storage,
            renderer,
            commands: CommandRegistry::new(),
        }
    }

    pub fn store(&self) -> &ClipStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ClipStore {
        &mut self.store
    }

    pub fn scheduler(&self) -> &PlaybackScheduler {
        &self.scheduler
    }

    pub fn view(&self) -> &TimelineViewTransform {
        &self.view
    }

    pub fn commands(&self) -> &CommandRegistry {
        &self.commands
    }

    pub fn history(&self) -> &SaveHistory {
        &self.history
    }

    pub fn sequences(&self) -> &SequenceLibrary {
        &self.sequences
    }

    /// Contexts commands are filtered by right now.
    pub fn active_contexts(&self) -> Vec<CommandContext> {
        let mut contexts = Vec::new();
        if self.store.selected_id().is_some() {
            contexts.push(CommandContext::ClipSelected);
        }
        if self.scheduler.is_playing() {
            contexts.push(CommandContext::Playing);
        }
        contexts
    }

    /// Runs a command by registry ID.
    pub fn dispatch(&mut self, id: &str) -> Result<()> {
        if self.commands.get(id).is_none() {
            return Err(RigstageError::Internal(format!("unknown command {id:?}")));
        }
        match id {
            "file.save" => {
                self.save_project("Untitled")?;
            }
            "edit.copy" => self.copy_selected(),
            "edit.paste" => {
                self.paste();
            }
            "edit.duplicate" => {
                self.duplicate_selected();
            }
            "edit.delete" => self.delete_selected(),
            "transport.play_pause" => self.play_pause(),
            "transport.stop" => self.stop(),
            "transport.prev_frame" => {
                let step = self.scheduler.frame_step();
                self.scheduler.seek_by(-step, &self.store);
            }
            "transport.next_frame" => {
                let step = self.scheduler.frame_step();
                self.scheduler.seek_by(step, &self.store);
            }
            "transport.goto_start" => self.scheduler.seek_to(Time::ZERO, &self.store),
            "transport.goto_end" => {
                let end = self.store.duration();
                self.scheduler.seek_to(end, &self.store);
            }
            "timeline.split" => {
                self.split_selected();
            }
            "timeline.clear" => self.clear_timeline(),
            "timeline.zoom_in" => {
                self.view.zoom_in();
            }
            "timeline.zoom_out" => {
                self.view.zoom_out();
            }
            other => {
                warn!(command = other, "registered command with no handler");
            }
        }
        Ok(())
    }

    // ── Transport ───────────────────────────────────────────────

    pub fn play_pause(&mut self) {
        match self.scheduler.state() {
            PlaybackState::Playing => self.scheduler.pause(self.renderer.as_mut()),
            PlaybackState::Paused => self.scheduler.resume(self.renderer.as_mut()),
            PlaybackState::Stopped => self.scheduler.play(&self.store),
        }
    }

    pub fn stop(&mut self) {
        self.scheduler.stop(self.renderer.as_mut());
    }

    /// One scheduler step; the playback loop calls this at the tick rate.
    pub fn tick_if_playing(&mut self) -> bool {
        self.scheduler.tick(&self.store, self.renderer.as_mut())
    }

    // ── Editing ─────────────────────────────────────────────────

    pub fn copy_selected(&mut self) {
        if let Some(clip) = self.store.selected() {
            self.clipboard.copy(clip);
        }
    }

    pub fn paste(&mut self) -> Option<uuid::Uuid> {
        let playhead = self.scheduler.current_time();
        self.clipboard.paste(&mut self.store, playhead)
    }

    pub fn duplicate_selected(&mut self) -> Option<uuid::Uuid> {
        let id = self.store.selected_id()?;
        let playhead = self.scheduler.current_time();
        self.clipboard.duplicate(&mut self.store, id, playhead)
    }

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.store.selected_id() {
            self.store.remove_clip(id);
        }
    }

    pub fn split_selected(&mut self) -> Option<uuid::Uuid> {
        let id = self.store.selected_id()?;
        let at = self.scheduler.current_time();
        let right = self.store.split_clip(id, at);
        if right.is_none() {
            warn!("split point outside the selected clip");
        }
        right
    }

    /// Settles the timeline after a drag edit: canonical order, fresh
    /// duration.
    pub fn commit_edit(&mut self) {
        self.store.sort_by_track_then_start();
        self.store.recompute_duration();
    }

    /// Empties the timeline and rewinds. The renderer is left alone; with
    /// no clips there is nothing playing to stop.
    pub fn clear_timeline(&mut self) {
        self.store.clear();
        self.scheduler.reset();
    }

    // ── Persistence ─────────────────────────────────────────────

    pub fn save_project(&mut self, name: &str) -> Result<()> {
        let doc = ProjectDoc::snapshot(&mut self.store, name, now_millis());
        self.history.push(doc);
        self.storage.store_history(&self.history)?;
        info!(name, "project saved");
        Ok(())
    }

    /// Loads the most recent save. No-op when the history is empty.
    pub fn load_latest(&mut self) -> Result<bool> {
        let Some(doc) = self.history.latest().cloned() else {
            return Ok(false);
        };
        self.load_project(&doc)?;
        Ok(true)
    }

    pub fn load_project(&mut self, doc: &ProjectDoc) -> Result<()> {
        doc.load_into(&mut self.store)?;
        self.scheduler.reset();
        Ok(())
    }

    /// Periodic save hook; skips an empty timeline.
    pub fn autosave(&mut self) -> Result<bool> {
        let Some(doc) = autosave_snapshot(&mut self.store, now_millis()) else {
            return Ok(false);
        };
        self.storage.store_autosave(&doc)?;
        Ok(true)
    }

    pub fn restore_autosave(&mut self) -> Result<bool> {
        let Some(doc) = self.storage.load_autosave() else {
            return Ok(false);
        };
        self.load_project(&doc)?;
        Ok(true)
    }

    pub fn save_sequence(&mut self, name: &str) -> Result<()> {
        let seq = SequenceDoc::from_store(&mut self.store, name, now_millis());
        self.sequences.add(seq);
        self.storage.store_sequences(&self.sequences)
    }

    /// Replaces the timeline with a stored sequence.
    pub fn load_sequence(&mut self, name: &str) -> Result<()> {
        let Some(seq) = self.sequences.get(name).cloned() else {
            return Err(RigstageError::Persistence(format!(
                "no sequence named {name:?}"
            )));
        };
        let doc = ProjectDoc {
            version: "1.0".to_string(),
            timestamp: seq.created_at,
            name: seq.name,
            clips: seq.clips,
            duration: seq.duration,
        };
        self.load_project(&doc)
    }
}
