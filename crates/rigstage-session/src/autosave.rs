//! Periodic background save.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

/// Default autosave period.
pub const AUTOSAVE_INTERVAL: Duration = Duration::from_secs(30);

/// Owns the autosave loop. Restarting replaces the previous loop; the
/// task dies with this handle.
#[derive(Debug, Default)]
pub struct AutosaveTask {
    handle: Option<JoinHandle<()>>,
}

impl AutosaveTask {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns the save loop on the current tokio runtime. `save` runs once
    /// per interval and decides itself whether there is anything worth
    /// writing.
    pub fn start<F>(&mut self, interval: Duration, mut save: F)
    where
        F: FnMut() + Send + 'static,
    {
        self.stop();
        self.handle = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // The first tick fires immediately; skip it so a fresh session
            // does not save before anything happened.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                save();
            }
        }));
        debug!(interval_secs = interval.as_secs(), "autosave started");
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for AutosaveTask {
    fn drop(&mut self) {
        self.stop();
    }
}
