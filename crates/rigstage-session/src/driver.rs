//! Playback tick loop.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

/// Drives scheduler ticks at a fixed wall-clock rate while playback runs.
/// The loop exits when a tick reports playback stopped; `play` spawns a
/// fresh loop each time.
#[derive(Debug, Default)]
pub struct PlaybackDriver {
    handle: Option<JoinHandle<()>>,
}

impl PlaybackDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns the tick loop. `tick` advances the scheduler and returns
    /// whether playback is still running.
    pub fn start<F>(&mut self, ticks_per_second: u32, mut tick: F)
    where
        F: FnMut() -> bool + Send + 'static,
    {
        self.stop();
        let period = Duration::from_secs(1) / ticks_per_second;
        self.handle = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                if !tick() {
                    break;
                }
            }
            debug!("playback loop exited");
        }));
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

impl Drop for PlaybackDriver {
    fn drop(&mut self) {
        self.stop();
    }
}
