//! Simulated upload progress.
//!
//! The API offers no transfer progress, so the dialog shows a display-only
//! indicator: a fixed step added on a fixed tick, capped below 100 while
//! the request is outstanding. The ticker must always be torn down when
//! the request settles so no interval leaks across dialog reopenings.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use docex_core::config::upload::UploadConfig;

/// Handle to the running progress ticker.
///
/// Dropping the handle aborts the background task.
#[derive(Debug)]
pub struct ProgressTicker {
    handle: JoinHandle<()>,
}

impl ProgressTicker {
    /// Reset progress to zero and start ticking it toward the cap.
    ///
    /// The first increment lands one full tick after the start, matching
    /// an interval timer.
    pub fn start(progress: watch::Sender<u8>, config: &UploadConfig) -> Self {
        let _ = progress.send(0);

        let tx = progress.clone();
        let tick = Duration::from_millis(config.progress_tick_ms);
        let step = config.progress_step;
        let cap = config.progress_cap;

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(tick);
            interval.tick().await; // completes immediately
            loop {
                interval.tick().await;
                tx.send_modify(|p| *p = p.saturating_add(step).min(cap));
            }
        });

        Self { handle }
    }

    /// Stop the ticker. Called as soon as the upload settles, success or
    /// failure.
    pub fn stop(self) {
        self.handle.abort();
    }
}

impl Drop for ProgressTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
