use crate::app::event::AppEvent;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Delay between entering Splash and the automatic move to Home.
pub const DEFAULT_SPLASH_DELAY: Duration = Duration::from_millis(1000);

/// One-shot timer that posts [`AppEvent::SplashElapsed`] after a delay.
///
/// Dropping the timer cancels it. Firing after Splash was left is harmless:
/// the controller ignores stale completions.
#[derive(Debug)]
pub struct SplashTimer {
    handle: Option<JoinHandle<()>>,
}

impl SplashTimer {
    pub fn schedule(delay: Duration, tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        debug!(delay_ms = delay.as_millis() as u64, "splash timer scheduled");
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            debug!("splash timer fired");
            let _ = tx.send(AppEvent::SplashElapsed);
        });
        Self {
            handle: Some(handle),
        }
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            if !handle.is_finished() {
                debug!("splash timer cancelled");
            }
            handle.abort();
        }
    }
}

impl Drop for SplashTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
