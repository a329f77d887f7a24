use std::future::Future;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::sleep;

use crate::errors::ApiError;
use crate::sync::view::PollView;

/// Handle to a running poll loop. `stop()` tears the schedule down; dropping
/// the handle has the same effect, so a forgotten handle cannot leak ticks.
pub struct PollerHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl PollerHandle {
    pub fn stop(&self) {
        let _ = self.shutdown.send(true);
    }

    /// Waits for the loop to wind down after `stop()`.
    pub async fn join(self) {
        self.stop();
        let _ = self.task.await;
    }
}

/// Spawns the refresh loop for one resource view.
///
/// Fetches immediately on activation, then every `period`. The loop awaits
/// each fetch before sleeping again, so at most one request is in flight per
/// resource; a tick that would overlap an outstanding request is effectively
/// skipped. A completion that races shutdown is discarded rather than
/// applied, so a stopped view never mutates again.
pub fn spawn_poller<T, F, Fut>(
    name: &'static str,
    period: Duration,
    view: PollView<T>,
    fetch: F,
) -> PollerHandle
where
    T: Clone + Default + Send + 'static,
    F: Fn() -> Fut + Send + 'static,
    Fut: Future<Output = Result<T, ApiError>> + Send + 'static,
{
    let (shutdown, mut stopped) = watch::channel(false);

    let task = tokio::spawn(async move {
        tracing::debug!(poller = name, period_secs = period.as_secs(), "poller started");

        loop {
            // The fetch always runs to completion; a shutdown that arrives
            // mid-flight only causes the result to be discarded below.
            let result = fetch().await;

            if *stopped.borrow() || stopped.has_changed().is_err() {
                break;
            }

            match result {
                Ok(data) => view.apply_ok(data),
                Err(e) => {
                    tracing::warn!(poller = name, error = %e, "refresh failed, keeping stale data");
                    view.apply_err(&e);
                }
            }

            tokio::select! {
                _ = sleep(period) => {}
                _ = stopped.changed() => break,
            }
        }

        tracing::debug!(poller = name, "poller stopped");
    });

    PollerHandle { shutdown, task }
}
