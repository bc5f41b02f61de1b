//! Runs the overlay state machine on the tokio runtime.
//!
//! # Responsibilities
//! - Forward every tracker notification into the state machine, uncoalesced,
//!   so zero-crossings are never lost
//! - Own the single pending debounce timer
//! - Drive a caller-supplied [`OverlaySink`] with show/hide calls

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Instant};

use crate::config::OverlayConfig;
use crate::presenter::{Directive, OverlayPresenter};
use crate::tracker::{ActivityTracker, SubscriptionId};

/// The UI seam: whatever actually shows or hides the loading affordance.
pub trait OverlaySink: Send + 'static {
    fn show(&mut self);
    fn hide(&mut self);
}

/// Spawns and wires an overlay presentation task.
pub struct OverlayDriver;

impl OverlayDriver {
    /// Subscribe to `tracker` and run the debounced presenter against `sink`.
    ///
    /// Attaching to an already-busy tracker behaves as if a 0→N transition
    /// had just been observed: the debounce timer is armed immediately.
    pub fn spawn(
        tracker: &Arc<ActivityTracker>,
        config: &OverlayConfig,
        sink: impl OverlaySink,
    ) -> OverlayHandle {
        let (tx, rx) = mpsc::unbounded_channel();

        let notifications = tx.clone();
        let subscription = tracker.subscribe(move |count| {
            // Fails only after shutdown, when nobody is listening.
            let _ = notifications.send(count);
        });
        let _ = tx.send(tracker.count());

        let presenter = OverlayPresenter::with_debounce(Duration::from_millis(config.debounce_ms));
        let task = tokio::spawn(run(rx, presenter, sink));

        OverlayHandle {
            tracker: tracker.clone(),
            subscription,
            task,
        }
    }
}

/// Handle to a running overlay task.
///
/// Dropping the handle detaches it; the task keeps running for the tracker's
/// lifetime. Call [`shutdown`](Self::shutdown) to stop it.
pub struct OverlayHandle {
    tracker: Arc<ActivityTracker>,
    subscription: SubscriptionId,
    task: JoinHandle<()>,
}

impl OverlayHandle {
    /// Unsubscribe from the tracker and wait for the task to drain and exit.
    pub async fn shutdown(self) {
        self.tracker.unsubscribe(self.subscription);
        let _ = self.task.await;
    }
}

async fn run(
    mut notifications: mpsc::UnboundedReceiver<usize>,
    mut presenter: OverlayPresenter,
    mut sink: impl OverlaySink,
) {
    let timer = sleep(Duration::ZERO);
    tokio::pin!(timer);
    let mut armed = false;

    loop {
        tokio::select! {
            changed = notifications.recv() => {
                let Some(count) = changed else { break };
                match presenter.on_count_changed(count) {
                    Some(Directive::ArmTimer(delay)) => {
                        timer.as_mut().reset(Instant::now() + delay);
                        armed = true;
                    }
                    Some(Directive::CancelTimer) => armed = false,
                    Some(Directive::Show) => sink.show(),
                    Some(Directive::Hide) => sink.hide(),
                    None => {}
                }
            }
            _ = timer.as_mut(), if armed => {
                armed = false;
                if let Some(Directive::Show) = presenter.on_timer_fired() {
                    sink.show();
                }
            }
        }
    }
    tracing::debug!("Overlay driver stopped");
}
