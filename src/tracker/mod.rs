//! In-flight operation tracking.
//!
//! # Responsibilities
//! - Count currently outstanding asynchronous operations
//! - Notify subscribed observers synchronously on every change
//! - Clamp the count at zero (a surplus `end()` never underflows)
//!
//! # Design Decisions
//! - One mutex over count + observer list; observers are invoked while the
//!   lock is held so delivery is strictly in registration order
//! - Observers must not call back into the tracker (documented, not checked)
//! - Unbalanced begin/end pairs are a caller defect: not detected, not
//!   corrected, optionally warned about via `tracing`

pub mod guard;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::config::TrackerConfig;

pub use guard::OperationGuard;

/// Handle returned by [`ActivityTracker::subscribe`].
///
/// Opaque; its only use is to be passed back to [`ActivityTracker::unsubscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Observer callback, invoked with the post-mutation count.
type Observer = Box<dyn Fn(usize) + Send + Sync>;

struct Registrations {
    count: usize,
    /// Insertion-ordered; duplicates of the same closure are independent entries.
    observers: Vec<(SubscriptionId, Observer)>,
}

/// Single source of truth for "is the process currently waiting on work".
///
/// Every tracked operation calls [`begin`](Self::begin) before starting and
/// [`end`](Self::end) exactly once when it settles, success or failure. Prefer
/// [`begin_scoped`](Self::begin_scoped) or [`track`](Self::track), which pair
/// the two through `Drop` so an error or cancelled future cannot leak a count.
pub struct ActivityTracker {
    inner: Mutex<Registrations>,
    next_id: AtomicU64,
    warn_on_unbalanced_end: bool,
    max_expected_in_flight: Option<usize>,
}

impl ActivityTracker {
    /// Create a tracker with default diagnostics settings.
    pub fn new() -> Self {
        Self::with_config(&TrackerConfig::default())
    }

    /// Create a tracker with explicit diagnostics settings.
    pub fn with_config(config: &TrackerConfig) -> Self {
        Self {
            inner: Mutex::new(Registrations {
                count: 0,
                observers: Vec::new(),
            }),
            next_id: AtomicU64::new(0),
            warn_on_unbalanced_end: config.warn_on_unbalanced_end,
            max_expected_in_flight: config.max_expected_in_flight,
        }
    }

    /// Record the start of a tracked operation and notify all observers.
    pub fn begin(&self) {
        let mut inner = self.inner.lock().expect("tracker mutex poisoned");
        inner.count += 1;
        if let Some(ceiling) = self.max_expected_in_flight {
            if inner.count > ceiling {
                tracing::warn!(
                    count = inner.count,
                    ceiling,
                    "In-flight count exceeds expected ceiling; possible begin/end leak"
                );
            }
        }
        tracing::debug!(count = inner.count, "Operation began");
        notify(&inner);
    }

    /// Record the end of a tracked operation and notify all observers.
    ///
    /// Calling `end()` with the count already at zero leaves it at zero but
    /// still notifies observers with 0.
    pub fn end(&self) {
        let mut inner = self.inner.lock().expect("tracker mutex poisoned");
        if inner.count == 0 {
            if self.warn_on_unbalanced_end {
                tracing::warn!("end() called with no operation in flight; begin/end pair is unbalanced");
            }
        } else {
            inner.count -= 1;
        }
        tracing::debug!(count = inner.count, "Operation ended");
        notify(&inner);
    }

    /// Current number of in-flight operations.
    pub fn count(&self) -> usize {
        self.inner.lock().expect("tracker mutex poisoned").count
    }

    /// Register an observer invoked on every future `begin()`/`end()`.
    ///
    /// No de-duplication is performed: subscribing the same closure twice
    /// yields two registrations and two notifications per change. The observer
    /// must not call back into this tracker.
    pub fn subscribe(&self, observer: impl Fn(usize) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let mut inner = self.inner.lock().expect("tracker mutex poisoned");
        inner.observers.push((id, Box::new(observer)));
        tracing::debug!(id = id.0, observers = inner.observers.len(), "Observer subscribed");
        id
    }

    /// Remove an observer. Unknown or already-removed ids are a silent no-op.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        let mut inner = self.inner.lock().expect("tracker mutex poisoned");
        inner.observers.retain(|(existing, _)| *existing != id);
    }

    /// Begin a tracked operation, ending it when the guard drops.
    pub fn begin_scoped(self: &Arc<Self>) -> OperationGuard {
        OperationGuard::new(self.clone())
    }

    /// Run a future as a tracked operation.
    ///
    /// The count is incremented before the future is first polled and
    /// decremented when it settles, errors, panics, or is cancelled.
    pub async fn track<F>(self: &Arc<Self>, operation: F) -> F::Output
    where
        F: std::future::Future,
    {
        let _guard = self.begin_scoped();
        operation.await
    }
}

impl Default for ActivityTracker {
    fn default() -> Self {
        Self::new()
    }
}

fn notify(inner: &Registrations) {
    for (_, observer) in &inner.observers {
        observer(inner.count);
    }
}
