//! RAII pairing of `begin()` with `end()`.

use std::sync::Arc;

use crate::tracker::ActivityTracker;

/// A guard representing one in-flight operation.
///
/// Created by [`ActivityTracker::begin_scoped`]; the matching `end()` runs
/// when the guard drops, so it executes on every exit path including panic
/// unwinding and the drop of a cancelled future. Hold it for the operation's
/// full lifetime.
pub struct OperationGuard {
    tracker: Arc<ActivityTracker>,
}

impl OperationGuard {
    pub(crate) fn new(tracker: Arc<ActivityTracker>) -> Self {
        tracker.begin();
        Self { tracker }
    }
}

impl Drop for OperationGuard {
    fn drop(&mut self) {
        self.tracker.end();
    }
}
