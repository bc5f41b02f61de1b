//! End-to-end overlay behavior over simulated time.
//!
//! Runs the real tracker → driver → sink pipeline on tokio's paused clock,
//! so every debounce boundary is exact and the tests take no wall time.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use inflight_indicator::config::OverlayConfig;
use inflight_indicator::{ActivityTracker, OverlayDriver, OverlaySink};

/// Sink that records every show/hide for later assertions.
#[derive(Clone, Default)]
struct RecordingSink {
    visible: Arc<Mutex<bool>>,
    events: Arc<Mutex<Vec<&'static str>>>,
}

impl RecordingSink {
    fn is_visible(&self) -> bool {
        *self.visible.lock().unwrap()
    }

    fn events(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().clone()
    }
}

impl OverlaySink for RecordingSink {
    fn show(&mut self) {
        *self.visible.lock().unwrap() = true;
        self.events.lock().unwrap().push("show");
    }

    fn hide(&mut self) {
        *self.visible.lock().unwrap() = false;
        self.events.lock().unwrap().push("hide");
    }
}

fn overlay_config() -> OverlayConfig {
    OverlayConfig { debounce_ms: 500 }
}

async fn sleep_ms(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

#[tokio::test(start_paused = true)]
async fn test_short_burst_never_shows_overlay() {
    let tracker = Arc::new(ActivityTracker::new());
    let sink = RecordingSink::default();
    let overlay = OverlayDriver::spawn(&tracker, &overlay_config(), sink.clone());

    tracker.begin();
    sleep_ms(300).await;
    assert!(!sink.is_visible());

    tracker.end();
    // Well past the debounce deadline of the original burst.
    sleep_ms(1_000).await;

    assert!(sink.events().is_empty());
    overlay.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_slow_operation_shows_at_deadline_and_hides_on_end() {
    let tracker = Arc::new(ActivityTracker::new());
    let sink = RecordingSink::default();
    let overlay = OverlayDriver::spawn(&tracker, &overlay_config(), sink.clone());

    tracker.begin();
    sleep_ms(499).await;
    assert!(!sink.is_visible());

    sleep_ms(2).await;
    assert!(sink.is_visible());

    tracker.end();
    sleep_ms(1).await;
    assert!(!sink.is_visible());
    assert_eq!(sink.events(), vec!["show", "hide"]);

    overlay.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_zero_crossing_restarts_debounce() {
    let tracker = Arc::new(ActivityTracker::new());
    let sink = RecordingSink::default();
    let overlay = OverlayDriver::spawn(&tracker, &overlay_config(), sink.clone());

    tracker.begin();
    sleep_ms(300).await;
    tracker.end();
    sleep_ms(10).await;

    // New burst: the 500 ms window starts over, it does not inherit the
    // 300 ms already spent before the zero-crossing.
    tracker.begin();
    sleep_ms(450).await;
    assert!(!sink.is_visible());

    sleep_ms(100).await;
    assert!(sink.is_visible());

    tracker.end();
    sleep_ms(1).await;
    assert!(!sink.is_visible());

    overlay.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_overlapping_operations_hide_only_after_last() {
    let tracker = Arc::new(ActivityTracker::new());
    let sink = RecordingSink::default();
    let overlay = OverlayDriver::spawn(&tracker, &overlay_config(), sink.clone());

    tracker.begin();
    sleep_ms(200).await;
    tracker.begin();
    sleep_ms(400).await;
    assert!(sink.is_visible());

    tracker.end();
    sleep_ms(50).await;
    // One operation still outstanding.
    assert!(sink.is_visible());

    tracker.end();
    sleep_ms(1).await;
    assert!(!sink.is_visible());

    overlay.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_unmatched_begin_leaves_overlay_stuck() {
    // A begin() whose end() never runs is the one usage defect the tracker
    // does not correct: the symptom is an overlay that never goes away.
    let tracker = Arc::new(ActivityTracker::new());
    let sink = RecordingSink::default();
    let overlay = OverlayDriver::spawn(&tracker, &overlay_config(), sink.clone());

    tracker.begin();
    tracker.begin();
    tracker.end();

    sleep_ms(600).await;
    assert!(sink.is_visible());

    // No matter how long we wait, the leaked count keeps it visible.
    sleep_ms(60_000).await;
    assert!(sink.is_visible());
    assert_eq!(sink.events(), vec!["show"]);

    overlay.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_tracked_futures_drive_the_overlay() {
    let tracker = Arc::new(ActivityTracker::new());
    let sink = RecordingSink::default();
    let overlay = OverlayDriver::spawn(&tracker, &overlay_config(), sink.clone());

    let slow = {
        let tracker = tracker.clone();
        tokio::spawn(async move { tracker.track(sleep_ms(800)).await })
    };
    let quick = {
        let tracker = tracker.clone();
        tokio::spawn(async move { tracker.track(sleep_ms(100)).await })
    };

    sleep_ms(600).await;
    assert!(sink.is_visible());

    quick.await.unwrap();
    slow.await.unwrap();
    sleep_ms(1).await;

    assert!(!sink.is_visible());
    assert_eq!(tracker.count(), 0);

    overlay.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_detaches_from_tracker() {
    let tracker = Arc::new(ActivityTracker::new());
    let sink = RecordingSink::default();
    let overlay = OverlayDriver::spawn(&tracker, &overlay_config(), sink.clone());

    overlay.shutdown().await;

    // Activity after shutdown reaches nobody.
    tracker.begin();
    sleep_ms(1_000).await;
    assert!(sink.events().is_empty());
    tracker.end();
}
