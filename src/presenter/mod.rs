//! Debounced overlay presentation.
//!
//! # States
//! - Idle: overlay hidden, no pending timer
//! - PendingShow: work in flight, timer armed, overlay not yet visible
//! - Visible: overlay shown
//!
//! # State Transitions
//! ```text
//! Idle → PendingShow: count leaves 0 (arm one-shot timer)
//! PendingShow → Visible: timer fires while count is still > 0
//! PendingShow → Idle: count returns to 0 first (cancel timer, never shown)
//! Visible → Idle: count returns to 0 (hide immediately, no trailing delay)
//! ```
//!
//! # Design Decisions
//! - Pure state machine: no timers or I/O of its own, the driver owns those
//! - No coalescing across a zero-crossing: count dropping to 0 and rising
//!   again arms a fresh timer
//! - A stale timer firing (already cancelled or already consumed) is a no-op

pub mod driver;

use std::time::Duration;

pub use driver::{OverlayDriver, OverlayHandle, OverlaySink};

/// Debounce delay applied before a loading overlay becomes visible.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Presentation phase of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayPhase {
    Idle,
    PendingShow,
    Visible,
}

/// Instruction for the surrounding driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Arm the one-shot debounce timer.
    ArmTimer(Duration),
    /// Disarm the pending timer.
    CancelTimer,
    /// Make the overlay visible.
    Show,
    /// Hide the overlay.
    Hide,
}

/// Translates in-flight count transitions into show/hide decisions,
/// suppressing flicker for bursts shorter than the debounce delay.
#[derive(Debug)]
pub struct OverlayPresenter {
    phase: OverlayPhase,
    debounce: Duration,
}

impl OverlayPresenter {
    /// Create a presenter with the default 500 ms debounce.
    pub fn new() -> Self {
        Self::with_debounce(DEFAULT_DEBOUNCE)
    }

    /// Create a presenter with an explicit debounce delay.
    pub fn with_debounce(debounce: Duration) -> Self {
        Self {
            phase: OverlayPhase::Idle,
            debounce,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    /// Feed the latest in-flight count. Returns what the driver must do.
    pub fn on_count_changed(&mut self, count: usize) -> Option<Directive> {
        let directive = match (self.phase, count) {
            (OverlayPhase::Idle, c) if c > 0 => {
                self.phase = OverlayPhase::PendingShow;
                Some(Directive::ArmTimer(self.debounce))
            }
            (OverlayPhase::PendingShow, 0) => {
                self.phase = OverlayPhase::Idle;
                Some(Directive::CancelTimer)
            }
            (OverlayPhase::Visible, 0) => {
                self.phase = OverlayPhase::Idle;
                Some(Directive::Hide)
            }
            // Count moving within the same side of zero changes nothing.
            _ => None,
        };
        if directive.is_some() {
            tracing::debug!(count, phase = ?self.phase, "Overlay phase changed");
        }
        directive
    }

    /// Signal that the armed debounce timer elapsed.
    pub fn on_timer_fired(&mut self) -> Option<Directive> {
        match self.phase {
            OverlayPhase::PendingShow => {
                self.phase = OverlayPhase::Visible;
                tracing::debug!("Debounce elapsed; showing overlay");
                Some(Directive::Show)
            }
            // Stale firing after cancellation or while already visible.
            _ => None,
        }
    }
}

impl Default for OverlayPresenter {
    fn default() -> Self {
        Self::new()
    }
}
