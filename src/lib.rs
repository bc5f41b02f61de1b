//! In-flight activity tracking with a debounced loading indicator.
//!
//! # Architecture Overview
//!
//! ```text
//!   begin()/end()            count change             directive
//!  ┌──────────────┐  notify ┌────────────────┐  arm/  ┌─────────────┐
//!  │   tracker    │────────▶│   presenter    │ cancel │   driver    │
//!  │ (count + obs)│         │ (state machine)│◀──────▶│ (tokio task │
//!  └──────▲───────┘         └────────────────┘  timer │  + timer)   │
//!         │                                           └──────┬──────┘
//!  ┌──────┴───────┐                                   show/hide
//!  │    client    │                                   ┌──────▼──────┐
//!  │ (tracked     │                                   │ OverlaySink │
//!  │  reqwest)    │                                   │  (the UI)   │
//!  └──────────────┘                                   └─────────────┘
//! ```
//!
//! The tracker counts outstanding operations and notifies observers
//! synchronously on every change. The presenter turns those counts into a
//! flicker-free overlay: bursts shorter than the debounce delay never show
//! anything, slow operations surface the overlay when the delay elapses, and
//! it disappears the instant work completes.
//!
//! ```no_run
//! use std::sync::Arc;
//! use inflight_indicator::{ActivityTracker, IndicatorConfig, OverlayDriver, OverlaySink};
//!
//! struct Spinner;
//! impl OverlaySink for Spinner {
//!     fn show(&mut self) { /* render */ }
//!     fn hide(&mut self) { /* clear */ }
//! }
//!
//! # async fn demo() {
//! let config = IndicatorConfig::default();
//! let tracker = Arc::new(ActivityTracker::with_config(&config.tracker));
//! let overlay = OverlayDriver::spawn(&tracker, &config.overlay, Spinner);
//!
//! tracker.track(async { /* any awaited work */ }).await;
//!
//! overlay.shutdown().await;
//! # }
//! ```

// Core subsystems
pub mod presenter;
pub mod tracker;

// Collaborators
pub mod client;

// Cross-cutting concerns
pub mod config;
pub mod observability;

pub use client::{ClientError, TrackedClient};
pub use config::IndicatorConfig;
pub use presenter::{Directive, OverlayDriver, OverlayHandle, OverlayPhase, OverlayPresenter, OverlaySink};
pub use tracker::{ActivityTracker, OperationGuard, SubscriptionId};
