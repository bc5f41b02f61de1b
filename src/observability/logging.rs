//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the logging subsystem once per process
//! - Respect RUST_LOG, falling back to a caller-supplied directive

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// `default_directive` is used when RUST_LOG is unset or unparsable, e.g.
/// `"inflight_indicator=debug"`. Calling this twice panics (the global
/// subscriber can only be set once); embedding applications that install
/// their own subscriber should skip this and everything still logs through
/// theirs.
pub fn init(default_directive: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
