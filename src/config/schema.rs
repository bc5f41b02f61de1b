//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files, and
//! every field has a default so an empty config is valid.

use serde::{Deserialize, Serialize};

/// Root configuration for the in-flight indicator.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct IndicatorConfig {
    /// Overlay presentation settings.
    pub overlay: OverlayConfig,

    /// Tracker diagnostics settings.
    pub tracker: TrackerConfig,

    /// Tracked HTTP client settings.
    pub http: HttpConfig,
}

/// Overlay presentation configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Delay before a burst of activity becomes a visible overlay, in
    /// milliseconds. Bursts shorter than this never show anything.
    pub debounce_ms: u64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self { debounce_ms: 500 }
    }
}

/// Tracker diagnostics configuration.
///
/// Both settings affect logging only; the tracker's clamp-and-notify contract
/// is the same regardless.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Warn when `end()` is called with no operation in flight.
    pub warn_on_unbalanced_end: bool,

    /// Warn when the in-flight count exceeds this ceiling (a likely leak).
    /// Disabled when unset.
    pub max_expected_in_flight: Option<usize>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            warn_on_unbalanced_end: true,
            max_expected_in_flight: None,
        }
    }
}

/// Tracked HTTP client configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 30,
        }
    }
}
