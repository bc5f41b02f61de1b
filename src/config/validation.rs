//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, plausible ceilings)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Pure function: IndicatorConfig → Result<(), Vec<ValidationError>>

use crate::config::schema::IndicatorConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// `tracker.max_expected_in_flight` set to zero, which would warn on
    /// every operation.
    ZeroInFlightCeiling,
    /// `http.request_timeout_secs` is zero.
    ZeroRequestTimeout,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::ZeroInFlightCeiling => {
                write!(f, "tracker.max_expected_in_flight must be at least 1 when set")
            }
            ValidationError::ZeroRequestTimeout => {
                write!(f, "http.request_timeout_secs must be greater than 0")
            }
        }
    }
}

/// Check semantic constraints, collecting every violation.
pub fn validate_config(config: &IndicatorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.tracker.max_expected_in_flight == Some(0) {
        errors.push(ValidationError::ZeroInFlightCeiling);
    }
    if config.http.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
