//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! tracker / presenter / client produce:
//!     → structured log events (tracing)
//!
//! Consumers:
//!     → Log aggregation (stdout, file, remote)
//! ```
//!
//! # Design Decisions
//! - Structured logging via the tracing crate
//! - Level configurable through RUST_LOG with a caller-supplied fallback
//! - State transitions log at debug, contract violations at warn

pub mod logging;
