//! Fleetwatch domain logic.
//!
//! Pure types and threshold evaluation for GPU-fleet alerting — no I/O,
//! no transport. Everything here is deterministic and unit-testable in
//! isolation:
//!
//! - [`telemetry`] — the per-GPU telemetry reading submitted by callers.
//! - [`alert`] — alert records, severities, and the published alert event.
//! - [`thresholds`] — the threshold evaluation engine.

pub mod alert;
pub mod telemetry;
pub mod thresholds;
pub mod types;
