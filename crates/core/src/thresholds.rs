//! Threshold evaluation engine for GPU telemetry.
//!
//! Pure logic — no transport, no clock beyond the caller's. Two evaluation
//! paths exist with deliberately distinct threshold sets:
//!
//! - the single-value temperature check (trigger above 85 °C, critical
//!   above 90 °C), and
//! - the full-reading telemetry evaluation (GPU temp above 80 °C, memory
//!   temp above 85 °C, power above 300 W).
//!
//! The two sets must not be unified: the check path is a coarse probe, the
//! telemetry path the stricter fleet-wide sweep.

use crate::alert::{AlertRecord, AlertType, Severity};
use crate::telemetry::TelemetryReading;

/// Temperature above which the single-value check triggers, in °C.
pub const CHECK_TEMP_TRIGGER: f64 = 85.0;

/// Temperature above which a triggered check is graded critical, in °C.
pub const CHECK_TEMP_CRITICAL: f64 = 90.0;

/// GPU core temperature threshold for the telemetry path, in °C.
pub const TELEMETRY_GPU_TEMP_LIMIT: f64 = 80.0;

/// Memory junction temperature threshold for the telemetry path, in °C.
pub const TELEMETRY_MEMORY_TEMP_LIMIT: f64 = 85.0;

/// Power draw threshold for the telemetry path, in watts.
pub const TELEMETRY_POWER_LIMIT: f64 = 300.0;

/// Outcome of the single-value temperature check.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureCheck {
    /// Whether the temperature exceeded the trigger threshold.
    pub triggered: bool,
    /// Severity grade, present only when triggered.
    pub severity: Option<Severity>,
    /// Human-readable rendering of the observed value. Always populated,
    /// whether or not the check triggered.
    pub message: String,
}

/// Evaluate a single GPU temperature against the check-path thresholds.
pub fn evaluate_temperature(gpu_temp: f64) -> TemperatureCheck {
    let severity = if gpu_temp > CHECK_TEMP_CRITICAL {
        Some(Severity::Critical)
    } else if gpu_temp > CHECK_TEMP_TRIGGER {
        Some(Severity::Warning)
    } else {
        None
    };

    TemperatureCheck {
        triggered: severity.is_some(),
        severity,
        message: format!("GPU temperature: {gpu_temp}°C"),
    }
}

/// Evaluate a full telemetry reading against the telemetry-path thresholds.
///
/// Each metric is checked independently, so a reading yields zero to three
/// records, always in the order GPU temp → memory temp → power. Pure and
/// idempotent: the same reading always produces the same list.
pub fn evaluate_telemetry(reading: &TelemetryReading) -> Vec<AlertRecord> {
    let mut alerts = Vec::new();

    check_limit(
        AlertType::HighGpuTemp,
        reading.gpu_temp,
        TELEMETRY_GPU_TEMP_LIMIT,
        &mut alerts,
    );
    check_limit(
        AlertType::HighMemoryTemp,
        reading.memory_temp,
        TELEMETRY_MEMORY_TEMP_LIMIT,
        &mut alerts,
    );
    check_limit(
        AlertType::HighPower,
        reading.power_consumption,
        TELEMETRY_POWER_LIMIT,
        &mut alerts,
    );

    alerts
}

/// Compare a single metric value against its limit and push a record if exceeded.
fn check_limit(alert_type: AlertType, value: f64, limit: f64, alerts: &mut Vec<AlertRecord>) {
    if value <= limit {
        return; // within normal range
    }
    alerts.push(AlertRecord {
        alert_type,
        triggered_value: value,
        threshold_value: limit,
        severity: None,
    });
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
