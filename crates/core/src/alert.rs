//! Alert types for threshold violation events.

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Kind of threshold violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertType {
    /// Single-value temperature check exceeded its threshold.
    HighTemperature,
    /// GPU core temperature exceeded the telemetry threshold.
    HighGpuTemp,
    /// Memory junction temperature exceeded the telemetry threshold.
    HighMemoryTemp,
    /// Power draw exceeded the telemetry threshold.
    HighPower,
}

impl AlertType {
    /// Wire name of the alert type, e.g. `"HIGH_GPU_TEMP"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertType::HighTemperature => "HIGH_TEMPERATURE",
            AlertType::HighGpuTemp => "HIGH_GPU_TEMP",
            AlertType::HighMemoryTemp => "HIGH_MEMORY_TEMP",
            AlertType::HighPower => "HIGH_POWER",
        }
    }
}

/// Severity level for a temperature-check violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    /// Value exceeded the trigger threshold but not the critical threshold.
    Warning,
    /// Value exceeded the critical threshold.
    Critical,
}

impl Severity {
    /// Wire name of the severity, e.g. `"CRITICAL"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
        }
    }
}

/// A single threshold violation produced by evaluating one reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRecord {
    /// Which threshold was violated.
    pub alert_type: AlertType,
    /// The observed value that triggered the alert.
    pub triggered_value: f64,
    /// The threshold value that was exceeded.
    pub threshold_value: f64,
    /// Severity of the violation. Only the single-temperature check path
    /// grades its alert; telemetry-path records carry no severity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
}

/// Which RPC operation produced an alert event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSource {
    /// The single-temperature `CheckTemperature` operation.
    RpcCheck,
    /// The full-reading `ProcessTelemetry` operation.
    RpcTelemetry,
}

/// The unit published on the alert broadcast channel.
///
/// Describes one or more threshold violations for one GPU at one point in
/// time. Immutable once constructed; delivery is fire-and-forget with no
/// acknowledgment or retention.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertEvent {
    /// The GPU the violations belong to.
    pub gpu_uuid: String,
    /// Rig the GPU is mounted in, when the reading carried one.
    #[serde(default)]
    pub rig_name: Option<String>,
    /// The violations, in evaluation order. Never empty.
    pub alerts: Vec<AlertRecord>,
    /// When the event was constructed (UTC).
    pub triggered_at: Timestamp,
    /// Which operation produced the event.
    pub source: AlertSource,
}

impl AlertEvent {
    /// Build an event for a set of triggered alerts.
    ///
    /// Returns `None` when `alerts` is empty — an event is only ever
    /// constructed when at least one violation exists, so empty-alert
    /// readings produce no channel traffic.
    pub fn new(
        gpu_uuid: impl Into<String>,
        rig_name: Option<String>,
        alerts: Vec<AlertRecord>,
        source: AlertSource,
    ) -> Option<Self> {
        if alerts.is_empty() {
            return None;
        }
        Some(Self {
            gpu_uuid: gpu_uuid.into(),
            rig_name,
            alerts,
            triggered_at: chrono::Utc::now(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(alert_type: AlertType, value: f64, threshold: f64) -> AlertRecord {
        AlertRecord {
            alert_type,
            triggered_value: value,
            threshold_value: threshold,
            severity: None,
        }
    }

    #[test]
    fn event_requires_at_least_one_alert() {
        assert!(AlertEvent::new("gpu-1", None, Vec::new(), AlertSource::RpcTelemetry).is_none());

        let event = AlertEvent::new(
            "gpu-1",
            Some("rig-A".to_string()),
            vec![record(AlertType::HighGpuTemp, 81.0, 80.0)],
            AlertSource::RpcTelemetry,
        )
        .expect("non-empty alerts should build an event");

        assert_eq!(event.gpu_uuid, "gpu-1");
        assert_eq!(event.rig_name.as_deref(), Some("rig-A"));
        assert_eq!(event.alerts.len(), 1);
    }

    #[test]
    fn wire_names_are_screaming_snake_case() {
        let json = serde_json::to_value(record(AlertType::HighMemoryTemp, 90.0, 85.0))
            .expect("record serializes");
        assert_eq!(json["alert_type"], "HIGH_MEMORY_TEMP");
        // Absent severity is omitted from the wire entirely.
        assert!(json.get("severity").is_none());
    }

    #[test]
    fn check_path_record_carries_severity() {
        let mut rec = record(AlertType::HighTemperature, 95.0, 85.0);
        rec.severity = Some(Severity::Critical);
        let json = serde_json::to_value(rec).expect("record serializes");
        assert_eq!(json["severity"], "CRITICAL");
    }

    #[test]
    fn source_uses_snake_case_wire_values() {
        let event = AlertEvent::new(
            "gpu-1",
            None,
            vec![record(AlertType::HighPower, 310.0, 300.0)],
            AlertSource::RpcCheck,
        )
        .expect("event builds");
        let json = serde_json::to_value(event).expect("event serializes");
        assert_eq!(json["source"], "rpc_check");
        assert_eq!(json["rig_name"], serde_json::Value::Null);
    }
}
