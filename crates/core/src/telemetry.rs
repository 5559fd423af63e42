//! Telemetry reading submitted by fleet callers.

use serde::{Deserialize, Serialize};

/// A single GPU telemetry snapshot.
///
/// Constructed per RPC call and never persisted. `rig_name` is genuinely
/// optional — unracked GPUs report without one, and its absence must never
/// fail a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryReading {
    /// Fleet-wide GPU identifier, e.g. `"gpu-4217"`.
    pub gpu_uuid: String,

    /// Mining-rig / chassis name the GPU is mounted in, when known.
    #[serde(default)]
    pub rig_name: Option<String>,

    /// GPU core temperature in degrees Celsius.
    pub gpu_temp: f64,

    /// Memory junction temperature in degrees Celsius.
    pub memory_temp: f64,

    /// Board power draw in watts.
    pub power_consumption: f64,

    /// Hotspot temperature, when the card reports one. Not evaluated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotspot_temp: Option<f64>,

    /// Fan speed percentage, when the card reports one. Not evaluated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fan_speed_percent: Option<f64>,
}
