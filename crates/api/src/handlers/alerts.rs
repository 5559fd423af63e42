//! Handlers for the two alert RPC operations.
//!
//! Both operations evaluate a payload with the pure threshold engine and,
//! when violations exist, publish an alert event best-effort. A publish
//! failure is logged and swallowed — the caller always receives a
//! well-formed response for a well-formed request.

use axum::extract::State;
use axum::Json;
use fleetwatch_core::alert::{AlertEvent, AlertRecord, AlertSource, AlertType};
use fleetwatch_core::telemetry::TelemetryReading;
use fleetwatch_core::thresholds::{evaluate_telemetry, evaluate_temperature, CHECK_TEMP_TRIGGER};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for the temperature check operation.
#[derive(Debug, Deserialize)]
pub struct CheckTemperatureRequest {
    pub gpu_uuid: String,
    #[serde(default)]
    pub rig_name: Option<String>,
    pub gpu_temp: f64,
}

/// Response body for the temperature check operation.
///
/// `alert_type` and `severity` are empty strings when no alert triggered,
/// preserving the shape fleet tooling already consumes.
#[derive(Debug, Serialize)]
pub struct AlertResponse {
    pub alert_triggered: bool,
    pub alert_type: String,
    pub severity: String,
    pub message: String,
}

/// Response body for the telemetry processing operation.
#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    pub processed: bool,
    pub status: String,
    pub message: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /alerts/check-temperature
///
/// Evaluate a single GPU temperature. When triggered, a one-record alert
/// event tagged [`AlertSource::RpcCheck`] is published before responding.
pub async fn check_temperature(
    State(state): State<AppState>,
    Json(input): Json<CheckTemperatureRequest>,
) -> Json<AlertResponse> {
    let check = evaluate_temperature(input.gpu_temp);

    if let Some(severity) = check.severity {
        let record = AlertRecord {
            alert_type: AlertType::HighTemperature,
            triggered_value: input.gpu_temp,
            threshold_value: CHECK_TEMP_TRIGGER,
            severity: Some(severity),
        };
        if let Some(event) = AlertEvent::new(
            &input.gpu_uuid,
            input.rig_name.clone(),
            vec![record],
            AlertSource::RpcCheck,
        ) {
            publish_best_effort(&state, &event);
        }
    }

    Json(AlertResponse {
        alert_triggered: check.triggered,
        alert_type: if check.triggered {
            AlertType::HighTemperature.as_str().to_string()
        } else {
            String::new()
        },
        severity: check
            .severity
            .map(|s| s.as_str().to_string())
            .unwrap_or_default(),
        message: check.message,
    })
}

/// POST /telemetry/process
///
/// Evaluate a full telemetry reading. Violations are wrapped in one alert
/// event tagged [`AlertSource::RpcTelemetry`] and published best-effort;
/// the response reports the violation count either way.
pub async fn process_telemetry(
    State(state): State<AppState>,
    Json(reading): Json<TelemetryReading>,
) -> Json<ProcessResponse> {
    let alerts = evaluate_telemetry(&reading);
    let count = alerts.len();

    if let Some(event) = AlertEvent::new(
        &reading.gpu_uuid,
        reading.rig_name.clone(),
        alerts,
        AlertSource::RpcTelemetry,
    ) {
        publish_best_effort(&state, &event);
    }

    tracing::info!(
        gpu_uuid = %reading.gpu_uuid,
        alerts = count,
        "Processed telemetry reading"
    );

    Json(ProcessResponse {
        processed: true,
        status: "success".to_string(),
        message: format!("{count} alert(s) triggered"),
    })
}

/// Publish an alert event, logging and swallowing any failure.
fn publish_best_effort(state: &AppState, event: &AlertEvent) {
    if let Err(e) = state.alert_sink.publish(event) {
        tracing::warn!(
            error = %e,
            gpu_uuid = %event.gpu_uuid,
            "Failed to publish alert event"
        );
    }
}
