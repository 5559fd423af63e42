use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether anything is currently subscribed to the alert channel.
    pub listener_attached: bool,
}

/// GET /health -- returns service and alert-channel health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let listener_attached = state.alert_bus.subscriber_count() > 0;

    let status = if listener_attached { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        listener_attached,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
