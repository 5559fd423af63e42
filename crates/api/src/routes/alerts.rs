use axum::routing::post;
use axum::Router;

use crate::handlers::alerts;
use crate::state::AppState;

/// Mount the two alert RPC operations.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/alerts/check-temperature", post(alerts::check_temperature))
        .route("/telemetry/process", post(alerts::process_telemetry))
}
