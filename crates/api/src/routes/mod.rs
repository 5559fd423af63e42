//! Route table for the alert service.

pub mod alerts;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// All routes mounted under `/api/v1`.
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(alerts::router())
}
