//! Shared helpers for API integration tests.
//!
//! Mirrors the router construction in `main.rs` via
//! [`build_app_router`](fleetwatch_api::router::build_app_router) so tests
//! exercise the same middleware stack (request ID, timeout, tracing, panic
//! recovery, concurrency limit) that production uses, with an injectable
//! alert sink in place of the real publisher.

use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use fleetwatch_api::config::ServerConfig;
use fleetwatch_api::router::build_app_router;
use fleetwatch_api::state::AppState;
use fleetwatch_core::alert::AlertEvent;
use fleetwatch_events::{AlertBus, AlertSink, PublishError};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        max_in_flight: 10,
        alert_channel_capacity: 16,
    }
}

/// Sink that records every published event for assertions.
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<AlertEvent>>,
}

impl RecordingSink {
    /// Snapshot of everything published so far.
    pub fn published(&self) -> Vec<AlertEvent> {
        self.events.lock().expect("sink lock poisoned").clone()
    }
}

impl AlertSink for RecordingSink {
    fn publish(&self, event: &AlertEvent) -> Result<(), PublishError> {
        self.events
            .lock()
            .expect("sink lock poisoned")
            .push(event.clone());
        Ok(())
    }
}

/// Sink that always fails, simulating an unreachable broker.
pub struct FailingSink;

impl AlertSink for FailingSink {
    fn publish(&self, _event: &AlertEvent) -> Result<(), PublishError> {
        Err(PublishError::Transport("connection refused".to_string()))
    }
}

/// Build the full application router with the given alert sink.
pub fn build_test_app(sink: Arc<dyn AlertSink>) -> Router {
    let config = test_config();
    let state = AppState {
        config: Arc::new(config.clone()),
        alert_sink: sink,
        alert_bus: Arc::new(AlertBus::new(config.alert_channel_capacity)),
    };
    build_app_router(state, &config)
}

/// POST a JSON body and return the response status plus decoded JSON body.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds");

    let response = app.oneshot(request).await.expect("request succeeds");
    read_json(response).await
}

/// GET a route and return the response status plus decoded JSON body.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("request builds");

    let response = app.oneshot(request).await.expect("request succeeds");
    read_json(response).await
}

async fn read_json(response: Response<Body>) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();

    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };

    (status, json)
}
