use std::sync::Arc;

use fleetwatch_events::{AlertBus, AlertSink};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). The publish-capable
/// alert handle is injected here at startup — handlers never construct their
/// own transport.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Publish-capable handle to the alert channel.
    pub alert_sink: Arc<dyn AlertSink>,
    /// The alert bus itself, held for health reporting.
    pub alert_bus: Arc<AlertBus>,
}
