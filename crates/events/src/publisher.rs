//! Alert publishing seam.
//!
//! The RPC layer publishes through [`AlertSink`] rather than holding the bus
//! directly, so the transport can be swapped (degraded to a no-op when the
//! broker is unreachable, replaced by a recording sink in tests) without
//! touching handler code.

use fleetwatch_core::alert::AlertEvent;
use tokio::sync::broadcast;

use crate::bus::{AlertBus, Frame, ALERT_CHANNEL};

/// Failure to publish an alert event.
///
/// Publishing is best-effort everywhere: callers log the error and return
/// success to their own callers. A failed publish is lost — no buffering,
/// no retry.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    /// The event could not be serialized to its wire form.
    #[error("failed to serialize alert event: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The transport refused the frame.
    #[error("alert transport unavailable: {0}")]
    Transport(String),
}

/// Publish-capable handle to the alert channel.
pub trait AlertSink: Send + Sync {
    /// Serialize `event` and broadcast it on the alert channel.
    fn publish(&self, event: &AlertEvent) -> Result<(), PublishError>;
}

/// [`AlertSink`] over the in-process [`AlertBus`].
#[derive(Clone)]
pub struct BusPublisher {
    sender: broadcast::Sender<Frame>,
}

impl BusPublisher {
    /// Create a publisher holding its own sender handle to `bus`.
    pub fn new(bus: &AlertBus) -> Self {
        Self {
            sender: bus.sender(),
        }
    }
}

impl AlertSink for BusPublisher {
    fn publish(&self, event: &AlertEvent) -> Result<(), PublishError> {
        let payload = serde_json::to_string(event)?;

        // A send error only means there are zero subscribers right now;
        // fire-and-forget semantics make that a non-event.
        match self.sender.send(Frame::Data(payload)) {
            Ok(receivers) => {
                tracing::debug!(
                    channel = ALERT_CHANNEL,
                    gpu_uuid = %event.gpu_uuid,
                    receivers,
                    "Alert event published"
                );
            }
            Err(_) => {
                tracing::debug!(
                    channel = ALERT_CHANNEL,
                    gpu_uuid = %event.gpu_uuid,
                    "Alert event dropped, no subscribers"
                );
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use fleetwatch_core::alert::{AlertRecord, AlertSource, AlertType};

    fn sample_event() -> AlertEvent {
        AlertEvent::new(
            "gpu-7",
            Some("rig-B".to_string()),
            vec![AlertRecord {
                alert_type: AlertType::HighPower,
                triggered_value: 312.0,
                threshold_value: 300.0,
                severity: None,
            }],
            AlertSource::RpcTelemetry,
        )
        .expect("one alert record")
    }

    #[tokio::test]
    async fn published_event_round_trips_through_the_wire() {
        let bus = AlertBus::default();
        let mut rx = bus.subscribe();
        let publisher = BusPublisher::new(&bus);

        publisher.publish(&sample_event()).expect("publish succeeds");

        let Frame::Data(payload) = rx.recv().await.expect("frame arrives") else {
            panic!("expected a data frame");
        };
        let decoded: AlertEvent = serde_json::from_str(&payload).expect("payload decodes");
        assert_eq!(decoded.gpu_uuid, "gpu-7");
        assert_eq!(decoded.source, AlertSource::RpcTelemetry);
        assert_eq!(decoded.alerts[0].alert_type, AlertType::HighPower);
    }

    #[test]
    fn publish_with_no_subscribers_is_ok() {
        let bus = AlertBus::default();
        let publisher = BusPublisher::new(&bus);
        assert!(publisher.publish(&sample_event()).is_ok());
    }
}
