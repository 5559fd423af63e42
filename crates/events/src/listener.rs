//! Background alert subscriber loop.
//!
//! [`AlertListener`] subscribes to the alert channel and, for every data
//! frame received, decodes an [`AlertEvent`] and hands it to an
//! [`AlertHandler`]. It runs as a supervised long-lived task: shutdown is
//! signalled through a [`CancellationToken`], and a closed channel is a
//! terminal condition (no automatic resubscribe).

use std::sync::Arc;

use fleetwatch_core::alert::AlertEvent;
use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;

use crate::bus::{Frame, ALERT_CHANNEL};

/// Receives every successfully decoded alert event.
pub trait AlertHandler: Send + Sync {
    fn handle(&self, event: &AlertEvent);
}

/// Default handler: logs each embedded alert record and does nothing else.
pub struct LogHandler;

impl AlertHandler for LogHandler {
    fn handle(&self, event: &AlertEvent) {
        for record in &event.alerts {
            tracing::info!(
                gpu_uuid = %event.gpu_uuid,
                rig_name = event.rig_name.as_deref().unwrap_or(""),
                alert_type = record.alert_type.as_str(),
                severity = record.severity.map(|s| s.as_str()).unwrap_or(""),
                value = record.triggered_value,
                threshold = record.threshold_value,
                source = ?event.source,
                "GPU alert received"
            );
        }
    }
}

/// Supervised subscriber task for the alert channel.
pub struct AlertListener;

impl AlertListener {
    /// Run the subscriber loop until cancellation or channel close.
    ///
    /// Per-message decode failures are logged and skipped — one malformed
    /// payload never stops the loop. Control frames are ignored. Lagging
    /// behind the channel buffer loses the skipped frames (logged, not
    /// recovered). A closed channel is terminal; whatever supervises the
    /// process decides whether to restart.
    pub async fn run(
        mut receiver: broadcast::Receiver<Frame>,
        handler: Arc<dyn AlertHandler>,
        cancel: CancellationToken,
    ) {
        tracing::info!(channel = ALERT_CHANNEL, "Alert listener subscribed");

        loop {
            tokio::select! {
                () = cancel.cancelled() => {
                    tracing::info!("Alert listener cancelled, shutting down");
                    break;
                }
                frame = receiver.recv() => match frame {
                    Ok(Frame::Data(payload)) => {
                        match serde_json::from_str::<AlertEvent>(&payload) {
                            Ok(event) => handler.handle(&event),
                            Err(e) => {
                                tracing::warn!(
                                    error = %e,
                                    "Discarding undecodable alert message"
                                );
                            }
                        }
                    }
                    Ok(Frame::Control(note)) => {
                        tracing::trace!(note = %note, "Ignoring control frame");
                    }
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        tracing::warn!(skipped = n, "Alert listener lagged, frames were lost");
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        tracing::error!("Alert channel closed, listener terminating");
                        break;
                    }
                },
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
