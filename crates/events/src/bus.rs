//! In-process alert channel backed by a `tokio::sync::broadcast` channel.
//!
//! [`AlertBus`] is the single shared pub/sub resource of the service. It is
//! constructed once at startup and hands out *separate* publish and
//! subscribe handles, so the RPC workers and the background listener never
//! share a connection-like object (a publisher holds a cloned sender, the
//! listener owns its receiver).

use tokio::sync::broadcast;

/// Name of the broadcast channel carrying alert events.
pub const ALERT_CHANNEL: &str = "gpu_alerts";

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// A raw message on the alert channel.
///
/// The channel carries serialized payloads rather than typed events: the
/// publisher and subscriber are independent parties on a wire, and the
/// subscriber must survive payloads it cannot decode.
#[derive(Debug, Clone)]
pub enum Frame {
    /// A serialized [`AlertEvent`](fleetwatch_core::alert::AlertEvent)
    /// in JSON form.
    Data(String),
    /// Channel-management traffic (subscription notices, keepalives).
    /// Subscribers ignore these.
    Control(String),
}

/// Fan-out hub for alert events.
///
/// Wraps a [`broadcast::Sender`] so any number of subscribers independently
/// receive every frame published after they subscribe. Publishing with zero
/// subscribers silently drops the frame — delivery is fire-and-forget.
pub struct AlertBus {
    sender: broadcast::Sender<Frame>,
}

impl AlertBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full the oldest un-consumed frames are dropped and
    /// slow receivers observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// A cloned publish-capable handle to the channel.
    pub(crate) fn sender(&self) -> broadcast::Sender<Frame> {
        self.sender.clone()
    }

    /// Subscribe to all frames published on this bus after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<Frame> {
        self.sender.subscribe()
    }

    /// Number of currently attached subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for AlertBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
