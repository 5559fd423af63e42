//! Fleetwatch alert fan-out infrastructure.
//!
//! This crate provides the pub/sub half of the alert service:
//!
//! - [`AlertBus`] — in-process broadcast channel carrying serialized alert
//!   frames, with distinct publish and subscribe handles.
//! - [`AlertSink`] / [`BusPublisher`] — the fire-and-forget publish seam
//!   injected into the RPC layer.
//! - [`AlertListener`] — supervised background task that decodes and
//!   dispatches every event published on the channel.

pub mod bus;
pub mod listener;
pub mod publisher;

pub use bus::{AlertBus, Frame, ALERT_CHANNEL};
pub use listener::{AlertHandler, AlertListener, LogHandler};
pub use publisher::{AlertSink, BusPublisher, PublishError};
