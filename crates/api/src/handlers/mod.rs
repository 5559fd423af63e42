//! HTTP handlers for the alert service RPC operations.

pub mod alerts;
