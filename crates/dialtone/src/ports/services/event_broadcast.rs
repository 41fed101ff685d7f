//! Event Broadcast Port
//!
//! Best-effort fan-out of raw call events to live subscribers
//! (agent dashboards, call popups). A failed publish is logged by the
//! caller and never aborts reconciliation.

use async_trait::async_trait;

use crate::domain::errors::TelephonyError;

/// Live event publication interface
#[async_trait]
pub trait EventBroadcast: Send + Sync {
    /// Publish a payload on a named channel (e.g. "plivo_call")
    async fn publish(
        &self,
        channel: &str,
        payload: &serde_json::Value,
    ) -> Result<(), TelephonyError>;
}
