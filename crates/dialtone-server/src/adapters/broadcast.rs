//! In-process event broadcast backed by tokio's broadcast channel.
//!
//! Webhook reconciliation publishes raw call events here and the SSE
//! route fans them out to connected dashboards. Publishing with no
//! subscribers is a successful no-op.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use dialtone::domain::errors::TelephonyError;
use dialtone::ports::services::EventBroadcast;

const CHANNEL_CAPACITY: usize = 256;

/// One published event as seen by subscribers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BroadcastEvent {
    pub channel: String,
    pub payload: serde_json::Value,
}

/// Broadcast hub shared between the webhook routes and the SSE route
#[derive(Clone)]
pub struct BroadcastHub {
    sender: broadcast::Sender<BroadcastEvent>,
}

impl BroadcastHub {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    /// Subscribe to all published events
    pub fn subscribe(&self) -> broadcast::Receiver<BroadcastEvent> {
        self.sender.subscribe()
    }
}

impl Default for BroadcastHub {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventBroadcast for BroadcastHub {
    async fn publish(
        &self,
        channel: &str,
        payload: &serde_json::Value,
    ) -> Result<(), TelephonyError> {
        let event = BroadcastEvent {
            channel: channel.to_string(),
            payload: payload.clone(),
        };
        // A send error only means there are no live subscribers.
        let _ = self.sender.send(event);
        Ok(())
    }
}
