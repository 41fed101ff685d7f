//! Telephony Provider Port
//!
//! Abstract interface for a telephony provider's REST API.
//!
//! Implementations of this trait live in separate crates
//! (e.g. dialtone-integration-plivo, dialtone-integration-websprix).

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::entities::CallEvent;
use crate::domain::errors::TelephonyError;
use crate::domain::value_objects::Medium;

/// Response to a successful call-placement request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedCall {
    /// Provider-assigned call id extracted from the response body
    pub call_id: String,
    /// The provider's raw response body
    pub raw: serde_json::Value,
}

/// Telephony provider interface
///
/// Each provider (Plivo, WebSprix) has its own implementation in a
/// separate crate, constructed from that provider's stored settings.
#[async_trait]
pub trait TelephonyProvider: Send + Sync {
    /// Which provider this is
    fn medium(&self) -> Medium;

    /// Verify the stored credentials against the provider's account
    /// endpoint. Called at settings-save time; a failure blocks the save.
    async fn verify_credentials(&self) -> Result<(), TelephonyError>;

    /// Place an outbound call. `status_callback` is the webhook URL the
    /// provider should deliver call events to; providers without
    /// callback support ignore it.
    async fn place_call(
        &self,
        from: &str,
        to: &str,
        status_callback: &str,
    ) -> Result<PlacedCall, TelephonyError>;

    /// Map a raw webhook form payload into a normalized call event.
    /// Unknown keys are ignored; missing keys become None.
    fn parse_webhook(&self, form: &HashMap<String, String>) -> CallEvent;
}
