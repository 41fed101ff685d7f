//! Webhook DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Query parameters on provider webhook callbacks
#[derive(Debug, Deserialize, ToSchema)]
pub struct WebhookQuery {
    /// Shared secret issued to the provider in the callback URL
    pub key: Option<String>,
}

/// Acknowledgement returned to the provider.
///
/// Providers retry on non-2xx, so processing failures still return
/// this with ok=true; the failure is captured in the request audit.
#[derive(Debug, Serialize, ToSchema)]
pub struct WebhookAck {
    pub ok: bool,
    pub outcome: String,
}
