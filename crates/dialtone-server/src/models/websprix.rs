//! WebSprix PBX extras DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Softphone registration details for an agent's WebSprix extension
#[derive(Debug, Serialize, ToSchema)]
pub struct UserSettingsResponse {
    /// Agent's provider-assigned extension
    pub extension: Option<String>,
    /// Raw registration/IP info from the PBX, when the extension is known
    pub ip_info: Option<serde_json::Value>,
}

/// Query for WebSprix per-user settings
#[derive(Debug, Deserialize, ToSchema)]
pub struct UserSettingsQuery {
    pub agent: String,
}

/// Extensions available as transfer targets
#[derive(Debug, Serialize, ToSchema)]
pub struct TransferTargetsResponse {
    pub targets: Option<serde_json::Value>,
}
