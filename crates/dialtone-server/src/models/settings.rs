//! Integration settings DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use dialtone::domain::entities::IntegrationSettings;
use dialtone::domain::value_objects::Medium;

const MASK: &str = "********";

/// Update a provider's integration settings
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateSettingsRequest {
    pub enabled: bool,
    pub auth_id: Option<String>,
    pub auth_token: Option<String>,
    pub api_key: Option<String>,
    pub organization_id: Option<String>,
    pub webhook_verify_token: Option<String>,
    pub base_url: Option<String>,
    #[serde(default)]
    pub record_calls: bool,
    pub queue_id: Option<String>,
}

impl UpdateSettingsRequest {
    pub fn into_settings(self, medium: Medium) -> IntegrationSettings {
        IntegrationSettings {
            medium,
            enabled: self.enabled,
            auth_id: self.auth_id,
            auth_token: self.auth_token,
            api_key: self.api_key,
            organization_id: self.organization_id,
            webhook_verify_token: self.webhook_verify_token,
            base_url: self.base_url,
            record_calls: self.record_calls,
            queue_id: self.queue_id,
            updated_at: Utc::now(),
        }
    }
}

/// Settings as returned to clients, secrets masked
#[derive(Debug, Serialize, ToSchema)]
pub struct SettingsResponse {
    pub medium: String,
    pub enabled: bool,
    pub auth_id: Option<String>,
    pub auth_token: Option<String>,
    pub api_key: Option<String>,
    pub organization_id: Option<String>,
    pub webhook_verify_token: Option<String>,
    pub base_url: Option<String>,
    pub record_calls: bool,
    pub queue_id: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl From<IntegrationSettings> for SettingsResponse {
    fn from(s: IntegrationSettings) -> Self {
        Self {
            medium: s.medium.to_string(),
            enabled: s.enabled,
            auth_id: s.auth_id,
            auth_token: s.auth_token.map(|_| MASK.to_string()),
            api_key: s.api_key.map(|_| MASK.to_string()),
            organization_id: s.organization_id,
            webhook_verify_token: s.webhook_verify_token,
            base_url: s.base_url,
            record_calls: s.record_calls,
            queue_id: s.queue_id,
            updated_at: s.updated_at,
        }
    }
}

/// Whether an integration is enabled, for client feature gating
#[derive(Debug, Serialize, ToSchema)]
pub struct IntegrationStatusResponse {
    pub medium: String,
    pub enabled: bool,
}
