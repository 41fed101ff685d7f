//! IntegrationSettings - Per-provider configuration
//!
//! One row per medium. Which credential fields matter depends on the
//! provider: Plivo authenticates with auth_id/auth_token, WebSprix
//! additionally uses organization_id/api_key for its v2 API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Medium;

/// Stored configuration for one telephony integration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegrationSettings {
    pub medium: Medium,
    /// Gate for everything: webhooks no-op and outbound calls are refused
    /// while disabled
    pub enabled: bool,
    pub auth_id: Option<String>,
    pub auth_token: Option<String>,
    pub api_key: Option<String>,
    pub organization_id: Option<String>,
    /// Shared secret matched against the webhook `key` query parameter
    pub webhook_verify_token: Option<String>,
    /// Provider API base URL override
    pub base_url: Option<String>,
    pub record_calls: bool,
    /// Agent queue identifier (WebSprix)
    pub queue_id: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl IntegrationSettings {
    /// Disabled settings with no credentials, the state before first setup
    pub fn disabled(medium: Medium) -> Self {
        Self {
            medium,
            enabled: false,
            auth_id: None,
            auth_token: None,
            api_key: None,
            organization_id: None,
            webhook_verify_token: None,
            base_url: None,
            record_calls: false,
            queue_id: None,
            updated_at: Utc::now(),
        }
    }

    /// Validate a webhook caller's key against the stored verify token.
    /// Missing key, missing token, or mismatch all reject.
    pub fn verify_webhook_key(&self, supplied: Option<&str>) -> bool {
        match (&self.webhook_verify_token, supplied) {
            (Some(token), Some(key)) => !token.is_empty() && token == key,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_with_token(token: Option<&str>) -> IntegrationSettings {
        IntegrationSettings {
            webhook_verify_token: token.map(String::from),
            ..IntegrationSettings::disabled(Medium::Plivo)
        }
    }

    #[test]
    fn test_matching_key_is_accepted() {
        let settings = settings_with_token(Some("s3cret"));
        assert!(settings.verify_webhook_key(Some("s3cret")));
    }

    #[test]
    fn test_missing_or_wrong_key_is_rejected() {
        let settings = settings_with_token(Some("s3cret"));
        assert!(!settings.verify_webhook_key(Some("wrong")));
        assert!(!settings.verify_webhook_key(None));
    }

    #[test]
    fn test_unconfigured_token_rejects_everything() {
        assert!(!settings_with_token(None).verify_webhook_key(Some("s3cret")));
        assert!(!settings_with_token(Some("")).verify_webhook_key(Some("")));
    }
}
