//! Plivo configuration

use dialtone::domain::entities::IntegrationSettings;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://api.plivo.com";

/// Configuration for the Plivo integration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlivoConfig {
    /// Plivo account auth ID
    pub auth_id: String,
    /// Plivo account auth token
    pub auth_token: String,
    /// API base URL (override for testing)
    pub base_url: String,
}

impl PlivoConfig {
    /// Create a new configuration from account credentials
    pub fn new(auth_id: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            auth_id: auth_id.into(),
            auth_token: auth_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the API base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build a configuration from stored integration settings
    pub fn from_settings(settings: &IntegrationSettings) -> Self {
        let mut config = Self::new(
            settings.auth_id.clone().unwrap_or_default(),
            settings.auth_token.clone().unwrap_or_default(),
        );
        if let Some(base_url) = &settings.base_url {
            if !base_url.is_empty() {
                config = config.with_base_url(base_url.clone());
            }
        }
        config
    }

    /// Account endpoint, with an optional action path appended
    /// (e.g. `Call/` for call placement)
    pub fn account_endpoint(&self, action: Option<&str>) -> String {
        let mut url = format!(
            "{}/v1/Account/{}/",
            self.base_url.trim_end_matches('/'),
            self.auth_id
        );
        if let Some(action) = action {
            url.push_str(action);
        }
        url
    }
}
