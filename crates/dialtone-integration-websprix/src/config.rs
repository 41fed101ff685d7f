//! WebSprix configuration

use dialtone::domain::entities::IntegrationSettings;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://etw-pbx-cloud1.websprix.com";

/// Configuration for the WebSprix PBX integration
///
/// WebSprix carries two credential sets: auth_id/auth_token for the v1
/// account API, and organization_id/api_key for the v2 PBX API
/// (extensions, transfers, onboarding).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebSprixConfig {
    pub auth_id: String,
    pub auth_token: String,
    /// v2 API key, sent as the `x-api-key` header
    pub api_key: Option<String>,
    /// PBX organization identifier for v2 endpoints
    pub organization_id: Option<String>,
    /// PBX base URL (per-tenant deployments differ)
    pub base_url: String,
}

impl WebSprixConfig {
    /// Create a new configuration from account credentials
    pub fn new(auth_id: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            auth_id: auth_id.into(),
            auth_token: auth_token.into(),
            api_key: None,
            organization_id: None,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Set the v2 API credentials
    pub fn with_organization(
        mut self,
        organization_id: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        self.organization_id = Some(organization_id.into());
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the PBX base URL
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
        config.api_key = settings.api_key.clone();
        config.organization_id = settings.organization_id.clone();
        if let Some(base_url) = &settings.base_url {
            if !base_url.is_empty() {
                config = config.with_base_url(base_url.clone());
            }
        }
        config
    }

    /// Whether the v2 PBX credentials are configured
    pub fn has_organization(&self) -> bool {
        matches!((&self.organization_id, &self.api_key), (Some(org), Some(key)) if !org.is_empty() && !key.is_empty())
    }

    fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// v1 account endpoint used for credential verification
    pub fn account_url(&self) -> String {
        format!("{}/api/v1/Account/{}/", self.base(), self.auth_id)
    }

    /// v2 endpoint listing the organization's extensions; doubles as the
    /// api-key verification probe
    pub fn extensions_url(&self) -> Option<String> {
        let org = self.organization_id.as_deref()?;
        Some(format!("{}/api/v2/cust_ext/{}/cust", self.base(), org))
    }

    /// v2 endpoint returning IP phone settings for one extension
    pub fn ip_info_url(&self, extension: &str) -> Option<String> {
        let org = self.organization_id.as_deref()?;
        Some(format!(
            "{}/api/v2/onboard/get_ip_info/{}/{}/1",
            self.base(),
            org,
            extension
        ))
    }

    /// Call-placement endpoint
    pub fn call_url(&self) -> String {
        format!("{}/api/call", self.base())
    }
}
