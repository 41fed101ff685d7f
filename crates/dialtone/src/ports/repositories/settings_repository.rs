//! IntegrationSettings Repository Port

use async_trait::async_trait;

use crate::domain::entities::IntegrationSettings;
use crate::domain::errors::TelephonyError;
use crate::domain::value_objects::Medium;

/// Repository interface for per-provider integration settings
#[async_trait]
pub trait IntegrationSettingsRepository: Send + Sync {
    /// Load settings for a provider, None when never configured
    async fn find(&self, medium: Medium) -> Result<Option<IntegrationSettings>, TelephonyError>;

    /// Save settings for a provider (one row per medium)
    async fn save(
        &self,
        settings: &IntegrationSettings,
    ) -> Result<IntegrationSettings, TelephonyError>;
}
