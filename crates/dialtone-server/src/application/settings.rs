//! Integration Settings (Use Case)
//!
//! Loading and saving per-provider configuration. Saving enabled
//! settings verifies the credentials against the provider first; a
//! failed verification blocks the save.

use std::sync::Arc;

use dialtone::domain::entities::IntegrationSettings;
use dialtone::domain::errors::TelephonyError;
use dialtone::domain::value_objects::Medium;
use dialtone::ports::provider::TelephonyProvider;
use dialtone::ports::repositories::IntegrationSettingsRepository;

/// Application service for integration settings
pub struct SettingsService {
    settings: Arc<dyn IntegrationSettingsRepository>,
}

impl SettingsService {
    pub fn new(settings: Arc<dyn IntegrationSettingsRepository>) -> Self {
        Self { settings }
    }

    /// Current settings for a provider; a never-configured provider
    /// reads as disabled
    pub async fn current(&self, medium: Medium) -> Result<IntegrationSettings, TelephonyError> {
        Ok(self
            .settings
            .find(medium)
            .await?
            .unwrap_or_else(|| IntegrationSettings::disabled(medium)))
    }

    /// Whether a provider is enabled
    pub async fn is_enabled(&self, medium: Medium) -> Result<bool, TelephonyError> {
        Ok(self.current(medium).await?.enabled)
    }

    /// Save settings, verifying credentials first when enabled.
    ///
    /// `provider` must be constructed from the candidate settings, not
    /// the stored ones, so the save verifies what it is about to store.
    pub async fn update(
        &self,
        provider: &dyn TelephonyProvider,
        settings: IntegrationSettings,
    ) -> Result<IntegrationSettings, TelephonyError> {
        if settings.enabled {
            provider.verify_credentials().await?;
        }
        let saved = self.settings.save(&settings).await?;
        tracing::info!(medium = %saved.medium, enabled = saved.enabled, "Saved integration settings");
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::plivo_settings;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemorySettings {
        rows: Mutex<HashMap<Medium, IntegrationSettings>>,
    }

    #[async_trait]
    impl IntegrationSettingsRepository for InMemorySettings {
        async fn find(
            &self,
            medium: Medium,
        ) -> Result<Option<IntegrationSettings>, TelephonyError> {
            Ok(self.rows.lock().unwrap().get(&medium).cloned())
        }

        async fn save(
            &self,
            settings: &IntegrationSettings,
        ) -> Result<IntegrationSettings, TelephonyError> {
            self.rows
                .lock()
                .unwrap()
                .insert(settings.medium, settings.clone());
            Ok(settings.clone())
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl TelephonyProvider for FailingProvider {
        fn medium(&self) -> Medium {
            Medium::Plivo
        }

        async fn verify_credentials(&self) -> Result<(), TelephonyError> {
            Err(TelephonyError::invalid_credentials("Unauthorized"))
        }

        async fn place_call(
            &self,
            _from: &str,
            _to: &str,
            _status_callback: &str,
        ) -> Result<dialtone::PlacedCall, TelephonyError> {
            unreachable!("not used in settings tests")
        }

        fn parse_webhook(
            &self,
            _form: &HashMap<String, String>,
        ) -> dialtone::domain::entities::CallEvent {
            unreachable!("not used in settings tests")
        }
    }

    #[tokio::test]
    async fn test_unconfigured_provider_reads_as_disabled() {
        let service = SettingsService::new(Arc::new(InMemorySettings::default()));
        let settings = service.current(Medium::WebSprix).await.unwrap();
        assert!(!settings.enabled);
        assert!(!service.is_enabled(Medium::WebSprix).await.unwrap());
    }

    #[tokio::test]
    async fn test_failed_verification_blocks_save() {
        let repo = Arc::new(InMemorySettings::default());
        let service = SettingsService::new(repo.clone());

        let result = service
            .update(&FailingProvider, plivo_settings(true, "s3cret"))
            .await;

        assert!(matches!(
            result,
            Err(TelephonyError::InvalidCredentials { .. })
        ));
        assert!(repo.rows.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_disabled_settings_save_without_verification() {
        let repo = Arc::new(InMemorySettings::default());
        let service = SettingsService::new(repo.clone());

        // FailingProvider would reject; disabled settings never ask it
        let saved = service
            .update(&FailingProvider, plivo_settings(false, "s3cret"))
            .await
            .unwrap();
        assert!(!saved.enabled);
        assert!(repo.rows.lock().unwrap().contains_key(&Medium::Plivo));
    }
}
