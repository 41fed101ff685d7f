//! PostgreSQL implementation of IntegrationSettingsRepository

use async_trait::async_trait;
use sqlx::PgPool;
use std::str::FromStr;

use dialtone::domain::entities::IntegrationSettings;
use dialtone::domain::errors::TelephonyError;
use dialtone::domain::value_objects::Medium;
use dialtone::ports::repositories::IntegrationSettingsRepository;

/// PostgreSQL implementation of IntegrationSettingsRepository
pub struct PgIntegrationSettingsRepository {
    pool: PgPool,
}

impl PgIntegrationSettingsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct SettingsRow {
    medium: String,
    enabled: bool,
    auth_id: Option<String>,
    auth_token: Option<String>,
    api_key: Option<String>,
    organization_id: Option<String>,
    webhook_verify_token: Option<String>,
    base_url: Option<String>,
    record_calls: bool,
    queue_id: Option<String>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl TryFrom<SettingsRow> for IntegrationSettings {
    type Error = TelephonyError;

    fn try_from(row: SettingsRow) -> Result<Self, Self::Error> {
        let medium = Medium::from_str(&row.medium).map_err(TelephonyError::Repository)?;
        Ok(Self {
            medium,
            enabled: row.enabled,
            auth_id: row.auth_id,
            auth_token: row.auth_token,
            api_key: row.api_key,
            organization_id: row.organization_id,
            webhook_verify_token: row.webhook_verify_token,
            base_url: row.base_url,
            record_calls: row.record_calls,
            queue_id: row.queue_id,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl IntegrationSettingsRepository for PgIntegrationSettingsRepository {
    async fn find(&self, medium: Medium) -> Result<Option<IntegrationSettings>, TelephonyError> {
        let row = sqlx::query_as::<_, SettingsRow>(
            "SELECT * FROM integration_settings WHERE medium = $1",
        )
        .bind(medium.slug())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| TelephonyError::Repository(e.to_string()))?;

        row.map(IntegrationSettings::try_from).transpose()
    }

    async fn save(
        &self,
        settings: &IntegrationSettings,
    ) -> Result<IntegrationSettings, TelephonyError> {
        let row = sqlx::query_as::<_, SettingsRow>(
            r#"
            INSERT INTO integration_settings (
                medium, enabled, auth_id, auth_token, api_key,
                organization_id, webhook_verify_token, base_url,
                record_calls, queue_id, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ON CONFLICT (medium) DO UPDATE SET
                enabled = EXCLUDED.enabled,
                auth_id = EXCLUDED.auth_id,
                auth_token = EXCLUDED.auth_token,
                api_key = EXCLUDED.api_key,
                organization_id = EXCLUDED.organization_id,
                webhook_verify_token = EXCLUDED.webhook_verify_token,
                base_url = EXCLUDED.base_url,
                record_calls = EXCLUDED.record_calls,
                queue_id = EXCLUDED.queue_id,
                updated_at = EXCLUDED.updated_at
            RETURNING *
            "#,
        )
        .bind(settings.medium.slug())
        .bind(settings.enabled)
        .bind(&settings.auth_id)
        .bind(&settings.auth_token)
        .bind(&settings.api_key)
        .bind(&settings.organization_id)
        .bind(&settings.webhook_verify_token)
        .bind(&settings.base_url)
        .bind(settings.record_calls)
        .bind(&settings.queue_id)
        .bind(settings.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| TelephonyError::Repository(e.to_string()))?;

        IntegrationSettings::try_from(row)
    }
}
