//! PostgreSQL implementation of AgentDirectory

use async_trait::async_trait;
use sqlx::PgPool;

use dialtone::domain::errors::TelephonyError;
use dialtone::domain::value_objects::Medium;
use dialtone::ports::services::AgentDirectory;

/// PostgreSQL implementation of AgentDirectory
pub struct PgAgentDirectory {
    pool: PgPool,
}

impl PgAgentDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct AgentRow {
    mobile_number: Option<String>,
    plivo_number: Option<String>,
    websprix_number: Option<String>,
}

impl PgAgentDirectory {
    async fn fetch(&self, user: &str) -> Result<Option<AgentRow>, TelephonyError> {
        sqlx::query_as::<_, AgentRow>(
            "SELECT mobile_number, plivo_number, websprix_number FROM telephony_agents WHERE user_email = $1",
        )
        .bind(user)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| TelephonyError::Repository(e.to_string()))
    }
}

#[async_trait]
impl AgentDirectory for PgAgentDirectory {
    async fn mobile_number(&self, user: &str) -> Result<Option<String>, TelephonyError> {
        Ok(self.fetch(user).await?.and_then(|row| row.mobile_number))
    }

    async fn provider_number(
        &self,
        user: &str,
        medium: Medium,
    ) -> Result<Option<String>, TelephonyError> {
        Ok(self.fetch(user).await?.and_then(|row| match medium {
            Medium::Plivo => row.plivo_number,
            Medium::WebSprix => row.websprix_number,
        }))
    }
}
