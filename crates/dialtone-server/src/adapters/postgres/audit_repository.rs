//! PostgreSQL implementation of RequestAuditRepository

use async_trait::async_trait;
use sqlx::PgPool;
use std::str::FromStr;
use uuid::Uuid;

use dialtone::domain::entities::{AuditStatus, RequestAudit};
use dialtone::domain::errors::TelephonyError;
use dialtone::ports::repositories::RequestAuditRepository;

/// PostgreSQL implementation of RequestAuditRepository
pub struct PgRequestAuditRepository {
    pool: PgPool,
}

impl PgRequestAuditRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct RequestAuditRow {
    id: Uuid,
    service: String,
    description: String,
    payload: serde_json::Value,
    is_remote: bool,
    status: String,
    error: Option<String>,
    created_at: chrono::DateTime<chrono::Utc>,
    completed_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl TryFrom<RequestAuditRow> for RequestAudit {
    type Error = TelephonyError;

    fn try_from(row: RequestAuditRow) -> Result<Self, Self::Error> {
        let status = AuditStatus::from_str(&row.status).map_err(TelephonyError::Repository)?;
        Ok(Self {
            id: row.id,
            service: row.service,
            description: row.description,
            payload: row.payload,
            is_remote: row.is_remote,
            status,
            error: row.error,
            created_at: row.created_at,
            completed_at: row.completed_at,
        })
    }
}

#[async_trait]
impl RequestAuditRepository for PgRequestAuditRepository {
    async fn save(&self, audit: &RequestAudit) -> Result<RequestAudit, TelephonyError> {
        let row = sqlx::query_as::<_, RequestAuditRow>(
            r#"
            INSERT INTO request_audits (
                id, service, description, payload, is_remote, status,
                error, created_at, completed_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (id) DO UPDATE SET
                status = EXCLUDED.status,
                error = EXCLUDED.error,
                completed_at = EXCLUDED.completed_at
            RETURNING *
            "#,
        )
        .bind(audit.id)
        .bind(&audit.service)
        .bind(&audit.description)
        .bind(&audit.payload)
        .bind(audit.is_remote)
        .bind(audit.status.to_string())
        .bind(&audit.error)
        .bind(audit.created_at)
        .bind(audit.completed_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| TelephonyError::Repository(e.to_string()))?;

        RequestAudit::try_from(row)
    }
}
