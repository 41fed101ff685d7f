//! PostgreSQL implementation of CallLogRepository

use async_trait::async_trait;
use sqlx::PgPool;
use std::str::FromStr;

use dialtone::domain::entities::CallLog;
use dialtone::domain::errors::TelephonyError;
use dialtone::domain::value_objects::{
    CallDirection, CallStatus, LinkedEntity, LinkedReference, Medium,
};
use dialtone::ports::repositories::CallLogRepository;

/// PostgreSQL implementation of CallLogRepository
pub struct PgCallLogRepository {
    pool: PgPool,
}

impl PgCallLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct CallLogRow {
    id: String,
    direction: String,
    from_number: String,
    to_number: String,
    medium: String,
    status: String,
    caller: Option<String>,
    receiver: Option<String>,
    duration: i64,
    recording_url: Option<String>,
    start_time: Option<String>,
    end_time: Option<String>,
    reference_entity: Option<String>,
    reference_id: Option<String>,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl TryFrom<CallLogRow> for CallLog {
    type Error = TelephonyError;

    fn try_from(row: CallLogRow) -> Result<Self, Self::Error> {
        let direction = CallDirection::from_str(&row.direction)
            .map_err(TelephonyError::Repository)?;
        let medium = Medium::from_str(&row.medium).map_err(TelephonyError::Repository)?;
        let status = CallStatus::from_str(&row.status).expect("CallStatus parse is infallible");

        let linked_reference = match (row.reference_entity, row.reference_id) {
            (Some(entity), Some(id)) => Some(LinkedReference::new(
                LinkedEntity::from_str(&entity).map_err(TelephonyError::Repository)?,
                id,
            )),
            _ => None,
        };

        Ok(Self {
            id: row.id,
            direction,
            from_number: row.from_number,
            to_number: row.to_number,
            medium,
            status,
            caller: row.caller,
            receiver: row.receiver,
            duration: row.duration,
            recording_url: row.recording_url,
            start_time: row.start_time,
            end_time: row.end_time,
            linked_reference,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl CallLogRepository for PgCallLogRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<CallLog>, TelephonyError> {
        let row = sqlx::query_as::<_, CallLogRow>("SELECT * FROM call_logs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| TelephonyError::Repository(e.to_string()))?;

        row.map(CallLog::try_from).transpose()
    }

    async fn exists(&self, id: &str) -> Result<bool, TelephonyError> {
        let found: Option<(String,)> =
            sqlx::query_as("SELECT id FROM call_logs WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| TelephonyError::Repository(e.to_string()))?;
        Ok(found.is_some())
    }

    async fn save(&self, call_log: &CallLog) -> Result<CallLog, TelephonyError> {
        let row = sqlx::query_as::<_, CallLogRow>(
            r#"
            INSERT INTO call_logs (
                id, direction, from_number, to_number, medium, status,
                caller, receiver, duration, recording_url, start_time,
                end_time, reference_entity, reference_id, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            ON CONFLICT (id) DO UPDATE SET
                status = EXCLUDED.status,
                to_number = EXCLUDED.to_number,
                duration = EXCLUDED.duration,
                recording_url = EXCLUDED.recording_url,
                start_time = EXCLUDED.start_time,
                end_time = EXCLUDED.end_time,
                receiver = EXCLUDED.receiver,
                updated_at = EXCLUDED.updated_at
            RETURNING *
            "#,
        )
        .bind(&call_log.id)
        .bind(call_log.direction.to_string())
        .bind(&call_log.from_number)
        .bind(&call_log.to_number)
        .bind(call_log.medium.to_string())
        .bind(call_log.status.to_string())
        .bind(&call_log.caller)
        .bind(&call_log.receiver)
        .bind(call_log.duration)
        .bind(&call_log.recording_url)
        .bind(&call_log.start_time)
        .bind(&call_log.end_time)
        .bind(
            call_log
                .linked_reference
                .as_ref()
                .map(|r| r.entity.to_string()),
        )
        .bind(call_log.linked_reference.as_ref().map(|r| r.id.clone()))
        .bind(call_log.created_at)
        .bind(call_log.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| TelephonyError::Repository(e.to_string()))?;

        CallLog::try_from(row)
    }
}
