//! PostgreSQL implementation of QueuePresence

use async_trait::async_trait;
use sqlx::PgPool;

use dialtone::domain::errors::TelephonyError;
use dialtone::ports::services::{QueueMembership, QueuePresence};

/// PostgreSQL implementation of QueuePresence
pub struct PgQueuePresence {
    pool: PgPool,
}

impl PgQueuePresence {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QueuePresence for PgQueuePresence {
    async fn join(&self, user: &str, queue_id: &str) -> Result<(), TelephonyError> {
        sqlx::query(
            r#"
            INSERT INTO queue_members (user_email, queue_id, joined_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (user_email) DO UPDATE SET
                queue_id = EXCLUDED.queue_id,
                joined_at = EXCLUDED.joined_at
            "#,
        )
        .bind(user)
        .bind(queue_id)
        .execute(&self.pool)
        .await
        .map_err(|e| TelephonyError::Repository(e.to_string()))?;
        Ok(())
    }

    async fn leave(&self, user: &str) -> Result<(), TelephonyError> {
        sqlx::query("DELETE FROM queue_members WHERE user_email = $1")
            .bind(user)
            .execute(&self.pool)
            .await
            .map_err(|e| TelephonyError::Repository(e.to_string()))?;
        Ok(())
    }

    async fn status(&self, user: &str) -> Result<QueueMembership, TelephonyError> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT queue_id FROM queue_members WHERE user_email = $1")
                .bind(user)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| TelephonyError::Repository(e.to_string()))?;

        Ok(match row {
            Some((queue_id,)) => QueueMembership {
                joined: true,
                queue_id: Some(queue_id),
            },
            None => QueueMembership::default(),
        })
    }
}
