//! PostgreSQL implementation of ContactLinker
//!
//! Looks a phone number up in the denormalized contact_phone_index
//! table. A number with no row is an empty match, not an error.

use async_trait::async_trait;
use sqlx::PgPool;

use dialtone::domain::errors::TelephonyError;
use dialtone::domain::value_objects::ContactMatch;
use dialtone::ports::services::ContactLinker;

/// PostgreSQL implementation of ContactLinker
pub struct PgContactLinker {
    pool: PgPool,
}

impl PgContactLinker {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ContactRow {
    contact_name: String,
    lead_id: Option<String>,
    deal_id: Option<String>,
}

#[async_trait]
impl ContactLinker for PgContactLinker {
    async fn lookup_by_phone(&self, phone_number: &str) -> Result<ContactMatch, TelephonyError> {
        let row = sqlx::query_as::<_, ContactRow>(
            "SELECT contact_name, lead_id, deal_id FROM contact_phone_index WHERE phone_number = $1",
        )
        .bind(phone_number)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| TelephonyError::Repository(e.to_string()))?;

        Ok(match row {
            Some(row) => ContactMatch {
                name: Some(row.contact_name),
                lead: row.lead_id,
                deal: row.deal_id,
            },
            None => ContactMatch::none(),
        })
    }
}
