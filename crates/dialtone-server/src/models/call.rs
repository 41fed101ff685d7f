//! Call DTOs - outbound calls and call log reads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use dialtone::domain::entities::CallLog;

/// Place an outbound call on behalf of an agent
#[derive(Debug, Deserialize, ToSchema)]
pub struct MakeCallRequest {
    /// Agent (CRM user) placing the call
    pub agent: String,
    pub to_number: String,
    /// Source number; defaults to the agent's mobile number
    pub from_number: Option<String>,
    /// Number shown to the callee; defaults to the provider-assigned number
    pub caller_id: Option<String>,
}

/// Result of placing an outbound call
#[derive(Debug, Serialize, ToSchema)]
pub struct MakeCallResponse {
    pub call_id: String,
    /// Provider response merged with the call id
    pub raw: serde_json::Value,
}

/// One call log record
#[derive(Debug, Serialize, ToSchema)]
pub struct CallLogResponse {
    pub id: String,
    pub direction: String,
    pub from_number: String,
    pub to_number: String,
    pub medium: String,
    pub status: String,
    pub caller: Option<String>,
    pub receiver: Option<String>,
    pub duration: i64,
    pub recording_url: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub reference_entity: Option<String>,
    pub reference_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CallLog> for CallLogResponse {
    fn from(log: CallLog) -> Self {
        let (reference_entity, reference_id) = match log.linked_reference {
            Some(r) => (Some(r.entity.to_string()), Some(r.id)),
            None => (None, None),
        };
        Self {
            id: log.id,
            direction: log.direction.to_string(),
            from_number: log.from_number,
            to_number: log.to_number,
            medium: log.medium.to_string(),
            status: log.status.to_string(),
            caller: log.caller,
            receiver: log.receiver,
            duration: log.duration,
            recording_url: log.recording_url,
            start_time: log.start_time,
            end_time: log.end_time,
            reference_entity,
            reference_id,
            created_at: log.created_at,
            updated_at: log.updated_at,
        }
    }
}
