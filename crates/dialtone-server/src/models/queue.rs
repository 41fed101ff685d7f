//! Agent queue DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Join or leave the inbound call queue
#[derive(Debug, Deserialize, ToSchema)]
pub struct QueueActionRequest {
    /// Agent (CRM user) changing their availability
    pub agent: String,
}

/// An agent's current queue membership
#[derive(Debug, Serialize, ToSchema)]
pub struct QueueStatusResponse {
    pub joined: bool,
    pub queue_id: Option<String>,
}
