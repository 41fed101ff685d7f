//! CallEvent - Normalized webhook payload
//!
//! Providers deliver call events as flat key/value form payloads with
//! provider-specific field names. Each integration crate maps its raw
//! payload into this shape before reconciliation.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::KEEP_ALIVE_STATUS;

/// One call event as delivered by a provider webhook
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CallEvent {
    /// Provider call id; its absence is a reconciliation failure, not a
    /// transport error
    pub call_id: Option<String>,
    /// Raw provider status string, normalized during reconciliation
    pub status: String,
    pub from_number: Option<String>,
    pub to_number: Option<String>,
    pub duration: Option<i64>,
    pub recording_url: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    /// CRM user handling the call, when the provider reports one
    pub agent: Option<String>,
}

impl CallEvent {
    /// Whether this event is the provider's periodic keep-alive ping
    /// rather than a call event. Keep-alives never touch the store.
    pub fn is_keep_alive(&self) -> bool {
        self.status == KEEP_ALIVE_STATUS
    }
}
