//! CallLog - Persistent record of one telephony call's lifecycle
//!
//! Keyed by the provider-assigned call id. Created once (by the outbound
//! caller or the first webhook event for an unseen id) and thereafter
//! mutated only by the webhook reconciler, last write wins.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    CallDirection, CallStatus, LinkedReference, Medium,
};

/// Canonical record of one telephony event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallLog {
    /// Provider-assigned call/session identifier, stable across updates
    pub id: String,
    pub direction: CallDirection,
    pub from_number: String,
    pub to_number: String,
    pub medium: Medium,
    pub status: CallStatus,
    /// CRM user who placed the call (outgoing only)
    pub caller: Option<String>,
    /// CRM user who handled the call (incoming only)
    pub receiver: Option<String>,
    /// Call duration in seconds
    pub duration: i64,
    pub recording_url: Option<String>,
    /// Provider-supplied timestamps, passed through unparsed
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    /// CRM record resolved from the counterparty number at creation time
    pub linked_reference: Option<LinkedReference>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CallLog {
    /// Create a log for an inbound call, agent stored as receiver
    pub fn incoming(
        id: impl Into<String>,
        from_number: impl Into<String>,
        to_number: impl Into<String>,
        medium: Medium,
        status: CallStatus,
        agent: Option<String>,
    ) -> Self {
        Self::new(
            id,
            CallDirection::Incoming,
            from_number,
            to_number,
            medium,
            status,
            agent,
        )
    }

    /// Create a log for a call placed from the CRM, agent stored as caller
    pub fn outgoing(
        id: impl Into<String>,
        from_number: impl Into<String>,
        to_number: impl Into<String>,
        medium: Medium,
        agent: Option<String>,
    ) -> Self {
        Self::new(
            id,
            CallDirection::Outgoing,
            from_number,
            to_number,
            medium,
            CallStatus::default(),
            agent,
        )
    }

    fn new(
        id: impl Into<String>,
        direction: CallDirection,
        from_number: impl Into<String>,
        to_number: impl Into<String>,
        medium: Medium,
        status: CallStatus,
        agent: Option<String>,
    ) -> Self {
        let (caller, receiver) = match direction {
            CallDirection::Incoming => (None, agent),
            CallDirection::Outgoing => (agent, None),
        };
        let now = Utc::now();
        Self {
            id: id.into(),
            direction,
            from_number: from_number.into(),
            to_number: to_number.into(),
            medium,
            status,
            caller,
            receiver,
            duration: 0,
            recording_url: None,
            start_time: None,
            end_time: None,
            linked_reference: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attach the CRM record resolved from the counterparty number
    pub fn with_linked_reference(mut self, reference: Option<LinkedReference>) -> Self {
        self.linked_reference = reference;
        self
    }

    /// The phone number of the external counterparty, used for contact
    /// resolution: whoever is not the agent.
    pub fn counterparty_number(&self) -> &str {
        match self.direction {
            CallDirection::Incoming => &self.from_number,
            CallDirection::Outgoing => &self.to_number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incoming_stores_agent_as_receiver() {
        let log = CallLog::incoming(
            "C1",
            "+15551230000",
            "+15557779999",
            Medium::Plivo,
            CallStatus::Ringing,
            Some("agent@x.com".to_string()),
        );
        assert_eq!(log.receiver.as_deref(), Some("agent@x.com"));
        assert_eq!(log.caller, None);
        assert_eq!(log.counterparty_number(), "+15551230000");
    }

    #[test]
    fn test_outgoing_stores_agent_as_caller() {
        let log = CallLog::outgoing(
            "C2",
            "+15551230000",
            "+15557779999",
            Medium::WebSprix,
            Some("agent@x.com".to_string()),
        );
        assert_eq!(log.caller.as_deref(), Some("agent@x.com"));
        assert_eq!(log.receiver, None);
        assert_eq!(log.status, CallStatus::Ringing);
        assert_eq!(log.counterparty_number(), "+15557779999");
    }
}
