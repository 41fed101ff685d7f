//! Outbound Call Initiator (Use Case)
//!
//! Places a call through a provider and seeds the call log from the
//! response. Unlike webhook reconciliation, every failure here surfaces
//! synchronously to the agent who asked for the call.

use std::sync::Arc;

use dialtone::domain::entities::{CallLog, IntegrationSettings};
use dialtone::domain::errors::TelephonyError;
use dialtone::ports::provider::{PlacedCall, TelephonyProvider};
use dialtone::ports::repositories::CallLogRepository;
use dialtone::ports::services::{AgentDirectory, ContactLinker};

/// A request to place a call on behalf of an agent
#[derive(Debug, Clone)]
pub struct PlaceCallRequest {
    /// CRM user placing the call
    pub agent: String,
    pub to_number: String,
    /// Source number; defaults to the agent's mobile number
    pub from_number: Option<String>,
    /// Number presented to the callee; defaults to the agent's
    /// provider-assigned number, then to the source number
    pub caller_id: Option<String>,
}

/// Application service for placing outbound calls
pub struct OutboundCaller {
    call_logs: Arc<dyn CallLogRepository>,
    agents: Arc<dyn AgentDirectory>,
    linker: Arc<dyn ContactLinker>,
}

impl OutboundCaller {
    pub fn new(
        call_logs: Arc<dyn CallLogRepository>,
        agents: Arc<dyn AgentDirectory>,
        linker: Arc<dyn ContactLinker>,
    ) -> Self {
        Self {
            call_logs,
            agents,
            linker,
        }
    }

    /// Place a call and create its Outgoing log.
    ///
    /// `status_callback` is the webhook URL the provider should deliver
    /// subsequent call events to.
    pub async fn place_call(
        &self,
        provider: &dyn TelephonyProvider,
        settings: &IntegrationSettings,
        status_callback: &str,
        request: PlaceCallRequest,
    ) -> Result<PlacedCall, TelephonyError> {
        let medium = provider.medium();
        if !settings.enabled {
            return Err(TelephonyError::IntegrationDisabled(medium));
        }

        let from_number = match request.from_number.filter(|n| !n.is_empty()) {
            Some(number) => number,
            None => self
                .agents
                .mobile_number(&request.agent)
                .await?
                .filter(|n| !n.is_empty())
                .ok_or(TelephonyError::MissingMobileNumber)?,
        };

        let caller_id = match request.caller_id.filter(|n| !n.is_empty()) {
            Some(number) => Some(number),
            None => self.agents.provider_number(&request.agent, medium).await?,
        };

        let wire_from = caller_id.unwrap_or_else(|| from_number.clone());
        let placed = provider
            .place_call(&wire_from, &request.to_number, status_callback)
            .await?;

        // The call exists at the provider from here on; an error response
        // now would invite a duplicate dial. Log-seeding problems are
        // recorded and the webhook updates, keyed by call id, carry on.
        let mut log = CallLog::outgoing(
            placed.call_id.clone(),
            from_number,
            request.to_number.clone(),
            medium,
            Some(request.agent),
        );
        match self.linker.lookup_by_phone(&request.to_number).await {
            Ok(matched) => log = log.with_linked_reference(matched.reference()),
            Err(e) => {
                tracing::warn!(error = %e, call_id = %placed.call_id, "Could not resolve contact for outbound call");
            }
        }
        if let Err(e) = self.call_logs.save(&log).await {
            tracing::error!(error = %e, call_id = %placed.call_id, "Placed call but could not seed its log");
        }

        tracing::info!(call_id = %placed.call_id, medium = %medium, "Placed outbound call");

        Ok(placed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{
        plivo_settings, InMemoryCallLogs, StaticLinker, TestAgents, TestProvider,
    };
    use dialtone::domain::value_objects::{
        CallDirection, CallStatus, ContactMatch, LinkedEntity, LinkedReference, Medium,
    };

    fn request(from: Option<&str>, caller_id: Option<&str>) -> PlaceCallRequest {
        PlaceCallRequest {
            agent: "agent@x.com".to_string(),
            to_number: "+15557779999".to_string(),
            from_number: from.map(String::from),
            caller_id: caller_id.map(String::from),
        }
    }

    struct Harness {
        call_logs: Arc<InMemoryCallLogs>,
        linker: Arc<StaticLinker>,
        caller: OutboundCaller,
        provider: TestProvider,
    }

    fn harness(agents: TestAgents, matched: ContactMatch) -> Harness {
        let call_logs = Arc::new(InMemoryCallLogs::default());
        let linker = Arc::new(StaticLinker::new(matched));
        let caller = OutboundCaller::new(call_logs.clone(), Arc::new(agents), linker.clone());
        Harness {
            call_logs,
            linker,
            caller,
            provider: TestProvider::new(Medium::Plivo),
        }
    }

    #[tokio::test]
    async fn test_successful_call_seeds_outgoing_log() {
        let h = harness(
            TestAgents {
                mobile: Some("+15551230000".to_string()),
                provider: Some("+18005550100".to_string()),
            },
            ContactMatch {
                name: Some("CONT-1".to_string()),
                lead: None,
                deal: None,
            },
        );

        let placed = h
            .caller
            .place_call(
                &h.provider,
                &plivo_settings(true, "s3cret"),
                "https://crm/telephony/plivo/webhook?key=s3cret",
                request(None, None),
            )
            .await
            .unwrap();

        assert_eq!(placed.call_id, "test-call-1");

        // the provider-assigned caller id went over the wire, the agent's
        // own mobile number went into the log
        let calls = h.provider.placed_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "+18005550100");
        assert_eq!(calls[0].1, "+15557779999");

        let log = h.call_logs.get("test-call-1").unwrap();
        assert_eq!(log.direction, CallDirection::Outgoing);
        assert_eq!(log.caller.as_deref(), Some("agent@x.com"));
        assert_eq!(log.receiver, None);
        assert_eq!(log.from_number, "+15551230000");
        assert_eq!(log.status, CallStatus::Ringing);
        assert_eq!(
            log.linked_reference,
            Some(LinkedReference::new(LinkedEntity::Contact, "CONT-1"))
        );
    }

    #[tokio::test]
    async fn test_missing_mobile_number_short_circuits() {
        let h = harness(TestAgents::default(), ContactMatch::none());

        let result = h
            .caller
            .place_call(
                &h.provider,
                &plivo_settings(true, "s3cret"),
                "https://crm/webhook",
                request(None, None),
            )
            .await;

        assert!(matches!(result, Err(TelephonyError::MissingMobileNumber)));
        // no provider request, no log
        assert!(h.provider.placed_calls().is_empty());
        assert_eq!(h.call_logs.len(), 0);
    }

    #[tokio::test]
    async fn test_disabled_integration_refuses_call() {
        let h = harness(
            TestAgents {
                mobile: Some("+15551230000".to_string()),
                provider: None,
            },
            ContactMatch::none(),
        );

        let result = h
            .caller
            .place_call(
                &h.provider,
                &plivo_settings(false, "s3cret"),
                "https://crm/webhook",
                request(None, None),
            )
            .await;

        assert!(matches!(
            result,
            Err(TelephonyError::IntegrationDisabled(Medium::Plivo))
        ));
        assert!(h.provider.placed_calls().is_empty());
    }

    #[tokio::test]
    async fn test_explicit_numbers_bypass_directory() {
        let h = harness(TestAgents::default(), ContactMatch::none());

        h.caller
            .place_call(
                &h.provider,
                &plivo_settings(true, "s3cret"),
                "https://crm/webhook",
                request(Some("+15550001111"), Some("+18881112222")),
            )
            .await
            .unwrap();

        let calls = h.provider.placed_calls();
        assert_eq!(calls[0].0, "+18881112222");
        let log = h.call_logs.get("test-call-1").unwrap();
        assert_eq!(log.from_number, "+15550001111");
    }

    #[tokio::test]
    async fn test_provider_rejection_creates_no_log() {
        let h = harness(
            TestAgents {
                mobile: Some("+15551230000".to_string()),
                provider: None,
            },
            ContactMatch::none(),
        );
        h.provider
            .next_place_result(Err(TelephonyError::Provider("insufficient balance".to_string())));

        let result = h
            .caller
            .place_call(
                &h.provider,
                &plivo_settings(true, "s3cret"),
                "https://crm/webhook",
                request(None, None),
            )
            .await;

        match result {
            Err(TelephonyError::Provider(message)) => {
                assert_eq!(message, "insufficient balance");
            }
            other => panic!("expected Provider error, got {:?}", other),
        }
        assert_eq!(h.call_logs.len(), 0);
    }

    #[tokio::test]
    async fn test_log_seeding_failure_does_not_fail_a_placed_call() {
        let h = harness(
            TestAgents {
                mobile: Some("+15551230000".to_string()),
                provider: None,
            },
            ContactMatch::none(),
        );
        h.call_logs.fail_next_save();

        let placed = h
            .caller
            .place_call(
                &h.provider,
                &plivo_settings(true, "s3cret"),
                "https://crm/webhook",
                request(None, None),
            )
            .await
            .unwrap();

        // the call went out even though no log could be written
        assert_eq!(placed.call_id, "test-call-1");
        assert_eq!(h.provider.placed_calls().len(), 1);
        assert_eq!(h.call_logs.len(), 0);
    }

    #[tokio::test]
    async fn test_link_resolution_failure_still_seeds_the_log() {
        let h = harness(
            TestAgents {
                mobile: Some("+15551230000".to_string()),
                provider: None,
            },
            ContactMatch {
                name: Some("CONT-1".to_string()),
                lead: None,
                deal: None,
            },
        );
        h.linker.fail_next();

        let placed = h
            .caller
            .place_call(
                &h.provider,
                &plivo_settings(true, "s3cret"),
                "https://crm/webhook",
                request(None, None),
            )
            .await
            .unwrap();

        let log = h.call_logs.get(&placed.call_id).unwrap();
        assert_eq!(log.linked_reference, None);
    }
}
