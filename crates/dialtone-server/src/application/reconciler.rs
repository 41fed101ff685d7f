//! Webhook Reconciler (Use Case)
//!
//! Turns raw provider webhook events into call log creates/updates.
//!
//! Ordering matters: authentication rejects before anything touches the
//! store; once an event is authenticated the provider always receives a
//! success response, and a failed reconciliation is only visible in the
//! request audit trail. An error response would make providers retry,
//! and their retries are destructive.

use std::collections::HashMap;
use std::sync::Arc;

use dialtone::domain::entities::{CallEvent, CallLog, IntegrationSettings, RequestAudit};
use dialtone::domain::errors::TelephonyError;
use dialtone::domain::value_objects::{CallStatus, Medium};
use dialtone::ports::provider::TelephonyProvider;
use dialtone::ports::repositories::{CallLogRepository, RequestAuditRepository};
use dialtone::ports::services::{ContactLinker, EventBroadcast};

/// What handling one webhook event did to the store
#[derive(Debug)]
pub enum ReconcileOutcome {
    /// First event for an unseen call id; a new incoming log was created
    Created(CallLog),
    /// Follow-up event for a known call id; the existing log was
    /// overwritten, last write wins
    Updated(CallLog),
    /// Keep-alive ping, no log touched
    KeepAlive,
    /// Integration is turned off; the event was swallowed
    Disabled,
    /// Reconciliation failed; recorded in the audit trail only
    Failed,
}

/// Application service reconciling webhook events against the call log store
pub struct Reconciler {
    call_logs: Arc<dyn CallLogRepository>,
    audits: Arc<dyn RequestAuditRepository>,
    linker: Arc<dyn ContactLinker>,
    broadcast: Arc<dyn EventBroadcast>,
}

impl Reconciler {
    pub fn new(
        call_logs: Arc<dyn CallLogRepository>,
        audits: Arc<dyn RequestAuditRepository>,
        linker: Arc<dyn ContactLinker>,
        broadcast: Arc<dyn EventBroadcast>,
    ) -> Self {
        Self {
            call_logs,
            audits,
            linker,
            broadcast,
        }
    }

    /// Drive the call log lifecycle from one raw webhook delivery.
    ///
    /// Returns `Err` only for an authentication mismatch; every other
    /// failure is converted into `ReconcileOutcome::Failed` so the
    /// caller can acknowledge the delivery.
    pub async fn handle_event(
        &self,
        provider: &dyn TelephonyProvider,
        settings: &IntegrationSettings,
        supplied_key: Option<&str>,
        form: &HashMap<String, String>,
    ) -> Result<ReconcileOutcome, TelephonyError> {
        if !settings.verify_webhook_key(supplied_key) {
            return Err(TelephonyError::Unauthorized);
        }

        let medium = provider.medium();
        let raw = serde_json::to_value(form).unwrap_or(serde_json::Value::Null);
        let audit = RequestAudit::remote(
            medium.to_string(),
            format!("{} call event", medium),
            raw.clone(),
        );

        // Webhooks may keep arriving after a provider is turned off;
        // swallow them without touching the store.
        if !settings.enabled {
            self.finish_audit(audit.completed()).await;
            return Ok(ReconcileOutcome::Disabled);
        }

        if let Err(e) = self.broadcast.publish(medium.event_channel(), &raw).await {
            tracing::warn!(error = %e, channel = medium.event_channel(), "Failed to broadcast call event");
        }

        let event = provider.parse_webhook(form);

        if event.is_keep_alive() {
            self.finish_audit(audit.completed()).await;
            return Ok(ReconcileOutcome::KeepAlive);
        }

        match self.upsert(medium, event).await {
            Ok(outcome) => {
                self.finish_audit(audit.completed()).await;
                Ok(outcome)
            }
            Err(e) => {
                tracing::error!(error = %e, medium = %medium, "Error while creating/updating call record");
                self.finish_audit(audit.failed(e.to_string())).await;
                Ok(ReconcileOutcome::Failed)
            }
        }
    }

    async fn upsert(
        &self,
        medium: Medium,
        event: CallEvent,
    ) -> Result<ReconcileOutcome, TelephonyError> {
        let call_id = event
            .call_id
            .clone()
            .ok_or_else(|| TelephonyError::Validation("call event has no call id".to_string()))?;

        if let Some(existing) = self.call_logs.find_by_id(&call_id).await? {
            let updated = self.call_logs.save(&apply_update(existing, &event)).await?;
            Ok(ReconcileOutcome::Updated(updated))
        } else {
            let mut log = CallLog::incoming(
                call_id,
                event.from_number.clone().unwrap_or_default(),
                event.to_number.clone().unwrap_or_default(),
                medium,
                CallStatus::normalize(&event.status),
                event.agent.clone(),
            );

            // The link is resolved once, at creation, from the caller's
            // number; updates never re-resolve it.
            let matched = self.linker.lookup_by_phone(log.counterparty_number()).await?;
            log = log.with_linked_reference(matched.reference());

            let created = self.call_logs.save(&log).await?;
            Ok(ReconcileOutcome::Created(created))
        }
    }

    async fn finish_audit(&self, audit: RequestAudit) {
        if let Err(e) = self.audits.save(&audit).await {
            tracing::error!(error = %e, "Failed to persist request audit");
        }
    }
}

/// Overwrite an existing log with the fields of a follow-up event.
/// `from_number` and the linked reference are never touched here.
fn apply_update(mut log: CallLog, event: &CallEvent) -> CallLog {
    log.status = CallStatus::normalize(&event.status);
    log.to_number = event.to_number.clone().unwrap_or_default();
    log.duration = event.duration.unwrap_or(0);
    log.recording_url = event.recording_url.clone();
    log.start_time = event.start_time.clone();
    log.end_time = event.end_time.clone();
    if event.agent.is_some() {
        log.receiver = event.agent.clone();
    }
    log.updated_at = chrono::Utc::now();
    log
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{
        plivo_settings, InMemoryAudits, InMemoryCallLogs, StaticLinker, TestBroadcast,
        TestProvider,
    };
    use dialtone::domain::entities::AuditStatus;
    use dialtone::domain::value_objects::{
        CallDirection, ContactMatch, LinkedEntity, LinkedReference,
    };

    fn form(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    struct Harness {
        call_logs: Arc<InMemoryCallLogs>,
        audits: Arc<InMemoryAudits>,
        broadcast: Arc<TestBroadcast>,
        reconciler: Reconciler,
        provider: TestProvider,
    }

    fn harness(linker_match: ContactMatch) -> Harness {
        let call_logs = Arc::new(InMemoryCallLogs::default());
        let audits = Arc::new(InMemoryAudits::default());
        let broadcast = Arc::new(TestBroadcast::default());
        let reconciler = Reconciler::new(
            call_logs.clone(),
            audits.clone(),
            Arc::new(StaticLinker::new(linker_match)),
            broadcast.clone(),
        );
        Harness {
            call_logs,
            audits,
            broadcast,
            reconciler,
            provider: TestProvider::new(Medium::Plivo),
        }
    }

    #[tokio::test]
    async fn test_first_event_creates_incoming_log() {
        let h = harness(ContactMatch::none());
        let outcome = h
            .reconciler
            .handle_event(
                &h.provider,
                &plivo_settings(true, "s3cret"),
                Some("s3cret"),
                &form(&[
                    ("call_id", "C1"),
                    ("status", "in-progress"),
                    ("from", "+15551230000"),
                    ("to", "+15557779999"),
                    ("agent", "agent@x.com"),
                ]),
            )
            .await
            .unwrap();

        let log = match outcome {
            ReconcileOutcome::Created(log) => log,
            other => panic!("expected Created, got {:?}", other),
        };
        assert_eq!(log.id, "C1");
        assert_eq!(log.direction, CallDirection::Incoming);
        assert_eq!(log.status, CallStatus::InProgress);
        assert_eq!(log.receiver.as_deref(), Some("agent@x.com"));
        assert_eq!(log.from_number, "+15551230000");
        assert_eq!(log.linked_reference, None);
        assert_eq!(h.audits.statuses(), vec![AuditStatus::Completed]);
        assert_eq!(h.broadcast.published(), vec!["plivo_call".to_string()]);
    }

    #[tokio::test]
    async fn test_create_resolves_link_from_caller_number() {
        let h = harness(ContactMatch {
            name: Some("CONT-1".to_string()),
            lead: Some("LEAD-9".to_string()),
            deal: None,
        });
        let outcome = h
            .reconciler
            .handle_event(
                &h.provider,
                &plivo_settings(true, "s3cret"),
                Some("s3cret"),
                &form(&[("call_id", "C1"), ("status", "busy"), ("from", "+1555")]),
            )
            .await
            .unwrap();

        let log = match outcome {
            ReconcileOutcome::Created(log) => log,
            other => panic!("expected Created, got {:?}", other),
        };
        // busy is recorded as Ringing
        assert_eq!(log.status, CallStatus::Ringing);
        assert_eq!(
            log.linked_reference,
            Some(LinkedReference::new(LinkedEntity::Lead, "LEAD-9"))
        );
    }

    #[tokio::test]
    async fn test_follow_up_event_updates_in_place() {
        let h = harness(ContactMatch::none());
        let settings = plivo_settings(true, "s3cret");

        h.reconciler
            .handle_event(
                &h.provider,
                &settings,
                Some("s3cret"),
                &form(&[
                    ("call_id", "C1"),
                    ("status", "in-progress"),
                    ("from", "+15551230000"),
                    ("to", "+15557779999"),
                    ("agent", "agent@x.com"),
                ]),
            )
            .await
            .unwrap();

        let outcome = h
            .reconciler
            .handle_event(
                &h.provider,
                &settings,
                Some("s3cret"),
                &form(&[
                    ("call_id", "C1"),
                    ("status", "completed"),
                    ("to", "+15557779999"),
                    ("duration", "42"),
                    ("recording_url", "https://r/1"),
                ]),
            )
            .await
            .unwrap();

        let log = match outcome {
            ReconcileOutcome::Updated(log) => log,
            other => panic!("expected Updated, got {:?}", other),
        };
        assert_eq!(h.call_logs.len(), 1);
        assert_eq!(log.status, CallStatus::Completed);
        assert_eq!(log.duration, 42);
        assert_eq!(log.recording_url.as_deref(), Some("https://r/1"));
        // from and receiver survive an update that doesn't carry them
        assert_eq!(log.from_number, "+15551230000");
        assert_eq!(log.receiver.as_deref(), Some("agent@x.com"));
    }

    #[tokio::test]
    async fn test_replay_is_idempotent() {
        let h = harness(ContactMatch::none());
        let settings = plivo_settings(true, "s3cret");
        let payload = form(&[
            ("call_id", "C1"),
            ("status", "completed"),
            ("from", "+1555"),
            ("to", "+1666"),
            ("duration", "42"),
        ]);

        h.reconciler
            .handle_event(&h.provider, &settings, Some("s3cret"), &payload)
            .await
            .unwrap();
        let first = h.call_logs.get("C1").unwrap();

        h.reconciler
            .handle_event(&h.provider, &settings, Some("s3cret"), &payload)
            .await
            .unwrap();
        let second = h.call_logs.get("C1").unwrap();

        assert_eq!(h.call_logs.len(), 1);
        assert_eq!(second.status, first.status);
        assert_eq!(second.duration, first.duration);
        assert_eq!(second.to_number, first.to_number);
        assert_eq!(second.from_number, first.from_number);
        assert_eq!(second.linked_reference, first.linked_reference);
    }

    #[tokio::test]
    async fn test_bad_key_rejected_before_store_access() {
        let h = harness(ContactMatch::none());
        let result = h
            .reconciler
            .handle_event(
                &h.provider,
                &plivo_settings(true, "s3cret"),
                Some("wrong"),
                &form(&[("call_id", "C1"), ("status", "completed")]),
            )
            .await;

        assert!(matches!(result, Err(TelephonyError::Unauthorized)));
        assert_eq!(h.call_logs.accesses(), 0);
        assert_eq!(h.audits.len(), 0);
        assert!(h.broadcast.published().is_empty());
    }

    #[tokio::test]
    async fn test_missing_key_rejected() {
        let h = harness(ContactMatch::none());
        let result = h
            .reconciler
            .handle_event(
                &h.provider,
                &plivo_settings(true, "s3cret"),
                None,
                &form(&[("call_id", "C1"), ("status", "completed")]),
            )
            .await;
        assert!(matches!(result, Err(TelephonyError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_keep_alive_never_touches_logs() {
        let h = harness(ContactMatch::none());
        let settings = plivo_settings(true, "s3cret");

        // Unseen id and existing id both short-circuit on "free"
        let outcome = h
            .reconciler
            .handle_event(
                &h.provider,
                &settings,
                Some("s3cret"),
                &form(&[("call_id", "C1"), ("status", "free")]),
            )
            .await
            .unwrap();
        assert!(matches!(outcome, ReconcileOutcome::KeepAlive));
        assert_eq!(h.call_logs.len(), 0);
        assert_eq!(h.audits.statuses(), vec![AuditStatus::Completed]);
    }

    #[tokio::test]
    async fn test_disabled_integration_swallows_but_audits() {
        let h = harness(ContactMatch::none());
        let outcome = h
            .reconciler
            .handle_event(
                &h.provider,
                &plivo_settings(false, "s3cret"),
                Some("s3cret"),
                &form(&[("call_id", "C1"), ("status", "completed")]),
            )
            .await
            .unwrap();

        assert!(matches!(outcome, ReconcileOutcome::Disabled));
        assert_eq!(h.call_logs.len(), 0);
        assert_eq!(h.audits.statuses(), vec![AuditStatus::Completed]);
        // nothing is broadcast for a disabled integration
        assert!(h.broadcast.published().is_empty());
    }

    #[tokio::test]
    async fn test_missing_call_id_fails_into_audit_trail() {
        let h = harness(ContactMatch::none());
        let outcome = h
            .reconciler
            .handle_event(
                &h.provider,
                &plivo_settings(true, "s3cret"),
                Some("s3cret"),
                &form(&[("status", "completed")]),
            )
            .await
            .unwrap();

        assert!(matches!(outcome, ReconcileOutcome::Failed));
        assert_eq!(h.call_logs.len(), 0);
        assert_eq!(h.audits.statuses(), vec![AuditStatus::Failed]);
    }

    #[tokio::test]
    async fn test_broadcast_failure_does_not_abort_reconciliation() {
        let h = harness(ContactMatch::none());
        h.broadcast.fail_next();

        let outcome = h
            .reconciler
            .handle_event(
                &h.provider,
                &plivo_settings(true, "s3cret"),
                Some("s3cret"),
                &form(&[("call_id", "C1"), ("status", "in-progress")]),
            )
            .await
            .unwrap();

        assert!(matches!(outcome, ReconcileOutcome::Created(_)));
        assert_eq!(h.call_logs.len(), 1);
    }
}
