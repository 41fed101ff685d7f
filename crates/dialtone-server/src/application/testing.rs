//! In-memory port fakes shared by application service tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use dialtone::domain::entities::{AuditStatus, CallEvent, CallLog, IntegrationSettings, RequestAudit};
use dialtone::domain::errors::TelephonyError;
use dialtone::domain::value_objects::{ContactMatch, Medium};
use dialtone::ports::provider::{PlacedCall, TelephonyProvider};
use dialtone::ports::repositories::{CallLogRepository, RequestAuditRepository};
use dialtone::ports::services::{AgentDirectory, ContactLinker, EventBroadcast};

pub fn plivo_settings(enabled: bool, token: &str) -> IntegrationSettings {
    IntegrationSettings {
        enabled,
        auth_id: Some("MA123".to_string()),
        auth_token: Some("token".to_string()),
        webhook_verify_token: Some(token.to_string()),
        ..IntegrationSettings::disabled(Medium::Plivo)
    }
}

/// Call log store backed by a HashMap; counts accesses so tests can
/// assert that unauthorized requests never reach the store.
#[derive(Default)]
pub struct InMemoryCallLogs {
    logs: Mutex<HashMap<String, CallLog>>,
    accesses: AtomicUsize,
    fail_next_save: AtomicBool,
}

impl InMemoryCallLogs {
    pub fn len(&self) -> usize {
        self.logs.lock().unwrap().len()
    }

    pub fn get(&self, id: &str) -> Option<CallLog> {
        self.logs.lock().unwrap().get(id).cloned()
    }

    pub fn accesses(&self) -> usize {
        self.accesses.load(Ordering::SeqCst)
    }

    pub fn fail_next_save(&self) {
        self.fail_next_save.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl CallLogRepository for InMemoryCallLogs {
    async fn find_by_id(&self, id: &str) -> Result<Option<CallLog>, TelephonyError> {
        self.accesses.fetch_add(1, Ordering::SeqCst);
        Ok(self.logs.lock().unwrap().get(id).cloned())
    }

    async fn exists(&self, id: &str) -> Result<bool, TelephonyError> {
        self.accesses.fetch_add(1, Ordering::SeqCst);
        Ok(self.logs.lock().unwrap().contains_key(id))
    }

    async fn save(&self, call_log: &CallLog) -> Result<CallLog, TelephonyError> {
        self.accesses.fetch_add(1, Ordering::SeqCst);
        if self.fail_next_save.swap(false, Ordering::SeqCst) {
            return Err(TelephonyError::Repository("store unavailable".to_string()));
        }
        self.logs
            .lock()
            .unwrap()
            .insert(call_log.id.clone(), call_log.clone());
        Ok(call_log.clone())
    }
}

#[derive(Default)]
pub struct InMemoryAudits {
    records: Mutex<Vec<RequestAudit>>,
}

impl InMemoryAudits {
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn statuses(&self) -> Vec<AuditStatus> {
        self.records.lock().unwrap().iter().map(|a| a.status).collect()
    }
}

#[async_trait]
impl RequestAuditRepository for InMemoryAudits {
    async fn save(&self, audit: &RequestAudit) -> Result<RequestAudit, TelephonyError> {
        self.records.lock().unwrap().push(audit.clone());
        Ok(audit.clone())
    }
}

/// Linker returning the same match for every number, optionally failing
/// the next lookup
pub struct StaticLinker {
    matched: ContactMatch,
    fail_next: AtomicBool,
}

impl StaticLinker {
    pub fn new(matched: ContactMatch) -> Self {
        Self {
            matched,
            fail_next: AtomicBool::new(false),
        }
    }

    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl ContactLinker for StaticLinker {
    async fn lookup_by_phone(&self, _phone_number: &str) -> Result<ContactMatch, TelephonyError> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(TelephonyError::Repository(
                "contact index unavailable".to_string(),
            ));
        }
        Ok(self.matched.clone())
    }
}

/// Broadcast fake recording published channels, optionally failing once
#[derive(Default)]
pub struct TestBroadcast {
    channels: Mutex<Vec<String>>,
    fail_next: AtomicBool,
}

impl TestBroadcast {
    pub fn published(&self) -> Vec<String> {
        self.channels.lock().unwrap().clone()
    }

    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl EventBroadcast for TestBroadcast {
    async fn publish(
        &self,
        channel: &str,
        _payload: &serde_json::Value,
    ) -> Result<(), TelephonyError> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(TelephonyError::ExternalService(
                "no subscribers".to_string(),
            ));
        }
        self.channels.lock().unwrap().push(channel.to_string());
        Ok(())
    }
}

/// Agent directory fake with fixed numbers
#[derive(Default)]
pub struct TestAgents {
    pub mobile: Option<String>,
    pub provider: Option<String>,
}

#[async_trait]
impl AgentDirectory for TestAgents {
    async fn mobile_number(&self, _user: &str) -> Result<Option<String>, TelephonyError> {
        Ok(self.mobile.clone())
    }

    async fn provider_number(
        &self,
        _user: &str,
        _medium: Medium,
    ) -> Result<Option<String>, TelephonyError> {
        Ok(self.provider.clone())
    }
}

/// Provider test double: snake_case webhook mapping, scripted
/// call-placement results, and a record of placed calls.
pub struct TestProvider {
    medium: Medium,
    place_result: Mutex<Option<Result<PlacedCall, TelephonyError>>>,
    placed: Mutex<Vec<(String, String, String)>>,
}

impl TestProvider {
    pub fn new(medium: Medium) -> Self {
        Self {
            medium,
            place_result: Mutex::new(None),
            placed: Mutex::new(Vec::new()),
        }
    }

    pub fn next_place_result(&self, result: Result<PlacedCall, TelephonyError>) {
        *self.place_result.lock().unwrap() = Some(result);
    }

    pub fn placed_calls(&self) -> Vec<(String, String, String)> {
        self.placed.lock().unwrap().clone()
    }
}

#[async_trait]
impl TelephonyProvider for TestProvider {
    fn medium(&self) -> Medium {
        self.medium
    }

    async fn verify_credentials(&self) -> Result<(), TelephonyError> {
        Ok(())
    }

    async fn place_call(
        &self,
        from: &str,
        to: &str,
        status_callback: &str,
    ) -> Result<PlacedCall, TelephonyError> {
        self.placed.lock().unwrap().push((
            from.to_string(),
            to.to_string(),
            status_callback.to_string(),
        ));
        self.place_result.lock().unwrap().take().unwrap_or_else(|| {
            Ok(PlacedCall {
                call_id: "test-call-1".to_string(),
                raw: serde_json::json!({ "request_uuid": "test-call-1" }),
            })
        })
    }

    fn parse_webhook(&self, form: &HashMap<String, String>) -> CallEvent {
        let get = |key: &str| form.get(key).filter(|v| !v.is_empty()).cloned();
        CallEvent {
            call_id: get("call_id"),
            status: get("status").unwrap_or_default(),
            from_number: get("from"),
            to_number: get("to"),
            duration: get("duration").and_then(|d| d.parse().ok()),
            recording_url: get("recording_url"),
            start_time: get("start_time"),
            end_time: get("end_time"),
            agent: get("agent"),
        }
    }
}
