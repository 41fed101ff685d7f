//! RequestAudit - Audit trail for inbound integration requests
//!
//! Webhook deliveries are always acknowledged with a success response;
//! the audit record is where a failed reconciliation is actually visible.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome of handling one audited request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AuditStatus {
    Pending,
    Completed,
    Failed,
}

/// One audited inbound request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestAudit {
    pub id: Uuid,
    /// Integration that received the request (e.g. "Plivo")
    pub service: String,
    pub description: String,
    /// Raw request payload as received
    pub payload: serde_json::Value,
    /// Whether the request originated outside the CRM
    pub is_remote: bool,
    pub status: AuditStatus,
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl RequestAudit {
    /// Create a pending audit record for a remote request
    pub fn remote(
        service: impl Into<String>,
        description: impl Into<String>,
        payload: serde_json::Value,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            service: service.into(),
            description: description.into(),
            payload,
            is_remote: true,
            status: AuditStatus::Pending,
            error: None,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    /// Mark the request as handled
    pub fn completed(mut self) -> Self {
        self.status = AuditStatus::Completed;
        self.completed_at = Some(Utc::now());
        self
    }

    /// Mark the request as failed with the error that stopped it
    pub fn failed(mut self, error: impl Into<String>) -> Self {
        self.status = AuditStatus::Failed;
        self.error = Some(error.into());
        self.completed_at = Some(Utc::now());
        self
    }
}

impl std::fmt::Display for AuditStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuditStatus::Pending => write!(f, "pending"),
            AuditStatus::Completed => write!(f, "completed"),
            AuditStatus::Failed => write!(f, "failed"),
        }
    }
}

impl std::str::FromStr for AuditStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(AuditStatus::Pending),
            "completed" => Ok(AuditStatus::Completed),
            "failed" => Ok(AuditStatus::Failed),
            _ => Err(format!("Unknown audit status: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_lifecycle() {
        let audit = RequestAudit::remote("Plivo", "Plivo Call", serde_json::json!({}));
        assert_eq!(audit.status, AuditStatus::Pending);
        assert!(audit.completed_at.is_none());

        let done = audit.clone().completed();
        assert_eq!(done.status, AuditStatus::Completed);
        assert!(done.completed_at.is_some());

        let failed = audit.failed("missing call id");
        assert_eq!(failed.status, AuditStatus::Failed);
        assert_eq!(failed.error.as_deref(), Some("missing call id"));
    }
}
