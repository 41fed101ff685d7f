//! RequestAudit Repository Port

use async_trait::async_trait;

use crate::domain::entities::RequestAudit;
use crate::domain::errors::TelephonyError;

/// Repository interface for request audit records
#[async_trait]
pub trait RequestAuditRepository: Send + Sync {
    /// Persist an audit record (insert or update by id)
    async fn save(&self, audit: &RequestAudit) -> Result<RequestAudit, TelephonyError>;
}
