//! CallLog Repository Port
//!
//! Abstract interface for call log persistence. The reconciler only
//! relies on atomic single-record create/update; last write wins when
//! concurrent webhook deliveries race on the same id.

use async_trait::async_trait;

use crate::domain::entities::CallLog;
use crate::domain::errors::TelephonyError;

/// Repository interface for CallLog entities
#[async_trait]
pub trait CallLogRepository: Send + Sync {
    /// Find a call log by provider call id
    async fn find_by_id(&self, id: &str) -> Result<Option<CallLog>, TelephonyError>;

    /// Whether a call log exists for the provider call id
    async fn exists(&self, id: &str) -> Result<bool, TelephonyError>;

    /// Save a call log (insert or update)
    async fn save(&self, call_log: &CallLog) -> Result<CallLog, TelephonyError>;
}
