//! Agent Directory Port
//!
//! Lookup of telephony details for CRM users.

use async_trait::async_trait;

use crate::domain::errors::TelephonyError;
use crate::domain::value_objects::Medium;

/// Directory of CRM users acting as telephony agents
#[async_trait]
pub trait AgentDirectory: Send + Sync {
    /// The agent's personal mobile number, used as the default source
    /// number for outbound calls
    async fn mobile_number(&self, user: &str) -> Result<Option<String>, TelephonyError>;

    /// The agent's provider-assigned number (caller id / extension)
    /// for a given medium
    async fn provider_number(
        &self,
        user: &str,
        medium: Medium,
    ) -> Result<Option<String>, TelephonyError>;
}
