//! Contact Linker Port
//!
//! Resolution of a phone number to the CRM entity it belongs to.
//! A miss is an empty match, never an error.

use async_trait::async_trait;

use crate::domain::errors::TelephonyError;
use crate::domain::value_objects::ContactMatch;

/// Contact resolution interface
#[async_trait]
pub trait ContactLinker: Send + Sync {
    /// Resolve a phone number to the contact (and any lead/deal) it
    /// belongs to
    async fn lookup_by_phone(&self, phone_number: &str) -> Result<ContactMatch, TelephonyError>;
}
