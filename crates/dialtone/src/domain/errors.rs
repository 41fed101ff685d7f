//! Domain Errors
//!
//! Error types for telephony operations.

use thiserror::Error;

use crate::domain::value_objects::Medium;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum TelephonyError {
    /// Webhook caller failed key verification; rejected before any
    /// store access
    #[error("Unauthorized request")]
    Unauthorized,

    #[error("{0} integration is not enabled")]
    IntegrationDisabled(Medium),

    /// The requesting agent has no mobile number on file and none was
    /// supplied with the call request
    #[error("You do not have a mobile number set in your telephony agent profile")]
    MissingMobileNumber,

    /// Credential verification against the provider failed; blocks the
    /// settings save
    #[error("Invalid credentials: {reason}")]
    InvalidCredentials { reason: String },

    /// The provider rejected a call-placement request; the message is
    /// surfaced to the user
    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("External service error: {0}")]
    ExternalService(String),
}

impl TelephonyError {
    pub fn not_found<T: AsRef<str>>(entity_type: T, id: &str) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            id: id.to_string(),
        }
    }

    pub fn invalid_credentials(reason: impl Into<String>) -> Self {
        Self::InvalidCredentials {
            reason: reason.into(),
        }
    }
}
