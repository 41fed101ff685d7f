//! Dialtone Domain Library
//!
//! Core domain types and interfaces for the Dialtone CRM telephony
//! integration service.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (CallLog, CallEvent, RequestAudit,
//!     IntegrationSettings)
//!   - `value_objects/`: Immutable value types (CallStatus, Medium,
//!     CallDirection, LinkedReference)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `services/`: External collaborator interfaces
//!   - `provider`: Telephony provider API interface
//!
//! # Usage
//!
//! ```rust,ignore
//! use dialtone::domain::{CallLog, CallStatus, Medium};
//! use dialtone::ports::{CallLogRepository, TelephonyProvider};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    AuditStatus, CallDirection, CallEvent, CallLog, CallStatus, ContactMatch, IntegrationSettings,
    LinkedEntity, LinkedReference, Medium, RequestAudit, TelephonyError, KEEP_ALIVE_STATUS,
};
pub use ports::{
    AgentDirectory, CallLogRepository, ContactLinker, EventBroadcast,
    IntegrationSettingsRepository, PlacedCall, QueueMembership, QueuePresence,
    RequestAuditRepository, TelephonyProvider,
};
