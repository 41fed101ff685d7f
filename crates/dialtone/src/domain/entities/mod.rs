//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - CallLog: persistent record of one call's lifecycle
//! - CallEvent: normalized inbound webhook payload
//! - RequestAudit: audit trail for inbound integration requests
//! - IntegrationSettings: per-provider configuration

mod audit;
mod call_event;
mod call_log;
mod settings;

pub use audit::*;
pub use call_event::*;
pub use call_log::*;
pub use settings::*;
