//! Infrastructure adapters

pub mod broadcast;
pub mod postgres;

pub use broadcast::{BroadcastEvent, BroadcastHub};
pub use postgres::{
    PgAgentDirectory, PgCallLogRepository, PgContactLinker, PgIntegrationSettingsRepository,
    PgQueuePresence, PgRequestAuditRepository,
};
