//! PostgreSQL adapters for the domain ports

pub mod agent_directory;
pub mod audit_repository;
pub mod call_log_repository;
pub mod contact_linker;
pub mod queue_presence;
pub mod settings_repository;

pub use agent_directory::PgAgentDirectory;
pub use audit_repository::PgRequestAuditRepository;
pub use call_log_repository::PgCallLogRepository;
pub use contact_linker::PgContactLinker;
pub use queue_presence::PgQueuePresence;
pub use settings_repository::PgIntegrationSettingsRepository;
