//! Repository Ports
//!
//! Data access interfaces. Implementations live in the infrastructure
//! layer (dialtone-server adapters).

mod audit_repository;
mod call_log_repository;
mod settings_repository;

pub use audit_repository::*;
pub use call_log_repository::*;
pub use settings_repository::*;
