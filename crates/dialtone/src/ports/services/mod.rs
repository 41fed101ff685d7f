//! Service Ports
//!
//! External collaborator interfaces the domain depends on.

mod agent_directory;
mod contact_linker;
mod event_broadcast;
mod queue_presence;

pub use agent_directory::*;
pub use contact_linker::*;
pub use event_broadcast::*;
pub use queue_presence::*;
