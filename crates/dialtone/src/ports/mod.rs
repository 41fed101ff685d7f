//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer interacts with
//! external systems (repositories, collaborators, provider APIs).
//!
//! Implementations of these traits live in the infrastructure layer.

pub mod provider;
pub mod repositories;
pub mod services;

// Re-exports
pub use provider::*;
pub use repositories::*;
pub use services::*;
