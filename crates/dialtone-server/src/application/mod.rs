//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between repositories,
//! collaborators, and provider APIs.

mod outbound;
mod reconciler;
mod settings;

#[cfg(test)]
pub(crate) mod testing;

pub use outbound::{OutboundCaller, PlaceCallRequest};
pub use reconciler::{ReconcileOutcome, Reconciler};
pub use settings::SettingsService;
