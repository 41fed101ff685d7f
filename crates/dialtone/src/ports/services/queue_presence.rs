//! Queue Presence Port
//!
//! Ephemeral membership of agents in the provider's inbound call queue,
//! keyed by user. Backed by an external key-value collaborator rather
//! than in-process shared state.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::errors::TelephonyError;

/// An agent's current queue membership
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueueMembership {
    pub joined: bool,
    pub queue_id: Option<String>,
}

/// Queue membership interface
#[async_trait]
pub trait QueuePresence: Send + Sync {
    /// Add an agent to the inbound call queue
    async fn join(&self, user: &str, queue_id: &str) -> Result<(), TelephonyError>;

    /// Remove an agent from the queue; a no-op when not joined
    async fn leave(&self, user: &str) -> Result<(), TelephonyError>;

    /// Current membership for an agent
    async fn status(&self, user: &str) -> Result<QueueMembership, TelephonyError>;
}
