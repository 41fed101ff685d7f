//! CallDirection - Incoming vs. outgoing

use serde::{Deserialize, Serialize};

/// Direction of a call from the CRM's point of view
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CallDirection {
    Incoming,
    Outgoing,
}

impl std::fmt::Display for CallDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CallDirection::Incoming => write!(f, "Incoming"),
            CallDirection::Outgoing => write!(f, "Outgoing"),
        }
    }
}

impl std::str::FromStr for CallDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Incoming" => Ok(CallDirection::Incoming),
            "Outgoing" => Ok(CallDirection::Outgoing),
            _ => Err(format!("Unknown call direction: {}", s)),
        }
    }
}
