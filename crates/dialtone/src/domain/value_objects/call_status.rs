//! CallStatus - Canonical call state vocabulary
//!
//! Providers report call state with their own raw strings; the CRM stores
//! a single canonical vocabulary. Unknown raw values are carried through
//! unchanged so nothing a provider sends is ever lost.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Raw provider status meaning "no active call" - a periodic keep-alive
/// ping, not a call event.
pub const KEEP_ALIVE_STATUS: &str = "free";

/// Canonical call status used throughout the CRM
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallStatus {
    Ringing,
    InProgress,
    Completed,
    NoAnswer,
    Failed,
    /// Raw provider status with no canonical mapping, passed through unchanged
    Other(String),
}

impl CallStatus {
    /// Map a raw provider status string to the canonical vocabulary.
    ///
    /// Both Plivo and WebSprix use the same raw strings. A raw `busy` is
    /// recorded as Ringing.
    pub fn normalize(raw: &str) -> Self {
        match raw {
            "completed" => CallStatus::Completed,
            "in-progress" => CallStatus::InProgress,
            "busy" => CallStatus::Ringing,
            "no-answer" => CallStatus::NoAnswer,
            "failed" => CallStatus::Failed,
            other => CallStatus::Other(other.to_string()),
        }
    }

    /// Whether this status ends a call's lifecycle
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            CallStatus::Completed | CallStatus::NoAnswer | CallStatus::Failed
        )
    }
}

impl Default for CallStatus {
    fn default() -> Self {
        CallStatus::Ringing
    }
}

impl std::fmt::Display for CallStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CallStatus::Ringing => write!(f, "Ringing"),
            CallStatus::InProgress => write!(f, "In Progress"),
            CallStatus::Completed => write!(f, "Completed"),
            CallStatus::NoAnswer => write!(f, "No Answer"),
            CallStatus::Failed => write!(f, "Failed"),
            CallStatus::Other(raw) => write!(f, "{}", raw),
        }
    }
}

impl std::str::FromStr for CallStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Ringing" => CallStatus::Ringing,
            "In Progress" => CallStatus::InProgress,
            "Completed" => CallStatus::Completed,
            "No Answer" => CallStatus::NoAnswer,
            "Failed" => CallStatus::Failed,
            other => CallStatus::Other(other.to_string()),
        })
    }
}

impl Serialize for CallStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CallStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().expect("CallStatus parse is infallible"))
    }
}
