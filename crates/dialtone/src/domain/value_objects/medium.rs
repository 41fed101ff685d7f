//! Medium - Telephony provider identity

use serde::{Deserialize, Serialize};

/// Telephony provider a call was carried over
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Medium {
    Plivo,
    WebSprix,
}

impl Medium {
    /// Realtime channel name for this provider's call events
    pub fn event_channel(&self) -> &'static str {
        match self {
            Medium::Plivo => "plivo_call",
            Medium::WebSprix => "websprix_call",
        }
    }

    /// Lowercase identifier used in URLs and storage
    pub fn slug(&self) -> &'static str {
        match self {
            Medium::Plivo => "plivo",
            Medium::WebSprix => "websprix",
        }
    }
}

impl std::fmt::Display for Medium {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Medium::Plivo => write!(f, "Plivo"),
            Medium::WebSprix => write!(f, "WebSprix"),
        }
    }
}

impl std::str::FromStr for Medium {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plivo" => Ok(Medium::Plivo),
            "websprix" => Ok(Medium::WebSprix),
            _ => Err(format!("Unknown telephony medium: {}", s)),
        }
    }
}
