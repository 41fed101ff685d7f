//! Plivo webhook payload mapping
//!
//! Plivo delivers call events as form payloads with PascalCase field
//! names (CallUUID, CallStatus, ...). This maps them into the
//! provider-agnostic CallEvent.

use std::collections::HashMap;

use dialtone::domain::entities::CallEvent;

/// Map a raw Plivo form payload into a normalized call event
pub fn parse_webhook(form: &HashMap<String, String>) -> CallEvent {
    CallEvent {
        call_id: get(form, "CallUUID"),
        status: get(form, "CallStatus").unwrap_or_default(),
        from_number: get(form, "From"),
        to_number: get(form, "To"),
        duration: get(form, "Duration").and_then(|d| d.parse().ok()),
        recording_url: get(form, "RecordingUrl"),
        start_time: get(form, "StartTime"),
        end_time: get(form, "EndTime"),
        agent: get(form, "AgentEmail"),
    }
}

fn get(form: &HashMap<String, String>, key: &str) -> Option<String> {
    form.get(key).filter(|v| !v.is_empty()).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_full_payload() {
        let event = parse_webhook(&form(&[
            ("CallUUID", "uuid-1"),
            ("CallStatus", "in-progress"),
            ("From", "+15551230000"),
            ("To", "+15557779999"),
            ("Duration", "42"),
            ("RecordingUrl", "https://r/1"),
            ("StartTime", "2024-05-01 10:00:00"),
            ("EndTime", "2024-05-01 10:00:42"),
            ("AgentEmail", "agent@x.com"),
        ]));

        assert_eq!(event.call_id.as_deref(), Some("uuid-1"));
        assert_eq!(event.status, "in-progress");
        assert_eq!(event.from_number.as_deref(), Some("+15551230000"));
        assert_eq!(event.to_number.as_deref(), Some("+15557779999"));
        assert_eq!(event.duration, Some(42));
        assert_eq!(event.recording_url.as_deref(), Some("https://r/1"));
        assert_eq!(event.agent.as_deref(), Some("agent@x.com"));
    }

    #[test]
    fn test_parse_sparse_payload() {
        let event = parse_webhook(&form(&[("CallUUID", "uuid-2"), ("CallStatus", "busy")]));
        assert_eq!(event.call_id.as_deref(), Some("uuid-2"));
        assert_eq!(event.status, "busy");
        assert_eq!(event.duration, None);
        assert_eq!(event.agent, None);
    }

    #[test]
    fn test_keep_alive_ping() {
        let event = parse_webhook(&form(&[("CallStatus", "free")]));
        assert!(event.is_keep_alive());
    }
}
