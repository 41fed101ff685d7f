//! WebSprix webhook payload mapping
//!
//! WebSprix delivers call events as form payloads with snake_case field
//! names that already match the normalized CallEvent shape.

use std::collections::HashMap;

use dialtone::domain::entities::CallEvent;

/// Map a raw WebSprix form payload into a normalized call event
pub fn parse_webhook(form: &HashMap<String, String>) -> CallEvent {
    CallEvent {
        call_id: get(form, "call_id"),
        status: get(form, "status").unwrap_or_default(),
        from_number: get(form, "from"),
        to_number: get(form, "to"),
        duration: get(form, "duration").and_then(|d| d.parse().ok()),
        recording_url: get(form, "recording_url"),
        start_time: get(form, "start_time"),
        end_time: get(form, "end_time"),
        agent: get(form, "agent"),
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
            ("call_id", "ws-77"),
            ("status", "completed"),
            ("from", "+251911000111"),
            ("to", "+251911000222"),
            ("duration", "180"),
            ("recording_url", "https://pbx/rec/77"),
            ("start_time", "2024-05-01 10:00:00"),
            ("end_time", "2024-05-01 10:03:00"),
            ("agent", "agent@x.com"),
        ]));

        assert_eq!(event.call_id.as_deref(), Some("ws-77"));
        assert_eq!(event.status, "completed");
        assert_eq!(event.from_number.as_deref(), Some("+251911000111"));
        assert_eq!(event.duration, Some(180));
        assert_eq!(event.agent.as_deref(), Some("agent@x.com"));
    }

    #[test]
    fn test_keep_alive_ping() {
        let event = parse_webhook(&form(&[("status", "free")]));
        assert!(event.is_keep_alive());
        assert_eq!(event.call_id, None);
    }
}
