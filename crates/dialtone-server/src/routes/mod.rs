//! Telephony API Routes
//!
//! - /telephony/:medium/webhook - Provider call-event callbacks (key auth)
//! - /telephony/:medium/call - Outbound call placement
//! - /telephony/:medium/settings - Integration configuration
//! - /telephony/:medium/status - Enabled/disabled gate for clients
//! - /telephony/calls/:id - Call log reads
//! - /telephony/contacts - Phone-number resolution
//! - /telephony/queue - Agent queue membership
//! - /telephony/websprix/* - PBX extras (softphone settings, transfers)
//! - /telephony/events - Live call event stream (SSE)

pub mod call;
pub mod calls;
pub mod contact;
pub mod events;
pub mod queue;
pub mod settings;
pub mod swagger;
pub mod webhook;
pub mod websprix;

use std::str::FromStr;

use axum::http::StatusCode;

use dialtone::domain::errors::TelephonyError;
use dialtone::domain::value_objects::Medium;

/// Parse the medium path segment; unknown providers are a 404
pub(crate) fn parse_medium(raw: &str) -> Result<Medium, (StatusCode, String)> {
    Medium::from_str(raw).map_err(|e| (StatusCode::NOT_FOUND, e))
}

/// Map a domain error to an HTTP response.
///
/// Provider-originated messages can echo response bodies, so they are
/// HTML-escaped before being shown to clients.
pub(crate) fn error_response(error: TelephonyError) -> (StatusCode, String) {
    match error {
        TelephonyError::Unauthorized => (StatusCode::UNAUTHORIZED, error.to_string()),
        TelephonyError::NotFound { .. } => (StatusCode::NOT_FOUND, error.to_string()),
        TelephonyError::IntegrationDisabled(_)
        | TelephonyError::MissingMobileNumber
        | TelephonyError::Validation(_) => (StatusCode::BAD_REQUEST, error.to_string()),
        TelephonyError::InvalidCredentials { .. } => {
            (StatusCode::BAD_REQUEST, escape_html(&error.to_string()))
        }
        TelephonyError::Provider(_) => (StatusCode::BAD_GATEWAY, escape_html(&error.to_string())),
        TelephonyError::Repository(_) | TelephonyError::ExternalService(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
        }
    }
}

/// Minimal HTML escaping for messages that may embed provider output
pub(crate) fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_medium_is_not_found() {
        assert_eq!(parse_medium("twilio").unwrap_err().0, StatusCode::NOT_FOUND);
        assert_eq!(parse_medium("plivo").unwrap(), Medium::Plivo);
    }

    #[test]
    fn test_provider_errors_are_escaped() {
        let (status, body) =
            error_response(TelephonyError::Provider("<script>alert(1)</script>".into()));
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body.contains("&lt;script&gt;"));
        assert!(!body.contains("<script>"));
    }

    #[test]
    fn test_disabled_is_a_client_error() {
        let (status, _) = error_response(TelephonyError::IntegrationDisabled(Medium::Plivo));
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
