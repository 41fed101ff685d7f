//! Bearer-token gate for the CRM-facing routes
//!
//! The service key is part of server configuration and travels as
//! middleware state. Provider webhook routes sit outside this gate and
//! authenticate with their per-integration verify key instead.

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
};

/// Service API key, as middleware state. `None` or empty means the
/// deployment runs open (local development).
#[derive(Clone)]
pub struct ApiKey(pub Option<String>);

impl ApiKey {
    fn required(&self) -> Option<&str> {
        self.0.as_deref().filter(|key| !key.is_empty())
    }
}

/// Reject requests whose bearer token does not match the service key
pub async fn require_api_key(
    State(key): State<ApiKey>,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let Some(expected) = key.required() else {
        return Ok(next.run(request).await);
    };

    let supplied = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    match supplied {
        Some(token) if token == expected => Ok(next.run(request).await),
        Some(_) => {
            tracing::warn!("Rejected request: bearer token does not match service key");
            Err(StatusCode::UNAUTHORIZED)
        }
        None => {
            tracing::warn!("Rejected request: no bearer token");
            Err(StatusCode::UNAUTHORIZED)
        }
    }
}
