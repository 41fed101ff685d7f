//! Outbound call placement route

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};

use crate::application::PlaceCallRequest;
use crate::models::{MakeCallRequest, MakeCallResponse};
use crate::{providers, AppState};

pub fn router() -> Router<AppState> {
    Router::new().route("/telephony/:medium/call", post(make_call))
}

/// Place an outbound call through a provider
#[utoipa::path(
    post,
    path = "/telephony/{medium}/call",
    params(
        ("medium" = String, Path, description = "Telephony provider (plivo or websprix)")
    ),
    request_body = MakeCallRequest,
    responses(
        (status = 200, description = "Call placed", body = MakeCallResponse),
        (status = 400, description = "Integration disabled or agent has no mobile number"),
        (status = 404, description = "Unknown provider"),
        (status = 502, description = "Provider rejected the call")
    ),
    tag = "Call"
)]
pub async fn make_call(
    State(state): State<AppState>,
    Path(medium): Path<String>,
    Json(payload): Json<MakeCallRequest>,
) -> Result<Json<MakeCallResponse>, (StatusCode, String)> {
    let medium = super::parse_medium(&medium)?;
    let settings = state
        .settings_service
        .current(medium)
        .await
        .map_err(super::error_response)?;
    let provider = providers::build(medium, &settings, state.http.clone());
    let status_callback = providers::webhook_url(&state.public_url, medium, &settings);

    let placed = state
        .outbound
        .place_call(
            provider.as_ref(),
            &settings,
            &status_callback,
            PlaceCallRequest {
                agent: payload.agent,
                to_number: payload.to_number,
                from_number: payload.from_number,
                caller_id: payload.caller_id,
            },
        )
        .await
        .map_err(super::error_response)?;

    // Clients key on call_id regardless of provider response shape.
    let mut raw = placed.raw;
    if let Some(map) = raw.as_object_mut() {
        map.insert(
            "call_id".to_string(),
            serde_json::Value::String(placed.call_id.clone()),
        );
    }

    Ok(Json(MakeCallResponse {
        call_id: placed.call_id,
        raw,
    }))
}
