//! Integration settings routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::models::{IntegrationStatusResponse, SettingsResponse, UpdateSettingsRequest};
use crate::{providers, AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/telephony/:medium/settings",
            get(get_settings).put(update_settings),
        )
        .route("/telephony/:medium/status", get(get_status))
}

/// Current settings for a provider, secrets masked
#[utoipa::path(
    get,
    path = "/telephony/{medium}/settings",
    params(
        ("medium" = String, Path, description = "Telephony provider (plivo or websprix)")
    ),
    responses(
        (status = 200, description = "Current settings", body = SettingsResponse),
        (status = 404, description = "Unknown provider")
    ),
    tag = "Settings"
)]
pub async fn get_settings(
    State(state): State<AppState>,
    Path(medium): Path<String>,
) -> Result<Json<SettingsResponse>, (StatusCode, String)> {
    let medium = super::parse_medium(&medium)?;
    let settings = state
        .settings_service
        .current(medium)
        .await
        .map_err(super::error_response)?;
    Ok(Json(SettingsResponse::from(settings)))
}

/// Save settings, verifying credentials against the provider when enabled
#[utoipa::path(
    put,
    path = "/telephony/{medium}/settings",
    params(
        ("medium" = String, Path, description = "Telephony provider (plivo or websprix)")
    ),
    request_body = UpdateSettingsRequest,
    responses(
        (status = 200, description = "Settings saved", body = SettingsResponse),
        (status = 400, description = "Credential verification failed"),
        (status = 404, description = "Unknown provider")
    ),
    tag = "Settings"
)]
pub async fn update_settings(
    State(state): State<AppState>,
    Path(medium): Path<String>,
    Json(payload): Json<UpdateSettingsRequest>,
) -> Result<Json<SettingsResponse>, (StatusCode, String)> {
    let medium = super::parse_medium(&medium)?;
    let candidate = payload.into_settings(medium);
    // Verification must run against the credentials being saved.
    let provider = providers::build(medium, &candidate, state.http.clone());

    let saved = state
        .settings_service
        .update(provider.as_ref(), candidate)
        .await
        .map_err(super::error_response)?;
    Ok(Json(SettingsResponse::from(saved)))
}

/// Whether an integration is enabled
#[utoipa::path(
    get,
    path = "/telephony/{medium}/status",
    params(
        ("medium" = String, Path, description = "Telephony provider (plivo or websprix)")
    ),
    responses(
        (status = 200, description = "Integration status", body = IntegrationStatusResponse),
        (status = 404, description = "Unknown provider")
    ),
    tag = "Settings"
)]
pub async fn get_status(
    State(state): State<AppState>,
    Path(medium): Path<String>,
) -> Result<Json<IntegrationStatusResponse>, (StatusCode, String)> {
    let medium = super::parse_medium(&medium)?;
    let enabled = state
        .settings_service
        .is_enabled(medium)
        .await
        .map_err(super::error_response)?;
    Ok(Json(IntegrationStatusResponse {
        medium: medium.to_string(),
        enabled,
    }))
}
