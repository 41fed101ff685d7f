//! WebSprix PBX extras
//!
//! Endpoints outside the shared provider trait: softphone registration
//! details for an agent's extension and the extension list used to
//! offer call transfers.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use dialtone::domain::value_objects::Medium;
use dialtone_integration_websprix::{WebSprixConfig, WebSprixIntegration};

use crate::models::{TransferTargetsResponse, UserSettingsQuery, UserSettingsResponse};
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/telephony/websprix/user-settings", get(user_settings))
        .route("/telephony/websprix/transfer-targets", get(transfer_targets))
}

async fn integration(state: &AppState) -> Result<WebSprixIntegration, (StatusCode, String)> {
    let settings = state
        .settings_service
        .current(Medium::WebSprix)
        .await
        .map_err(super::error_response)?;
    Ok(WebSprixIntegration::with_http(
        WebSprixConfig::from_settings(&settings),
        state.http.clone(),
    ))
}

/// Softphone registration details for an agent's extension
#[utoipa::path(
    get,
    path = "/telephony/websprix/user-settings",
    params(
        ("agent" = String, Query, description = "Agent (CRM user)")
    ),
    responses(
        (status = 200, description = "Registration details; null when the agent has no extension", body = UserSettingsResponse)
    ),
    tag = "WebSprix"
)]
pub async fn user_settings(
    State(state): State<AppState>,
    Query(query): Query<UserSettingsQuery>,
) -> Result<Json<UserSettingsResponse>, (StatusCode, String)> {
    let integration = integration(&state).await?;
    let extension = state
        .agents
        .provider_number(&query.agent, Medium::WebSprix)
        .await
        .map_err(super::error_response)?;

    let ip_info = match &extension {
        Some(ext) => integration
            .client()
            .get_ip_info(ext)
            .await
            .map_err(super::error_response)?,
        None => None,
    };

    Ok(Json(UserSettingsResponse { extension, ip_info }))
}

/// Extensions available as transfer targets
#[utoipa::path(
    get,
    path = "/telephony/websprix/transfer-targets",
    responses(
        (status = 200, description = "Extension list; null when the PBX API is not configured", body = TransferTargetsResponse)
    ),
    tag = "WebSprix"
)]
pub async fn transfer_targets(
    State(state): State<AppState>,
) -> Result<Json<TransferTargetsResponse>, (StatusCode, String)> {
    let integration = integration(&state).await?;
    let targets = integration
        .client()
        .fetch_transfer_targets()
        .await
        .map_err(super::error_response)?;

    Ok(Json(TransferTargetsResponse { targets }))
}
