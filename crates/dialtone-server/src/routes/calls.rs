//! Call log read routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use dialtone::domain::errors::TelephonyError;

use crate::models::CallLogResponse;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/telephony/calls/:id", get(get_call))
}

/// Fetch one call log by provider call id
#[utoipa::path(
    get,
    path = "/telephony/calls/{id}",
    params(
        ("id" = String, Path, description = "Provider-assigned call id")
    ),
    responses(
        (status = 200, description = "Call log found", body = CallLogResponse),
        (status = 404, description = "No call log for this id")
    ),
    tag = "Call"
)]
pub async fn get_call(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CallLogResponse>, (StatusCode, String)> {
    let log = state
        .call_logs
        .find_by_id(&id)
        .await
        .map_err(super::error_response)?
        .ok_or_else(|| super::error_response(TelephonyError::not_found("call log", &id)))?;
    Ok(Json(CallLogResponse::from(log)))
}
