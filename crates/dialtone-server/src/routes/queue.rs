//! Agent queue membership routes
//!
//! Joining requires the integration to have a queue configured; leaving
//! and status work regardless so agents can always back out.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use dialtone::domain::errors::TelephonyError;

use crate::models::{QueueActionRequest, QueueStatusResponse};
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/telephony/:medium/queue/join", post(join_queue))
        .route("/telephony/:medium/queue/leave", post(leave_queue))
        .route("/telephony/:medium/queue/status", get(queue_status))
}

/// Add an agent to the provider's inbound call queue
#[utoipa::path(
    post,
    path = "/telephony/{medium}/queue/join",
    params(
        ("medium" = String, Path, description = "Telephony provider (plivo or websprix)")
    ),
    request_body = QueueActionRequest,
    responses(
        (status = 200, description = "Agent joined", body = QueueStatusResponse),
        (status = 400, description = "No queue configured for this integration"),
        (status = 404, description = "Unknown provider")
    ),
    tag = "Queue"
)]
pub async fn join_queue(
    State(state): State<AppState>,
    Path(medium): Path<String>,
    Json(payload): Json<QueueActionRequest>,
) -> Result<Json<QueueStatusResponse>, (StatusCode, String)> {
    let medium = super::parse_medium(&medium)?;
    let settings = state
        .settings_service
        .current(medium)
        .await
        .map_err(super::error_response)?;
    let queue_id = settings.queue_id.filter(|q| !q.is_empty()).ok_or_else(|| {
        super::error_response(TelephonyError::Validation(
            "No agent queue configured for this integration".to_string(),
        ))
    })?;

    state
        .queue
        .join(&payload.agent, &queue_id)
        .await
        .map_err(super::error_response)?;

    Ok(Json(QueueStatusResponse {
        joined: true,
        queue_id: Some(queue_id),
    }))
}

/// Remove an agent from the queue; a no-op when not joined
#[utoipa::path(
    post,
    path = "/telephony/{medium}/queue/leave",
    params(
        ("medium" = String, Path, description = "Telephony provider (plivo or websprix)")
    ),
    request_body = QueueActionRequest,
    responses(
        (status = 200, description = "Agent left", body = QueueStatusResponse),
        (status = 404, description = "Unknown provider")
    ),
    tag = "Queue"
)]
pub async fn leave_queue(
    State(state): State<AppState>,
    Path(medium): Path<String>,
    Json(payload): Json<QueueActionRequest>,
) -> Result<Json<QueueStatusResponse>, (StatusCode, String)> {
    super::parse_medium(&medium)?;
    state
        .queue
        .leave(&payload.agent)
        .await
        .map_err(super::error_response)?;

    Ok(Json(QueueStatusResponse {
        joined: false,
        queue_id: None,
    }))
}

/// An agent's current queue membership
#[utoipa::path(
    get,
    path = "/telephony/{medium}/queue/status",
    params(
        ("medium" = String, Path, description = "Telephony provider (plivo or websprix)"),
        ("agent" = String, Query, description = "Agent (CRM user)")
    ),
    responses(
        (status = 200, description = "Membership state", body = QueueStatusResponse),
        (status = 404, description = "Unknown provider")
    ),
    tag = "Queue"
)]
pub async fn queue_status(
    State(state): State<AppState>,
    Path(medium): Path<String>,
    Query(payload): Query<QueueActionRequest>,
) -> Result<Json<QueueStatusResponse>, (StatusCode, String)> {
    super::parse_medium(&medium)?;
    let membership = state
        .queue
        .status(&payload.agent)
        .await
        .map_err(super::error_response)?;

    Ok(Json(QueueStatusResponse {
        joined: membership.joined,
        queue_id: membership.queue_id,
    }))
}
