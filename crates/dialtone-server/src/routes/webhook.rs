//! Provider webhook routes
//!
//! These are the only unauthenticated routes; each delivery carries the
//! integration's verify key as a query parameter instead.

use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::post,
    Form, Json, Router,
};

use crate::application::ReconcileOutcome;
use crate::models::{WebhookAck, WebhookQuery};
use crate::{providers, AppState};

pub fn router() -> Router<AppState> {
    Router::new().route("/telephony/:medium/webhook", post(handle_webhook))
}

/// Receive a call event from a provider
#[utoipa::path(
    post,
    path = "/telephony/{medium}/webhook",
    params(
        ("medium" = String, Path, description = "Telephony provider (plivo or websprix)"),
        ("key" = Option<String>, Query, description = "Webhook verify key")
    ),
    responses(
        (status = 200, description = "Event acknowledged", body = WebhookAck),
        (status = 401, description = "Missing or invalid verify key"),
        (status = 404, description = "Unknown provider")
    ),
    tag = "Webhook"
)]
pub async fn handle_webhook(
    State(state): State<AppState>,
    Path(medium): Path<String>,
    Query(query): Query<WebhookQuery>,
    Form(form): Form<HashMap<String, String>>,
) -> Result<Json<WebhookAck>, (StatusCode, String)> {
    let medium = super::parse_medium(&medium)?;
    let settings = state
        .settings_service
        .current(medium)
        .await
        .map_err(super::error_response)?;
    let provider = providers::build(medium, &settings, state.http.clone());

    let outcome = state
        .reconciler
        .handle_event(provider.as_ref(), &settings, query.key.as_deref(), &form)
        .await
        .map_err(super::error_response)?;

    let outcome = match outcome {
        ReconcileOutcome::Created(_) => "created",
        ReconcileOutcome::Updated(_) => "updated",
        ReconcileOutcome::KeepAlive => "keep_alive",
        ReconcileOutcome::Disabled => "disabled",
        ReconcileOutcome::Failed => "failed",
    };

    Ok(Json(WebhookAck {
        ok: true,
        outcome: outcome.to_string(),
    }))
}
