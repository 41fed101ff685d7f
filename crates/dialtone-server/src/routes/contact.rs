//! Contact resolution route

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::models::{ContactMatchResponse, ContactQuery};
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/telephony/contacts", get(lookup_contact))
}

/// Resolve a phone number to its CRM records
#[utoipa::path(
    get,
    path = "/telephony/contacts",
    params(
        ("phone" = String, Query, description = "Phone number to resolve")
    ),
    responses(
        (status = 200, description = "Resolution result; all fields null on a miss", body = ContactMatchResponse)
    ),
    tag = "Contact"
)]
pub async fn lookup_contact(
    State(state): State<AppState>,
    Query(query): Query<ContactQuery>,
) -> Result<Json<ContactMatchResponse>, (StatusCode, String)> {
    let matched = state
        .linker
        .lookup_by_phone(&query.phone)
        .await
        .map_err(super::error_response)?;
    Ok(Json(ContactMatchResponse::from(matched)))
}
