//! Contact resolution DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use dialtone::domain::value_objects::ContactMatch;

/// Phone-number lookup query
#[derive(Debug, Deserialize, ToSchema)]
pub struct ContactQuery {
    pub phone: String,
}

/// CRM records resolved from a phone number
#[derive(Debug, Serialize, ToSchema)]
pub struct ContactMatchResponse {
    pub name: Option<String>,
    pub lead: Option<String>,
    pub deal: Option<String>,
    /// The entity a call from this number would be linked to
    pub reference_entity: Option<String>,
    pub reference_id: Option<String>,
}

impl From<ContactMatch> for ContactMatchResponse {
    fn from(m: ContactMatch) -> Self {
        let (reference_entity, reference_id) = match m.reference() {
            Some(r) => (Some(r.entity.to_string()), Some(r.id)),
            None => (None, None),
        };
        Self {
            name: m.name,
            lead: m.lead,
            deal: m.deal,
            reference_entity,
            reference_id,
        }
    }
}
