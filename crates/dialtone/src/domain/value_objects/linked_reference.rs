//! LinkedReference - CRM entity attached to a call log

use serde::{Deserialize, Serialize};

/// Kind of CRM record a call can be linked to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LinkedEntity {
    Contact,
    Lead,
    Deal,
}

impl std::fmt::Display for LinkedEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkedEntity::Contact => write!(f, "Contact"),
            LinkedEntity::Lead => write!(f, "Lead"),
            LinkedEntity::Deal => write!(f, "Deal"),
        }
    }
}

impl std::str::FromStr for LinkedEntity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Contact" => Ok(LinkedEntity::Contact),
            "Lead" => Ok(LinkedEntity::Lead),
            "Deal" => Ok(LinkedEntity::Deal),
            _ => Err(format!("Unknown linked entity: {}", s)),
        }
    }
}

/// Reference to the CRM record resolved from the call's counterparty number
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkedReference {
    pub entity: LinkedEntity,
    pub id: String,
}

impl LinkedReference {
    pub fn new(entity: LinkedEntity, id: impl Into<String>) -> Self {
        Self {
            entity,
            id: id.into(),
        }
    }
}

/// Result of resolving a phone number against the CRM
///
/// At most one of the three is used for linking; a lead or deal attached
/// to the contact takes precedence over the bare contact record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactMatch {
    pub name: Option<String>,
    pub lead: Option<String>,
    pub deal: Option<String>,
}

impl ContactMatch {
    /// No contact resolved for the number
    pub fn none() -> Self {
        Self::default()
    }

    /// The reference a call log should be linked with, if any
    pub fn reference(&self) -> Option<LinkedReference> {
        let name = self.name.as_ref()?;
        if let Some(lead) = &self.lead {
            Some(LinkedReference::new(LinkedEntity::Lead, lead))
        } else if let Some(deal) = &self.deal {
            Some(LinkedReference::new(LinkedEntity::Deal, deal))
        } else {
            Some(LinkedReference::new(LinkedEntity::Contact, name))
        }
    }
}
