//! # Category Schema

use serde::{Deserialize, Serialize};

use super::id::DocumentId;

/// A stored category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: DocumentId,

    pub name: String,
}

impl Category {
    pub fn new(details: CategoryDetails) -> Self {
        Self {
            id: DocumentId::new(),
            name: details.name,
        }
    }
}

/// Category body as submitted by clients
///
/// Any `_id` sent by the client is ignored; identifiers are always allocated
/// by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDetails {
    #[serde(default)]
    pub name: String,
}
