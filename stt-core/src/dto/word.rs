//! Custom word DTOs

use serde::{Deserialize, Serialize};

/// Body of `PUT /v1/customizations/{id}/words/{word}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddWord {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sounds_like: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_as: Option<String>,
}
