//! Custom model DTOs

use serde::{Deserialize, Serialize};

/// Base model the original scripts customized
pub const DEFAULT_BASE_MODEL: &str = "en-US_NarrowbandModel";

/// Request to create a custom language or acoustic model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateModel {
    pub name: String,
    pub base_model_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_model_name: DEFAULT_BASE_MODEL.to_string(),
            description: None,
        }
    }

    pub fn with_base_model(mut self, base_model_name: impl Into<String>) -> Self {
        self.base_model_name = base_model_name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_model_body() {
        let req = CreateModel::new("dictation").with_description("My narrowband language model");
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body["name"], "dictation");
        assert_eq!(body["base_model_name"], "en-US_NarrowbandModel");
        assert_eq!(body["description"], "My narrowband language model");
    }

    #[test]
    fn test_description_omitted_when_unset() {
        let body = serde_json::to_value(CreateModel::new("x")).unwrap();
        assert!(body.get("description").is_none());
    }
}
