//! Custom model domain types
//!
//! Language and acoustic customizations share the same document shape, so a
//! single [`CustomModel`] covers both.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::status::ModelStatus;

/// A custom language or acoustic model owned by the service instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomModel {
    pub customization_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub base_model_name: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub dialect: Option<String>,
    pub status: ModelStatus,
    /// Training progress in percent, only meaningful while training
    #[serde(default)]
    pub progress: u32,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub warnings: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Response of `GET /v1/customizations` and `GET /v1/acoustic_customizations`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomModels {
    #[serde(default)]
    pub customizations: Vec<CustomModel>,
}

/// Response of a create call: only the new identifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedModel {
    pub customization_id: String,
}

/// A base model offered by the service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseModel {
    pub name: String,
    #[serde(default)]
    pub language: Option<String>,
    /// Sampling rate in Hz
    #[serde(default)]
    pub rate: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub supported_features: SupportedFeatures,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SupportedFeatures {
    #[serde(default)]
    pub custom_language_model: bool,
    #[serde(default)]
    pub custom_acoustic_model: bool,
    #[serde(default)]
    pub speaker_labels: bool,
}

/// Response of `GET /v1/models`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BaseModels {
    #[serde(default)]
    pub models: Vec<BaseModel>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_customization_list() {
        let body = r#"{
            "customizations": [{
                "customization_id": "74f4807e-b5ff-4866-824e-6bba1a84fe96",
                "created": "2016-06-01T18:51:37.291Z",
                "language": "en-US",
                "dialect": "en-US",
                "owner": "297cfd08-330a-22ba-93ce-1a73f454dd98",
                "name": "Example model",
                "description": "Example custom language model",
                "base_model_name": "en-US_NarrowbandModel",
                "status": "training",
                "progress": 40
            }]
        }"#;

        let models: CustomModels = serde_json::from_str(body).unwrap();
        assert_eq!(models.customizations.len(), 1);
        let model = &models.customizations[0];
        assert_eq!(model.status, ModelStatus::Training);
        assert_eq!(model.progress, 40);
        assert!(model.created.is_some());
    }

    #[test]
    fn test_parse_base_models() {
        let body = r#"{"models": [{
            "name": "en-US_NarrowbandModel",
            "language": "en-US",
            "rate": 8000,
            "supported_features": {"custom_language_model": true, "speaker_labels": true}
        }]}"#;

        let models: BaseModels = serde_json::from_str(body).unwrap();
        assert_eq!(models.models[0].rate, Some(8000));
        assert!(models.models[0].supported_features.custom_language_model);
        assert!(!models.models[0].supported_features.custom_acoustic_model);
    }
}
