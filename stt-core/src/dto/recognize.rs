//! Recognition request parameters

use crate::domain::audio::AudioFormat;

use super::model::DEFAULT_BASE_MODEL;

/// Query parameters and content type of a `POST /v1/recognize` call
#[derive(Debug, Clone)]
pub struct RecognizeRequest {
    pub model: String,
    pub format: AudioFormat,
    pub language_customization_id: Option<String>,
    pub acoustic_customization_id: Option<String>,
}

impl RecognizeRequest {
    pub fn new(format: AudioFormat) -> Self {
        Self {
            model: DEFAULT_BASE_MODEL.to_string(),
            format,
            language_customization_id: None,
            acoustic_customization_id: None,
        }
    }

    /// Query string pairs, skipping customizations that are not set
    pub fn query(&self) -> Vec<(&'static str, &str)> {
        let mut query = vec![("model", self.model.as_str())];
        if let Some(id) = &self.language_customization_id {
            query.push(("language_customization_id", id.as_str()));
        }
        if let Some(id) = &self.acoustic_customization_id {
            query.push(("acoustic_customization_id", id.as_str()));
        }
        query
    }
}
