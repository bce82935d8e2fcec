//! Custom acoustic model endpoints

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use stt_core::dto::model::CreateModel;

use crate::SttClient;
use crate::error::Result;

impl SttClient {
    /// Create a custom acoustic model
    pub async fn create_acoustic_model<T: DeserializeOwned>(&self, req: &CreateModel) -> Result<T> {
        let url = self.url(&["v1", "acoustic_customizations"])?;
        let response = self.request(Method::POST, url).json(req).send().await?;

        self.handle_response(response, StatusCode::CREATED).await
    }

    /// List all custom acoustic models of the instance
    pub async fn list_acoustic_models<T: DeserializeOwned>(&self) -> Result<T> {
        let url = self.url(&["v1", "acoustic_customizations"])?;
        let response = self.request(Method::GET, url).send().await?;

        self.handle_response(response, StatusCode::OK).await
    }

    /// Get a custom acoustic model
    pub async fn get_acoustic_model<T: DeserializeOwned>(&self, customization_id: &str) -> Result<T> {
        let url = self.url(&["v1", "acoustic_customizations", customization_id])?;
        let response = self.request(Method::GET, url).send().await?;

        self.handle_response(response, StatusCode::OK).await
    }

    /// Delete a custom acoustic model
    pub async fn delete_acoustic_model(&self, customization_id: &str) -> Result<()> {
        let url = self.url(&["v1", "acoustic_customizations", customization_id])?;
        let response = self.request(Method::DELETE, url).send().await?;

        self.handle_empty_response(response, StatusCode::OK).await
    }

    /// Start training a custom acoustic model on its audio resources
    ///
    /// # Arguments
    /// * `customization_id` - The acoustic model to train
    /// * `language_customization_id` - Optional custom language model to
    ///   train against, recommended when the audio is domain specific
    pub async fn train_acoustic_model(
        &self,
        customization_id: &str,
        language_customization_id: Option<&str>,
    ) -> Result<()> {
        let url = self.url(&["v1", "acoustic_customizations", customization_id, "train"])?;
        let mut request = self.request(Method::POST, url);
        if let Some(language_id) = language_customization_id {
            request = request.query(&[("custom_language_model_id", language_id)]);
        }
        let response = request.send().await?;

        self.handle_empty_response(response, StatusCode::OK).await
    }
}
