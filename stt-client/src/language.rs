//! Custom language model endpoints

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use stt_core::dto::model::CreateModel;

use crate::SttClient;
use crate::error::Result;

impl SttClient {
    // =============================================================================
    // Language Model Lifecycle
    // =============================================================================

    /// Create a custom language model
    ///
    /// # Example
    /// ```no_run
    /// # use stt_client::{Credentials, SttClient};
    /// # use stt_core::domain::model::CreatedModel;
    /// # use stt_core::dto::model::CreateModel;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = SttClient::new("https://stt.example.com", Credentials::new("apikey", "key"));
    /// let created: CreatedModel = client
    ///     .create_language_model(&CreateModel::new("dictation").with_description("Dictation terms"))
    ///     .await?;
    /// println!("{}", created.customization_id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_language_model<T: DeserializeOwned>(&self, req: &CreateModel) -> Result<T> {
        let url = self.url(&["v1", "customizations"])?;
        let response = self.request(Method::POST, url).json(req).send().await?;

        self.handle_response(response, StatusCode::CREATED).await
    }

    /// List all custom language models of the instance
    pub async fn list_language_models<T: DeserializeOwned>(&self) -> Result<T> {
        let url = self.url(&["v1", "customizations"])?;
        let response = self.request(Method::GET, url).send().await?;

        self.handle_response(response, StatusCode::OK).await
    }

    /// Get a custom language model
    pub async fn get_language_model<T: DeserializeOwned>(&self, customization_id: &str) -> Result<T> {
        let url = self.url(&["v1", "customizations", customization_id])?;
        let response = self.request(Method::GET, url).send().await?;

        self.handle_response(response, StatusCode::OK).await
    }

    /// Delete a custom language model
    pub async fn delete_language_model(&self, customization_id: &str) -> Result<()> {
        let url = self.url(&["v1", "customizations", customization_id])?;
        let response = self.request(Method::DELETE, url).send().await?;

        self.handle_empty_response(response, StatusCode::OK).await
    }

    /// Remove all corpora, grammars and words from a custom language model
    ///
    /// Name, language and base model are preserved.
    pub async fn reset_language_model(&self, customization_id: &str) -> Result<()> {
        let url = self.url(&["v1", "customizations", customization_id, "reset"])?;
        let response = self.request(Method::POST, url).send().await?;

        self.handle_empty_response(response, StatusCode::OK).await
    }

    /// Start training a custom language model on its current resources
    ///
    /// Training runs in the background; the model reports `available` once
    /// it is done.
    pub async fn train_language_model(&self, customization_id: &str) -> Result<()> {
        let url = self.url(&["v1", "customizations", customization_id, "train"])?;
        let response = self.request(Method::POST, url).send().await?;

        self.handle_empty_response(response, StatusCode::OK).await
    }
}
