//! Corpus endpoints of a custom language model

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;

use crate::SttClient;
use crate::error::Result;

impl SttClient {
    /// Add a plain-text corpus to a custom language model
    ///
    /// The service analyzes the corpus in the background; its status stays
    /// `being_processed` until the out-of-vocabulary words are extracted.
    /// No other corpus or word can be added to the model meanwhile.
    ///
    /// # Arguments
    /// * `customization_id` - The language model to extend
    /// * `corpus_name` - Name the corpus is stored under
    /// * `text` - Corpus content
    /// * `allow_overwrite` - Replace an existing corpus of the same name
    ///   instead of failing
    pub async fn add_corpus(
        &self,
        customization_id: &str,
        corpus_name: &str,
        text: Vec<u8>,
        allow_overwrite: bool,
    ) -> Result<()> {
        let url = self.url(&["v1", "customizations", customization_id, "corpora", corpus_name])?;
        let response = self
            .request(Method::POST, url)
            .query(&[("allow_overwrite", allow_overwrite)])
            .header(CONTENT_TYPE, "text/plain")
            .body(text)
            .send()
            .await?;

        self.handle_empty_response(response, StatusCode::CREATED).await
    }

    /// List the corpora of a custom language model
    pub async fn list_corpora<T: DeserializeOwned>(&self, customization_id: &str) -> Result<T> {
        let url = self.url(&["v1", "customizations", customization_id, "corpora"])?;
        let response = self.request(Method::GET, url).send().await?;

        self.handle_response(response, StatusCode::OK).await
    }

    /// Get a single corpus, including its analysis status
    pub async fn get_corpus<T: DeserializeOwned>(
        &self,
        customization_id: &str,
        corpus_name: &str,
    ) -> Result<T> {
        let url = self.url(&["v1", "customizations", customization_id, "corpora", corpus_name])?;
        let response = self.request(Method::GET, url).send().await?;

        self.handle_response(response, StatusCode::OK).await
    }

    /// Delete a corpus from a custom language model
    pub async fn delete_corpus(&self, customization_id: &str, corpus_name: &str) -> Result<()> {
        let url = self.url(&["v1", "customizations", customization_id, "corpora", corpus_name])?;
        let response = self.request(Method::DELETE, url).send().await?;

        self.handle_empty_response(response, StatusCode::OK).await
    }
}
