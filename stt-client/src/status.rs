//! Status sources backed by the speech service
//!
//! Adapters that let [`stt_core::poll::StatusPoller`] wait on corpora and
//! custom models.

use async_trait::async_trait;
use stt_core::domain::corpus::Corpus;
use stt_core::domain::model::CustomModel;
use stt_core::domain::status::{CorpusStatus, ModelStatus};
use stt_core::poll::StatusSource;

use crate::SttClient;
use crate::error::ClientError;

/// Reports the analysis status of corpora in one language model
///
/// The poll key is the corpus name.
#[derive(Debug, Clone)]
pub struct CorpusStatusSource {
    client: SttClient,
    customization_id: String,
}

impl CorpusStatusSource {
    pub fn new(client: SttClient, customization_id: impl Into<String>) -> Self {
        Self {
            client,
            customization_id: customization_id.into(),
        }
    }
}

#[async_trait]
impl StatusSource for CorpusStatusSource {
    type Status = CorpusStatus;
    type Error = ClientError;

    async fn fetch_status(&self, corpus_name: &str) -> Result<CorpusStatus, ClientError> {
        let corpus = self
            .client
            .get_corpus::<Corpus>(&self.customization_id, corpus_name)
            .await?;
        Ok(corpus.status)
    }
}

/// Reports the status of a custom language model
///
/// The poll key is the customization id.
#[derive(Debug, Clone)]
pub struct LanguageModelStatusSource {
    client: SttClient,
}

impl LanguageModelStatusSource {
    pub fn new(client: SttClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StatusSource for LanguageModelStatusSource {
    type Status = ModelStatus;
    type Error = ClientError;

    async fn fetch_status(&self, customization_id: &str) -> Result<ModelStatus, ClientError> {
        let model: CustomModel = self.client.get_language_model(customization_id).await?;
        Ok(model.status)
    }
}

/// Reports the status of a custom acoustic model
///
/// The poll key is the customization id.
#[derive(Debug, Clone)]
pub struct AcousticModelStatusSource {
    client: SttClient,
}

impl AcousticModelStatusSource {
    pub fn new(client: SttClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StatusSource for AcousticModelStatusSource {
    type Status = ModelStatus;
    type Error = ClientError;

    async fn fetch_status(&self, customization_id: &str) -> Result<ModelStatus, ClientError> {
        let model: CustomModel = self.client.get_acoustic_model(customization_id).await?;
        Ok(model.status)
    }
}
