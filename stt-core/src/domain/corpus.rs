//! Corpus domain types

use serde::{Deserialize, Serialize};

use super::status::CorpusStatus;

/// A text corpus added to a custom language model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Corpus {
    pub name: String,
    #[serde(default)]
    pub total_words: u64,
    /// Words found in the corpus that the base vocabulary does not know
    #[serde(default)]
    pub out_of_vocabulary_words: u64,
    pub status: CorpusStatus,
    #[serde(default)]
    pub error: Option<String>,
}

/// Response of `GET /v1/customizations/{id}/corpora`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Corpora {
    #[serde(default)]
    pub corpora: Vec<Corpus>,
}
