//! Custom word domain types

use serde::{Deserialize, Serialize};

/// A word in the words resource of a custom language model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Word {
    pub word: String,
    #[serde(default)]
    pub sounds_like: Vec<String>,
    #[serde(default)]
    pub display_as: Option<String>,
    /// Occurrences across all corpora
    #[serde(default)]
    pub count: u64,
    /// Corpora the word was found in, or `user` for words added directly
    #[serde(default)]
    pub source: Vec<String>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

/// Response of `GET /v1/customizations/{id}/words`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Words {
    #[serde(default)]
    pub words: Vec<Word>,
}

/// Sort order accepted by the words listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordSort {
    /// Most frequent first
    #[default]
    Count,
    Alphabetical,
}

impl WordSort {
    pub fn as_query(&self) -> &'static str {
        match self {
            WordSort::Count => "count",
            WordSort::Alphabetical => "alphabetical",
        }
    }
}
