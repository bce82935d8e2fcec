//! Status values reported by the speech service
//!
//! Every status enum is closed over the values the service documents, plus an
//! `Unknown` variant that keeps the raw string. The poller treats `Unknown`
//! as an error instead of waiting on it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::poll::PollStatus;

/// Analysis status of a corpus added to a custom language model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CorpusStatus {
    /// Words were extracted and the corpus can be trained on
    Analyzed,
    /// The service is still extracting out-of-vocabulary words
    BeingProcessed,
    /// Analysis failed or the corpus was added while another was processing
    Undetermined,
    /// A value outside the documented set
    Unknown(String),
}

impl CorpusStatus {
    pub fn as_str(&self) -> &str {
        match self {
            CorpusStatus::Analyzed => "analyzed",
            CorpusStatus::BeingProcessed => "being_processed",
            CorpusStatus::Undetermined => "undetermined",
            CorpusStatus::Unknown(raw) => raw,
        }
    }

    /// Whether analysis has finished, successfully or not
    pub fn is_terminal(&self) -> bool {
        matches!(self, CorpusStatus::Analyzed | CorpusStatus::Undetermined)
    }
}

impl From<&str> for CorpusStatus {
    fn from(value: &str) -> Self {
        match value {
            "analyzed" => CorpusStatus::Analyzed,
            "being_processed" => CorpusStatus::BeingProcessed,
            "undetermined" => CorpusStatus::Undetermined,
            other => CorpusStatus::Unknown(other.to_string()),
        }
    }
}

impl From<String> for CorpusStatus {
    fn from(value: String) -> Self {
        CorpusStatus::from(value.as_str())
    }
}

impl From<CorpusStatus> for String {
    fn from(status: CorpusStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for CorpusStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PollStatus for CorpusStatus {
    fn is_recognized(&self) -> bool {
        !matches!(self, CorpusStatus::Unknown(_))
    }
}

/// Lifecycle status of a custom language or acoustic model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ModelStatus {
    /// Created, but no resources have been added yet
    Pending,
    /// Resources were added and the model can be trained
    Ready,
    /// Training is in progress
    Training,
    /// Trained and usable for recognition
    Available,
    /// Being upgraded to a newer base model
    Upgrading,
    /// Training failed
    Failed,
    /// A value outside the documented set
    Unknown(String),
}

impl ModelStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ModelStatus::Pending => "pending",
            ModelStatus::Ready => "ready",
            ModelStatus::Training => "training",
            ModelStatus::Available => "available",
            ModelStatus::Upgrading => "upgrading",
            ModelStatus::Failed => "failed",
            ModelStatus::Unknown(raw) => raw,
        }
    }

    /// Whether a training run has finished, successfully or not
    pub fn is_training_finished(&self) -> bool {
        matches!(self, ModelStatus::Available | ModelStatus::Failed)
    }
}

impl From<&str> for ModelStatus {
    fn from(value: &str) -> Self {
        match value {
            "pending" => ModelStatus::Pending,
            "ready" => ModelStatus::Ready,
            "training" => ModelStatus::Training,
            "available" => ModelStatus::Available,
            "upgrading" => ModelStatus::Upgrading,
            "failed" => ModelStatus::Failed,
            other => ModelStatus::Unknown(other.to_string()),
        }
    }
}

impl From<String> for ModelStatus {
    fn from(value: String) -> Self {
        ModelStatus::from(value.as_str())
    }
}

impl From<ModelStatus> for String {
    fn from(status: ModelStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for ModelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PollStatus for ModelStatus {
    fn is_recognized(&self) -> bool {
        !matches!(self, ModelStatus::Unknown(_))
    }
}

/// Validation status of an audio resource added to an acoustic model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AudioStatus {
    Ok,
    BeingProcessed,
    Invalid,
    Unknown(String),
}

impl AudioStatus {
    pub fn as_str(&self) -> &str {
        match self {
            AudioStatus::Ok => "ok",
            AudioStatus::BeingProcessed => "being_processed",
            AudioStatus::Invalid => "invalid",
            AudioStatus::Unknown(raw) => raw,
        }
    }
}

impl From<&str> for AudioStatus {
    fn from(value: &str) -> Self {
        match value {
            "ok" => AudioStatus::Ok,
            "being_processed" => AudioStatus::BeingProcessed,
            "invalid" => AudioStatus::Invalid,
            other => AudioStatus::Unknown(other.to_string()),
        }
    }
}

impl From<String> for AudioStatus {
    fn from(value: String) -> Self {
        AudioStatus::from(value.as_str())
    }
}

impl From<AudioStatus> for String {
    fn from(status: AudioStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for AudioStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corpus_status_from_wire() {
        let status: CorpusStatus = serde_json::from_str("\"being_processed\"").unwrap();
        assert_eq!(status, CorpusStatus::BeingProcessed);
        assert!(!status.is_terminal());

        let status: CorpusStatus = serde_json::from_str("\"analyzed\"").unwrap();
        assert!(status.is_terminal());
        assert!(status.is_recognized());
    }

    #[test]
    fn test_unknown_status_is_preserved() {
        let status: CorpusStatus = serde_json::from_str("\"exploded\"").unwrap();
        assert_eq!(status, CorpusStatus::Unknown("exploded".to_string()));
        assert!(!status.is_recognized());
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"exploded\"");
    }

    #[test]
    fn test_undetermined_is_terminal() {
        assert!(CorpusStatus::Undetermined.is_terminal());
    }

    #[test]
    fn test_model_status_training_finished() {
        assert!(ModelStatus::Available.is_training_finished());
        assert!(ModelStatus::Failed.is_training_finished());
        assert!(!ModelStatus::Training.is_training_finished());
        assert!(!ModelStatus::Ready.is_training_finished());
    }

    #[test]
    fn test_model_status_display_matches_wire() {
        assert_eq!(ModelStatus::Upgrading.to_string(), "upgrading");
        assert_eq!(ModelStatus::from("pending"), ModelStatus::Pending);
    }

    #[test]
    fn test_audio_status_round_trip() {
        let status: AudioStatus = serde_json::from_str("\"invalid\"").unwrap();
        assert_eq!(status, AudioStatus::Invalid);
        assert_eq!(status.to_string(), "invalid");
    }
}
