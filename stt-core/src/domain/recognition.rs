//! Recognition results

use serde::{Deserialize, Serialize};

/// Response of `POST /v1/recognize`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecognitionResults {
    #[serde(default)]
    pub results: Vec<SpeechResult>,
    #[serde(default)]
    pub result_index: u32,
    #[serde(default)]
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechResult {
    #[serde(rename = "final", default)]
    pub is_final: bool,
    #[serde(default)]
    pub alternatives: Vec<SpeechAlternative>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechAlternative {
    pub transcript: String,
    #[serde(default)]
    pub confidence: Option<f64>,
}

impl RecognitionResults {
    /// Concatenation of every alternative of every result, in order
    pub fn transcript(&self) -> String {
        self.results
            .iter()
            .flat_map(|result| result.alternatives.iter())
            .map(|alternative| alternative.transcript.as_str())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_concatenates_results() {
        let body = r#"{
            "results": [
                {"final": true, "alternatives": [{"transcript": "several tornadoes ", "confidence": 0.96}]},
                {"final": true, "alternatives": [{"transcript": "touched down "}]}
            ],
            "result_index": 0
        }"#;

        let results: RecognitionResults = serde_json::from_str(body).unwrap();
        assert!(results.results[0].is_final);
        assert_eq!(results.transcript(), "several tornadoes touched down ");
    }

    #[test]
    fn test_empty_results() {
        let results: RecognitionResults = serde_json::from_str("{}").unwrap();
        assert!(results.is_empty());
        assert_eq!(results.transcript(), "");
    }
}
