//! Recognition endpoint

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use stt_core::dto::recognize::RecognizeRequest;

use crate::SttClient;
use crate::error::{ClientError, Result};

impl SttClient {
    /// Transcribe a single audio file
    ///
    /// Decodes into [`stt_core::domain::recognition::RecognitionResults`] or
    /// any other type matching the document. Archives are rejected before
    /// anything is sent; only acoustic model training accepts them.
    pub async fn recognize<T: DeserializeOwned>(
        &self,
        req: &RecognizeRequest,
        audio: Vec<u8>,
    ) -> Result<T> {
        if req.format.is_archive() {
            return Err(ClientError::InvalidRequest(format!(
                "cannot transcribe an archive ({})",
                req.format.content_type()
            )));
        }

        let url = self.url(&["v1", "recognize"])?;
        let response = self
            .request(Method::POST, url)
            .query(&req.query())
            .header(CONTENT_TYPE, req.format.content_type())
            .body(audio)
            .send()
            .await?;

        self.handle_response(response, StatusCode::OK).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Credentials;
    use crate::testing::client_for;
    use serde_json::json;
    use stt_core::domain::audio::AudioFormat;
    use stt_core::domain::recognition::RecognitionResults;
    use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_recognize_rejects_archives() {
        let client = SttClient::new("https://stt.example.com", Credentials::new("u", "p"));
        let req = RecognizeRequest::new(AudioFormat::Zip);

        let err = client
            .recognize::<RecognitionResults>(&req, Vec::new())
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_recognize_with_custom_models() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/recognize"))
            .and(query_param("model", "en-US_BroadbandModel"))
            .and(query_param("language_customization_id", "lm-1"))
            .and(query_param("acoustic_customization_id", "am-1"))
            .and(header("content-type", "audio/flac"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "result_index": 0,
                "results": [
                    {"final": true, "alternatives": [{"transcript": "the patient ", "confidence": 0.91}]},
                    {"final": true, "alternatives": [{"transcript": "is stable "}]}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut req = RecognizeRequest::new(AudioFormat::Flac);
        req.model = "en-US_BroadbandModel".to_string();
        req.language_customization_id = Some("lm-1".to_string());
        req.acoustic_customization_id = Some("am-1".to_string());

        let results: RecognitionResults = client_for(&server)
            .recognize(&req, b"fLaC".to_vec())
            .await
            .unwrap();

        assert_eq!(results.transcript(), "the patient is stable ");
    }

    #[tokio::test]
    async fn test_recognize_with_base_models_only() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/recognize"))
            .and(query_param("model", "en-US_NarrowbandModel"))
            .and(query_param_is_missing("language_customization_id"))
            .and(query_param_is_missing("acoustic_customization_id"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
            .expect(1)
            .mount(&server)
            .await;

        let results: RecognitionResults = client_for(&server)
            .recognize(&RecognizeRequest::new(AudioFormat::Wav), b"RIFF".to_vec())
            .await
            .unwrap();

        assert!(results.is_empty());
    }
}
