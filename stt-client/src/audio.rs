//! Audio resource endpoints of a custom acoustic model

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use stt_core::domain::audio::AudioFormat;

use crate::SttClient;
use crate::error::Result;

impl SttClient {
    /// Add an audio file or archive of audio files to a custom acoustic model
    ///
    /// With `allow_overwrite` an existing resource of the same name is
    /// replaced instead of rejected.
    pub async fn add_audio(
        &self,
        customization_id: &str,
        audio_name: &str,
        format: AudioFormat,
        data: Vec<u8>,
        allow_overwrite: bool,
    ) -> Result<()> {
        let url = self.url(&[
            "v1",
            "acoustic_customizations",
            customization_id,
            "audio",
            audio_name,
        ])?;
        let response = self
            .request(Method::POST, url)
            .query(&[("allow_overwrite", allow_overwrite)])
            .header(CONTENT_TYPE, format.content_type())
            .body(data)
            .send()
            .await?;

        self.handle_empty_response(response, StatusCode::CREATED).await
    }

    /// List the audio resources of a custom acoustic model
    pub async fn list_audio<T: DeserializeOwned>(&self, customization_id: &str) -> Result<T> {
        let url = self.url(&["v1", "acoustic_customizations", customization_id, "audio"])?;
        let response = self.request(Method::GET, url).send().await?;

        self.handle_response(response, StatusCode::OK).await
    }

    /// Delete an audio resource from a custom acoustic model
    pub async fn delete_audio(&self, customization_id: &str, audio_name: &str) -> Result<()> {
        let url = self.url(&[
            "v1",
            "acoustic_customizations",
            customization_id,
            "audio",
            audio_name,
        ])?;
        let response = self.request(Method::DELETE, url).send().await?;

        self.handle_empty_response(response, StatusCode::OK).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::client_for;
    use serde_json::json;
    use stt_core::domain::audio::AudioResources;
    use stt_core::domain::status::AudioStatus;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_add_archive_with_overwrite() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/acoustic_customizations/am-1/audio/calls.zip"))
            .and(query_param("allow_overwrite", "true"))
            .and(header("content-type", "application/zip"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server)
            .add_audio("am-1", "calls.zip", AudioFormat::Zip, vec![0x50, 0x4b, 3, 4], true)
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests[0].body, vec![0x50, 0x4b, 3, 4]);
    }

    #[tokio::test]
    async fn test_add_audio_without_overwrite() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/acoustic_customizations/am-1/audio/sample.wav"))
            .and(query_param("allow_overwrite", "false"))
            .and(header("content-type", "audio/wav"))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server)
            .add_audio("am-1", "sample.wav", AudioFormat::Wav, b"RIFF".to_vec(), false)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_list_audio() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/acoustic_customizations/am-1/audio"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "total_minutes_of_audio": 12.5,
                "audio": [{
                    "name": "calls.zip",
                    "duration": 750,
                    "status": "ok",
                    "details": {"type": "archive", "compression": "zip"}
                }]
            })))
            .mount(&server)
            .await;

        let resources: AudioResources = client_for(&server).list_audio("am-1").await.unwrap();

        assert_eq!(resources.audio[0].status, AudioStatus::Ok);
        assert_eq!(resources.total_minutes_of_audio, 12.5);
    }
}
