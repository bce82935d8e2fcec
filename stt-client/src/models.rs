//! Base model endpoints

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;

use crate::SttClient;
use crate::error::Result;

impl SttClient {
    /// List the base models offered by the service
    ///
    /// Decodes into [`stt_core::domain::model::BaseModels`] or any other
    /// type matching the document.
    pub async fn list_base_models<T: DeserializeOwned>(&self) -> Result<T> {
        let url = self.url(&["v1", "models"])?;
        let response = self.request(Method::GET, url).send().await?;

        self.handle_response(response, StatusCode::OK).await
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ClientError;
    use crate::testing::{PASSWORD, USERNAME, client_for};
    use serde_json::json;
    use stt_core::domain::model::BaseModels;
    use wiremock::matchers::{basic_auth, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_requests_carry_basic_auth() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/models"))
            .and(basic_auth(USERNAME, PASSWORD))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "models": [{
                    "name": "en-US_NarrowbandModel",
                    "language": "en-US",
                    "rate": 8000,
                    "supported_features": {
                        "custom_language_model": true,
                        "custom_acoustic_model": true,
                        "speaker_labels": true
                    }
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let models: BaseModels = client_for(&server).list_base_models().await.unwrap();

        assert_eq!(models.models.len(), 1);
        assert_eq!(models.models[0].name, "en-US_NarrowbandModel");
        assert_eq!(models.models[0].rate, Some(8000));
        assert!(models.models[0].supported_features.custom_acoustic_model);
    }

    #[tokio::test]
    async fn test_unparseable_body_is_a_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/models"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .list_base_models::<BaseModels>()
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::ParseError(_)));
    }
}
