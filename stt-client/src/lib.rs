//! Speech service HTTP client
//!
//! A type-safe client for the customization REST API of a cloud
//! speech-to-text service: base models, custom language models with their
//! corpora and words, custom acoustic models with their audio, and
//! recognition.
//!
//! Every method performs exactly one request and checks the response against
//! the status code the operation succeeds with.
//!
//! Methods that return a service document are generic over the type it is
//! decoded into: the typed structs of `stt_core::domain`, or
//! `serde_json::Value` to keep the document exactly as the service sent it.
//!
//! # Example
//!
//! ```no_run
//! use stt_client::{Credentials, SttClient};
//! use stt_core::domain::model::CreatedModel;
//! use stt_core::dto::model::CreateModel;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = SttClient::new(
//!         "https://stream.example.com/speech-to-text/api",
//!         Credentials::new("apikey", "my-iam-key"),
//!     );
//!
//!     let created: CreatedModel = client
//!         .create_language_model(&CreateModel::new("dictation"))
//!         .await?;
//!
//!     println!("Created language model: {}", created.customization_id);
//!     Ok(())
//! }
//! ```

pub mod error;
mod acoustic;
mod audio;
mod corpora;
mod language;
mod models;
mod recognize;
pub mod status;
mod words;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use status::{AcousticModelStatusSource, CorpusStatusSource, LanguageModelStatusSource};

use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::fmt;
use tracing::debug;

/// Basic-auth credentials
///
/// With IAM service credentials the username is the literal string `apikey`
/// and the password is the API key.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// HTTP client for the speech service API
#[derive(Debug, Clone)]
pub struct SttClient {
    /// Base URL of the service instance
    base_url: String,
    credentials: Credentials,
    /// HTTP client instance
    client: Client,
}

impl SttClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - The service URL from the instance credentials
    /// * `credentials` - Basic-auth credentials for the instance
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> Self {
        Self::with_client(base_url, credentials, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use reqwest::Client;
    /// use std::time::Duration;
    /// use stt_client::{Credentials, SttClient};
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = SttClient::with_client(
    ///     "https://stream.example.com/speech-to-text/api",
    ///     Credentials::new("apikey", "key"),
    ///     http_client,
    /// );
    /// ```
    pub fn with_client(
        base_url: impl Into<String>,
        credentials: Credentials,
        client: Client,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
            client,
        }
    }

    /// Get the base URL of the service
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Request Building
    // =============================================================================

    /// Build an endpoint URL from path segments
    ///
    /// Segments are percent-encoded, so corpus and audio names may contain
    /// spaces or other reserved characters.
    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            ClientError::InvalidRequest(format!("invalid endpoint '{}': {}", self.base_url, e))
        })?;

        url.path_segments_mut()
            .map_err(|_| {
                ClientError::InvalidRequest(format!(
                    "endpoint '{}' cannot carry a path",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    /// Start an authenticated request
    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!(%method, %url, "sending request");
        self.client
            .request(method, url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Check the status code and return the body on mismatch
    async fn check_status(
        &self,
        response: reqwest::Response,
        expected: StatusCode,
    ) -> Result<reqwest::Response> {
        let status = response.status();
        debug!(status = status.as_u16(), expected = expected.as_u16(), "received response");

        if status != expected {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(
                status.as_u16(),
                expected.as_u16(),
                error_text,
            ));
        }

        Ok(response)
    }

    /// Handle an API response and deserialize JSON
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
        expected: StatusCode,
    ) -> Result<T> {
        self.check_status(response, expected)
            .await?
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response whose body is returned as raw text
    async fn handle_text_response(
        &self,
        response: reqwest::Response,
        expected: StatusCode,
    ) -> Result<String> {
        Ok(self.check_status(response, expected).await?.text().await?)
    }

    /// Handle an API response whose body is not needed
    async fn handle_empty_response(
        &self,
        response: reqwest::Response,
        expected: StatusCode,
    ) -> Result<()> {
        self.check_status(response, expected).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> SttClient {
        SttClient::new(base_url, Credentials::new("apikey", "secret"))
    }

    #[test]
    fn test_client_creation() {
        let client = client("https://stt.example.com/instances/abc");
        assert_eq!(client.base_url(), "https://stt.example.com/instances/abc");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = client("https://stt.example.com/instances/abc/");
        assert_eq!(client.base_url(), "https://stt.example.com/instances/abc");
    }

    #[test]
    fn test_client_with_custom_client() {
        let client = SttClient::with_client(
            "https://stt.example.com",
            Credentials::new("user", "pass"),
            Client::new(),
        );
        assert_eq!(client.base_url(), "https://stt.example.com");
    }

    #[test]
    fn test_url_appends_segments() {
        let client = client("https://stt.example.com/instances/abc");
        let url = client.url(&["v1", "customizations", "lm-1", "corpora"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://stt.example.com/instances/abc/v1/customizations/lm-1/corpora"
        );
    }

    #[test]
    fn test_url_on_bare_host() {
        let client = client("https://stt.example.com");
        let url = client.url(&["v1", "models"]).unwrap();
        assert_eq!(url.as_str(), "https://stt.example.com/v1/models");
    }

    #[test]
    fn test_url_encodes_names() {
        let client = client("https://stt.example.com");
        let url = client
            .url(&["v1", "customizations", "lm-1", "corpora", "my corpus.txt"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://stt.example.com/v1/customizations/lm-1/corpora/my%20corpus.txt"
        );
    }

    #[test]
    fn test_url_rejects_invalid_endpoint() {
        let client = client("not a url");
        let err = client.url(&["v1", "models"]).unwrap_err();
        assert!(matches!(err, ClientError::InvalidRequest(_)));
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let debug = format!("{:?}", Credentials::new("apikey", "top-secret"));
        assert!(debug.contains("apikey"));
        assert!(!debug.contains("top-secret"));
    }
}
