//! Word endpoints of a custom language model

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use stt_core::domain::word::WordSort;
use stt_core::dto::word::AddWord;

use crate::SttClient;
use crate::error::Result;

impl SttClient {
    /// List the words of a custom language model
    pub async fn list_words<T: DeserializeOwned>(
        &self,
        customization_id: &str,
        sort: WordSort,
    ) -> Result<T> {
        let url = self.url(&["v1", "customizations", customization_id, "words"])?;
        let response = self
            .request(Method::GET, url)
            .query(&[("sort", sort.as_query())])
            .send()
            .await?;

        self.handle_response(response, StatusCode::OK).await
    }

    /// List the words of a custom language model as the response body text
    pub async fn list_words_raw(&self, customization_id: &str, sort: WordSort) -> Result<String> {
        let url = self.url(&["v1", "customizations", customization_id, "words"])?;
        let response = self
            .request(Method::GET, url)
            .query(&[("sort", sort.as_query())])
            .send()
            .await?;

        self.handle_text_response(response, StatusCode::OK).await
    }

    /// Add or replace a single custom word
    pub async fn add_word(&self, customization_id: &str, word: &str, req: &AddWord) -> Result<()> {
        let url = self.url(&["v1", "customizations", customization_id, "words", word])?;
        let response = self.request(Method::PUT, url).json(req).send().await?;

        self.handle_empty_response(response, StatusCode::CREATED).await
    }

    /// Delete a custom word
    pub async fn delete_word(&self, customization_id: &str, word: &str) -> Result<()> {
        let url = self.url(&["v1", "customizations", customization_id, "words", word])?;
        let response = self.request(Method::DELETE, url).send().await?;

        self.handle_empty_response(response, StatusCode::OK).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::client_for;
    use serde_json::json;
    use stt_core::domain::word::Words;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const WORDS_BODY: &str = r#"{"words": [{"word": "dyspnea", "sounds_like": ["disp nee a"], "display_as": "dyspnea", "count": 4, "source": ["corpus1"]}]}"#;

    #[tokio::test]
    async fn test_list_words_sorted_by_count() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/customizations/lm-1/words"))
            .and(query_param("sort", "count"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(WORDS_BODY, "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let words: Words = client_for(&server)
            .list_words("lm-1", WordSort::Count)
            .await
            .unwrap();

        assert_eq!(words.words.len(), 1);
        assert_eq!(words.words[0].count, 4);
    }

    #[tokio::test]
    async fn test_list_words_raw_returns_body_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/customizations/lm-1/words"))
            .and(query_param("sort", "alphabetical"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(WORDS_BODY, "application/json"))
            .mount(&server)
            .await;

        let body = client_for(&server)
            .list_words_raw("lm-1", WordSort::Alphabetical)
            .await
            .unwrap();

        assert_eq!(body, WORDS_BODY);
    }

    #[tokio::test]
    async fn test_add_word_puts_pronunciation() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/v1/customizations/lm-1/words/IEEE"))
            .and(body_json(json!({
                "sounds_like": ["I. triple E."],
                "display_as": "IEEE"
            })))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let req = AddWord {
            sounds_like: vec!["I. triple E.".to_string()],
            display_as: Some("IEEE".to_string()),
        };
        client_for(&server)
            .add_word("lm-1", "IEEE", &req)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_delete_missing_word_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/v1/customizations/lm-1/words/nope"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .delete_word("lm-1", "nope")
            .await
            .unwrap_err();

        assert!(err.is_not_found());
    }
}
