//! Contest search client.
//!
//! The server exposes `GET /contest/search?search=<WORD>` returning
//! `{"contests": [{"word": .., "url": ..}]}` on success and
//! `{"errors": {"search": [..]}}` with a 400 status otherwise.

use async_trait::async_trait;
use reqwest::Url;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, info};

use crate::config::SearchConfig;
use crate::error::{CrypticError, CrypticResult};

/// Read `null` as the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A previous contest matching the search term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContestMatch {
    pub word: String,
    pub url: String,
}

/// Form errors reported by the endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchErrors {
    #[serde(default, deserialize_with = "null_as_default")]
    pub search: Vec<String>,
}

/// Decoded JSON body of a search response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchBody {
    #[serde(default, deserialize_with = "null_as_default")]
    pub contests: Vec<ContestMatch>,
    #[serde(default)]
    pub errors: Option<SearchErrors>,
}

/// A search response: HTTP outcome plus decoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResponse {
    pub success: bool,
    pub body: SearchBody,
}

impl SearchResponse {
    pub fn ok(contests: Vec<ContestMatch>) -> Self {
        Self {
            success: true,
            body: SearchBody {
                contests,
                errors: None,
            },
        }
    }

    pub fn rejected(search_errors: Vec<String>) -> Self {
        Self {
            success: false,
            body: SearchBody {
                contests: Vec::new(),
                errors: Some(SearchErrors {
                    search: search_errors,
                }),
            },
        }
    }

    /// Decode a raw response body.
    pub fn from_json(success: bool, raw: &str) -> CrypticResult<Self> {
        let body = serde_json::from_str(raw)?;
        Ok(Self { success, body })
    }
}

/// Something that can run a contest search.
#[async_trait]
pub trait SearchClient: Send + Sync {
    async fn search(&self, word: &str) -> CrypticResult<SearchResponse>;
}

/// `reqwest`-backed search client.
#[derive(Debug, Clone)]
pub struct HttpSearchClient {
    endpoint: Url,
    client: reqwest::Client,
}

impl HttpSearchClient {
    pub fn new(config: &SearchConfig) -> CrypticResult<Self> {
        let raw = config.endpoint();
        let endpoint =
            Url::parse(&raw).map_err(|e| CrypticError::InvalidUrl(format!("{}: {}", raw, e)))?;
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self { endpoint, client })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl SearchClient for HttpSearchClient {
    async fn search(&self, word: &str) -> CrypticResult<SearchResponse> {
        info!("Searching contests for {:?}", word);

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("search", word)])
            .send()
            .await?;

        let status = response.status();
        let raw = response.text().await?;
        debug!("Search returned {}: {}", status, raw);

        SearchResponse::from_json(status.is_success(), &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_success_body() {
        let raw = r#"{"contests": [{"word": "CONTEST (7)", "url": "/contest/1-contest-7"}]}"#;
        let response = SearchResponse::from_json(true, raw).unwrap();
        assert!(response.success);
        assert_eq!(response.body.contests.len(), 1);
        assert_eq!(response.body.contests[0].word, "CONTEST (7)");
        assert!(response.body.errors.is_none());
    }

    #[test]
    fn test_decode_error_body() {
        let raw = r#"{"errors": {"search": ["This field is required."]}}"#;
        let response = SearchResponse::from_json(false, raw).unwrap();
        assert_eq!(response, SearchResponse::rejected(vec!["This field is required.".into()]));
    }

    #[test]
    fn test_decode_ignores_other_error_fields() {
        let raw = r#"{"errors": {"other": ["nope"]}}"#;
        let response = SearchResponse::from_json(false, raw).unwrap();
        assert_eq!(response.body.errors, Some(SearchErrors::default()));
    }

    #[test]
    fn test_decode_null_lists_as_empty() {
        let response = SearchResponse::from_json(true, r#"{"contests": null}"#).unwrap();
        assert!(response.body.contests.is_empty());

        let raw = r#"{"contests": null, "errors": {"search": null}}"#;
        let response = SearchResponse::from_json(false, raw).unwrap();
        assert_eq!(response.body.errors, Some(SearchErrors::default()));
    }

    #[test]
    fn test_decode_invalid_json() {
        let err = SearchResponse::from_json(true, "<html>").unwrap_err();
        assert!(matches!(err, CrypticError::Json(_)));
    }

    #[test]
    fn test_http_client_endpoint() {
        let config = SearchConfig {
            base_url: "https://cryptics.example.org/".to_string(),
            ..SearchConfig::default()
        };
        let client = HttpSearchClient::new(&config).unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "https://cryptics.example.org/contest/search"
        );
    }

    #[test]
    fn test_http_client_rejects_bad_url() {
        let config = SearchConfig {
            base_url: "not a url".to_string(),
            ..SearchConfig::default()
        };
        assert!(matches!(
            HttpSearchClient::new(&config),
            Err(CrypticError::InvalidUrl(_))
        ));
    }
}
