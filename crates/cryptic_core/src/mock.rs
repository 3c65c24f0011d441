//! Mock search client for testing.
//!
//! Returns queued responses and records every search term, so repeat checks
//! can be exercised without a running server.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::client::{SearchClient, SearchResponse};
use crate::error::CrypticResult;

/// Mock search client.
#[derive(Clone, Default)]
pub struct MockSearchClient {
    /// Responses returned in order, cycling when exhausted.
    responses: Arc<RwLock<Vec<SearchResponse>>>,
    /// Index of next response to return.
    response_index: Arc<AtomicUsize>,
    /// Search terms received.
    captured_terms: Arc<RwLock<Vec<String>>>,
    /// Raw body to fail decoding with, simulating a non-JSON reply.
    invalid_body: Arc<RwLock<Option<String>>>,
}

impl MockSearchClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response.
    pub fn add_response(self, response: SearchResponse) -> Self {
        self.responses.write().push(response);
        self
    }

    /// Reply with a body that is not valid JSON.
    pub fn reply_with_invalid_body(self, body: impl Into<String>) -> Self {
        *self.invalid_body.write() = Some(body.into());
        self
    }

    /// Search terms received so far.
    pub fn get_terms(&self) -> Vec<String> {
        self.captured_terms.read().clone()
    }

    pub fn call_count(&self) -> usize {
        self.captured_terms.read().len()
    }

    fn next_response(&self) -> SearchResponse {
        let responses = self.responses.read();
        if responses.is_empty() {
            return SearchResponse::ok(Vec::new());
        }
        let index = self.response_index.fetch_add(1, Ordering::SeqCst);
        responses
            .get(index % responses.len())
            .cloned()
            .unwrap_or_else(|| SearchResponse::ok(Vec::new()))
    }
}

#[async_trait]
impl SearchClient for MockSearchClient {
    async fn search(&self, word: &str) -> CrypticResult<SearchResponse> {
        self.captured_terms.write().push(word.to_string());

        if let Some(body) = self.invalid_body.read().clone() {
            return SearchResponse::from_json(true, &body);
        }
        Ok(self.next_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ContestMatch;
    use crate::error::CrypticError;

    #[tokio::test]
    async fn test_mock_cycles_responses() {
        let first = SearchResponse::ok(vec![ContestMatch {
            word: "TEST (4)".to_string(),
            url: "/contest/2-test-4".to_string(),
        }]);
        let second = SearchResponse::rejected(vec!["Too many matching contests found (10).".into()]);

        let mock = MockSearchClient::new()
            .add_response(first.clone())
            .add_response(second.clone());

        assert_eq!(mock.search("TEST").await.unwrap(), first);
        assert_eq!(mock.search("TES").await.unwrap(), second);
        assert_eq!(mock.search("TE").await.unwrap(), first);
        assert_eq!(mock.get_terms(), vec!["TEST", "TES", "TE"]);
    }

    #[tokio::test]
    async fn test_mock_defaults_to_no_matches() {
        let mock = MockSearchClient::new();
        let response = mock.search("ANYTHING").await.unwrap();
        assert!(response.success);
        assert!(response.body.contests.is_empty());
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_invalid_body() {
        let mock = MockSearchClient::new().reply_with_invalid_body("Internal Server Error");
        assert!(matches!(
            mock.search("WORD").await,
            Err(CrypticError::Json(_))
        ));
    }
}
