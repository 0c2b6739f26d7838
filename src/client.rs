//! DuckDuckGo instant answer client.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::USER_AGENT;
use tracing::{debug, error, instrument, trace};
use url::Url;

use crate::config::CONFIG;
use crate::data_models::{InstantAnswer, SearchResult, extract_results};
use crate::error::SearchError;

/// Builds `<base>?q=<query>&format=json`, replacing any query already on `base`.
pub fn build_search_url(base_url: &str, query: &str) -> Result<Url, SearchError> {
    let mut url = Url::parse(base_url)?;
    let encoded = urlencoding::encode(query);
    url.set_query(Some(&format!("q={encoded}&format=json")));
    Ok(url)
}

/// Decodes a response body and extracts the results from it.
pub fn parse_response(body: &str) -> Result<Vec<SearchResult>, SearchError> {
    let answer: InstantAnswer = serde_json::from_str(body)?;
    Ok(extract_results(&answer))
}

#[derive(Debug, Clone)]
pub struct SearchClient {
    http_client: Client,
    base_url: String,
    user_agent: String,
    timeout: Duration,
}

impl Default for SearchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchClient {
    /// Creates a client from the process configuration.
    pub fn new() -> Self {
        Self {
            http_client: Client::new(),
            base_url: CONFIG.base_url.clone(),
            user_agent: CONFIG.user_agent.clone(),
            timeout: CONFIG.timeout,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Runs one search.
    ///
    /// Transport failures (HTTP error status, timeout, connection errors) are
    /// logged and produce an empty list. A body that is not the expected JSON
    /// is returned as [`SearchError::Parse`].
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        let url = build_search_url(&self.base_url, query)?;

        let body = match self.fetch(url).await {
            Ok(body) => body,
            Err(e) => {
                error!(error = %e, "search request failed");
                return Ok(Vec::new());
            }
        };

        let results = parse_response(&body)?;
        debug!(result_count = results.len(), "search completed");
        Ok(results)
    }

    async fn fetch(&self, url: Url) -> Result<String, SearchError> {
        debug!(url = %url, "sending search request");

        let response = self
            .http_client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        debug!(status = %status, "received search response");
        if !status.is_success() {
            return Err(SearchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(map_transport_error)?;
        trace!(body = %body, "response body");
        Ok(body)
    }
}

fn map_transport_error(e: reqwest::Error) -> SearchError {
    if e.is_timeout() {
        SearchError::Timeout
    } else {
        SearchError::Network(e)
    }
}
