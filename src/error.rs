use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("request timed out")]
    Timeout,

    #[error("search API returned HTTP {status}")]
    Status { status: u16 },

    #[error("could not parse search response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid search URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl SearchError {
    /// Failures that a search swallows and reports as "no results".
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            SearchError::Network(_) | SearchError::Timeout | SearchError::Status { .. }
        )
    }
}
