use thiserror::Error;

/// Failures talking to the article search API. None of them are retried.
#[derive(Debug, Error)]
pub enum TrendsError {
    /// The request URL carries the API key, so it is stripped before wrapping.
    #[error("article search request failed: {0}")]
    Http(reqwest::Error),

    #[error("article search returned HTTP {status} for {query:?}")]
    Status {
        status: reqwest::StatusCode,
        query: String,
    },

    #[error("article search response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for TrendsError {
    fn from(e: reqwest::Error) -> Self {
        TrendsError::Http(e.without_url())
    }
}

impl TrendsError {
    /// Short description safe to show to anonymous callers.
    pub fn public_message(&self) -> String {
        match self {
            TrendsError::Http(e) if e.is_timeout() => "article search timed out".into(),
            TrendsError::Http(_) => "article search unreachable".into(),
            TrendsError::Status { status, .. } => format!("article search returned HTTP {status}"),
            TrendsError::Decode(_) => "article search returned an unreadable response".into(),
        }
    }
}
