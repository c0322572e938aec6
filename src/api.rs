//! Asynchronous client for the **NYT Article Search API (v1)**.
//!
//! Only the trend request used by this crate is implemented: a free-text query scoped
//! to one publication year, asking for month/page/descriptor/person facets and a
//! handful of article fields.
//!
//! ### Notes
//! - One GET per call. There is no retry; any failure is returned to the caller.
//! - Facet terms may be JSON strings or numbers; see [`crate::models::FacetEntry`].
//! - Network timeouts use a sane default (30s total, 10s connect).
//!
//! Typical usage:
//! ```no_run
//! # use nyt_trends::{Client, TrendQuery};
//! # async fn run() -> Result<(), nyt_trends::TrendsError> {
//! let client = Client::new("http://api.nytimes.com/svc/search/v1/article", "my-key")?;
//! let result = client.trend_request(&TrendQuery::new("palin", 2008)).await?;
//! println!("{} articles listed", result.results.len());
//! # Ok(())
//! # }
//! ```

use crate::error::TrendsError;
use crate::models::{
    ApiResult, DESCRIPTOR_FACET, MONTH_FACET, PAGE_FACET, PERSON_FACET, TrendQuery,
};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use reqwest::Client as HttpClient;
use reqwest::redirect::Policy;
use std::time::Duration;

/// Article fields requested for the result list.
pub const RESULT_FIELDS: &str = "url,title,small_image_url";

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    api_key: String,
    http: HttpClient,
}

// Allow -, _, . unescaped in parameter values
const SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

fn enc(s: &str) -> String {
    percent_encoding::utf8_percent_encode(s, SAFE).to_string()
}

fn encode_params(params: &[(&str, String)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", enc(k), enc(v)))
        .collect::<Vec<_>>()
        .join("&")
}

impl Client {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, TrendsError> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30)) // total request timeout
            .connect_timeout(Duration::from_secs(10))
            .redirect(Policy::limited(5))
            .user_agent(concat!("nyt_trends/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            http,
        })
    }

    /// Query parameters of a trend request, without the API key.
    pub fn trend_params(query: &TrendQuery) -> Vec<(&'static str, String)> {
        vec![
            ("query", query.to_query_param()),
            ("fields", RESULT_FIELDS.into()),
            (
                "facets",
                [MONTH_FACET, PAGE_FACET, DESCRIPTOR_FACET, PERSON_FACET].join(","),
            ),
            ("format", "json".into()),
            ("rank", "closest".into()),
        ]
    }

    /// Fetch facet counts and the closest matching articles for one `(query, year)`.
    ///
    /// ### Errors
    /// - [`TrendsError::Http`] on transport failure
    /// - [`TrendsError::Status`] on a non-2xx response
    /// - [`TrendsError::Decode`] when the body is not the expected JSON
    pub async fn trend_request(&self, query: &TrendQuery) -> Result<ApiResult, TrendsError> {
        let mut params = Self::trend_params(query);
        log::debug!("GET {}?{}", self.base_url, encode_params(&params));
        params.push(("api-key", self.api_key.clone()));
        let url = format!("{}?{}", self.base_url, encode_params(&params));

        let resp = self.http.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(TrendsError::Status {
                status,
                query: query.to_query_param(),
            });
        }
        let body = resp.text().await?;
        let result: ApiResult = serde_json::from_str(&body)?;
        log::debug!(
            "{:?}: {} facets, {} results",
            query.to_query_param(),
            result.facets.as_ref().map(|f| f.len()).unwrap_or(0),
            result.results.len()
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_params_scope_query_to_year() {
        let params = Client::trend_params(&TrendQuery::new("sarah palin", 2008));
        assert_eq!(params[0], ("query", "sarah palin publication_year:[2008]".to_string()));
        assert_eq!(params[2].1, "publication_month,page_facet,des_facet,per_facet");
        let q = encode_params(&params);
        assert!(q.starts_with("query=sarah%20palin%20publication_year%3A%5B2008%5D&"));
        assert!(q.ends_with("&format=json&rank=closest"));
    }
}
