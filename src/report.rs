//! Request orchestration: two `(query, year)` pairs in, one [`TrendReport`] out.

use crate::api::Client;
use crate::chart::{generate_monthly_chart_url, generate_page_chart_url};
use crate::config::{TrendsConfig, current_year};
use crate::error::TrendsError;
use crate::facets::{
    extract_month_counts, extract_page_counts, extract_sorted_list, total_articles,
};
use crate::models::{
    ApiResult, Article, DESCRIPTOR_FACET, MonthlyCounts, PERSON_FACET, PageCounts,
    RankedFacetList, TrendQuery,
};
use serde::{Deserialize, Serialize};

/// Raw, unvalidated inputs as they arrive on the query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrendParams {
    pub query_1: Option<String>,
    pub query_2: Option<String>,
    pub year_1: Option<String>,
    pub year_2: Option<String>,
}

/// Everything shown for one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SideReport {
    pub query: String,
    pub year: i32,
    pub total: u64,
    pub months: MonthlyCounts,
    pub pages: PageCounts,
    pub people: RankedFacetList,
    pub terms: RankedFacetList,
    pub articles: Vec<Article>,
}

impl SideReport {
    fn from_result(query: TrendQuery, result: ApiResult) -> Self {
        let months = extract_month_counts(&result);
        Self {
            total: total_articles(&months),
            pages: extract_page_counts(&result),
            people: extract_sorted_list(&result, PERSON_FACET),
            terms: extract_sorted_list(&result, DESCRIPTOR_FACET),
            months,
            query: query.query,
            year: query.year,
            articles: result.results,
        }
    }
}

/// Rendering context of the comparison page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendReport {
    pub years: Vec<i32>,
    pub side_1: SideReport,
    pub side_2: SideReport,
    pub month_chart_url: String,
    pub page_chart_url: String,
}

/// Aggregate two API results into a report. Pure: no I/O, no clock.
pub fn build_report(
    config: &TrendsConfig,
    query_1: TrendQuery,
    result_1: ApiResult,
    query_2: TrendQuery,
    result_2: ApiResult,
    current_year: i32,
) -> TrendReport {
    let side_1 = SideReport::from_result(query_1, result_1);
    let side_2 = SideReport::from_result(query_2, result_2);
    TrendReport {
        years: config.valid_years(current_year),
        month_chart_url: generate_monthly_chart_url(
            &side_1.months,
            &side_2.months,
            &config.style,
            &config.chart_url,
        ),
        page_chart_url: generate_page_chart_url(
            &side_1.pages,
            &side_2.pages,
            &config.style,
            &config.chart_url,
        ),
        side_1,
        side_2,
    }
}

/// Owns the configuration and the upstream client; cheap to share behind an `Arc`.
#[derive(Debug, Clone)]
pub struct TrendsService {
    config: TrendsConfig,
    client: Client,
}

impl TrendsService {
    pub fn new(config: TrendsConfig) -> Result<Self, TrendsError> {
        if config.has_placeholder_key() {
            log::warn!("no article search API key configured; upstream requests will be rejected");
        }
        let client = Client::new(config.api_url.clone(), config.api_key.clone())?;
        Ok(Self { config, client })
    }

    /// Apply defaults and year validation to raw inputs.
    pub fn resolve(&self, params: &TrendParams, current_year: i32) -> (TrendQuery, TrendQuery) {
        let c = &self.config;
        let q1 = TrendQuery::new(
            params.query_1.clone().unwrap_or_else(|| c.default_query_1.clone()),
            c.effective_year(params.year_1.as_deref(), c.default_year_1, current_year),
        );
        let q2 = TrendQuery::new(
            params.query_2.clone().unwrap_or_else(|| c.default_query_2.clone()),
            c.effective_year(params.year_2.as_deref(), c.default_year_2, current_year),
        );
        (q1, q2)
    }

    /// Fetch both sides concurrently and aggregate. Either failure fails the whole report.
    pub async fn compare(
        &self,
        query_1: TrendQuery,
        query_2: TrendQuery,
    ) -> Result<TrendReport, TrendsError> {
        let (result_1, result_2) = tokio::try_join!(
            self.client.trend_request(&query_1),
            self.client.trend_request(&query_2)
        )?;
        log::info!(
            "compared {:?} ({}) with {:?} ({})",
            query_1.query,
            query_1.year,
            query_2.query,
            query_2.year
        );
        Ok(build_report(
            &self.config,
            query_1,
            result_1,
            query_2,
            result_2,
            current_year(),
        ))
    }

    /// Resolve raw inputs, then [`compare`](Self::compare).
    pub async fn run(&self, params: &TrendParams) -> Result<TrendReport, TrendsError> {
        let (q1, q2) = self.resolve(params, current_year());
        self.compare(q1, q2).await
    }
}
