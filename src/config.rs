//! Runtime configuration, handed to [`crate::TrendsService`] at construction.

use crate::chart::ChartStyle;
use chrono::Datelike;
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "http://api.nytimes.com/svc/search/v1/article";
pub const DEFAULT_CHART_URL: &str = "https://chart.googleapis.com/chart";
/// Shipped in place of a real key; upstream calls fail authorization with it.
pub const PLACEHOLDER_API_KEY: &str = "REPLACE WITH YOUR ARTICLE API KEY";
pub const DEFAULT_QUERY_1: &str = "palin";
pub const DEFAULT_QUERY_2: &str = "biden";
pub const DEFAULT_YEAR_1: i32 = 2008;
pub const DEFAULT_YEAR_2: i32 = 2008;
/// Earliest publication year the archive covers.
pub const FIRST_YEAR: i32 = 1981;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendsConfig {
    pub api_key: String,
    pub api_url: String,
    pub chart_url: String,
    pub default_query_1: String,
    pub default_query_2: String,
    pub default_year_1: i32,
    pub default_year_2: i32,
    pub first_year: i32,
    pub style: ChartStyle,
}

impl Default for TrendsConfig {
    fn default() -> Self {
        Self {
            api_key: PLACEHOLDER_API_KEY.into(),
            api_url: DEFAULT_API_URL.into(),
            chart_url: DEFAULT_CHART_URL.into(),
            default_query_1: DEFAULT_QUERY_1.into(),
            default_query_2: DEFAULT_QUERY_2.into(),
            default_year_1: DEFAULT_YEAR_1,
            default_year_2: DEFAULT_YEAR_2,
            first_year: FIRST_YEAR,
            style: ChartStyle::default(),
        }
    }
}

impl TrendsConfig {
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = key.into();
        self
    }

    pub fn has_placeholder_key(&self) -> bool {
        self.api_key.trim().is_empty() || self.api_key == PLACEHOLDER_API_KEY
    }

    /// Selectable years, oldest first: `first_year..=current_year`.
    pub fn valid_years(&self, current_year: i32) -> Vec<i32> {
        (self.first_year..=current_year).collect()
    }

    /// Year actually queried: the requested one when it parses and lies in
    /// `[first_year, current_year]`, otherwise `default`.
    pub fn effective_year(&self, requested: Option<&str>, default: i32, current_year: i32) -> i32 {
        requested
            .and_then(|s| s.trim().parse::<i32>().ok())
            .filter(|y| (self.first_year..=current_year).contains(y))
            .unwrap_or(default)
    }
}

/// Calendar year according to the local clock.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn years_outside_range_fall_back() {
        let c = TrendsConfig::default();
        assert_eq!(c.effective_year(Some("1980"), 2008, 2026), 2008);
        assert_eq!(c.effective_year(Some("2027"), 2008, 2026), 2008);
        assert_eq!(c.effective_year(Some("1981"), 2008, 2026), 1981);
        assert_eq!(c.effective_year(Some("2026"), 2008, 2026), 2026);
        assert_eq!(c.effective_year(Some("nineteen"), 2010, 2026), 2010);
        assert_eq!(c.effective_year(None, 2010, 2026), 2010);
    }

    #[test]
    fn placeholder_key_detected() {
        assert!(TrendsConfig::default().has_placeholder_key());
        assert!(!TrendsConfig::default().with_api_key("abc").has_placeholder_key());
    }

    #[test]
    fn valid_years_span_archive() {
        let years = TrendsConfig::default().valid_years(2026);
        assert_eq!(years.first(), Some(&1981));
        assert_eq!(years.last(), Some(&2026));
        assert_eq!(years.len(), 46);
    }
}
