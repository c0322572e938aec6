//! Facet extraction: turn the raw facet blocks of an [`ApiResult`] into typed aggregates.
//!
//! The upstream contract says month and page terms are decimal integers. A term that
//! does not parse ends processing of that facet; everything read before it is kept.

use crate::models::{
    ApiResult, FacetEntry, MONTH_FACET, MonthlyCounts, PAGE_FACET, PageCounts, RankedFacetList,
};

/// Number of articles published in each month of the queried year.
pub fn extract_month_counts(api_result: &ApiResult) -> MonthlyCounts {
    let mut months = [0u64; 12];
    let Some(facet) = api_result.facet(MONTH_FACET) else {
        return months;
    };
    for (month, count) in numeric_terms(facet) {
        if (1..=12).contains(&month) {
            months[(month - 1) as usize] = count;
        }
    }
    months
}

/// Number of articles per printed page.
pub fn extract_page_counts(api_result: &ApiResult) -> PageCounts {
    api_result
        .facet(PAGE_FACET)
        .map(|facet| numeric_terms(facet).collect())
        .unwrap_or_default()
}

/// Terms of `facet_name` ranked by count, highest first. Ties keep response order.
pub fn extract_sorted_list(api_result: &ApiResult, facet_name: &str) -> RankedFacetList {
    let Some(facet) = api_result.facet(facet_name) else {
        return Vec::new();
    };
    let mut items: RankedFacetList = facet.iter().map(|p| (p.term.clone(), p.count)).collect();
    // `sort_by` is stable
    items.sort_by(|a, b| b.1.cmp(&a.1));
    items
}

/// Total number of articles across all months.
pub fn total_articles(months: &MonthlyCounts) -> u64 {
    months.iter().sum()
}

fn numeric_terms(facet: &[FacetEntry]) -> impl Iterator<Item = (u32, u64)> + '_ {
    facet
        .iter()
        .map_while(|p| p.term.trim().parse::<u32>().ok().map(|t| (t, p.count)))
}
