//! Chart URL builders for the external chart image service.
//!
//! Nothing is drawn locally: each builder returns a fully encoded request URL
//! (`cht`, `chs`, `chd`, `chco`, `chxt`, `chxl`, plus `chls` for lines and
//! `chbh=a` when bars are auto-sized).
//!
//! - Line chart of monthly counts for both queries
//! - Grouped bar chart of counts per printed page
//! - Shared y-axis policy: at most ~14 tick labels, stopping before the maximum

pub mod axis;
pub mod encoding;
pub mod types;

pub use types::{ChartKind, ChartStyle};

use crate::models::{MonthlyCounts, PageCounts};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use std::collections::BTreeSet;

use axis::{month_abbreviations, y_range, y_ticks};
use encoding::encode_extended;

// Allow -, _, . unescaped in axis labels
const SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

/// Generic chart request: a kind, a style, series data and x labels.
#[derive(Debug, Clone)]
pub struct ChartSpec<'a> {
    kind: ChartKind,
    style: &'a ChartStyle,
    series: Vec<Vec<u64>>,
    x_labels: Vec<String>,
    auto_bar_width: bool,
}

impl<'a> ChartSpec<'a> {
    pub fn new(kind: ChartKind, style: &'a ChartStyle) -> Self {
        Self {
            kind,
            style,
            series: Vec::new(),
            x_labels: Vec::new(),
            auto_bar_width: false,
        }
    }

    pub fn add_series(mut self, data: Vec<u64>) -> Self {
        self.series.push(data);
        self
    }

    pub fn x_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.x_labels = labels.into_iter().map(|l| l.to_string()).collect();
        self
    }

    /// Ask the service to size bars so they fill their slot (`chbh=a`).
    pub fn auto_bar_width(mut self, on: bool) -> Self {
        self.auto_bar_width = on;
        self
    }

    /// Assemble the request URL against `base_url`.
    pub fn to_url(&self, base_url: &str) -> String {
        let (min_y, max_y) = y_range(&self.series);
        let ticks = y_ticks(min_y, max_y);

        let mut bits = vec![
            format!("cht={}", self.kind.code()),
            format!("chs={}x{}", self.style.width, self.style.height),
            format!("chd={}", encode_extended(&self.series, (min_y, max_y))),
            format!("chco={}", self.style.colors.join(",")),
            "chxt=x,y".to_string(),
            format!(
                "chxl=0:{}|1:{}",
                axis_labels(&self.x_labels),
                axis_labels(ticks.iter().map(|t| t.to_string()))
            ),
        ];
        if self.kind == ChartKind::Line {
            let styles: Vec<String> = self
                .series
                .iter()
                .map(|_| format!("{},1,0", self.style.line_thickness))
                .collect();
            bits.push(format!("chls={}", styles.join("|")));
        }
        if self.auto_bar_width {
            bits.push("chbh=a".to_string());
        }
        format!("{}?{}", base_url, bits.join("&"))
    }
}

fn axis_labels<I, S>(labels: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    labels
        .into_iter()
        .map(|l| format!("|{}", utf8_percent_encode(l.as_ref(), SAFE)))
        .collect()
}

/// Line chart of articles per month, one line per query.
pub fn generate_monthly_chart_url(
    counts_1: &MonthlyCounts,
    counts_2: &MonthlyCounts,
    style: &ChartStyle,
    base_url: &str,
) -> String {
    ChartSpec::new(ChartKind::Line, style)
        .add_series(counts_1.to_vec())
        .add_series(counts_2.to_vec())
        .x_labels(month_abbreviations())
        .to_url(base_url)
}

/// Page axis of the bar chart: sorted union of pages seen on either side,
/// with counts defaulting to 0 where a side has no articles on that page.
pub fn align_pages(pages_1: &PageCounts, pages_2: &PageCounts) -> (Vec<u32>, Vec<u64>, Vec<u64>) {
    let pages: Vec<u32> = pages_1
        .keys()
        .chain(pages_2.keys())
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let counts_1 = pages.iter().map(|p| pages_1.get(p).copied().unwrap_or(0)).collect();
    let counts_2 = pages.iter().map(|p| pages_2.get(p).copied().unwrap_or(0)).collect();
    (pages, counts_1, counts_2)
}

/// Grouped bar chart of articles per printed page, bars auto-sized.
pub fn generate_page_chart_url(
    pages_1: &PageCounts,
    pages_2: &PageCounts,
    style: &ChartStyle,
    base_url: &str,
) -> String {
    let (pages, counts_1, counts_2) = align_pages(pages_1, pages_2);
    ChartSpec::new(ChartKind::GroupedBar, style)
        .add_series(counts_1)
        .add_series(counts_2)
        .x_labels(pages)
        .auto_bar_width(true)
        .to_url(base_url)
}

/// Split a chart URL into decoded `(name, value)` query parameters, in order.
pub fn parse_chart_query(url: &str) -> Vec<(String, String)> {
    let Some((_, query)) = url.split_once('?') else {
        return Vec::new();
    };
    query
        .split('&')
        .filter(|kv| !kv.is_empty())
        .map(|kv| {
            let (k, v) = kv.split_once('=').unwrap_or((kv, ""));
            (
                k.to_string(),
                percent_decode_str(v).decode_utf8_lossy().into_owned(),
            )
        })
        .collect()
}
