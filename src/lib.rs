//! nyt_trends
//!
//! Compare how two search queries trend in the NYT Article Search API. Pairs with
//! the `trends` binary, which serves the comparison page or runs one comparison
//! from the command line.
//!
//! ### Features
//! - Fetch month, page, person and descriptor facets for two `(query, year)` pairs
//! - Aggregate articles per month and per printed page, rank people and terms
//! - Build chart-image request URLs (line chart per month, grouped bars per page)
//! - Render an HTML page, or save the aggregates as CSV/JSON
//!
//! ### Example
//! ```no_run
//! use nyt_trends::{TrendQuery, TrendsConfig, TrendsService};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let service = TrendsService::new(TrendsConfig::default().with_api_key("my-key"))?;
//! let report = service
//!     .compare(TrendQuery::new("palin", 2008), TrendQuery::new("biden", 2008))
//!     .await?;
//! println!("{} vs {}", report.side_1.total, report.side_2.total);
//! println!("{}", report.month_chart_url);
//! nyt_trends::storage::save_csv(&report, "months.csv")?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod chart;
pub mod config;
pub mod error;
pub mod facets;
pub mod models;
pub mod render;
pub mod report;
pub mod server;
pub mod storage;

pub use api::Client;
pub use config::TrendsConfig;
pub use error::TrendsError;
pub use models::{ApiResult, TrendQuery};
pub use report::{TrendParams, TrendReport, TrendsService};
