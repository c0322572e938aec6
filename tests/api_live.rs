//! Live API tests. Run with: `NYT_ARTICLE_API_KEY=... cargo test --features online`
#![cfg(feature = "online")]

use nyt_trends::config::DEFAULT_API_URL;
use nyt_trends::{Client, TrendQuery};

#[tokio::test]
async fn fetch_trend_facets() {
    let key = std::env::var("NYT_ARTICLE_API_KEY").expect("NYT_ARTICLE_API_KEY");
    let cli = Client::new(DEFAULT_API_URL, key).unwrap();
    let r = cli.trend_request(&TrendQuery::new("palin", 2008)).await.unwrap();
    assert!(r.facets.is_some());
}
