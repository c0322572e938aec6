use nyt_trends::config::TrendsConfig;
use nyt_trends::models::{ApiResult, TrendQuery};
use nyt_trends::report::build_report;
use nyt_trends::storage;
use std::fs;
use tempfile::tempdir;

fn sample() -> nyt_trends::TrendReport {
    let r1: ApiResult = serde_json::from_str(
        r#"{"facets": {
            "publication_month": [{"term": "1", "count": 5}, {"term": "3", "count": 2}],
            "page_facet": [{"term": "12", "count": 3}]
        }}"#,
    )
    .unwrap();
    let r2: ApiResult =
        serde_json::from_str(r#"{"facets": {"page_facet": [{"term": "5", "count": 1}]}}"#).unwrap();
    build_report(
        &TrendsConfig::default(),
        TrendQuery::new("palin", 2008),
        r1,
        TrendQuery::new("biden", 2008),
        r2,
        2026,
    )
}

#[test]
fn save_month_and_page_csv() {
    let report = sample();
    let dir = tempdir().unwrap();

    let months = dir.path().join("months.csv");
    storage::save_csv(&report, &months).unwrap();
    let txt = fs::read_to_string(&months).unwrap();
    let lines: Vec<&str> = txt.lines().collect();
    assert_eq!(lines.len(), 13);
    assert_eq!(lines[0], "month,count_1,count_2");
    assert_eq!(lines[1], "Jan,5,0");
    assert_eq!(lines[3], "Mar,2,0");

    let pages = dir.path().join("pages.csv");
    storage::save_page_csv(&report, &pages).unwrap();
    assert_eq!(
        fs::read_to_string(&pages).unwrap(),
        "page,count_1,count_2\n5,0,1\n12,3,0\n"
    );
}

#[test]
fn save_json_report() {
    let report = sample();
    let dir = tempdir().unwrap();
    let path = dir.path().join("report.json");
    storage::save_json(&report, &path).unwrap();
    let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(v["side_1"]["total"], 7);
    assert_eq!(v["side_1"]["pages"]["12"], 3);
    assert_eq!(v["side_2"]["query"], "biden");
    assert!(v["page_chart_url"].as_str().unwrap().contains("chbh=a"));
}
