use nyt_trends::chart::axis::y_range;
use nyt_trends::chart::encoding::{decode_extended, unscale};
use nyt_trends::chart::{
    ChartStyle, align_pages, generate_monthly_chart_url, generate_page_chart_url,
    parse_chart_query,
};
use nyt_trends::models::PageCounts;

const BASE: &str = "https://chart.googleapis.com/chart";

fn param(url: &str, name: &str) -> String {
    parse_chart_query(url)
        .into_iter()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v)
        .unwrap_or_else(|| panic!("missing {name} in {url}"))
}

#[test]
fn page_axis_is_sorted_union() {
    let p1 = PageCounts::from([(12, 3)]);
    let p2 = PageCounts::from([(5, 1)]);
    let (pages, c1, c2) = align_pages(&p1, &p2);
    assert_eq!(pages, vec![5, 12]);
    assert_eq!(c1, vec![0, 3]);
    assert_eq!(c2, vec![1, 0]);

    let url = generate_page_chart_url(&p1, &p2, &ChartStyle::default(), BASE);
    assert!(param(&url, "chxl").starts_with("0:|5|12|1:|"));
}

#[test]
fn shared_pages_are_not_duplicated() {
    let p1 = PageCounts::from([(1, 4), (3, 2), (7, 1)]);
    let p2 = PageCounts::from([(3, 6), (1, 1)]);
    let (pages, c1, c2) = align_pages(&p1, &p2);
    assert_eq!(pages, vec![1, 3, 7]);
    assert_eq!(c1, vec![4, 2, 1]);
    assert_eq!(c2, vec![1, 6, 0]);
}

#[test]
fn monthly_chart_labels_and_ticks() {
    let m1 = [5, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0];
    let m2 = [0; 12];
    let url = generate_monthly_chart_url(&m1, &m2, &ChartStyle::default(), BASE);
    assert!(url.starts_with("https://chart.googleapis.com/chart?cht=lc&chs=600x500&chd=e:"));
    assert_eq!(
        param(&url, "chxl"),
        "0:|Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec|1:|0|1|2|3|4"
    );
    assert_eq!(param(&url, "chco"), "207000,0077A0");
    assert_eq!(param(&url, "chls"), "6,1,0|6,1,0");
}

#[test]
fn series_round_trip_through_url() {
    let m1 = [5, 17, 2, 0, 40, 33, 8, 120, 64, 3, 9, 11];
    let m2 = [1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144];
    let url = generate_monthly_chart_url(&m1, &m2, &ChartStyle::default(), BASE);

    let range = y_range(&[m1.to_vec(), m2.to_vec()]);
    let decoded = decode_extended(&param(&url, "chd")).unwrap();
    assert_eq!(decoded.len(), 2);
    let back: Vec<Vec<u64>> = decoded
        .iter()
        .map(|s| s.iter().map(|v| unscale(*v, range)).collect())
        .collect();
    assert_eq!(back[0], m1.to_vec());
    assert_eq!(back[1], m2.to_vec());
}

#[test]
fn empty_pages_produce_single_zero_tick() {
    let url = generate_page_chart_url(
        &PageCounts::new(),
        &PageCounts::new(),
        &ChartStyle::default(),
        BASE,
    );
    assert_eq!(param(&url, "chd"), "e:,");
    assert_eq!(param(&url, "chxl"), "0:|1:|0");
    assert_eq!(param(&url, "chbh"), "a");
}

#[test]
fn flat_series_still_labels_axis() {
    let url = generate_monthly_chart_url(&[3; 12], &[3; 12], &ChartStyle::default(), BASE);
    assert!(param(&url, "chxl").ends_with("|1:|3"));
    let decoded = decode_extended(&param(&url, "chd")).unwrap();
    assert!(decoded.iter().flatten().all(|v| *v == 0));
}
