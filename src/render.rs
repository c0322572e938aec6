//! HTML rendering of a [`TrendReport`].
//!
//! The page is an embedded template with `{{{NAME}}}` placeholders. Substitution is a
//! single pass over the template, so text coming from users or the API can never
//! introduce a placeholder of its own.

use crate::models::{Article, RankedFacetList};
use crate::report::{SideReport, TrendReport};
use html_escape::{encode_double_quoted_attribute, encode_text};
use num_format::{Locale, ToFormattedString};
use std::collections::HashMap;

const TEMPLATE: &str = include_str!("templates/index.html");

/// Render the comparison page.
pub fn render_page(report: &TrendReport) -> String {
    let mut values: HashMap<String, String> = HashMap::new();
    side_values(&mut values, &report.side_1, &report.years, 1);
    side_values(&mut values, &report.side_2, &report.years, 2);
    values.insert(
        "MONTH_CHART_URL".into(),
        encode_double_quoted_attribute(&report.month_chart_url).into_owned(),
    );
    values.insert(
        "PAGE_CHART_URL".into(),
        encode_double_quoted_attribute(&report.page_chart_url).into_owned(),
    );
    fill_template(TEMPLATE, &values)
}

fn side_values(
    values: &mut HashMap<String, String>,
    side: &SideReport,
    years: &[i32],
    n: u8,
) {
    // Double-quoted attribute escaping also covers text content.
    values.insert(
        format!("QUERY_{n}"),
        encode_double_quoted_attribute(&side.query).into_owned(),
    );
    values.insert(format!("YEAR_{n}"), side.year.to_string());
    values.insert(format!("YEAR_OPTIONS_{n}"), year_options(years, side.year));
    values.insert(
        format!("TOTAL_{n}"),
        side.total.to_formatted_string(&Locale::en),
    );
    values.insert(format!("PEOPLE_{n}"), facet_items(&side.people));
    values.insert(format!("TERMS_{n}"), facet_items(&side.terms));
    values.insert(format!("ARTICLES_{n}"), article_items(&side.articles));
}

fn year_options(years: &[i32], selected: i32) -> String {
    let mut out = String::new();
    for y in years {
        let sel = if *y == selected { " selected" } else { "" };
        out.push_str(&format!(r#"<option value="{y}"{sel}>{y}</option>"#));
    }
    out
}

fn facet_items(items: &RankedFacetList) -> String {
    let mut out = String::new();
    for (term, count) in items {
        out.push_str(&format!(
            r#"<li>{} <span class="count">({})</span></li>"#,
            encode_text(term),
            count.to_formatted_string(&Locale::en)
        ));
    }
    out
}

fn article_items(articles: &[Article]) -> String {
    let mut out = String::new();
    for a in articles {
        out.push_str("<li>");
        if let Some(img) = a.small_image_url.as_deref().filter(|s| !s.is_empty()) {
            out.push_str(&format!(
                r#"<img src="{}" alt="">"#,
                encode_double_quoted_attribute(img)
            ));
        }
        out.push_str(&format!(
            r#"<a href="{}">{}</a></li>"#,
            encode_double_quoted_attribute(&a.url),
            encode_text(&a.title)
        ));
    }
    out
}

/// Replace every `{{{NAME}}}` with `values[NAME]`; unknown names become empty.
fn fill_template(template: &str, values: &HashMap<String, String>) -> String {
    let mut out = String::with_capacity(template.len() * 2);
    let mut rest = template;
    while let Some(start) = rest.find("{{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 3..];
        match after.find("}}}") {
            Some(end) => {
                let name = &after[..end];
                if let Some(v) = values.get(name) {
                    out.push_str(v);
                } else {
                    log::warn!("template placeholder {name} has no value");
                }
                rest = &after[end + 3..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_is_single_pass() {
        let values = HashMap::from([
            ("A".to_string(), "{{{B}}}".to_string()),
            ("B".to_string(), "x".to_string()),
        ]);
        assert_eq!(fill_template("<{{{A}}}|{{{B}}}>", &values), "<{{{B}}}|x>");
    }

    #[test]
    fn unterminated_placeholder_is_kept() {
        let values = HashMap::new();
        assert_eq!(fill_template("a {{{B", &values), "a {{{B");
    }

    #[test]
    fn facet_terms_are_escaped() {
        let html = facet_items(&vec![("<b>Bush</b>".into(), 1200)]);
        assert_eq!(
            html,
            r#"<li>&lt;b&gt;Bush&lt;/b&gt; <span class="count">(1,200)</span></li>"#
        );
    }

    #[test]
    fn article_items_link_titles_and_thumbnails() {
        let html = article_items(&[
            Article {
                url: "http://example.com/a?x=1&y=2".into(),
                title: "A & B".into(),
                small_image_url: Some("http://example.com/t.jpg".into()),
            },
            Article {
                url: "http://example.com/b".into(),
                title: "B".into(),
                small_image_url: Some(String::new()),
            },
        ]);
        assert_eq!(
            html,
            concat!(
                r#"<li><img src="http://example.com/t.jpg" alt="">"#,
                r#"<a href="http://example.com/a?x=1&amp;y=2">A &amp; B</a></li>"#,
                r#"<li><a href="http://example.com/b">B</a></li>"#
            )
        );
    }

    #[test]
    fn selected_year_marked() {
        let html = year_options(&[2007, 2008], 2008);
        assert_eq!(
            html,
            r#"<option value="2007">2007</option><option value="2008" selected>2008</option>"#
        );
    }
}
