use crate::chart::align_pages;
use crate::chart::axis::month_abbreviations;
use crate::report::TrendReport;
use anyhow::{Context, Result};
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Save monthly counts of both sides as CSV: `month,count_1,count_2`.
pub fn save_csv<P: AsRef<Path>>(report: &TrendReport, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut wtr = WriterBuilder::new()
        .from_path(path)
        .with_context(|| format!("create {}", path.display()))?;
    wtr.serialize(("month", "count_1", "count_2"))?;
    for (i, name) in month_abbreviations().iter().enumerate() {
        wtr.serialize((name, report.side_1.months[i], report.side_2.months[i]))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save per-page counts of both sides as CSV: `page,count_1,count_2`, pages ascending.
pub fn save_page_csv<P: AsRef<Path>>(report: &TrendReport, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut wtr = WriterBuilder::new()
        .from_path(path)
        .with_context(|| format!("create {}", path.display()))?;
    wtr.serialize(("page", "count_1", "count_2"))?;
    let (pages, counts_1, counts_2) = align_pages(&report.side_1.pages, &report.side_2.pages);
    for ((page, c1), c2) in pages.iter().zip(&counts_1).zip(&counts_2) {
        wtr.serialize((page, c1, c2))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save the whole report as pretty JSON.
pub fn save_json<P: AsRef<Path>>(report: &TrendReport, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut f = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let s = serde_json::to_string_pretty(report)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}
