//! CSV loading and numeric coercion for the three chart inputs.
//!
//! Each loader deserializes rows with serde, then validates that the numeric
//! column holds finite values so the summarizer and scales never see NaN or
//! infinities.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;

use crate::model::{AverageRow, EngagementRow, TimelineRow};

/// Load the per-post engagement rows backing the boxplot.
pub fn load_engagement(path: &Path) -> Result<Vec<EngagementRow>> {
    let rows: Vec<EngagementRow> = load_rows(path)?;
    for (index, row) in rows.iter().enumerate() {
        ensure_finite(row.likes, path, index)?;
    }
    Ok(rows)
}

/// Load the pre-averaged (platform, post type) rows backing the bar chart.
pub fn load_averages(path: &Path) -> Result<Vec<AverageRow>> {
    let rows: Vec<AverageRow> = load_rows(path)?;
    for (index, row) in rows.iter().enumerate() {
        ensure_finite(row.likes, path, index)?;
    }
    Ok(rows)
}

/// Load the per-date rows backing the timeline chart.
pub fn load_timeline(path: &Path) -> Result<Vec<TimelineRow>> {
    let rows: Vec<TimelineRow> = load_rows(path)?;
    for (index, row) in rows.iter().enumerate() {
        ensure_finite(row.likes, path, index)?;
    }
    Ok(rows)
}

fn load_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    read_rows(file, &path.display().to_string())
}

fn read_rows<T, R>(source: R, label: &str) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut reader = csv::Reader::from_reader(source);
    let mut rows = Vec::new();
    for (index, record) in reader.deserialize().enumerate() {
        let row: T = record.with_context(|| format!("{label}: data row {}", index + 1))?;
        rows.push(row);
    }
    if rows.is_empty() {
        bail!("{label}: no data rows");
    }
    Ok(rows)
}

fn ensure_finite(value: f64, path: &Path, index: usize) -> Result<()> {
    if !value.is_finite() {
        bail!(
            "{}: data row {}: likes value {value} is not a finite number",
            path.display(),
            index + 1
        );
    }
    Ok(())
}

/// Distinct keys in order of first appearance. The charts derive their
/// categorical domains from the data this way, so draw order matches the
/// input file.
pub fn distinct_in_order<'a, I>(keys: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for key in keys {
        if seen.insert(key) {
            out.push(key.to_string());
        }
    }
    out
}
