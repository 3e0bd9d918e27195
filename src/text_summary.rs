//! Text summary builder for CLI output.
//!
//! Formats per-chart, per-group five-number summaries as aligned
//! human-readable lines for text mode.

use crate::model::RenderReport;

/// Pre-formatted lines for text output.
pub(crate) struct TextSummary {
    pub lines: Vec<String>,
}

/// Build a text summary from a completed render report.
pub(crate) fn build_text_summary(report: &RenderReport) -> TextSummary {
    let mut lines = Vec::new();

    for chart in &report.charts {
        lines.push(format!(
            "== {} ({} rows from {}) ==",
            chart.kind,
            chart.rows,
            chart.source.display()
        ));

        let key_width = chart.groups.keys().map(|key| key.len()).max().unwrap_or(0);
        for (key, s) in &chart.groups {
            lines.push(format!(
                "{key:<key_width$}  min {:>8.1}  q1 {:>8.1}  med {:>8.1}  q3 {:>8.1}  max {:>8.1}",
                s.min, s.q1, s.median, s.q3, s.max
            ));
        }

        lines.push(format!("svg: {}", chart.svg_path.display()));
        if let Some(png) = chart.png_path.as_ref() {
            lines.push(format!("png: {}", png.display()));
        }
        lines.push(String::new());
    }

    TextSummary { lines }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ChartKind, ChartReport, FiveNumberSummary};
    use std::collections::BTreeMap;
    use std::path::PathBuf;

    #[test]
    fn lines_carry_group_stats_and_paths() {
        let mut groups = BTreeMap::new();
        groups.insert(
            "TikTok".to_string(),
            FiveNumberSummary {
                min: 1.0,
                q1: 3.25,
                median: 5.5,
                q3: 7.75,
                max: 10.0,
            },
        );
        let report = RenderReport {
            timestamp_utc: String::new(),
            width: 600.0,
            height: 400.0,
            charts: vec![ChartReport {
                kind: ChartKind::Boxplot,
                source: PathBuf::from("data/socialMedia.csv"),
                rows: 10,
                groups,
                svg_path: PathBuf::from("charts/boxplot.svg"),
                png_path: None,
            }],
        };

        let summary = build_text_summary(&report);
        assert!(summary.lines[0].contains("boxplot"));
        assert!(summary.lines[0].contains("10 rows"));
        let stats_line = &summary.lines[1];
        assert!(stats_line.starts_with("TikTok"));
        assert!(stats_line.contains("med      5.5"));
        assert!(summary.lines[2].ends_with("charts/boxplot.svg"));
    }
}
