use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// One observed post: the platform it was published on and its like count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngagementRow {
    #[serde(rename = "Platform")]
    pub platform: String,
    #[serde(rename = "Likes")]
    pub likes: f64,
}

/// Average likes for one (platform, post type) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AverageRow {
    #[serde(rename = "Platform")]
    pub platform: String,
    #[serde(rename = "PostType")]
    pub post_type: String,
    #[serde(rename = "Likes")]
    pub likes: f64,
}

/// Total likes across all platforms on one date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Likes")]
    pub likes: f64,
}

/// Five-number summary of one group's values.
///
/// Holds `min <= q1 <= median <= q3 <= max` for any group with at least one
/// value; a single-value group has all five statistics equal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FiveNumberSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Resolved render settings, built once from CLI arguments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub likes_csv: PathBuf,
    pub averages_csv: PathBuf,
    pub timeline_csv: PathBuf,
    pub out_dir: PathBuf,
    pub width: f64,
    pub height: f64,
    pub raster: bool,
}

/// The chart a report entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    Boxplot,
    GroupedBar,
    Timeline,
}

impl ChartKind {
    /// File name (without extension) the chart is written under.
    pub fn file_stem(self) -> &'static str {
        match self {
            ChartKind::Boxplot => "boxplot",
            ChartKind::GroupedBar => "grouped_bar",
            ChartKind::Timeline => "timeline",
        }
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ChartKind::Boxplot => "boxplot",
            ChartKind::GroupedBar => "grouped-bar",
            ChartKind::Timeline => "timeline",
        })
    }
}

/// Everything produced for one chart: where the data came from, the
/// per-group summaries, and where the output landed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartReport {
    pub kind: ChartKind,
    pub source: PathBuf,
    pub rows: usize,
    pub groups: BTreeMap<String, FiveNumberSummary>,
    pub svg_path: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub png_path: Option<PathBuf>,
}

/// Full description of one render run, printable as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderReport {
    #[serde(default)]
    pub timestamp_utc: String,
    pub width: f64,
    pub height: f64,
    pub charts: Vec<ChartReport>,
}
