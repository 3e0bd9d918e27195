//! Chart construction: scales, axes, and scene assembly.
//!
//! Each chart builder owns its scales, computes every coordinate in pixel
//! space, and emits a [`scene::Scene`] of resolved draw commands. Nothing in
//! here touches the filesystem or knows about SVG syntax.

pub mod axis;
pub mod boxplot;
pub mod curve;
pub mod grouped_bar;
pub mod scale;
pub mod scene;
pub mod timeline;

/// Pixel margins around the plotting area.
#[derive(Debug, Clone, Copy)]
pub struct Margin {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

/// Canvas background shared by all three charts.
pub const CANVAS_BACKGROUND: &str = "#e9f7f2";

/// Series colors for grouped bars, assigned to post types by first
/// appearance and recycled if there are more series than colors.
pub const SERIES_COLORS: [&str; 3] = ["#1f77b4", "#ff7f0e", "#2ca02c"];

/// Minimum and maximum of an iterator of finite values.
pub(crate) fn value_extent<I>(values: I) -> (f64, f64)
where
    I: IntoIterator<Item = f64>,
{
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for value in values {
        min = min.min(value);
        max = max.max(value);
    }
    (min, max)
}
