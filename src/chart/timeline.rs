//! Time-series line chart: likes over time as a natural spline through the
//! per-date values.

use std::collections::BTreeMap;

use super::axis;
use super::curve;
use super::scale::{BandScale, LinearScale};
use super::scene::{path, Scene};
use super::{value_extent, Margin};
use crate::dataset;
use crate::model::{FiveNumberSummary, TimelineRow};
use crate::stats;

const MARGIN: Margin = Margin {
    top: 30.0,
    bottom: 70.0,
    left: 50.0,
    right: 100.0,
};
const LINE_STROKE: &str = "blue";
const LINE_STROKE_WIDTH: f64 = 2.0;
const DATE_LABEL_ROTATION: f64 = -25.0;

/// Build the timeline scene. The returned summary describes the whole
/// series (one value per date makes per-date summaries degenerate), keyed
/// by the y-axis title.
pub fn build(
    rows: &[TimelineRow],
    width: f64,
    height: f64,
) -> (Scene, BTreeMap<String, FiveNumberSummary>) {
    let dates = dataset::distinct_in_order(rows.iter().map(|r| r.date.as_str()));
    let summaries = stats::group_summaries(rows.iter().map(|r| ("Likes", r.likes)));

    let (min, max) = value_extent(rows.iter().map(|r| r.likes));
    let x = BandScale::new(dates, (MARGIN.left, width - MARGIN.right));
    let y = LinearScale::new((min, max), (height - MARGIN.bottom, MARGIN.top));

    let mut scene = Scene::new(width, height);
    axis::axis_left(&mut scene, &y, MARGIN.left);
    axis::axis_bottom_band(
        &mut scene,
        &x,
        height - MARGIN.bottom,
        Some(DATE_LABEL_ROTATION),
    );
    axis::title_bottom(&mut scene, width, height, "Date");
    axis::title_left(&mut scene, height, "Likes");

    let bandwidth = x.bandwidth();
    let points: Vec<(f64, f64)> = rows
        .iter()
        .filter_map(|row| {
            x.position(&row.date)
                .map(|x0| (x0 + bandwidth / 2.0, y.scale(row.likes)))
        })
        .collect();
    scene.push(path(
        curve::natural_path(&points),
        LINE_STROKE,
        LINE_STROKE_WIDTH,
    ));

    (scene, summaries)
}
