//! Grouped boxplot: one five-number summary box per platform.

use std::collections::BTreeMap;

use super::axis;
use super::scale::{BandScale, LinearScale};
use super::scene::{line, rect, Scene};
use super::{value_extent, Margin};
use crate::dataset;
use crate::model::{EngagementRow, FiveNumberSummary};
use crate::stats;

const MARGIN: Margin = Margin {
    top: 30.0,
    bottom: 40.0,
    left: 50.0,
    right: 30.0,
};
const BOX_FILL: &str = "lightblue";
const BOX_STROKE: &str = "black";
const MEDIAN_STROKE: &str = "red";
const MEDIAN_STROKE_WIDTH: f64 = 2.0;

/// Build the boxplot scene and return it with the per-platform summaries.
pub fn build(
    rows: &[EngagementRow],
    width: f64,
    height: f64,
) -> (Scene, BTreeMap<String, FiveNumberSummary>) {
    let platforms = dataset::distinct_in_order(rows.iter().map(|r| r.platform.as_str()));
    let summaries = stats::group_summaries(rows.iter().map(|r| (r.platform.as_str(), r.likes)));

    let (min, max) = value_extent(rows.iter().map(|r| r.likes));
    let x = BandScale::new(platforms.clone(), (MARGIN.left, width - MARGIN.right));
    let y = LinearScale::new((min, max), (height - MARGIN.bottom, MARGIN.top));

    let mut scene = Scene::new(width, height);
    axis::axis_left(&mut scene, &y, MARGIN.left);
    axis::axis_bottom_band(&mut scene, &x, height - MARGIN.bottom, None);
    axis::title_bottom(&mut scene, width, height, "Platform");
    axis::title_left(&mut scene, height, "Likes");

    let bandwidth = x.bandwidth();
    for platform in &platforms {
        if let (Some(x0), Some(s)) = (x.position(platform), summaries.get(platform)) {
            let center = x0 + bandwidth / 2.0;

            // Whiskers: min up to the box, box up to max.
            scene.push(line(center, y.scale(s.min), center, y.scale(s.q1), BOX_STROKE, 1.0));
            scene.push(line(center, y.scale(s.q3), center, y.scale(s.max), BOX_STROKE, 1.0));

            // Interquartile box.
            scene.push(rect(
                x0,
                y.scale(s.q3),
                bandwidth,
                y.scale(s.q1) - y.scale(s.q3),
                BOX_FILL,
                Some(BOX_STROKE),
            ));

            // Median line across the full band.
            scene.push(line(
                x0,
                y.scale(s.median),
                x0 + bandwidth,
                y.scale(s.median),
                MEDIAN_STROKE,
                MEDIAN_STROKE_WIDTH,
            ));
        }
    }

    (scene, summaries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(platform: &str, likes: &[f64]) -> Vec<EngagementRow> {
        likes
            .iter()
            .map(|l| EngagementRow {
                platform: platform.to_string(),
                likes: *l,
            })
            .collect()
    }

    #[test]
    fn single_group_draws_box_whiskers_and_median() {
        let data = rows("TikTok", &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]);
        let (scene, summaries) = build(&data, 600.0, 400.0);

        let s = summaries["TikTok"];
        assert_eq!(s.median, 5.5);

        let boxes: Vec<_> = scene.rects().filter(|r| r.fill == BOX_FILL).collect();
        assert_eq!(boxes.len(), 1);

        let medians: Vec<_> = scene.lines().filter(|l| l.stroke == MEDIAN_STROKE).collect();
        assert_eq!(medians.len(), 1);

        // y inverts: the median line sits between the box's top and bottom.
        let y = LinearScale::new((1.0, 10.0), (360.0, 30.0));
        assert!((medians[0].y1 - y.scale(5.5)).abs() < 1e-9);
        assert!((boxes[0].y - y.scale(7.75)).abs() < 1e-9);
        assert!((boxes[0].height - (y.scale(3.25) - y.scale(7.75))).abs() < 1e-9);
    }

    #[test]
    fn one_box_per_platform() {
        let mut data = rows("TikTok", &[10.0, 20.0, 30.0]);
        data.extend(rows("Instagram", &[5.0, 15.0]));
        data.extend(rows("Twitter", &[8.0]));
        let (scene, summaries) = build(&data, 600.0, 400.0);

        assert_eq!(summaries.len(), 3);
        assert_eq!(scene.rects().filter(|r| r.fill == BOX_FILL).count(), 3);
        assert_eq!(
            scene.lines().filter(|l| l.stroke == MEDIAN_STROKE).count(),
            3
        );
    }
}
