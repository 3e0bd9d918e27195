//! Grouped bar chart: average likes per (platform, post type) pair, bars
//! grouped by platform and colored by post type, with a legend.

use std::collections::{BTreeMap, HashMap};

use super::axis;
use super::scale::{BandScale, LinearScale};
use super::scene::{rect, Baseline, DrawCommand, Scene, TextAnchor, TextCommand};
use super::{value_extent, Margin, SERIES_COLORS};
use crate::dataset;
use crate::model::{AverageRow, FiveNumberSummary};
use crate::stats;

const MARGIN: Margin = Margin {
    top: 30.0,
    bottom: 40.0,
    left: 50.0,
    right: 100.0,
};
const GROUP_PADDING: f64 = 0.2;
const BAR_PADDING: f64 = 0.05;
const HEADROOM: f64 = 1.1;
const LEGEND_OFFSET: f64 = 150.0;
const LEGEND_SWATCH: f64 = 15.0;
const LEGEND_ROW_HEIGHT: f64 = 20.0;
const LEGEND_FONT_SIZE: f64 = 12.0;

/// Build the grouped bar scene and return it with per-platform summaries
/// over the post-type averages.
pub fn build(
    rows: &[AverageRow],
    width: f64,
    height: f64,
) -> (Scene, BTreeMap<String, FiveNumberSummary>) {
    let platforms = dataset::distinct_in_order(rows.iter().map(|r| r.platform.as_str()));
    let post_types = dataset::distinct_in_order(rows.iter().map(|r| r.post_type.as_str()));
    let summaries = stats::group_summaries(rows.iter().map(|r| (r.platform.as_str(), r.likes)));

    let (_, max) = value_extent(rows.iter().map(|r| r.likes));
    let x0 = BandScale::new(platforms, (MARGIN.left, width - MARGIN.right))
        .with_padding(GROUP_PADDING);
    let x1 = BandScale::new(post_types.clone(), (0.0, x0.bandwidth())).with_padding(BAR_PADDING);
    let y = LinearScale::new((0.0, max * HEADROOM), (height - MARGIN.bottom, MARGIN.top));

    let colors: HashMap<&str, &str> = post_types
        .iter()
        .enumerate()
        .map(|(index, name)| (name.as_str(), SERIES_COLORS[index % SERIES_COLORS.len()]))
        .collect();

    let mut scene = Scene::new(width, height);
    axis::axis_left(&mut scene, &y, MARGIN.left);
    axis::axis_bottom_band(&mut scene, &x0, height - MARGIN.bottom, None);
    axis::title_bottom(&mut scene, width, height, "Platform");
    axis::title_left(&mut scene, height, "Likes");

    let baseline = height - MARGIN.bottom;
    for row in rows {
        if let (Some(group_x), Some(bar_x)) =
            (x0.position(&row.platform), x1.position(&row.post_type))
        {
            let top = y.scale(row.likes);
            let fill = colors.get(row.post_type.as_str()).copied().unwrap_or("gray");
            scene.push(rect(
                group_x + bar_x,
                top,
                x1.bandwidth(),
                baseline - top,
                fill,
                None,
            ));
        }
    }

    draw_legend(&mut scene, width, &post_types, &colors);

    (scene, summaries)
}

fn draw_legend(scene: &mut Scene, width: f64, post_types: &[String], colors: &HashMap<&str, &str>) {
    let origin_x = width - LEGEND_OFFSET;
    let origin_y = MARGIN.top;
    for (index, name) in post_types.iter().enumerate() {
        let row_y = origin_y + index as f64 * LEGEND_ROW_HEIGHT;
        let fill = colors.get(name.as_str()).copied().unwrap_or("gray");
        scene.push(rect(
            origin_x + 70.0,
            row_y,
            LEGEND_SWATCH,
            LEGEND_SWATCH,
            fill,
            None,
        ));
        scene.push(DrawCommand::Text(TextCommand {
            x: origin_x + 90.0,
            y: row_y + LEGEND_SWATCH / 2.0,
            content: name.clone(),
            anchor: TextAnchor::Start,
            baseline: Baseline::Middle,
            font_size: LEGEND_FONT_SIZE,
            rotate_deg: None,
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(platform: &str, post_type: &str, likes: f64) -> AverageRow {
        AverageRow {
            platform: platform.to_string(),
            post_type: post_type.to_string(),
            likes,
        }
    }

    fn sample() -> Vec<AverageRow> {
        vec![
            row("TikTok", "video", 240.0),
            row("TikTok", "photo", 120.0),
            row("Instagram", "video", 180.0),
            row("Instagram", "photo", 200.0),
        ]
    }

    #[test]
    fn one_bar_per_row_plus_legend_swatches() {
        let (scene, _) = build(&sample(), 600.0, 400.0);
        // 4 bars + 2 legend swatches.
        assert_eq!(scene.rects().count(), 6);
        assert!(scene.texts().any(|t| t.content == "video"));
    }

    #[test]
    fn bar_heights_scale_with_value() {
        let (scene, _) = build(&sample(), 600.0, 400.0);
        let y = LinearScale::new((0.0, 240.0 * HEADROOM), (360.0, 30.0));

        let bars: Vec<_> = scene
            .rects()
            .filter(|r| r.width < 100.0 && r.height > LEGEND_SWATCH)
            .collect();
        let tallest = bars
            .iter()
            .map(|r| r.height)
            .fold(f64::NEG_INFINITY, f64::max);
        assert!((tallest - (360.0 - y.scale(240.0))).abs() < 1e-9);
    }

    #[test]
    fn series_colors_follow_first_appearance() {
        let (scene, _) = build(&sample(), 600.0, 400.0);
        let video_bars: Vec<_> = scene
            .rects()
            .filter(|r| r.fill == SERIES_COLORS[0])
            .collect();
        // "video" appears first: two bars and one legend swatch.
        assert_eq!(video_bars.len(), 3);
    }

    #[test]
    fn summaries_cover_each_platform() {
        let (_, summaries) = build(&sample(), 600.0, 400.0);
        assert_eq!(summaries.len(), 2);
        let tiktok = summaries["TikTok"];
        assert_eq!(tiktok.min, 120.0);
        assert_eq!(tiktok.max, 240.0);
    }
}
