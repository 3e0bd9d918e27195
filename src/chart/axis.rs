//! Axis generation: domain lines, tick marks, tick labels, and axis titles.

use super::scale::{BandScale, LinearScale};
use super::scene::{line, Baseline, DrawCommand, Scene, TextAnchor, TextCommand};

const AXIS_COLOR: &str = "black";
const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;
const TICK_FONT_SIZE: f64 = 10.0;
const TITLE_FONT_SIZE: f64 = 14.0;
const TICK_COUNT: usize = 10;

/// Vertical numeric axis at `x`: domain line, left-pointing ticks, and
/// right-anchored labels.
pub fn axis_left(scene: &mut Scene, scale: &LinearScale, x: f64) {
    let (r0, r1) = scale.range();
    scene.push(line(x, r0, x, r1, AXIS_COLOR, 1.0));
    for tick in scale.ticks(TICK_COUNT) {
        let y = scale.scale(tick);
        scene.push(line(x - TICK_SIZE, y, x, y, AXIS_COLOR, 1.0));
        scene.push(DrawCommand::Text(TextCommand {
            x: x - TICK_SIZE - TICK_PADDING,
            y,
            content: format_tick(tick),
            anchor: TextAnchor::End,
            baseline: Baseline::Middle,
            font_size: TICK_FONT_SIZE,
            rotate_deg: None,
        }));
    }
}

/// Horizontal categorical axis at `y`: domain line and one tick per band,
/// centered on the band. `label_rotation` tilts the labels about their
/// anchor, switching them to end-anchored (used for long date labels).
pub fn axis_bottom_band(scene: &mut Scene, scale: &BandScale, y: f64, label_rotation: Option<f64>) {
    let bandwidth = scale.bandwidth();
    let (start, end) = band_extent(scale);
    scene.push(line(start, y, end, y, AXIS_COLOR, 1.0));
    for key in scale.domain() {
        let Some(x0) = scale.position(key) else {
            continue;
        };
        let center = x0 + bandwidth / 2.0;
        scene.push(line(center, y, center, y + TICK_SIZE, AXIS_COLOR, 1.0));
        let anchor = if label_rotation.is_some() {
            TextAnchor::End
        } else {
            TextAnchor::Middle
        };
        scene.push(DrawCommand::Text(TextCommand {
            x: center,
            y: y + TICK_SIZE + TICK_PADDING,
            content: key.clone(),
            anchor,
            baseline: Baseline::Hanging,
            font_size: TICK_FONT_SIZE,
            rotate_deg: label_rotation,
        }));
    }
}

/// Axis title centered under the bottom axis.
pub fn title_bottom(scene: &mut Scene, width: f64, height: f64, title: &str) {
    scene.push(DrawCommand::Text(TextCommand {
        x: width / 2.0,
        y: height - 5.0,
        content: title.to_string(),
        anchor: TextAnchor::Middle,
        baseline: Baseline::Auto,
        font_size: TITLE_FONT_SIZE,
        rotate_deg: None,
    }));
}

/// Axis title rotated along the left edge, centered vertically.
pub fn title_left(scene: &mut Scene, height: f64, title: &str) {
    scene.push(DrawCommand::Text(TextCommand {
        x: 15.0,
        y: height / 2.0,
        content: title.to_string(),
        anchor: TextAnchor::Middle,
        baseline: Baseline::Auto,
        font_size: TITLE_FONT_SIZE,
        rotate_deg: Some(-90.0),
    }));
}

fn band_extent(scale: &BandScale) -> (f64, f64) {
    let domain = scale.domain();
    match (domain.first(), domain.last()) {
        (Some(first), Some(last)) => {
            let start = scale.position(first).unwrap_or(0.0);
            let end = scale.position(last).unwrap_or(0.0) + scale.bandwidth();
            (start, end)
        }
        _ => (0.0, 0.0),
    }
}

fn format_tick(value: f64) -> String {
    if value == value.trunc() {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
