//! Resolved draw commands produced by the chart builders.
//!
//! A [`Scene`] is the complete description of one chart with every
//! coordinate already mapped to pixel space, so the SVG writer only has to
//! serialize it.

use super::CANVAS_BACKGROUND;

#[derive(Debug, Clone)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub background: &'static str,
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            background: CANVAS_BACKGROUND,
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn rects(&self) -> impl Iterator<Item = &RectCommand> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Rect(rect) => Some(rect),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = &LineCommand> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn paths(&self) -> impl Iterator<Item = &PathCommand> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Path(path) => Some(path),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextCommand> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text(text) => Some(text),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect(RectCommand),
    Line(LineCommand),
    Path(PathCommand),
    Text(TextCommand),
}

/// Axis-aligned rectangle with optional stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCommand {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
    pub stroke: Option<String>,
}

/// Straight stroked segment.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCommand {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: String,
    pub stroke_width: f64,
}

/// Unfilled stroked path with pre-built path data.
#[derive(Debug, Clone, PartialEq)]
pub struct PathCommand {
    pub d: String,
    pub stroke: String,
    pub stroke_width: f64,
}

/// Text label. `rotate_deg`, when set, rotates the label about its own
/// anchor point `(x, y)`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCommand {
    pub x: f64,
    pub y: f64,
    pub content: String,
    pub anchor: TextAnchor,
    pub baseline: Baseline,
    pub font_size: f64,
    pub rotate_deg: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Baseline {
    Auto,
    Middle,
    Hanging,
}

pub fn rect(x: f64, y: f64, width: f64, height: f64, fill: &str, stroke: Option<&str>) -> DrawCommand {
    DrawCommand::Rect(RectCommand {
        x,
        y,
        width,
        height,
        fill: fill.to_string(),
        stroke: stroke.map(str::to_string),
    })
}

pub fn line(x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str, stroke_width: f64) -> DrawCommand {
    DrawCommand::Line(LineCommand {
        x1,
        y1,
        x2,
        y2,
        stroke: stroke.to_string(),
        stroke_width,
    })
}

pub fn path(d: String, stroke: &str, stroke_width: f64) -> DrawCommand {
    DrawCommand::Path(PathCommand {
        d,
        stroke: stroke.to_string(),
        stroke_width,
    })
}
