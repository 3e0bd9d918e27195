//! SVG serialization of chart scenes.

use std::fmt::Write as _;

use crate::chart::scene::{Baseline, DrawCommand, Scene, TextAnchor};

const FONT_FAMILY: &str = "sans-serif";

/// Render a scene as a standalone SVG document.
pub fn render(scene: &Scene) -> String {
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        "<svg xmlns='http://www.w3.org/2000/svg' width='{:.0}' height='{:.0}' viewBox='0 0 {:.0} {:.0}'>",
        scene.width, scene.height, scene.width, scene.height
    );
    let _ = writeln!(
        svg,
        "  <rect width='{:.0}' height='{:.0}' fill='{}'/>",
        scene.width, scene.height, scene.background
    );

    for command in &scene.commands {
        match command {
            DrawCommand::Rect(r) => {
                let stroke = r
                    .stroke
                    .as_deref()
                    .map(|s| format!(" stroke='{s}'"))
                    .unwrap_or_default();
                let _ = writeln!(
                    svg,
                    "  <rect x='{:.2}' y='{:.2}' width='{:.2}' height='{:.2}' fill='{}'{}/>",
                    r.x, r.y, r.width, r.height, r.fill, stroke
                );
            }
            DrawCommand::Line(l) => {
                let _ = writeln!(
                    svg,
                    "  <line x1='{:.2}' y1='{:.2}' x2='{:.2}' y2='{:.2}' stroke='{}' stroke-width='{}'/>",
                    l.x1, l.y1, l.x2, l.y2, l.stroke, l.stroke_width
                );
            }
            DrawCommand::Path(p) => {
                let _ = writeln!(
                    svg,
                    "  <path d='{}' fill='none' stroke='{}' stroke-width='{}'/>",
                    p.d, p.stroke, p.stroke_width
                );
            }
            DrawCommand::Text(t) => {
                let mut attrs = String::new();
                match t.anchor {
                    TextAnchor::Start => {}
                    TextAnchor::Middle => attrs.push_str(" text-anchor='middle'"),
                    TextAnchor::End => attrs.push_str(" text-anchor='end'"),
                }
                match t.baseline {
                    Baseline::Auto => {}
                    Baseline::Middle => attrs.push_str(" dominant-baseline='middle'"),
                    Baseline::Hanging => attrs.push_str(" dominant-baseline='hanging'"),
                }
                if let Some(deg) = t.rotate_deg {
                    let _ = write!(attrs, " transform='rotate({deg} {:.2} {:.2})'", t.x, t.y);
                }
                let _ = writeln!(
                    svg,
                    "  <text x='{:.2}' y='{:.2}' font-family='{}' font-size='{}'{}>{}</text>",
                    t.x,
                    t.y,
                    FONT_FAMILY,
                    t.font_size,
                    attrs,
                    escape_text(&t.content)
                );
            }
        }
    }

    let _ = writeln!(svg, "</svg>");
    svg
}

fn escape_text(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::scene::{line, rect, DrawCommand, Scene, TextCommand};

    #[test]
    fn document_wraps_background_and_commands() {
        let mut scene = Scene::new(600.0, 400.0);
        scene.push(rect(10.0, 20.0, 30.0, 40.0, "lightblue", Some("black")));
        scene.push(line(0.0, 0.0, 5.0, 5.0, "red", 2.0));

        let svg = render(&scene);
        assert!(svg.starts_with("<svg xmlns='http://www.w3.org/2000/svg' width='600'"));
        assert!(svg.contains("fill='#e9f7f2'"));
        assert!(svg.contains("<rect x='10.00' y='20.00' width='30.00' height='40.00' fill='lightblue' stroke='black'/>"));
        assert!(svg.contains("stroke-width='2'"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn text_content_is_escaped() {
        let mut scene = Scene::new(100.0, 100.0);
        scene.push(DrawCommand::Text(TextCommand {
            x: 1.0,
            y: 2.0,
            content: "<Tik&Tok>".to_string(),
            anchor: crate::chart::scene::TextAnchor::Start,
            baseline: crate::chart::scene::Baseline::Auto,
            font_size: 10.0,
            rotate_deg: None,
        }));

        let svg = render(&scene);
        assert!(svg.contains("&lt;Tik&amp;Tok&gt;"));
        assert!(!svg.contains("<Tik&Tok>"));
    }

    #[test]
    fn rotated_text_pivots_on_its_anchor() {
        let mut scene = Scene::new(100.0, 100.0);
        scene.push(DrawCommand::Text(TextCommand {
            x: 50.0,
            y: 60.0,
            content: "3/1".to_string(),
            anchor: crate::chart::scene::TextAnchor::End,
            baseline: crate::chart::scene::Baseline::Hanging,
            font_size: 10.0,
            rotate_deg: Some(-25.0),
        }));

        let svg = render(&scene);
        assert!(svg.contains("transform='rotate(-25 50.00 60.00)'"));
        assert!(svg.contains("text-anchor='end'"));
    }
}
