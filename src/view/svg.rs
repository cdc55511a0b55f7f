//! SVG serialization of the widget.
//!
//! [`scene_svg`] is the responsive document a browser embeds (percent size, stretched viewBox).
//! [`frame_svg`] is one fixed-size frame with the marker composited on top, suitable for
//! rasterization.

use crate::foundation::core::{ContainerSize, Point, VIEWBOX_HEIGHT, VIEWBOX_WIDTH};
use crate::view::scene::{ANCHOR_DOT_RADIUS, WidgetScene};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const CURVE_STROKE_WIDTH: f64 = 0.5;
const LABEL_FONT_FAMILY: &str = "Arial";

/// Responsive scene document: fills its container, aspect ratio not preserved.
pub fn scene_svg(scene: &WidgetScene) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        r#"<svg xmlns="{SVG_NS}" width="100%" height="100%" viewBox="0 0 {} {}" preserveAspectRatio="none">"#,
        num(VIEWBOX_WIDTH),
        num(VIEWBOX_HEIGHT)
    ));
    push_scene_body(&mut out, scene);
    out.push_str("</svg>");
    out
}

/// One frame at `container` size. `marker_origin` is the marker's top-left in pixels, as
/// written by the driver; `None` draws the scene alone.
pub fn frame_svg(
    scene: &WidgetScene,
    container: ContainerSize,
    marker_origin: Option<Point>,
) -> String {
    let w = num(container.width());
    let h = num(container.height());

    let mut out = String::new();
    out.push_str(&format!(
        r#"<svg xmlns="{SVG_NS}" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    ));
    out.push_str(&format!(
        r#"<svg x="0" y="0" width="{w}" height="{h}" viewBox="0 0 {} {}" preserveAspectRatio="none">"#,
        num(VIEWBOX_WIDTH),
        num(VIEWBOX_HEIGHT)
    ));
    push_scene_body(&mut out, scene);
    out.push_str("</svg>");

    if let Some(origin) = marker_origin {
        let half = scene.marker_size_px / 2.0;
        out.push_str(&format!(
            r#"<circle id="marker" cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            num(origin.x + half),
            num(origin.y + half),
            num(half),
            attr(&scene.palette.marker_fill)
        ));
    }
    out.push_str("</svg>");
    out
}

fn push_scene_body(out: &mut String, scene: &WidgetScene) {
    let p = &scene.palette;
    out.push_str(&format!(
        r#"<path id="arc" d="{}" stroke="{}" fill="transparent" stroke-width="{}"/>"#,
        attr(&scene.path_d),
        attr(&p.curve_stroke),
        num(CURVE_STROKE_WIDTH)
    ));
    for (anchor, c) in &scene.anchor_dots {
        out.push_str(&format!(
            r#"<circle id="anchor-{anchor}" cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            num(c.x),
            num(c.y),
            num(ANCHOR_DOT_RADIUS),
            attr(&p.anchor_fill)
        ));
    }
    for label in &scene.labels {
        out.push_str(&format!(
            r#"<text id="label-{}" x="{}" y="{}" font-family="{LABEL_FONT_FAMILY}" font-size="{}" fill="{}">{}</text>"#,
            label.anchor,
            num(label.origin.x),
            num(label.origin.y),
            num(scene.font_size),
            attr(&p.label_fill),
            label.anchor.label()
        ));
    }
}

// Fixed precision keeps output stable across arclength solver noise.
fn num(v: f64) -> String {
    let s = format!("{v:.4}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/view/svg.rs"]
mod tests;
