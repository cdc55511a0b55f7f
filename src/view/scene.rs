use crate::config::widget::{Palette, WidgetConfig};
use crate::foundation::core::{Point, Rect};
use crate::path::anchors::Anchor;
use crate::path::curve::ArcCurve;

/// Radius of the anchor dots, in curve-space units.
pub const ANCHOR_DOT_RADIUS: f64 = 0.5;

/// A clickable text label bound to an anchor.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelNode {
    /// Anchor the label moves the marker to.
    pub anchor: Anchor,
    /// Text baseline origin (curve space).
    pub origin: Point,
    /// Click target (curve space).
    pub hit_rect: Rect,
}

/// Static presentation of the widget in curve space: arc, anchor dots, labels.
///
/// The marker is not part of the scene; only the driver positions it.
#[derive(Clone, Debug, PartialEq)]
pub struct WidgetScene {
    /// SVG path data of the arc.
    pub path_d: String,
    /// Anchor dot centers, derived from the arc's arclength fractions.
    pub anchor_dots: Vec<(Anchor, Point)>,
    /// Labels in anchor order.
    pub labels: Vec<LabelNode>,
    /// Label font size (curve space).
    pub font_size: f64,
    /// Colors.
    pub palette: Palette,
    /// Marker edge length in pixels.
    pub marker_size_px: f64,
}

impl WidgetScene {
    /// Lay out the scene for `cfg`.
    pub fn build(cfg: &WidgetConfig) -> Self {
        let curve = cfg.curve();
        Self::for_curve(&curve, cfg)
    }

    pub(crate) fn for_curve(curve: &ArcCurve, cfg: &WidgetConfig) -> Self {
        let fs = cfg.label_font_size;
        let anchor_dots = Anchor::ALL.iter().map(|a| (*a, a.point_on(curve))).collect();
        let labels = Anchor::ALL
            .iter()
            .map(|a| {
                let o = a.label_origin(curve);
                LabelNode {
                    anchor: *a,
                    origin: o,
                    hit_rect: Rect::new(o.x - 0.25 * fs, o.y - fs, o.x + fs, o.y + 0.25 * fs),
                }
            })
            .collect();

        Self {
            path_d: curve.svg_path_d(),
            anchor_dots,
            labels,
            font_size: fs,
            palette: cfg.palette.clone(),
            marker_size_px: cfg.marker_size_px,
        }
    }

    /// Label under a curve-space point, if any.
    pub fn hit_test(&self, pt: Point) -> Option<Anchor> {
        self.labels
            .iter()
            .find(|l| l.hit_rect.contains(pt))
            .map(|l| l.anchor)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/scene.rs"]
mod tests;
