use std::path::Path;

use anyhow::Context as _;

use crate::animation::ease::Ease;
use crate::driver::animator::AnimatorOpts;
use crate::foundation::core::{Point, Rect, viewbox};
use crate::foundation::error::{ArcglideError, ArcglideResult};
use crate::path::curve::{ArcCurve, DEFAULT_CURVE};

/// Default transition length. Every move takes this long, whatever the distance.
pub const DEFAULT_DURATION_MS: f64 = 4000.0;
/// Default marker edge length in pixels.
pub const DEFAULT_MARKER_SIZE_PX: f64 = 15.0;

/// Fill and stroke colors, as SVG paint strings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    /// Stroke of the arc.
    pub curve_stroke: String,
    /// Fill of the three anchor dots.
    pub anchor_fill: String,
    /// Fill of the label text.
    pub label_fill: String,
    /// Fill of the moving marker.
    pub marker_fill: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            curve_stroke: "blue".to_string(),
            anchor_fill: "red".to_string(),
            label_fill: "black".to_string(),
            marker_fill: "#ff8c00".to_string(),
        }
    }
}

/// Widget configuration, loadable from JSON. Every field has a default.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WidgetConfig {
    /// Length of every transition, in milliseconds.
    pub duration_ms: f64,
    /// Edge length of the (square) marker in pixels; half of it is the placement offset.
    pub marker_size_px: f64,
    /// Easing applied to the time fraction.
    pub ease: Ease,
    /// Start, two control points and end of the arc, in curve space.
    pub curve: [Point; 4],
    /// Label font size, in curve-space units.
    pub label_font_size: f64,
    /// Colors.
    pub palette: Palette,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            marker_size_px: DEFAULT_MARKER_SIZE_PX,
            ease: Ease::InOutCubic,
            curve: DEFAULT_CURVE,
            label_font_size: 2.0,
            palette: Palette::default(),
        }
    }
}

impl WidgetConfig {
    /// Load and validate a JSON config file.
    pub fn from_json_path(path: &Path) -> ArcglideResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Parse and validate a JSON config document.
    pub fn from_json_str(text: &str) -> ArcglideResult<Self> {
        let cfg: Self = serde_json::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check value ranges. Called by the loaders; call it yourself for hand-built configs.
    pub fn validate(&self) -> ArcglideResult<()> {
        if !self.duration_ms.is_finite() || self.duration_ms <= 0.0 {
            return Err(ArcglideError::validation(
                "duration_ms must be finite and > 0",
            ));
        }
        if !self.marker_size_px.is_finite() || self.marker_size_px < 0.0 {
            return Err(ArcglideError::validation(
                "marker_size_px must be finite and >= 0",
            ));
        }
        if !self.label_font_size.is_finite() || self.label_font_size <= 0.0 {
            return Err(ArcglideError::validation(
                "label_font_size must be finite and > 0",
            ));
        }
        let vb = viewbox();
        for (i, p) in self.curve.iter().enumerate() {
            if !in_closed_rect(vb, *p) {
                return Err(ArcglideError::validation(format!(
                    "curve point {i} ({}, {}) lies outside the 0 0 100 50 viewBox",
                    p.x, p.y
                )));
            }
        }
        if self.curve().total_length() <= f64::EPSILON {
            return Err(ArcglideError::validation("curve must have non-zero length"));
        }
        Ok(())
    }

    /// Build the arc described by `curve`.
    pub fn curve(&self) -> ArcCurve {
        ArcCurve::from_points(self.curve)
    }

    /// Driver options derived from this config.
    pub fn animator_opts(&self) -> AnimatorOpts {
        AnimatorOpts {
            duration_ms: self.duration_ms,
            ease: self.ease,
            marker_half_px: self.marker_size_px / 2.0,
        }
    }
}

// kurbo's `Rect::contains` is half-open; the viewBox edges are valid positions. NaN fails.
fn in_closed_rect(r: Rect, p: Point) -> bool {
    p.x >= r.x0 && p.x <= r.x1 && p.y >= r.y0 && p.y <= r.y1
}

#[cfg(test)]
#[path = "../../tests/unit/config/widget.rs"]
mod tests;
