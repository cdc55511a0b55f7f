use kurbo::{ParamCurve, ParamCurveArclen};

use crate::foundation::core::{CubicBez, Point, clamp_progress};

/// Tolerance handed to kurbo's arclength solvers, in curve-space units.
const ARCLEN_ACCURACY: f64 = 1e-7;

/// The authored arc: `M 5 45 C 25 5, 75 5, 95 45`.
pub const DEFAULT_CURVE: [Point; 4] = [
    Point::new(5.0, 45.0),
    Point::new(25.0, 5.0),
    Point::new(75.0, 5.0),
    Point::new(95.0, 45.0),
];

/// Immutable cubic Bézier in normalized curve space, queried by arclength.
///
/// Total length is measured once at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcCurve {
    bez: CubicBez,
    total_length: f64,
}

impl Default for ArcCurve {
    fn default() -> Self {
        Self::from_points(DEFAULT_CURVE)
    }
}

impl ArcCurve {
    /// Build from start, two control points and end.
    pub fn from_points([p0, p1, p2, p3]: [Point; 4]) -> Self {
        Self::from_bez(CubicBez::new(p0, p1, p2, p3))
    }

    /// Wrap an existing kurbo cubic.
    pub fn from_bez(bez: CubicBez) -> Self {
        let total_length = bez.arclen(ARCLEN_ACCURACY);
        Self { bez, total_length }
    }

    /// Underlying kurbo segment.
    pub fn bez(&self) -> CubicBez {
        self.bez
    }

    /// Total arclength in curve-space units.
    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    /// Point at `distance` along the curve. Distances are clamped to `[0, total_length]`; the
    /// ends return the literal start/end control points.
    pub fn point_at(&self, distance: f64) -> Point {
        if distance.is_nan() || distance <= 0.0 {
            return self.bez.p0;
        }
        if distance >= self.total_length {
            return self.bez.p3;
        }
        let t = self.bez.inv_arclen(distance, ARCLEN_ACCURACY);
        self.bez.eval(t)
    }

    /// Point at a normalized arclength fraction (`progress` in `[0,1]`).
    pub fn point_at_fraction(&self, progress: f64) -> Point {
        self.point_at(clamp_progress(progress) * self.total_length)
    }

    /// SVG path data, in the same shape the view is authored in.
    pub fn svg_path_d(&self) -> String {
        let CubicBez { p0, p1, p2, p3 } = self.bez;
        format!(
            "M {} {} C {} {}, {} {}, {} {}",
            p0.x, p0.y, p1.x, p1.y, p2.x, p2.y, p3.x, p3.y
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/curve.rs"]
mod tests;
