use crate::foundation::core::{Point, Vec2};
use crate::path::curve::ArcCurve;

/// One of the three labeled waypoints on the arc.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Anchor {
    /// Start of the arc (fraction 0).
    A,
    /// Arclength midpoint (fraction 0.5).
    B,
    /// End of the arc (fraction 1).
    C,
}

impl Anchor {
    /// All anchors, ordered by strictly increasing fraction.
    pub const ALL: [Anchor; 3] = [Anchor::A, Anchor::B, Anchor::C];

    /// Normalized arclength fraction of the anchor.
    pub const fn fraction(self) -> f64 {
        match self {
            Self::A => 0.0,
            Self::B => 0.5,
            Self::C => 1.0,
        }
    }

    /// Text shown on the label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }

    /// Parse a label (`"a"`, `"B"`, ...).
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim() {
            "A" | "a" => Some(Self::A),
            "B" | "b" => Some(Self::B),
            "C" | "c" => Some(Self::C),
            _ => None,
        }
    }

    // Text baseline relative to the anchor point: below-left at the ends, above the apex.
    fn label_offset(self) -> Vec2 {
        match self {
            Self::A | Self::C => Vec2::new(-3.0, 3.0),
            Self::B => Vec2::new(-1.0, -3.0),
        }
    }

    /// Curve-space position of the anchor on `curve`.
    pub fn point_on(self, curve: &ArcCurve) -> Point {
        curve.point_at(self.fraction() * curve.total_length())
    }

    /// Text baseline origin of the label for this anchor on `curve`.
    pub fn label_origin(self, curve: &ArcCurve) -> Point {
        self.point_on(curve) + self.label_offset()
    }
}

impl std::fmt::Display for Anchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/anchors.rs"]
mod tests;
