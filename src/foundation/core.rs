use crate::foundation::error::{ArcglideError, ArcglideResult};

pub use kurbo::{CubicBez, Point, Rect, Vec2};

/// Width of the normalized curve space (the SVG viewBox width).
pub const VIEWBOX_WIDTH: f64 = 100.0;
/// Height of the normalized curve space (the SVG viewBox height).
pub const VIEWBOX_HEIGHT: f64 = 50.0;

/// The normalized curve-space rectangle `[0,100]×[0,50]`.
pub fn viewbox() -> Rect {
    Rect::new(0.0, 0.0, VIEWBOX_WIDTH, VIEWBOX_HEIGHT)
}

/// Clamp a progress value into `[0,1]`. NaN collapses to 0.
pub fn clamp_progress(p: f64) -> f64 {
    if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) }
}

/// Pixel dimensions of the rendering surface, read fresh every frame.
///
/// Always finite and strictly positive; deserializing goes through [`ContainerSize::new`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawContainerSize")]
pub struct ContainerSize {
    width: f64,
    height: f64,
}

#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct RawContainerSize {
    width: f64,
    height: f64,
}

impl TryFrom<RawContainerSize> for ContainerSize {
    type Error = ArcglideError;

    fn try_from(raw: RawContainerSize) -> ArcglideResult<Self> {
        Self::new(raw.width, raw.height)
    }
}

impl ContainerSize {
    /// Create a validated container size (finite, strictly positive).
    pub fn new(width: f64, height: f64) -> ArcglideResult<Self> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(ArcglideError::validation(
                "container width/height must be finite and > 0",
            ));
        }
        Ok(Self { width, height })
    }

    /// Width in CSS/device pixels.
    pub fn width(self) -> f64 {
        self.width
    }

    /// Height in CSS/device pixels.
    pub fn height(self) -> f64 {
        self.height
    }

    /// Map a curve-space point to the top-left pixel of a marker of half-size `half`.
    ///
    /// The viewBox is stretched non-uniformly to fill the container.
    pub fn marker_origin(self, curve_pt: Point, half: f64) -> Point {
        Point::new(
            (curve_pt.x / VIEWBOX_WIDTH) * self.width - half,
            (curve_pt.y / VIEWBOX_HEIGHT) * self.height - half,
        )
    }

    /// Inverse of the viewBox stretch: pixel position to curve space.
    pub fn to_curve_space(self, pixel: Point) -> Point {
        Point::new(
            pixel.x / self.width * VIEWBOX_WIDTH,
            pixel.y / self.height * VIEWBOX_HEIGHT,
        )
    }

    /// Integer raster dimensions, rounded up, at least 1×1.
    pub fn raster_dims(self) -> (u32, u32) {
        (
            (self.width.ceil() as u32).max(1),
            (self.height.ceil() as u32).max(1),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
