use std::sync::Arc;

use anyhow::Context as _;

use crate::foundation::error::{ArcglideError, ArcglideResult};

// Guard against pathological allocations from a bad container size.
const MAX_DIM: u32 = 16_384;

/// A rendered frame as RGBA8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// RGBA of the pixel at `(x, y)`, or `None` out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Straight-alpha copy of the pixels, as PNG encoders expect.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        if self.premultiplied {
            demultiply_rgba8_in_place(&mut out);
        }
        out
    }
}

/// Rasterizes frame SVG documents with `resvg`. Holds the font database so it is loaded once.
pub struct SvgRasterizer {
    opts: usvg::Options<'static>,
    background: Option<[u8; 4]>,
}

impl std::fmt::Debug for SvgRasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SvgRasterizer")
            .field("font_faces", &self.opts.fontdb.len())
            .field("background", &self.background)
            .finish()
    }
}

impl SvgRasterizer {
    /// Create a rasterizer using system fonts. `background` (straight RGBA8) is painted under
    /// every frame; `None` leaves the frame transparent.
    pub fn new(background: Option<[u8; 4]>) -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        tracing::debug!(faces = db.len(), "loaded system fonts");
        let opts = usvg::Options {
            fontdb: Arc::new(db),
            ..Default::default()
        };
        Self { opts, background }
    }

    /// Parse `svg` and rasterize it into a `width`×`height` premultiplied frame, scaling the
    /// document's own size to fit.
    pub fn rasterize(&self, svg: &str, width: u32, height: u32) -> ArcglideResult<FrameRGBA> {
        if width == 0 || height == 0 || width > MAX_DIM || height > MAX_DIM {
            return Err(ArcglideError::render(format!(
                "raster size {width}x{height} out of range (1..={MAX_DIM})"
            )));
        }

        let tree = usvg::Tree::from_str(svg, &self.opts).context("parse frame svg")?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| ArcglideError::render("failed to allocate frame pixmap"))?;
        if let Some([r, g, b, a]) = self.background {
            pixmap.fill(resvg::tiny_skia::Color::from_rgba8(r, g, b, a));
        }

        let sx = (width as f32) / tree.size().width();
        let sy = (height as f32) / tree.size().height();
        let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);
        resvg::render(&tree, xform, &mut pixmap.as_mut());

        Ok(FrameRGBA {
            width,
            height,
            data: pixmap.data().to_vec(),
            premultiplied: true,
        })
    }
}

fn demultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = (((*c as u16) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
