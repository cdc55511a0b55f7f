use crate::config::widget::WidgetConfig;
use crate::foundation::core::{ContainerSize, Point, clamp_progress};
use crate::foundation::error::ArcglideResult;
use crate::render::raster::{FrameRGBA, SvgRasterizer};
use crate::render::script::{ClickScript, SimulateOpts, TraceSample, simulate};
use crate::render::sink::{FrameSink, SinkConfig};
use crate::view::scene::WidgetScene;
use crate::view::svg::frame_svg;

/// Options for [`render_script`].
#[derive(Clone, Copy, Debug)]
pub struct RenderOpts {
    /// Replay parameters (container, refresh rate, stop time).
    pub simulate: SimulateOpts,
    /// Straight RGBA8 page color under the widget; `None` for transparent frames.
    pub background: Option<[u8; 4]>,
    /// Reuse the previous raster when the marker did not move.
    pub static_frame_elision: bool,
}

/// Range render statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames pushed to the sink.
    pub frames_total: u64,
    /// Frames actually rasterized.
    pub frames_rendered: u64,
    /// Frames served from the previous raster.
    pub frames_elided: u64,
}

/// Replay `script` and push one rasterized frame per refresh into `sink`.
#[tracing::instrument(skip_all)]
pub fn render_script(
    cfg: &WidgetConfig,
    script: &ClickScript,
    opts: RenderOpts,
    sink: &mut dyn FrameSink,
) -> ArcglideResult<RenderStats> {
    let samples = simulate(cfg, script, opts.simulate)?;
    let container = opts.simulate.container;
    let (width, height) = container.raster_dims();
    let scene = WidgetScene::build(cfg);
    let raster = SvgRasterizer::new(opts.background);

    sink.begin(SinkConfig {
        width,
        height,
        refresh_hz: opts.simulate.refresh_hz,
    })?;

    let mut stats = RenderStats::default();
    let mut prev: Option<(Point, FrameRGBA)> = None;
    for sample in &samples {
        let marker = marker_for_sample(cfg, container, sample);
        let frame = match prev.take() {
            Some((p, f)) if opts.static_frame_elision && p == marker => {
                stats.frames_elided += 1;
                f
            }
            _ => {
                stats.frames_rendered += 1;
                let svg = frame_svg(&scene, container, Some(marker));
                raster.rasterize(&svg, width, height)?
            }
        };
        sink.push_frame(sample.frame, &frame)?;
        stats.frames_total += 1;
        prev = Some((marker, frame));
    }

    sink.end()?;
    tracing::debug!(?stats, "script rendered");
    Ok(stats)
}

/// Rasterize one frame with the marker resting at `progress`.
pub fn render_still(
    cfg: &WidgetConfig,
    container: ContainerSize,
    progress: f64,
    background: Option<[u8; 4]>,
) -> ArcglideResult<FrameRGBA> {
    cfg.validate()?;
    let scene = WidgetScene::build(cfg);
    let marker = resting_marker(cfg, container, progress);
    let (width, height) = container.raster_dims();
    let svg = frame_svg(&scene, container, Some(marker));
    SvgRasterizer::new(background).rasterize(&svg, width, height)
}

/// Marker top-left for a marker resting at `progress`.
pub fn resting_marker(cfg: &WidgetConfig, container: ContainerSize, progress: f64) -> Point {
    let pt = cfg.curve().point_at_fraction(clamp_progress(progress));
    container.marker_origin(pt, cfg.marker_size_px / 2.0)
}

// Idle refreshes carry no write; the marker stays where the progress puts it.
fn marker_for_sample(cfg: &WidgetConfig, container: ContainerSize, s: &TraceSample) -> Point {
    s.marker
        .unwrap_or_else(|| resting_marker(cfg, container, s.progress))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
