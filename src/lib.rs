//! arcglide animates a marker along a cubic Bézier arc between three labeled waypoints.
//!
//! The widget is a fixed arc in a normalized `100×50` space with anchors at 0%, 50% and 100% of
//! its arclength. Clicking a label glides the marker to that anchor over a constant duration with
//! cubic ease-in-out, one write per display refresh.
//!
//! # Pieces
//!
//! 1. **Curve**: [`ArcCurve`] answers `total_length` and `point_at(distance)`.
//! 2. **Driver**: [`PathAnimator`] owns the progress state and at most one pending frame
//!    continuation ([`FrameToken`]). Clock, scheduler and view are borrowed from an
//!    [`AnimationHost`].
//! 3. **View**: [`WidgetScene`] lays out arc, anchor dots and labels; [`scene_svg`] and
//!    [`frame_svg`] serialize it. [`ArcWidget`] ties scene, click hit-testing and driver together.
//! 4. **Offline** ([`render`]): replay a [`ClickScript`] on a deterministic [`SimHost`], then
//!    rasterize frames with `resvg` into a [`FrameSink`].
//!
//! The animation path is infallible and single-threaded. Errors ([`ArcglideError`]) only come
//! from configuration, scripts and rasterization.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod config;
mod driver;
mod foundation;
mod path;
mod view;

/// Offline replay and rasterization.
pub mod render;

pub use animation::ease::{Ease, ease};
pub use animation::tween::{Tween, TweenSample};
pub use config::widget::{DEFAULT_DURATION_MS, DEFAULT_MARKER_SIZE_PX, Palette, WidgetConfig};
pub use driver::animator::{AnimatorOpts, FrameOutcome, PathAnimator};
pub use driver::host::{
    AnimationHost, FrameClock, FrameScheduler, FrameTarget, FrameToken, MarkerSurface,
};
pub use driver::sim::{MarkerWrite, SimHost};
pub use foundation::core::{
    ContainerSize, CubicBez, Point, Rect, VIEWBOX_HEIGHT, VIEWBOX_WIDTH, Vec2, clamp_progress,
    viewbox,
};
pub use foundation::error::{ArcglideError, ArcglideResult};
pub use path::anchors::Anchor;
pub use path::curve::{ArcCurve, DEFAULT_CURVE};
pub use render::pipeline::{RenderOpts, RenderStats, render_script, render_still, resting_marker};
pub use render::raster::{FrameRGBA, SvgRasterizer};
pub use render::script::{
    ClickEvent, ClickScript, MAX_SIMULATED_FRAMES, SimulateOpts, TraceSample, simulate,
};
pub use render::sink::{FrameSink, InMemorySink, PngSequenceSink, SinkConfig, write_png};
pub use view::scene::{ANCHOR_DOT_RADIUS, LabelNode, WidgetScene};
pub use view::svg::{frame_svg, scene_svg};
pub use view::widget::ArcWidget;
