use crate::config::widget::WidgetConfig;
use crate::driver::animator::{FrameOutcome, PathAnimator};
use crate::driver::host::{AnimationHost, FrameTarget, FrameToken};
use crate::foundation::core::{ContainerSize, Point};
use crate::foundation::error::ArcglideResult;
use crate::path::anchors::Anchor;
use crate::view::scene::WidgetScene;
use crate::view::svg::frame_svg;

/// The mounted widget: static scene plus the animator that owns the marker.
///
/// Clicks are translated to anchor intents here; all motion is delegated to [`PathAnimator`].
#[derive(Debug)]
pub struct ArcWidget {
    scene: WidgetScene,
    animator: PathAnimator,
}

impl ArcWidget {
    /// Validate `cfg`, lay out the scene and start the initial placement run.
    #[tracing::instrument(skip_all)]
    pub fn mount<H>(cfg: &WidgetConfig, host: &mut H) -> ArcglideResult<Self>
    where
        H: AnimationHost + ?Sized,
    {
        cfg.validate()?;
        let curve = cfg.curve();
        let scene = WidgetScene::for_curve(&curve, cfg);
        let animator = PathAnimator::mount(curve, cfg.animator_opts(), host);
        tracing::debug!(length = animator.curve().total_length(), "widget mounted");
        Ok(Self { scene, animator })
    }

    /// Handle a click at `pixel` (container-relative). Returns the anchor whose label was hit.
    ///
    /// Clicks while the container is detached, or outside every label, do nothing.
    pub fn click<H>(&mut self, pixel: Point, host: &mut H) -> Option<Anchor>
    where
        H: AnimationHost + ?Sized,
    {
        let container = host.container_size()?;
        let anchor = self.scene.hit_test(container.to_curve_space(pixel))?;
        self.select(anchor, host);
        Some(anchor)
    }

    /// Move the marker to `anchor`, as a click on its label would.
    pub fn select<H>(&mut self, anchor: Anchor, host: &mut H)
    where
        H: AnimationHost + ?Sized,
    {
        tracing::debug!(%anchor, "anchor selected");
        self.animator.move_to(anchor.fraction(), host);
    }

    /// Cancel any live frame and tear down. Returns the last drawn progress.
    pub fn unmount<H>(self, host: &mut H) -> f64
    where
        H: AnimationHost + ?Sized,
    {
        self.animator.unmount(host)
    }

    /// The static scene.
    pub fn scene(&self) -> &WidgetScene {
        &self.scene
    }

    /// The driver.
    pub fn animator(&self) -> &PathAnimator {
        &self.animator
    }

    /// Marker top-left at the currently displayed progress.
    pub fn marker_origin(&self, container: ContainerSize) -> Point {
        self.animator
            .marker_origin(self.animator.displayed_progress(), container)
    }

    /// Fixed-size SVG of the current frame, marker included.
    pub fn frame_svg(&self, container: ContainerSize) -> String {
        frame_svg(&self.scene, container, Some(self.marker_origin(container)))
    }
}

impl FrameTarget for ArcWidget {
    fn on_frame<H>(&mut self, token: FrameToken, now_ms: f64, host: &mut H) -> FrameOutcome
    where
        H: AnimationHost + ?Sized,
    {
        self.animator.on_frame(token, now_ms, host)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/widget.rs"]
mod tests;
