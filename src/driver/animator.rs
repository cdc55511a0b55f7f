use crate::animation::ease::Ease;
use crate::animation::tween::Tween;
use crate::config::widget::{DEFAULT_DURATION_MS, DEFAULT_MARKER_SIZE_PX};
use crate::driver::host::{AnimationHost, FrameTarget, FrameToken};
use crate::foundation::core::{ContainerSize, Point, clamp_progress};
use crate::path::curve::ArcCurve;

/// Options controlling [`PathAnimator`] motion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimatorOpts {
    /// Length of every transition in milliseconds.
    pub duration_ms: f64,
    /// Easing applied to the time fraction.
    pub ease: Ease,
    /// Half the marker's edge length; subtracted so the marker is centered on the curve.
    pub marker_half_px: f64,
}

impl Default for AnimatorOpts {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            ease: Ease::InOutCubic,
            marker_half_px: DEFAULT_MARKER_SIZE_PX / 2.0,
        }
    }
}

/// What one frame continuation did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameOutcome {
    /// Token was not the live one (cancelled or already fired); nothing happened.
    Stale,
    /// Frame drawn at `progress`; the next frame is scheduled.
    Continued {
        /// Progress shown this frame.
        progress: f64,
    },
    /// Frame drawn at the target; the animator is idle again.
    Settled {
        /// Committed resting progress.
        progress: f64,
    },
}

#[derive(Clone, Copy, Debug)]
struct Running {
    tween: Tween,
    token: FrameToken,
    // Progress drawn by the most recent frame; committed if this run is superseded.
    shown: f64,
}

/// Drives the marker along an [`ArcCurve`] with one frame continuation at a time.
///
/// Idle until [`PathAnimator::move_to`]; Running while a continuation is outstanding. Each run
/// lasts `duration_ms` regardless of distance, and a new `move_to` cancels the live continuation
/// before scheduling its own, starting from the progress last drawn.
#[derive(Debug)]
pub struct PathAnimator {
    curve: ArcCurve,
    opts: AnimatorOpts,
    current_progress: f64,
    running: Option<Running>,
}

impl PathAnimator {
    /// Create an idle animator resting at progress 0.
    pub fn new(curve: ArcCurve, opts: AnimatorOpts) -> Self {
        Self {
            curve,
            opts,
            current_progress: 0.0,
            running: None,
        }
    }

    /// Create an animator and start the initial placement run towards progress 0, so the
    /// marker is drawn at the start of the arc from the first frame on.
    #[tracing::instrument(skip_all)]
    pub fn mount<H>(curve: ArcCurve, opts: AnimatorOpts, host: &mut H) -> Self
    where
        H: AnimationHost + ?Sized,
    {
        let mut anim = Self::new(curve, opts);
        anim.move_to(0.0, host);
        anim
    }

    /// Tear down: cancel the live continuation, if any. Returns the last drawn progress.
    #[tracing::instrument(skip_all)]
    pub fn unmount<H>(mut self, host: &mut H) -> f64
    where
        H: AnimationHost + ?Sized,
    {
        if let Some(run) = self.running.take() {
            host.cancel_frame(run.token);
            tracing::debug!(token = run.token.raw(), "cancelled live frame on unmount");
            self.current_progress = run.shown;
        }
        self.current_progress
    }

    /// Start animating towards `target` (clamped into `[0,1]`).
    #[tracing::instrument(skip(self, host), fields(from = self.current_progress))]
    pub fn move_to<H>(&mut self, target: f64, host: &mut H)
    where
        H: AnimationHost + ?Sized,
    {
        let target = clamp_progress(target);

        if let Some(prev) = self.running.take() {
            host.cancel_frame(prev.token);
            self.current_progress = prev.shown;
            tracing::debug!(
                superseded_target = prev.tween.to,
                resume_from = prev.shown,
                "retargeting live animation"
            );
        }

        let tween = Tween {
            from: self.current_progress,
            to: target,
            start_ms: host.now_ms(),
            duration_ms: self.opts.duration_ms,
            ease: self.opts.ease,
        };
        let token = host.request_frame();
        self.running = Some(Running {
            tween,
            token,
            shown: self.current_progress,
        });
    }

    /// Resting progress committed by the last completed or superseded run.
    pub fn current_progress(&self) -> f64 {
        self.current_progress
    }

    /// Progress of the most recent frame (equals [`Self::current_progress`] when idle).
    pub fn displayed_progress(&self) -> f64 {
        self.running.map_or(self.current_progress, |r| r.shown)
    }

    /// Target of the live run, if any.
    pub fn target(&self) -> Option<f64> {
        self.running.map(|r| r.tween.to)
    }

    /// `true` while a frame continuation is outstanding.
    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// The live continuation's token.
    pub fn pending_token(&self) -> Option<FrameToken> {
        self.running.map(|r| r.token)
    }

    /// The arc being followed.
    pub fn curve(&self) -> &ArcCurve {
        &self.curve
    }

    /// Motion options.
    pub fn opts(&self) -> AnimatorOpts {
        self.opts
    }

    /// Pixel origin of the marker at `progress` inside `container`.
    pub fn marker_origin(&self, progress: f64, container: ContainerSize) -> Point {
        let pt = self.curve.point_at_fraction(progress);
        container.marker_origin(pt, self.opts.marker_half_px)
    }
}

impl FrameTarget for PathAnimator {
    fn on_frame<H>(&mut self, token: FrameToken, now_ms: f64, host: &mut H) -> FrameOutcome
    where
        H: AnimationHost + ?Sized,
    {
        let Some(run) = self.running.as_mut() else {
            tracing::trace!(token = token.raw(), "frame while idle");
            return FrameOutcome::Stale;
        };
        if run.token != token {
            tracing::trace!(token = token.raw(), live = run.token.raw(), "stale frame");
            return FrameOutcome::Stale;
        }

        let sample = run.tween.sample(now_ms);
        run.shown = sample.progress;

        // Missing container: skip the write, keep the chain alive.
        match host.container_size() {
            Some(container) => {
                let pt = self.curve.point_at_fraction(sample.progress);
                host.write_marker(container.marker_origin(pt, self.opts.marker_half_px));
            }
            None => tracing::trace!("no container; marker write skipped"),
        }

        if sample.is_done() {
            let to = run.tween.to;
            self.current_progress = to;
            self.running = None;
            tracing::debug!(progress = to, "animation settled");
            FrameOutcome::Settled { progress: to }
        } else {
            run.token = host.request_frame();
            FrameOutcome::Continued {
                progress: sample.progress,
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/driver/animator.rs"]
mod tests;
