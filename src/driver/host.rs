//! Services the animator borrows from its host environment.
//!
//! The driver never owns a clock, a refresh loop, or a view. A browser host backs these with
//! `performance.now()`, `requestAnimationFrame` and a DOM element; [`crate::SimHost`] backs them
//! with a deterministic fake.

use crate::driver::animator::FrameOutcome;
use crate::foundation::core::{ContainerSize, Point};

/// Opaque handle for one scheduled frame continuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameToken(u64);

impl FrameToken {
    /// Wrap a host-specific id.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The host-specific id.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Monotonic clock in milliseconds.
pub trait FrameClock {
    /// Current time. Must never go backwards.
    fn now_ms(&self) -> f64;
}

/// Display-refresh scheduling.
pub trait FrameScheduler {
    /// Ask for one callback on the next refresh. The host later hands the token back through
    /// [`FrameTarget::on_frame`].
    fn request_frame(&mut self) -> FrameToken;

    /// Revoke a pending request. Cancelling a token that already fired is a no-op.
    fn cancel_frame(&mut self, token: FrameToken);
}

/// The view element the marker is drawn into.
pub trait MarkerSurface {
    /// Current container size, or `None` when the container is not attached.
    fn container_size(&self) -> Option<ContainerSize>;

    /// Place the marker's top-left corner at `origin` (pixels, container-relative).
    fn write_marker(&mut self, origin: Point);
}

/// Everything the animator needs from its host.
pub trait AnimationHost: FrameClock + FrameScheduler + MarkerSurface {}

impl<T> AnimationHost for T where T: FrameClock + FrameScheduler + MarkerSurface + ?Sized {}

/// Receiver of frame continuations it scheduled itself.
pub trait FrameTarget {
    /// Run the continuation for `token` at frame timestamp `now_ms`.
    fn on_frame<H>(&mut self, token: FrameToken, now_ms: f64, host: &mut H) -> FrameOutcome
    where
        H: AnimationHost + ?Sized;
}
