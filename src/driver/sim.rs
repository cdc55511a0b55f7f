use crate::driver::animator::FrameOutcome;
use crate::driver::host::{FrameClock, FrameScheduler, FrameTarget, FrameToken, MarkerSurface};
use crate::foundation::core::{ContainerSize, Point};

/// One marker placement recorded by [`SimHost`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerWrite {
    /// Refresh number the write happened in (0 before the first refresh).
    pub frame: u64,
    /// Clock reading at the write.
    pub at_ms: f64,
    /// Marker top-left in container pixels.
    pub origin: Point,
}

/// Deterministic host: a manual clock, a fixed-rate refresh queue and a recording surface.
///
/// Used by the test-suite and by offline rendering; nothing here depends on wall time.
#[derive(Debug)]
pub struct SimHost {
    now_ms: f64,
    frame_interval_ms: f64,
    frame: u64,
    next_token: u64,
    pending: Vec<FrameToken>,
    cancelled: u64,
    container: Option<ContainerSize>,
    writes: Vec<MarkerWrite>,
}

impl SimHost {
    /// Default display refresh rate.
    pub const DEFAULT_REFRESH_HZ: f64 = 60.0;
    /// Slowest supported refresh rate.
    pub const MIN_REFRESH_HZ: f64 = 1.0;
    /// Fastest supported refresh rate.
    pub const MAX_REFRESH_HZ: f64 = 1000.0;

    /// `true` when `refresh_hz` lies in `[MIN_REFRESH_HZ, MAX_REFRESH_HZ]`.
    pub fn supports_refresh_hz(refresh_hz: f64) -> bool {
        (Self::MIN_REFRESH_HZ..=Self::MAX_REFRESH_HZ).contains(&refresh_hz)
    }

    /// New host at time 0 refreshing at `refresh_hz`.
    ///
    /// Positive rates outside the supported range are clamped into it. Zero, negative and NaN
    /// rates fall back to 60 Hz.
    pub fn new(container: Option<ContainerSize>, refresh_hz: f64) -> Self {
        let hz = if refresh_hz.is_nan() || refresh_hz <= 0.0 {
            Self::DEFAULT_REFRESH_HZ
        } else {
            refresh_hz.clamp(Self::MIN_REFRESH_HZ, Self::MAX_REFRESH_HZ)
        };
        Self {
            now_ms: 0.0,
            frame_interval_ms: 1000.0 / hz,
            frame: 0,
            next_token: 1,
            pending: Vec::new(),
            cancelled: 0,
            container,
            writes: Vec::new(),
        }
    }

    /// Milliseconds between refreshes.
    pub fn frame_interval_ms(&self) -> f64 {
        self.frame_interval_ms
    }

    /// Number of refreshes delivered so far.
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Attach, resize or detach (`None`) the container.
    pub fn set_container(&mut self, container: Option<ContainerSize>) {
        self.container = container;
    }

    /// Move the clock forward without delivering a refresh (e.g. a click between frames).
    pub fn advance_clock(&mut self, ms: f64) {
        if ms > 0.0 {
            self.now_ms += ms;
        }
    }

    /// Frame requests not yet delivered or cancelled.
    pub fn pending_frames(&self) -> usize {
        self.pending.len()
    }

    /// Total successful cancellations.
    pub fn cancelled_frames(&self) -> u64 {
        self.cancelled
    }

    /// Every marker write so far, oldest first.
    pub fn writes(&self) -> &[MarkerWrite] {
        &self.writes
    }

    /// Most recent marker write.
    pub fn last_write(&self) -> Option<MarkerWrite> {
        self.writes.last().copied()
    }

    /// Drain the recorded writes.
    pub fn take_writes(&mut self) -> Vec<MarkerWrite> {
        std::mem::take(&mut self.writes)
    }

    /// Advance to the next refresh and deliver every due continuation to `target`.
    ///
    /// Requests made while delivering are due on the following refresh, like
    /// `requestAnimationFrame` inside a frame callback.
    pub fn tick<T>(&mut self, target: &mut T) -> Vec<FrameOutcome>
    where
        T: FrameTarget,
    {
        self.now_ms += self.frame_interval_ms;
        self.frame += 1;
        let due = std::mem::take(&mut self.pending);
        let now = self.now_ms;
        let mut outcomes = Vec::with_capacity(due.len());
        for token in due {
            outcomes.push(target.on_frame(token, now, self));
        }
        outcomes
    }

    /// Deliver refreshes until the clock has advanced by at least `ms`.
    pub fn run_for<T>(&mut self, target: &mut T, ms: f64)
    where
        T: FrameTarget,
    {
        let until = self.now_ms + ms;
        while self.now_ms < until {
            self.tick(target);
        }
    }

    /// Deliver refreshes until nothing is pending. Gives up after `max_frames`.
    ///
    /// Returns `true` when the queue drained.
    pub fn run_until_idle<T>(&mut self, target: &mut T, max_frames: u64) -> bool
    where
        T: FrameTarget,
    {
        for _ in 0..max_frames {
            if self.pending.is_empty() {
                return true;
            }
            self.tick(target);
        }
        self.pending.is_empty()
    }
}

impl FrameClock for SimHost {
    fn now_ms(&self) -> f64 {
        self.now_ms
    }
}

impl FrameScheduler for SimHost {
    fn request_frame(&mut self) -> FrameToken {
        let token = FrameToken::from_raw(self.next_token);
        self.next_token += 1;
        self.pending.push(token);
        token
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        let before = self.pending.len();
        self.pending.retain(|t| *t != token);
        if self.pending.len() != before {
            self.cancelled += 1;
        }
    }
}

impl MarkerSurface for SimHost {
    fn container_size(&self) -> Option<ContainerSize> {
        self.container
    }

    fn write_marker(&mut self, origin: Point) {
        self.writes.push(MarkerWrite {
            frame: self.frame,
            at_ms: self.now_ms,
            origin,
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/driver/sim.rs"]
mod tests;
