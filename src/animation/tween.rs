use crate::animation::ease::Ease;
use crate::foundation::core::clamp_progress;

/// One constant-duration transition between two progress values.
///
/// Duration is independent of the distance travelled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    /// Progress at `start_ms`.
    pub from: f64,
    /// Progress once the tween settles.
    pub to: f64,
    /// Host clock reading when the tween started.
    pub start_ms: f64,
    /// Wall-clock length of the tween (> 0).
    pub duration_ms: f64,
    /// Easing applied to the time fraction.
    pub ease: Ease,
}

/// Result of sampling a [`Tween`] at one frame timestamp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenSample {
    /// `min((now − start)/duration, 1)`, never negative.
    pub time_fraction: f64,
    /// Interpolated progress for this frame.
    pub progress: f64,
}

impl TweenSample {
    /// `true` once the time fraction reached 1.
    pub fn is_done(self) -> bool {
        self.time_fraction >= 1.0
    }
}

impl Tween {
    /// Fraction of the duration elapsed at `now_ms`, clamped into `[0,1]`.
    ///
    /// A frame timestamp earlier than the start (hosts may hand out the previous vsync time)
    /// counts as zero elapsed. A duration that is not a positive number (zero, negative, NaN)
    /// is done immediately, as is a NaN timestamp.
    pub fn time_fraction(&self, now_ms: f64) -> f64 {
        if self.duration_ms.is_nan() || self.duration_ms <= 0.0 {
            return 1.0;
        }
        let f = (now_ms - self.start_ms) / self.duration_ms;
        if f.is_nan() { 1.0 } else { f.clamp(0.0, 1.0) }
    }

    /// Eased progress at `now_ms`. Lands exactly on `to` once done.
    pub fn sample(&self, now_ms: f64) -> TweenSample {
        let time_fraction = self.time_fraction(now_ms);
        let progress = if time_fraction >= 1.0 {
            self.to
        } else {
            let eased = self.ease.apply(time_fraction);
            clamp_progress(self.from + (self.to - self.from) * eased)
        };
        TweenSample {
            time_fraction,
            progress,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
