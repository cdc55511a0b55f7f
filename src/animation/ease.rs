/// Cubic ease-in-out: `4t³` below one half, `1 − (−2t+2)³/2` above.
///
/// Input is clamped to `[0,1]`; NaN is treated as the start.
pub fn ease(t: f64) -> f64 {
    let t = unit(t);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = 2.0 - 2.0 * t;
        1.0 - u * u * u / 2.0
    }
}

/// Motion curve of a transition.
///
/// The widget always glides with [`ease`]. `Linear` exists for constant-speed replays,
/// where the marker position is easier to predict frame by frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// [`ease`].
    #[default]
    InOutCubic,
    /// Progress proportional to time.
    Linear,
}

impl Ease {
    /// Map a time fraction to a progress fraction.
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::InOutCubic => ease(t),
            Self::Linear => unit(t),
        }
    }
}

fn unit(t: f64) -> f64 {
    if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
