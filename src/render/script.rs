use std::path::Path;

use anyhow::Context as _;

use crate::config::widget::WidgetConfig;
use crate::driver::host::FrameClock;
use crate::driver::sim::SimHost;
use crate::foundation::core::{ContainerSize, Point};
use crate::foundation::error::{ArcglideError, ArcglideResult};
use crate::path::anchors::Anchor;
use crate::view::widget::ArcWidget;

/// A label click at a point in time.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClickEvent {
    /// Milliseconds after mount.
    pub at_ms: f64,
    /// Label that was clicked.
    pub anchor: Anchor,
}

/// Timed sequence of label clicks, replayed by [`simulate`].
///
/// ```json
/// { "events": [ { "at_ms": 0, "anchor": "B" }, { "at_ms": 5000, "anchor": "A" } ] }
/// ```
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClickScript {
    /// Events sorted by `at_ms`.
    pub events: Vec<ClickEvent>,
}

impl ClickScript {
    /// Load and validate a JSON script.
    pub fn from_json_path(path: &Path) -> ArcglideResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read click script '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Parse and validate a JSON script.
    pub fn from_json_str(text: &str) -> ArcglideResult<Self> {
        let script: Self = serde_json::from_str(text)?;
        script.validate()?;
        Ok(script)
    }

    /// Times must be finite, non-negative and non-decreasing.
    pub fn validate(&self) -> ArcglideResult<()> {
        for (i, ev) in self.events.iter().enumerate() {
            if !ev.at_ms.is_finite() || ev.at_ms < 0.0 {
                return Err(ArcglideError::validation(format!(
                    "event {i}: at_ms must be finite and >= 0"
                )));
            }
        }
        if !self.events.windows(2).all(|w| w[0].at_ms <= w[1].at_ms) {
            return Err(ArcglideError::validation(
                "events must be sorted by at_ms",
            ));
        }
        Ok(())
    }

    /// Time by which the last transition has settled.
    pub fn settle_ms(&self, duration_ms: f64) -> f64 {
        self.events.last().map_or(0.0, |ev| ev.at_ms) + duration_ms
    }
}

/// Upper bound on the refreshes one [`simulate`] call records.
pub const MAX_SIMULATED_FRAMES: u64 = 1_000_000;

/// Options for [`simulate`].
#[derive(Clone, Copy, Debug)]
pub struct SimulateOpts {
    /// Container the marker is laid out in.
    pub container: ContainerSize,
    /// Display refresh rate, within [`SimHost::MIN_REFRESH_HZ`]..=[`SimHost::MAX_REFRESH_HZ`].
    pub refresh_hz: f64,
    /// Stop time. `None` runs until the last transition has settled and one idle refresh
    /// has been recorded.
    pub until_ms: Option<f64>,
}

/// The state of one simulated refresh.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TraceSample {
    /// Refresh number, from 1.
    pub frame: u64,
    /// Clock reading.
    pub t_ms: f64,
    /// Progress drawn this refresh.
    pub progress: f64,
    /// Marker top-left written this refresh; `None` when the animator was idle.
    pub marker: Option<Point>,
}

/// Mount a widget on a [`SimHost`], replay `script`, and record every refresh.
///
/// Clicks are delivered at the first refresh boundary at or after their `at_ms`.
#[tracing::instrument(skip_all, fields(events = script.events.len()))]
pub fn simulate(
    cfg: &WidgetConfig,
    script: &ClickScript,
    opts: SimulateOpts,
) -> ArcglideResult<Vec<TraceSample>> {
    script.validate()?;
    if !SimHost::supports_refresh_hz(opts.refresh_hz) {
        return Err(ArcglideError::validation(format!(
            "refresh_hz must be within [{}, {}], got {}",
            SimHost::MIN_REFRESH_HZ,
            SimHost::MAX_REFRESH_HZ,
            opts.refresh_hz
        )));
    }
    let mut host = SimHost::new(Some(opts.container), opts.refresh_hz);
    let mut widget = ArcWidget::mount(cfg, &mut host)?;

    let until = opts
        .until_ms
        .unwrap_or_else(|| script.settle_ms(cfg.duration_ms) + 2.0 * host.frame_interval_ms());
    if !until.is_finite() || until < 0.0 {
        return Err(ArcglideError::validation("until_ms must be finite and >= 0"));
    }
    let frames = (until / host.frame_interval_ms()).ceil();
    if frames > MAX_SIMULATED_FRAMES as f64 {
        return Err(ArcglideError::validation(format!(
            "replay would take {frames} refreshes, more than the {MAX_SIMULATED_FRAMES} allowed"
        )));
    }

    let mut events = script.events.iter().peekable();
    let mut samples = Vec::new();
    while host.now_ms() < until {
        while let Some(ev) = events.next_if(|ev| ev.at_ms <= host.now_ms()) {
            widget.select(ev.anchor, &mut host);
        }

        host.tick(&mut widget);

        let frame = host.frame_count();
        let marker = host
            .last_write()
            .filter(|w| w.frame == frame)
            .map(|w| w.origin);
        samples.push(TraceSample {
            frame,
            t_ms: host.now_ms(),
            progress: widget.animator().displayed_progress(),
            marker,
        });
    }

    let last = widget.unmount(&mut host);
    tracing::debug!(frames = samples.len(), progress = last, "simulation finished");
    Ok(samples)
}

#[cfg(test)]
#[path = "../../tests/unit/render/script.rs"]
mod tests;
