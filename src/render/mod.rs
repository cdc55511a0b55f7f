//! Offline rendering: replay click scripts against a simulated host and rasterize frames.

/// Full-script render pipeline.
pub mod pipeline;
/// SVG rasterization.
pub mod raster;
/// Click scripts and deterministic replay.
pub mod script;
/// Frame sinks.
pub mod sink;
