use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "arcglide", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the widget as SVG (a fixed-size frame, or the responsive scene).
    Svg(SvgArgs),
    /// Render one PNG with the marker resting at a progress value.
    Still(StillArgs),
    /// Replay a click script and print one JSON line per display refresh.
    Trace(TraceArgs),
    /// Replay a click script and write one PNG per display refresh.
    Frames(FramesArgs),
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Widget config JSON (defaults apply when omitted).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Container width in pixels.
    #[arg(long, default_value_t = 800.0)]
    width: f64,

    /// Container height in pixels.
    #[arg(long, default_value_t = 400.0)]
    height: f64,
}

#[derive(Parser, Debug)]
struct SvgArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Marker progress in [0,1], or an anchor label (A, B, C).
    #[arg(long, default_value = "0")]
    at: String,

    /// Which document to write.
    #[arg(long, value_enum, default_value_t = SvgKind::Frame)]
    kind: SvgKind,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SvgKind {
    /// Fixed-size frame with the marker composited.
    Frame,
    /// Responsive scene (viewBox stretched to the container), no marker.
    Scene,
}

#[derive(Parser, Debug)]
struct StillArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Marker progress in [0,1], or an anchor label (A, B, C).
    #[arg(long, default_value = "0")]
    at: String,

    /// Render with a transparent background instead of white.
    #[arg(long)]
    transparent: bool,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct TraceArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Click script JSON.
    #[arg(long)]
    script: PathBuf,

    /// Display refresh rate, 1 to 1000 Hz.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Stop time in ms (defaults to when the last transition settles).
    #[arg(long)]
    until_ms: Option<f64>,

    /// Write to a file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Click script JSON.
    #[arg(long)]
    script: PathBuf,

    /// Display refresh rate, 1 to 1000 Hz.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Stop time in ms (defaults to when the last transition settles).
    #[arg(long)]
    until_ms: Option<f64>,

    /// Output directory for `frame_NNNNNN.png`.
    #[arg(long)]
    out_dir: PathBuf,

    /// Render with a transparent background instead of white.
    #[arg(long)]
    transparent: bool,

    /// Rasterize every frame, even when the marker did not move.
    #[arg(long)]
    no_elide: bool,
}

const PAGE_WHITE: [u8; 4] = [255, 255, 255, 255];

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Svg(args) => cmd_svg(args),
        Command::Still(args) => cmd_still(args),
        Command::Trace(args) => cmd_trace(args),
        Command::Frames(args) => cmd_frames(args),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<arcglide::WidgetConfig> {
    match path {
        Some(p) => Ok(arcglide::WidgetConfig::from_json_path(p)?),
        None => Ok(arcglide::WidgetConfig::default()),
    }
}

fn container(common: &CommonArgs) -> anyhow::Result<arcglide::ContainerSize> {
    Ok(arcglide::ContainerSize::new(common.width, common.height)?)
}

fn parse_progress(at: &str) -> anyhow::Result<f64> {
    if let Some(anchor) = arcglide::Anchor::from_label(at) {
        return Ok(anchor.fraction());
    }
    let p: f64 = at
        .trim()
        .parse()
        .with_context(|| format!("'{at}' is neither a progress value nor an anchor label"))?;
    if !(0.0..=1.0).contains(&p) {
        anyhow::bail!("progress {p} is outside [0,1]");
    }
    Ok(p)
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_svg(args: SvgArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.common.config.as_deref())?;
    let scene = arcglide::WidgetScene::build(&cfg);

    let svg = match args.kind {
        SvgKind::Scene => arcglide::scene_svg(&scene),
        SvgKind::Frame => {
            let c = container(&args.common)?;
            let progress = parse_progress(&args.at)?;
            let marker = arcglide::resting_marker(&cfg, c, progress);
            arcglide::frame_svg(&scene, c, Some(marker))
        }
    };

    ensure_parent_dir(&args.out)?;
    std::fs::write(&args.out, svg)
        .with_context(|| format!("write svg '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_still(args: StillArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.common.config.as_deref())?;
    let c = container(&args.common)?;
    let progress = parse_progress(&args.at)?;
    let bg = (!args.transparent).then_some(PAGE_WHITE);

    let frame = arcglide::render_still(&cfg, c, progress, bg)?;
    ensure_parent_dir(&args.out)?;
    arcglide::write_png(&args.out, &frame)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_trace(args: TraceArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.common.config.as_deref())?;
    let script = arcglide::ClickScript::from_json_path(&args.script)?;
    let opts = arcglide::SimulateOpts {
        container: container(&args.common)?,
        refresh_hz: args.fps,
        until_ms: args.until_ms,
    };
    let samples = arcglide::simulate(&cfg, &script, opts)?;

    let mut out: Box<dyn std::io::Write> = match &args.out {
        Some(path) => {
            ensure_parent_dir(path)?;
            let f = File::create(path)
                .with_context(|| format!("create trace '{}'", path.display()))?;
            Box::new(BufWriter::new(f))
        }
        None => Box::new(BufWriter::new(std::io::stdout().lock())),
    };
    for s in &samples {
        serde_json::to_writer(&mut out, s).context("encode trace sample")?;
        out.write_all(b"\n").context("write trace")?;
    }
    out.flush().context("flush trace")?;
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.common.config.as_deref())?;
    let script = arcglide::ClickScript::from_json_path(&args.script)?;
    let opts = arcglide::RenderOpts {
        simulate: arcglide::SimulateOpts {
            container: container(&args.common)?,
            refresh_hz: args.fps,
            until_ms: args.until_ms,
        },
        background: (!args.transparent).then_some(PAGE_WHITE),
        static_frame_elision: !args.no_elide,
    };

    let mut sink = arcglide::PngSequenceSink::new(&args.out_dir);
    let stats = arcglide::render_script(&cfg, &script, opts, &mut sink)?;
    eprintln!(
        "wrote {} frames to {} ({} rasterized, {} elided)",
        stats.frames_total,
        args.out_dir.display(),
        stats.frames_rendered,
        stats.frames_elided
    );
    Ok(())
}
