mod provenance;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use image::Rgb;
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use trackfit::render::{default_output_path, read_track_file, DEFAULT_MARGIN};
use trackfit::{compute_drawable_rect, project_track, CanvasRect, RenderCfg, Strategy};

#[derive(Parser)]
#[command(name = "trackfit")]
#[command(about = "Draw a GPX track onto an image, scaled and centered to fit")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Draw the track onto the image and save the result
    Draw(DrawArgs),
    /// Print projected pixel coordinates as JSON without touching any image
    Project(ProjectArgs),
}

#[derive(Args)]
struct DrawArgs {
    /// Background image (any format the image crate decodes)
    #[arg(long)]
    image: PathBuf,
    /// GPX file with one or more tracks
    #[arg(long)]
    track: PathBuf,
    /// Output image; defaults to `<image>_gpx.<ext>` next to the input
    #[arg(long)]
    out: Option<PathBuf>,
    /// Track margin in percent of the shorter image side
    #[arg(long, default_value_t = default_margin_percent(), value_parser = clap::value_parser!(u8).range(1..=100))]
    margin: u8,
    /// Projection strategy: axis | distance
    #[arg(long, default_value_t = Strategy::AxisNormalized)]
    strategy: Strategy,
    /// Line color as RRGGBB hex
    #[arg(long, default_value = "ffffff", value_parser = parse_color)]
    color: Rgb<u8>,
    /// Line width in pixels; defaults to 1% of the longer image side
    #[arg(long)]
    stroke_width: Option<u32>,
    /// Write `<out-stem>.provenance.json` next to the output
    #[arg(long)]
    provenance: bool,
}

#[derive(Args)]
struct ProjectArgs {
    #[arg(long)]
    track: PathBuf,
    /// Canvas width in pixels
    #[arg(long)]
    width: u32,
    /// Canvas height in pixels
    #[arg(long)]
    height: u32,
    /// Track margin in percent of the shorter canvas side
    #[arg(long, default_value_t = default_margin_percent(), value_parser = clap::value_parser!(u8).range(1..=100))]
    margin: u8,
    /// Projection strategy: axis | distance
    #[arg(long, default_value_t = Strategy::AxisNormalized)]
    strategy: Strategy,
}

#[derive(Serialize)]
struct ProjectionReport {
    strategy: &'static str,
    canvas: [u32; 2],
    drawable: DrawableRect,
    segments: Vec<ProjectedSegment>,
}

#[derive(Serialize)]
struct DrawableRect {
    origin: [u32; 2],
    size: u32,
}

impl From<CanvasRect> for DrawableRect {
    fn from(r: CanvasRect) -> Self {
        Self {
            origin: [r.origin_x, r.origin_y],
            size: r.width,
        }
    }
}

#[derive(Serialize)]
struct ProjectedSegment {
    track: usize,
    segment: usize,
    points: Vec<[f64; 2]>,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Draw(args) => draw(&args).map(|_| ()),
        Action::Project(args) => {
            let report = project(&args)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
    }
}

fn default_margin_percent() -> u8 {
    (DEFAULT_MARGIN * 100.0).round() as u8
}

fn margin_fraction(percent: u8) -> f64 {
    f64::from(percent) / 100.0
}

fn parse_color(s: &str) -> Result<Rgb<u8>, String> {
    let hex = s.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(format!("expected RRGGBB hex color, got {s:?}"));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| format!("invalid hex color {s:?}"))
    };
    Ok(Rgb([channel(0)?, channel(2)?, channel(4)?]))
}

fn draw(args: &DrawArgs) -> Result<PathBuf> {
    let out = args
        .out
        .clone()
        .unwrap_or_else(|| default_output_path(&args.image));
    let cfg = RenderCfg {
        margin: margin_fraction(args.margin),
        strategy: args.strategy,
        color: args.color,
        stroke_width: args.stroke_width,
    };
    tracing::info!(
        image = %args.image.display(),
        track = %args.track.display(),
        out = %out.display(),
        margin = cfg.margin,
        strategy = %cfg.strategy,
        "draw"
    );
    let summary = trackfit::render_with(&args.image, &args.track, &out, &cfg).with_context(|| {
        format!(
            "drawing {} onto {}",
            args.track.display(),
            args.image.display()
        )
    })?;

    if args.provenance {
        let [r, g, b] = cfg.color.0;
        let params = serde_json::json!({
            "image": args.image,
            "track": args.track,
            "strategy": cfg.strategy.name(),
            "margin": cfg.margin,
            "color": format!("{r:02x}{g:02x}{b:02x}"),
            "stroke_width": summary.stroke_width,
            "canvas": [summary.width, summary.height],
            "drawable": DrawableRect::from(summary.drawable),
            "tracks": summary.tracks,
            "segments": summary.segments,
            "points": summary.points,
            "overshoot": summary.overshoot,
        });
        let sidecar = provenance::write_sidecar(&out, params)?;
        tracing::info!(path = %sidecar.display(), "provenance");
    }
    Ok(out)
}

fn project(args: &ProjectArgs) -> Result<ProjectionReport> {
    let strategy = args.strategy;
    let rect = compute_drawable_rect(args.width, args.height, margin_fraction(args.margin))?;
    let file = read_track_file(&args.track)
        .with_context(|| format!("reading {}", args.track.display()))?;
    tracing::debug!(
        tracks = file.tracks.len(),
        segments = file.segment_count(),
        "track loaded"
    );

    let mut segments = Vec::with_capacity(file.segment_count());
    for (track, segs) in file.tracks.iter().enumerate() {
        let projected = project_track(segs, &rect, &strategy)
            .with_context(|| format!("projecting track {track}"))?;
        segments.extend(
            projected
                .into_iter()
                .enumerate()
                .map(|(segment, pts)| ProjectedSegment {
                    track,
                    segment,
                    points: pts.iter().map(|d| [d.x, d.y]).collect(),
                }),
        );
    }
    Ok(ProjectionReport {
        strategy: strategy.name(),
        canvas: [args.width, args.height],
        drawable: rect.into(),
        segments,
    })
}
