//! Raster front end: draw a GPX file onto an image.
//!
//! Purpose
//! - One call, `render`, that any front end (CLI, web form, desktop UI) can
//!   invoke: load image, read GPX, lay out, project, stroke, save.
//!
//! Behavior
//! - The source is flattened onto an opaque RGB canvas (alpha is dropped).
//! - One `CanvasRect` per image; every segment of every track is projected
//!   against it independently and stroked as its own polyline.
//! - All segments are projected before anything is drawn or written, so a bad
//!   segment never leaves a half-drawn output file behind.
//!
//! Collaborators
//! - `gpx_io`: GPX decoding into nested point lists.
//! - `stroke`: thick polyline drawing.

pub mod gpx_io;
pub mod stroke;

use crate::error::ProjectionError;
use crate::layout::{compute_drawable_rect, stroke_width, CanvasRect};
use crate::project::{project_track, Strategy};
use image::{ImageReader, Rgb};
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub use gpx_io::{parse_track, read_track_file, TrackFile};
pub use stroke::draw_polyline;

/// Default margin fraction (75% of the shorter image side).
pub const DEFAULT_MARGIN: f64 = 0.75;
/// Default stroke color.
pub const DEFAULT_COLOR: Rgb<u8> = Rgb([255, 255, 255]);

/// Rendering options.
#[derive(Clone, Copy, Debug)]
pub struct RenderCfg {
    /// Fraction of the shorter side the track may occupy, in `(0, 1]`.
    pub margin: f64,
    pub strategy: Strategy,
    pub color: Rgb<u8>,
    /// Line width in pixels; `None` means 1% of the longer image side.
    pub stroke_width: Option<u32>,
}

impl Default for RenderCfg {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            strategy: Strategy::default(),
            color: DEFAULT_COLOR,
            stroke_width: None,
        }
    }
}

/// What a successful render drew.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderSummary {
    pub width: u32,
    pub height: u32,
    pub drawable: CanvasRect,
    pub stroke_width: u32,
    pub tracks: usize,
    pub segments: usize,
    pub points: usize,
    /// Points projected outside the drawable square by more than half a
    /// pixel. Always 0 for `AxisNormalized`.
    pub overshoot: usize,
}

/// Errors surfaced by `render`.
#[derive(Debug)]
pub enum RenderError {
    Io(std::io::Error),
    Image(image::ImageError),
    /// The GPX document could not be decoded.
    Track(String),
    /// The GPX document decoded fine but holds no track segments.
    NoSegments,
    /// Margin / canvas combination rejected by the layout.
    Layout(ProjectionError),
    /// A segment could not be projected.
    Segment {
        track: usize,
        segment: usize,
        source: ProjectionError,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Io(e) => write!(f, "i/o error: {e}"),
            RenderError::Image(e) => write!(f, "image error: {e}"),
            RenderError::Track(reason) => write!(f, "could not read GPX track: {reason}"),
            RenderError::NoSegments => write!(f, "GPX file contains no track segments"),
            RenderError::Layout(e) => write!(f, "{e}"),
            RenderError::Segment {
                track,
                segment,
                source,
            } => write!(f, "track {track}, segment {segment}: {source}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Io(e) => Some(e),
            RenderError::Image(e) => Some(e),
            RenderError::Layout(e) | RenderError::Segment { source: e, .. } => Some(e),
            RenderError::Track(_) | RenderError::NoSegments => None,
        }
    }
}

impl From<std::io::Error> for RenderError {
    fn from(e: std::io::Error) -> Self {
        RenderError::Io(e)
    }
}

impl From<image::ImageError> for RenderError {
    fn from(e: image::ImageError) -> Self {
        RenderError::Image(e)
    }
}

/// Draw `track_path` onto `image_path` and write the result to `output_path`.
pub fn render(
    image_path: &Path,
    track_path: &Path,
    output_path: &Path,
    margin: f64,
    strategy: Strategy,
) -> Result<RenderSummary, RenderError> {
    let cfg = RenderCfg {
        margin,
        strategy,
        ..RenderCfg::default()
    };
    render_with(image_path, track_path, output_path, &cfg)
}

/// `render` with every option exposed.
pub fn render_with(
    image_path: &Path,
    track_path: &Path,
    output_path: &Path,
    cfg: &RenderCfg,
) -> Result<RenderSummary, RenderError> {
    let source = ImageReader::open(image_path)?
        .with_guessed_format()?
        .decode()?;
    let mut canvas = source.to_rgb8();
    let (width, height) = canvas.dimensions();
    let drawable = compute_drawable_rect(width, height, cfg.margin).map_err(RenderError::Layout)?;
    let line_width = cfg.stroke_width.unwrap_or_else(|| stroke_width(width, height));
    debug!(width, height, ?drawable, line_width, "layout");

    let track = read_track_file(track_path)?;
    if track.segment_count() == 0 {
        return Err(RenderError::NoSegments);
    }

    let mut projected = Vec::with_capacity(track.segment_count());
    for (ti, segments) in track.tracks.iter().enumerate() {
        let device = project_track(segments, &drawable, &cfg.strategy).map_err(|e| {
            RenderError::Segment {
                track: ti,
                segment: e.segment,
                source: e.source,
            }
        })?;
        projected.extend(device);
    }
    let overshoot = projected
        .iter()
        .flatten()
        .filter(|d| !drawable.contains(d.x, d.y, 0.5))
        .count();
    if overshoot > 0 {
        debug!(overshoot, "points outside the drawable square");
    }

    for pts in &projected {
        draw_polyline(&mut canvas, pts, line_width, cfg.color);
    }
    canvas.save(output_path)?;

    let summary = RenderSummary {
        width,
        height,
        drawable,
        stroke_width: line_width,
        tracks: track.tracks.len(),
        segments: projected.len(),
        points: track.point_count(),
        overshoot,
    };
    info!(
        output = %output_path.display(),
        strategy = %cfg.strategy,
        segments = summary.segments,
        points = summary.points,
        "rendered track"
    );
    Ok(summary)
}

/// `photo.jpg` → `photo_gpx.jpg`, next to the input.
pub fn default_output_path(image_path: &Path) -> PathBuf {
    let mut name = image_path
        .file_stem()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("output"));
    name.push("_gpx");
    if let Some(ext) = image_path.extension() {
        name.push(".");
        name.push(ext);
    }
    image_path.with_file_name(name)
}
