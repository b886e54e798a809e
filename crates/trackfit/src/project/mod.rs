//! Geographic → device-space projection.
//!
//! Purpose
//! - Map one track segment into pixel coordinates inside a `CanvasRect`,
//!   preserving point order (the order defines polyline connectivity).
//!
//! Strategies
//! - `AxisNormalized`: each axis squeezed into the drawable square
//!   independently. Fills the square at the cost of aspect ratio.
//! - `DistanceBearing`: polar offsets (great-circle distance, initial bearing)
//!   from the extent midpoint, one scale factor for both axes. Keeps relative
//!   distances and orientation; may overshoot the square slightly.
//!
//! Both strategies refuse zero-size extents instead of producing NaN geometry.

mod axis;
mod bearing;

pub use axis::AxisNormalized;
pub use bearing::DistanceBearing;

use crate::error::ProjectionError;
use crate::geo::{find_extent, GeoExtent, GeoPoint};
use crate::layout::CanvasRect;
use nalgebra::Vector2;
use std::fmt;
use std::str::FromStr;

/// Pixel coordinates; `y` grows downwards.
pub type DevicePoint = Vector2<f64>;

/// A projection strategy.
///
/// Contract: `Ok(out)` has `out.len() == points.len()` and `out[i]` is the
/// image of `points[i]`.
pub trait Projection {
    fn project(
        &self,
        points: &[GeoPoint],
        extent: &GeoExtent,
        canvas: &CanvasRect,
    ) -> Result<Vec<DevicePoint>, ProjectionError>;
}

/// Selectable strategy, for front ends that pick one at runtime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    #[default]
    AxisNormalized,
    DistanceBearing,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::AxisNormalized, Strategy::DistanceBearing];

    /// Short name, accepted back by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::AxisNormalized => "axis",
            Strategy::DistanceBearing => "distance",
        }
    }
}

impl Projection for Strategy {
    fn project(
        &self,
        points: &[GeoPoint],
        extent: &GeoExtent,
        canvas: &CanvasRect,
    ) -> Result<Vec<DevicePoint>, ProjectionError> {
        match self {
            Strategy::AxisNormalized => AxisNormalized.project(points, extent, canvas),
            Strategy::DistanceBearing => DistanceBearing.project(points, extent, canvas),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "axis" | "axis-normalized" | "axis_normalized" => Ok(Strategy::AxisNormalized),
            "distance" | "distance-bearing" | "distance_bearing" => Ok(Strategy::DistanceBearing),
            other => Err(format!(
                "unknown projection strategy {other:?} (expected \"axis\" or \"distance\")"
            )),
        }
    }
}

/// Bound and project one segment in a single call.
pub fn project_segment<P: Projection + ?Sized>(
    points: &[GeoPoint],
    canvas: &CanvasRect,
    strategy: &P,
) -> Result<Vec<DevicePoint>, ProjectionError> {
    let extent = find_extent(points)?;
    strategy.project(points, &extent, canvas)
}

/// Failure of one segment inside `project_track`.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentError {
    pub segment: usize,
    pub source: ProjectionError,
}

impl fmt::Display for SegmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "segment {}: {}", self.segment, self.source)
    }
}

impl std::error::Error for SegmentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Project every segment independently against the same canvas.
///
/// Stops at the first failing segment.
pub fn project_track<S, P>(
    segments: &[S],
    canvas: &CanvasRect,
    strategy: &P,
) -> Result<Vec<Vec<DevicePoint>>, SegmentError>
where
    S: AsRef<[GeoPoint]>,
    P: Projection + ?Sized,
{
    segments
        .iter()
        .enumerate()
        .map(|(segment, pts)| {
            project_segment(pts.as_ref(), canvas, strategy)
                .map_err(|source| SegmentError { segment, source })
        })
        .collect()
}
