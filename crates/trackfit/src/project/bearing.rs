use super::{DevicePoint, Projection};
use crate::error::ProjectionError;
use crate::geo::{bearing_degrees, bearing_radians, distance_km, GeoExtent, GeoPoint};
use crate::layout::CanvasRect;
use std::f64::consts::FRAC_PI_2;

/// Local polar projection around the extent midpoint.
///
/// Scale: the extent diagonal is split into horizontal and vertical legs using
/// its bearing folded into `[0, 90)`; the longer leg spans `canvas.width`.
/// Origin: the full canvas center. The margin bounds the scale only, so
/// points can land slightly outside the drawable square.
#[derive(Clone, Copy, Debug, Default)]
pub struct DistanceBearing;

impl DistanceBearing {
    /// Pixels per kilometre for `extent` drawn into `canvas`.
    pub fn scale(extent: &GeoExtent, canvas: &CanvasRect) -> Result<f64, ProjectionError> {
        let max_corner = extent.max_corner();
        let min_corner = extent.min_corner();
        let hypotenuse = distance_km(max_corner, min_corner);
        let true_angle = (bearing_degrees(max_corner, min_corner) % 90.0).to_radians();
        let hor_len = hypotenuse * true_angle.cos();
        let ver_len = hypotenuse * true_angle.sin();
        let max_track_len = hor_len.max(ver_len);
        if !(max_track_len.is_finite() && max_track_len > 0.0) {
            return Err(ProjectionError::degenerate(
                "track diagonal has zero length (single point or identical extremes)",
            ));
        }
        Ok(f64::from(canvas.width) / max_track_len)
    }
}

impl Projection for DistanceBearing {
    fn project(
        &self,
        points: &[GeoPoint],
        extent: &GeoExtent,
        canvas: &CanvasRect,
    ) -> Result<Vec<DevicePoint>, ProjectionError> {
        let px_per_km = Self::scale(extent, canvas)?;
        let mid = extent.midpoint();
        let (cx, cy) = canvas.canvas_center();
        Ok(points
            .iter()
            .map(|&p| {
                let r = distance_km(mid, p) * px_per_km;
                // bearing 0 (north) -> screen up
                let theta = bearing_radians(mid, p) - FRAC_PI_2;
                DevicePoint::new(r * theta.cos() + cx, r * theta.sin() + cy)
            })
            .collect())
    }
}
