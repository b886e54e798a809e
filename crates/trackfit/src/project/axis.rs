use super::{DevicePoint, Projection};
use crate::error::ProjectionError;
use crate::geo::{GeoExtent, GeoPoint};
use crate::layout::CanvasRect;

/// Independent min/max normalization of each axis into the drawable square.
///
/// Longitude degrees shrink with latitude, so the result is not true to
/// scale. North is up: latitude is inverted onto device `y`.
#[derive(Clone, Copy, Debug, Default)]
pub struct AxisNormalized;

#[inline]
fn normalize(v: f64, min: f64, max: f64) -> f64 {
    (v - min) / (max - min)
}

impl Projection for AxisNormalized {
    fn project(
        &self,
        points: &[GeoPoint],
        extent: &GeoExtent,
        canvas: &CanvasRect,
    ) -> Result<Vec<DevicePoint>, ProjectionError> {
        if !(extent.lat_span() > 0.0) {
            return Err(ProjectionError::degenerate(
                "latitude span is zero (single point or east-west line)",
            ));
        }
        if !(extent.lon_span() > 0.0) {
            return Err(ProjectionError::degenerate(
                "longitude span is zero (single point or north-south line)",
            ));
        }
        let w = f64::from(canvas.width);
        let h = f64::from(canvas.height);
        let x0 = f64::from(canvas.origin_x);
        let y0 = f64::from(canvas.origin_y);
        Ok(points
            .iter()
            .map(|p| {
                let nx = normalize(p.lon, extent.min_lon, extent.max_lon);
                let ny = normalize(p.lat, extent.min_lat, extent.max_lat);
                DevicePoint::new(nx * w + x0, (1.0 - ny) * h + y0)
            })
            .collect())
    }
}
