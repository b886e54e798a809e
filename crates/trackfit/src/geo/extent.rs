use super::GeoPoint;
use crate::error::ProjectionError;

/// Axis-aligned bounding box of a point set, in degrees.
///
/// Invariants: `min_lat <= max_lat`, `min_lon <= max_lon`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoExtent {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl GeoExtent {
    /// North-east corner `(max_lat, max_lon)`.
    #[inline]
    pub fn max_corner(&self) -> GeoPoint {
        GeoPoint::new(self.max_lat, self.max_lon)
    }

    /// South-west corner `(min_lat, min_lon)`.
    #[inline]
    pub fn min_corner(&self) -> GeoPoint {
        GeoPoint::new(self.min_lat, self.min_lon)
    }

    /// Arithmetic midpoint of the box (not the great-circle midpoint).
    #[inline]
    pub fn midpoint(&self) -> GeoPoint {
        GeoPoint::new(
            (self.max_lat + self.min_lat) / 2.0,
            (self.max_lon + self.min_lon) / 2.0,
        )
    }

    #[inline]
    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    #[inline]
    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }
}

/// Single linear scan; min and max are tracked independently on both axes.
pub fn find_extent(points: &[GeoPoint]) -> Result<GeoExtent, ProjectionError> {
    let (first, rest) = points.split_first().ok_or(ProjectionError::EmptyInput)?;
    let mut ext = GeoExtent {
        min_lat: first.lat,
        max_lat: first.lat,
        min_lon: first.lon,
        max_lon: first.lon,
    };
    for p in rest {
        ext.min_lat = ext.min_lat.min(p.lat);
        ext.max_lat = ext.max_lat.max(p.lat);
        ext.min_lon = ext.min_lon.min(p.lon);
        ext.max_lon = ext.max_lon.max(p.lon);
    }
    Ok(ext)
}
