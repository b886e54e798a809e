//! Geographic primitives: points, great-circle math, extents.
//!
//! Conventions
//! - Latitude and longitude are degrees; north and east are positive.
//! - Distances use a spherical Earth (mean radius 6371 km). Tracks are
//!   local-scale, so accuracy near antipodes is not a concern here.
//! - Bearings are measured clockwise from north.

mod extent;
mod math;

pub use extent::{find_extent, GeoExtent};
pub use math::{bearing_degrees, bearing_radians, distance_km, EARTH_RADIUS_KM};

/// A single recorded position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

#[cfg(test)]
mod tests;
