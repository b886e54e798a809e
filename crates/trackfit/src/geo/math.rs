use super::GeoPoint;

/// Mean Earth radius used by the haversine distance.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres (haversine).
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let dphi = (b.lat - a.lat).to_radians();
    let dlambda = (b.lon - a.lon).to_radians();
    let h = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    // Rounding can push h a hair above 1 for near-antipodal input.
    let h = h.clamp(0.0, 1.0);
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Initial bearing from `from` towards `to`, raw `atan2` output in `(-π, π]`.
///
/// Coincident points give `atan2(0, 0) = 0`.
pub fn bearing_radians(from: GeoPoint, to: GeoPoint) -> f64 {
    let phi1 = from.lat.to_radians();
    let phi2 = to.lat.to_radians();
    let dlambda = (to.lon - from.lon).to_radians();
    let y = dlambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * dlambda.cos();
    y.atan2(x)
}

/// Initial bearing in degrees, normalized into `[0, 360)`.
pub fn bearing_degrees(from: GeoPoint, to: GeoPoint) -> f64 {
    (bearing_radians(from, to).to_degrees() + 360.0) % 360.0
}
