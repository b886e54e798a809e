use super::*;
use crate::error::ProjectionError;
use std::f64::consts::{FRAC_PI_2, PI};

#[test]
fn one_degree_of_longitude_on_the_equator() {
    let d = distance_km(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0));
    let expected = EARTH_RADIUS_KM * PI / 180.0;
    assert!((d - expected).abs() < 1e-9);
}

#[test]
fn distance_zero_and_symmetric() {
    let paris = GeoPoint::new(48.8566, 2.3522);
    let london = GeoPoint::new(51.5074, -0.1278);
    assert_eq!(distance_km(paris, paris), 0.0);
    let ab = distance_km(paris, london);
    let ba = distance_km(london, paris);
    assert!((ab - ba).abs() < 1e-9);
    // Well-known city pair, ~343.5 km.
    assert!(ab > 340.0 && ab < 347.0, "got {ab}");
}

#[test]
fn bearings_along_the_axes() {
    let o = GeoPoint::new(0.0, 0.0);
    assert!(bearing_radians(o, GeoPoint::new(1.0, 0.0)).abs() < 1e-12);
    assert!((bearing_radians(o, GeoPoint::new(0.0, 1.0)) - FRAC_PI_2).abs() < 1e-12);
    assert!((bearing_radians(o, GeoPoint::new(-1.0, 0.0)) - PI).abs() < 1e-12);
    // Raw atan2 output: west is negative, not wrapped.
    assert!((bearing_radians(o, GeoPoint::new(0.0, -1.0)) + FRAC_PI_2).abs() < 1e-12);

    assert!((bearing_degrees(o, GeoPoint::new(-1.0, 0.0)) - 180.0).abs() < 1e-9);
    assert!((bearing_degrees(o, GeoPoint::new(0.0, -1.0)) - 270.0).abs() < 1e-9);
}

#[test]
fn bearing_of_coincident_points_is_finite() {
    let p = GeoPoint::new(46.5, 7.25);
    assert_eq!(bearing_radians(p, p), 0.0);
    assert_eq!(bearing_degrees(p, p), 0.0);
}

#[test]
fn bearing_degrees_in_range_for_tiny_offsets() {
    // Offsets just west of due north/south give raw bearings a hair below 0 or above -π.
    let o = GeoPoint::new(12.0, 34.0);
    for dlat in [-1e-9, -1e-12, 0.0, 1e-12, 1e-9] {
        for dlon in [-1e-9, -1e-12, -1e-15, 0.0, 1e-15, 1e-12, 1e-9] {
            let b = bearing_degrees(o, GeoPoint::new(o.lat + dlat, o.lon + dlon));
            assert!((0.0..360.0).contains(&b), "dlat={dlat} dlon={dlon} -> {b}");
        }
    }
}

#[test]
fn extent_empty_input() {
    assert_eq!(find_extent(&[]), Err(ProjectionError::EmptyInput));
}

#[test]
fn extent_tracks_min_and_max_independently() {
    // Strictly decreasing: every point is a new min, the first one stays max.
    let pts = [
        GeoPoint::new(3.0, 30.0),
        GeoPoint::new(2.0, 20.0),
        GeoPoint::new(1.0, 10.0),
    ];
    let e = find_extent(&pts).unwrap();
    assert_eq!((e.min_lat, e.max_lat), (1.0, 3.0));
    assert_eq!((e.min_lon, e.max_lon), (10.0, 30.0));

    // A point that raises one max and lowers the other axis' min at once.
    let pts = [
        GeoPoint::new(0.0, 0.0),
        GeoPoint::new(5.0, -5.0),
        GeoPoint::new(-1.0, 2.0),
    ];
    let e = find_extent(&pts).unwrap();
    assert_eq!(e.min_corner(), GeoPoint::new(-1.0, -5.0));
    assert_eq!(e.max_corner(), GeoPoint::new(5.0, 2.0));
    assert_eq!(e.midpoint(), GeoPoint::new(2.0, -1.5));
}

#[test]
fn extent_of_single_point_has_zero_spans() {
    let e = find_extent(&[GeoPoint::new(10.0, 20.0)]).unwrap();
    assert_eq!(e.lat_span(), 0.0);
    assert_eq!(e.lon_span(), 0.0);
}
