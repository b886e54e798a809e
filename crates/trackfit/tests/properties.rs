//! Property checks for the projection engine.

use proptest::collection::vec;
use proptest::prelude::*;
use trackfit::{
    bearing_degrees, compute_drawable_rect, distance_km, find_extent, project_segment,
    AxisNormalized, CanvasRect, DistanceBearing, GeoPoint, Projection, ProjectionError,
};

fn point() -> impl Strategy<Value = GeoPoint> {
    (-80.0f64..80.0, -170.0f64..170.0).prop_map(|(lat, lon)| GeoPoint::new(lat, lon))
}

/// Local-scale track: up to ~0.5° around a random anchor.
fn track() -> impl Strategy<Value = Vec<GeoPoint>> {
    (-60.0f64..60.0, -150.0f64..150.0).prop_flat_map(|(lat0, lon0)| {
        vec((0.0f64..0.5, 0.0f64..0.5), 2..64).prop_map(move |offs| {
            offs.into_iter()
                .map(|(dlat, dlon)| GeoPoint::new(lat0 + dlat, lon0 + dlon))
                .collect()
        })
    })
}

fn canvas() -> impl Strategy<Value = CanvasRect> {
    (16u32..2000, 16u32..2000, 0.1f64..=1.0)
        .prop_map(|(w, h, m)| compute_drawable_rect(w, h, m).unwrap())
}

fn non_degenerate(pts: &[GeoPoint]) -> bool {
    let e = find_extent(pts).unwrap();
    e.lat_span() > 0.0 && e.lon_span() > 0.0
}

proptest! {
    #[test]
    fn distance_is_zero_on_the_diagonal_and_symmetric(a in point(), b in point()) {
        prop_assert_eq!(distance_km(a, a), 0.0);
        prop_assert!((distance_km(a, b) - distance_km(b, a)).abs() < 1e-9);
    }

    #[test]
    fn bearing_degrees_stays_in_range(a in point(), b in point()) {
        let deg = bearing_degrees(a, b);
        prop_assert!((0.0..360.0).contains(&deg), "{}", deg);
    }

    #[test]
    fn projection_preserves_length(pts in track(), rect in canvas()) {
        prop_assume!(non_degenerate(&pts));
        for s in [trackfit::Strategy::AxisNormalized, trackfit::Strategy::DistanceBearing] {
            let out = project_segment(&pts, &rect, &s).unwrap();
            prop_assert_eq!(out.len(), pts.len());
            prop_assert!(out.iter().all(|d| d.x.is_finite() && d.y.is_finite()));
        }
    }

    #[test]
    fn axis_projection_stays_inside_the_rect(pts in track(), rect in canvas()) {
        prop_assume!(non_degenerate(&pts));
        let extent = find_extent(&pts).unwrap();
        let out = AxisNormalized.project(&pts, &extent, &rect).unwrap();
        prop_assert!(out.iter().all(|d| rect.contains(d.x, d.y, 1e-6)));
    }

    #[test]
    fn distance_projection_centers_the_extent_midpoint(pts in track(), rect in canvas()) {
        let extent = find_extent(&pts).unwrap();
        let mid = extent.midpoint();
        match DistanceBearing.project(&[mid], &extent, &rect) {
            Ok(out) => {
                let (cx, cy) = rect.canvas_center();
                prop_assert_eq!((out[0].x, out[0].y), (cx, cy));
            }
            Err(e) => {
                let degenerate = matches!(e, ProjectionError::DegenerateExtent { .. });
                prop_assert!(degenerate, "unexpected error: {}", e);
            }
        }
    }

    #[test]
    fn extent_bounds_every_point(pts in vec(point(), 1..40)) {
        let e = find_extent(&pts).unwrap();
        prop_assert!(e.min_lat <= e.max_lat && e.min_lon <= e.max_lon);
        for p in &pts {
            prop_assert!(p.lat >= e.min_lat && p.lat <= e.max_lat);
            prop_assert!(p.lon >= e.min_lon && p.lon <= e.max_lon);
        }
    }
}
