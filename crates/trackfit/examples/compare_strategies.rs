//! Print both projections of a small loop side by side.
//!
//! The loop is twice as wide (east-west, in km) as it is tall, so the
//! axis-normalized output is visibly stretched while the distance/bearing
//! output keeps the 2:1 shape.
//!
//! Run: `cargo run -p trackfit --example compare_strategies`

use trackfit::{compute_drawable_rect, distance_km, project_segment, GeoPoint, Strategy};

fn main() {
    let lat0: f64 = 60.0;
    // At 60°N one degree of longitude is half a degree of latitude in km.
    let pts = [
        GeoPoint::new(lat0, 10.0),
        GeoPoint::new(lat0, 10.2),
        GeoPoint::new(lat0 + 0.05, 10.2),
        GeoPoint::new(lat0 + 0.05, 10.0),
        GeoPoint::new(lat0, 10.0),
    ];
    let width_km = distance_km(pts[0], pts[1]);
    let height_km = distance_km(pts[1], pts[2]);
    println!("loop: {width_km:.3} km x {height_km:.3} km");

    let canvas = compute_drawable_rect(800, 600, 0.75).expect("valid layout");
    for strategy in Strategy::ALL {
        let out = project_segment(&pts, &canvas, &strategy).expect("non-degenerate loop");
        let coords: Vec<String> = out
            .iter()
            .map(|d| format!("({:.1}, {:.1})", d.x, d.y))
            .collect();
        println!("{strategy:>8}: {}", coords.join(" "));
    }
}
