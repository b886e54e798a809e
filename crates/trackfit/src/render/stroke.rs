//! Thick polyline stroking on RGB images.

use crate::project::DevicePoint;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut, draw_polygon_mut};
use imageproc::point::Point;

/// Stroke a connected polyline through `points`.
///
/// `width <= 1` draws plain line segments. Wider strokes fill one quad per
/// segment and a disc at every vertex (round joins and caps). Pixels outside
/// the image are clipped.
pub fn draw_polyline(img: &mut RgbImage, points: &[DevicePoint], width: u32, color: Rgb<u8>) {
    if width <= 1 {
        for w in points.windows(2) {
            draw_line_segment_mut(img, to_f32(w[0]), to_f32(w[1]), color);
        }
        return;
    }
    let half = f64::from(width) / 2.0;
    for w in points.windows(2) {
        if let Some(quad) = segment_quad(w[0], w[1], half) {
            draw_polygon_mut(img, &quad, color);
        }
    }
    let radius = (width / 2) as i32;
    for p in points {
        draw_filled_circle_mut(img, (p.x.round() as i32, p.y.round() as i32), radius, color);
    }
}

#[inline]
fn to_f32(p: DevicePoint) -> (f32, f32) {
    (p.x as f32, p.y as f32)
}

/// Rectangle of half-width `half` around segment `a → b`; `None` when the
/// segment is too short to have a direction.
fn segment_quad(a: DevicePoint, b: DevicePoint, half: f64) -> Option<[Point<i32>; 4]> {
    let d = b - a;
    let len = d.norm();
    if len < 1e-9 {
        return None;
    }
    let n = DevicePoint::new(-d.y, d.x) * (half / len);
    let quad = [a + n, b + n, b - n, a - n]
        .map(|c| Point::new(c.x.round() as i32, c.y.round() as i32));
    // draw_polygon_mut rejects closed rings
    if quad[0] == quad[3] {
        return None;
    }
    Some(quad)
}
