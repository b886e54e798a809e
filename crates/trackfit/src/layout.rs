//! Drawable region of an output canvas.
//!
//! The region is always a square: the margin-scaled width and height are
//! clamped to the smaller of the two, so a wide or tall image never stretches
//! the track along one axis.

use crate::error::ProjectionError;

/// Square drawable rectangle in device pixels, centered within a canvas.
///
/// Invariants:
/// - `width == height`, both `>= 1`.
/// - `origin_x = floor((canvas_width - width) / 2)`, same for `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasRect {
    pub origin_x: u32,
    pub origin_y: u32,
    pub width: u32,
    pub height: u32,
    /// Size of the full canvas this rectangle was laid out in.
    pub canvas_width: u32,
    pub canvas_height: u32,
}

impl CanvasRect {
    /// Center of the full canvas (not of the drawable rectangle).
    #[inline]
    pub fn canvas_center(&self) -> (f64, f64) {
        (
            f64::from(self.canvas_width) / 2.0,
            f64::from(self.canvas_height) / 2.0,
        )
    }

    /// Whether `(x, y)` lies inside the rectangle, edges included, with `eps`
    /// pixels of slack. Used to count distance/bearing overshoot.
    #[inline]
    pub fn contains(&self, x: f64, y: f64, eps: f64) -> bool {
        let x0 = f64::from(self.origin_x);
        let y0 = f64::from(self.origin_y);
        x >= x0 - eps
            && x <= x0 + f64::from(self.width) + eps
            && y >= y0 - eps
            && y <= y0 + f64::from(self.height) + eps
    }
}

/// Compute the centered square that keeps `margin` of the shorter side.
///
/// Fails with `InvalidMargin` when `margin` is outside `(0, 1]` or leaves a
/// zero-pixel square.
pub fn compute_drawable_rect(
    canvas_width: u32,
    canvas_height: u32,
    margin: f64,
) -> Result<CanvasRect, ProjectionError> {
    if !(margin > 0.0 && margin <= 1.0) {
        return Err(ProjectionError::InvalidMargin { margin });
    }
    let limit_w = (f64::from(canvas_width) * margin).floor() as u32;
    let limit_h = (f64::from(canvas_height) * margin).floor() as u32;
    let side = limit_w.min(limit_h);
    if side == 0 {
        return Err(ProjectionError::InvalidMargin { margin });
    }
    Ok(CanvasRect {
        origin_x: (canvas_width - side) / 2,
        origin_y: (canvas_height - side) / 2,
        width: side,
        height: side,
        canvas_width,
        canvas_height,
    })
}

/// Stroke width for the track line: 1% of the longer canvas side, at least 1px.
#[inline]
pub fn stroke_width(canvas_width: u32, canvas_height: u32) -> u32 {
    (canvas_width.max(canvas_height) / 100).max(1)
}
